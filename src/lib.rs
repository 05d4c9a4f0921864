//! Memory Cache - an in-process, in-memory cache engine
//!
//! Key/value storage with lazy per-entry expiration, numeric sequences and
//! prefix enumeration, plus an explicit driver registry and an HTTP host.

pub mod api;
pub mod cache;
pub mod config;
pub mod driver;
pub mod error;
pub mod models;
pub mod registry;

pub use api::AppState;
pub use cache::{CacheInstance, Engine, EngineSettings};
pub use config::Config;
pub use driver::{CacheConnection, CacheDriver, MemoryDriver, MEMORY_DRIVER};
pub use error::{CacheError, Result};
pub use registry::Registry;
