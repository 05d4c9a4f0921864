//! Cache Module
//!
//! Provides the in-memory cache engine with lazy TTL expiration.

mod engine;
mod entry;
mod settings;


// Re-export public types
pub use engine::Engine;
pub use entry::CacheEntry;
pub use settings::{CacheInstance, EngineSettings};
