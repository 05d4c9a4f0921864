//! Cache Driver Module
//!
//! The contract between the registry and a cache backend. A driver turns a
//! [`CacheInstance`] into a live [`CacheConnection`]; the registry routes every
//! cache call to that connection.

use std::sync::Arc;

use chrono::Duration;

use crate::cache::{CacheInstance, Engine};
use crate::error::Result;

/// Name the in-memory driver is conventionally registered under.
pub const MEMORY_DRIVER: &str = "memory";

// == Cache Connection ==
/// Operations a connected cache exposes to the registry.
pub trait CacheConnection: Send + Sync {
    /// Acquires backing resources.
    fn open(&self) -> Result<()>;

    /// Releases backing resources.
    fn close(&self) -> Result<()>;

    /// Returns the live value for `key`.
    fn read(&self, key: &str) -> Result<Vec<u8>>;

    /// Stores `data` under `key`, expiring `ttl` from now.
    fn write(&self, key: &str, data: Vec<u8>, ttl: Duration) -> Result<()>;

    /// Reports raw presence of `key`.
    fn exists(&self, key: &str) -> Result<bool>;

    /// Removes `key` if present.
    fn delete(&self, key: &str) -> Result<()>;

    /// Advances the counter under `key` by `step`, starting from `start`.
    fn sequence(&self, key: &str, start: i64, step: i64, ttl: Duration) -> Result<i64>;

    /// Lists keys starting with `prefix`.
    fn keys(&self, prefix: &str) -> Result<Vec<String>>;

    /// Deletes keys starting with `prefix`.
    fn clear(&self, prefix: &str) -> Result<()>;
}

// == Cache Driver ==
/// Factory producing a connection for each configured cache.
pub trait CacheDriver: Send + Sync {
    /// Connects a cache instance.
    fn connect(&self, instance: &CacheInstance) -> Result<Arc<dyn CacheConnection>>;
}

/// Driver backed by the in-memory [`Engine`]. Each connect yields a fresh, empty engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryDriver;

impl CacheDriver for MemoryDriver {
    fn connect(&self, instance: &CacheInstance) -> Result<Arc<dyn CacheConnection>> {
        let engine: Arc<dyn CacheConnection> = Arc::new(Engine::connect(instance)?);
        Ok(engine)
    }
}

impl CacheConnection for Engine {
    fn open(&self) -> Result<()> {
        Engine::open(self)
    }

    fn close(&self) -> Result<()> {
        Engine::close(self)
    }

    fn read(&self, key: &str) -> Result<Vec<u8>> {
        Engine::read(self, key)
    }

    fn write(&self, key: &str, data: Vec<u8>, ttl: Duration) -> Result<()> {
        Engine::write(self, key, data, ttl)
    }

    fn exists(&self, key: &str) -> Result<bool> {
        Engine::exists(self, key)
    }

    fn delete(&self, key: &str) -> Result<()> {
        Engine::delete(self, key)
    }

    fn sequence(&self, key: &str, start: i64, step: i64, ttl: Duration) -> Result<i64> {
        Engine::sequence(self, key, start, step, ttl)
    }

    fn keys(&self, prefix: &str) -> Result<Vec<String>> {
        Engine::keys(self, prefix)
    }

    fn clear(&self, prefix: &str) -> Result<()> {
        Engine::clear(self, prefix)
    }
}
