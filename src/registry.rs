//! Cache Registry Module
//!
//! Maps driver names to drivers and cache names to live connections. The host
//! builds one registry at startup, registers its drivers explicitly, connects
//! each configured cache and then routes calls by cache name.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{info, warn};

use crate::cache::CacheInstance;
use crate::driver::{CacheConnection, CacheDriver};
use crate::error::{CacheError, Result};

// == Registry ==
/// Named drivers and the caches connected through them.
#[derive(Default)]
pub struct Registry {
    drivers: HashMap<String, Arc<dyn CacheDriver>>,
    caches: HashMap<String, Arc<dyn CacheConnection>>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a driver under `name`, replacing any driver already there.
    pub fn register_driver(&mut self, name: impl Into<String>, driver: impl CacheDriver + 'static) {
        let name = name.into();
        if self.drivers.insert(name.clone(), Arc::new(driver)).is_some() {
            warn!("Cache driver '{}' re-registered", name);
        } else {
            info!("Cache driver '{}' registered", name);
        }
    }

    /// Connects and opens the cache described by `instance`.
    ///
    /// A cache already connected under the same name is replaced and then
    /// closed. A failure to close the old connection is logged, not returned.
    pub fn connect(&mut self, instance: &CacheInstance) -> Result<Arc<dyn CacheConnection>> {
        instance.validate()?;

        let driver = self
            .drivers
            .get(&instance.driver)
            .ok_or_else(|| CacheError::DriverNotFound(instance.driver.clone()))?;

        let connection = driver.connect(instance)?;
        connection.open()?;

        if let Some(previous) = self
            .caches
            .insert(instance.name.clone(), Arc::clone(&connection))
        {
            warn!("Cache '{}' reconnected, closing previous connection", instance.name);
            if let Err(err) = previous.close() {
                warn!("Failed to close previous cache '{}': {}", instance.name, err);
            }
        }

        info!(
            "Cache '{}' connected with driver '{}'",
            instance.name, instance.driver
        );
        Ok(connection)
    }

    /// Returns the connection for cache `name`.
    pub fn get(&self, name: &str) -> Result<Arc<dyn CacheConnection>> {
        self.caches
            .get(name)
            .cloned()
            .ok_or_else(|| CacheError::CacheNotFound(name.to_string()))
    }

    /// Returns the names of every connected cache, sorted.
    pub fn cache_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.caches.keys().cloned().collect();
        names.sort();
        names
    }

    /// Returns true if a driver is registered under `name`.
    pub fn has_driver(&self, name: &str) -> bool {
        self.drivers.contains_key(name)
    }

    /// Closes every connected cache.
    ///
    /// All connections are closed even if one fails; the first error is returned.
    pub fn close_all(&self) -> Result<()> {
        let mut first_error = None;

        for (name, connection) in &self.caches {
            match connection.close() {
                Ok(()) => info!("Cache '{}' closed", name),
                Err(err) => {
                    warn!("Failed to close cache '{}': {}", name, err);
                    first_error.get_or_insert(err);
                }
            }
        }

        first_error.map_or(Ok(()), Err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::{MemoryDriver, MEMORY_DRIVER};
    use chrono::Duration;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn memory_registry() -> Registry {
        let mut registry = Registry::new();
        registry.register_driver(MEMORY_DRIVER, MemoryDriver);
        registry
    }

    #[test]
    fn test_connect_and_route_by_name() {
        let mut registry = memory_registry();
        registry
            .connect(&CacheInstance::new("sessions", MEMORY_DRIVER))
            .unwrap();
        registry
            .connect(&CacheInstance::new("tokens", MEMORY_DRIVER))
            .unwrap();

        let sessions = registry.get("sessions").unwrap();
        sessions.write("k", b"v".to_vec(), Duration::hours(1)).unwrap();

        assert_eq!(registry.get("sessions").unwrap().read("k").unwrap(), b"v");
        assert!(registry.get("tokens").unwrap().read("k").is_err());
        assert_eq!(registry.cache_names(), vec!["sessions", "tokens"]);
    }

    #[test]
    fn test_unknown_driver() {
        let mut registry = Registry::new();
        let result = registry.connect(&CacheInstance::new("default", "redis"));
        assert!(matches!(result, Err(CacheError::DriverNotFound(_))));
    }

    #[test]
    fn test_unknown_cache() {
        let registry = memory_registry();
        assert!(matches!(
            registry.get("missing"),
            Err(CacheError::CacheNotFound(_))
        ));
    }

    #[test]
    fn test_invalid_instance() {
        let mut registry = memory_registry();
        let result = registry.connect(&CacheInstance::new("", MEMORY_DRIVER));
        assert!(matches!(result, Err(CacheError::InvalidConnection(_))));
        assert!(registry.cache_names().is_empty());
    }

    #[test]
    fn test_reconnect_replaces_cache() {
        let mut registry = memory_registry();
        let instance = CacheInstance::new("default", MEMORY_DRIVER);

        registry
            .connect(&instance)
            .unwrap()
            .write("k", b"v".to_vec(), Duration::hours(1))
            .unwrap();
        registry.connect(&instance).unwrap();

        assert!(registry.get("default").unwrap().read("k").is_err());
        assert_eq!(registry.cache_names().len(), 1);
    }

    struct CountingDriver {
        opened: Arc<AtomicUsize>,
        closed: Arc<AtomicUsize>,
        fail_close: bool,
    }

    struct CountingConnection {
        opened: Arc<AtomicUsize>,
        closed: Arc<AtomicUsize>,
        fail_close: bool,
        inner: crate::cache::Engine,
    }

    impl CacheDriver for CountingDriver {
        fn connect(&self, _instance: &CacheInstance) -> Result<Arc<dyn CacheConnection>> {
            let connection: Arc<dyn CacheConnection> = Arc::new(CountingConnection {
                opened: Arc::clone(&self.opened),
                closed: Arc::clone(&self.closed),
                fail_close: self.fail_close,
                inner: crate::cache::Engine::default(),
            });
            Ok(connection)
        }
    }

    impl CacheConnection for CountingConnection {
        fn open(&self) -> Result<()> {
            self.opened.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
        fn close(&self) -> Result<()> {
            self.closed.fetch_add(1, Ordering::SeqCst);
            if self.fail_close {
                return Err(CacheError::InvalidConnection("close failed".to_string()));
            }
            Ok(())
        }
        fn read(&self, key: &str) -> Result<Vec<u8>> {
            self.inner.read(key)
        }
        fn write(&self, key: &str, data: Vec<u8>, ttl: Duration) -> Result<()> {
            self.inner.write(key, data, ttl)
        }
        fn exists(&self, key: &str) -> Result<bool> {
            self.inner.exists(key)
        }
        fn delete(&self, key: &str) -> Result<()> {
            self.inner.delete(key)
        }
        fn sequence(&self, key: &str, start: i64, step: i64, ttl: Duration) -> Result<i64> {
            self.inner.sequence(key, start, step, ttl)
        }
        fn keys(&self, prefix: &str) -> Result<Vec<String>> {
            self.inner.keys(prefix)
        }
        fn clear(&self, prefix: &str) -> Result<()> {
            self.inner.clear(prefix)
        }
    }

    #[test]
    fn test_lifecycle_hooks_are_called() {
        let opened = Arc::new(AtomicUsize::new(0));
        let closed = Arc::new(AtomicUsize::new(0));

        let mut registry = Registry::new();
        registry.register_driver(
            "counting",
            CountingDriver {
                opened: Arc::clone(&opened),
                closed: Arc::clone(&closed),
                fail_close: false,
            },
        );
        assert!(registry.has_driver("counting"));

        registry.connect(&CacheInstance::new("a", "counting")).unwrap();
        registry.connect(&CacheInstance::new("b", "counting")).unwrap();
        // Reconnecting "a" closes the old connection
        registry.connect(&CacheInstance::new("a", "counting")).unwrap();

        assert_eq!(opened.load(Ordering::SeqCst), 3);
        assert_eq!(closed.load(Ordering::SeqCst), 1);

        registry.close_all().unwrap();
        assert_eq!(closed.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_reconnect_survives_failed_close() {
        let closed = Arc::new(AtomicUsize::new(0));

        let mut registry = Registry::new();
        registry.register_driver(
            "flaky",
            CountingDriver {
                opened: Arc::new(AtomicUsize::new(0)),
                closed: Arc::clone(&closed),
                fail_close: true,
            },
        );

        let first = registry.connect(&CacheInstance::new("a", "flaky")).unwrap();
        first.write("k", b"old".to_vec(), Duration::hours(1)).unwrap();

        let second = registry.connect(&CacheInstance::new("a", "flaky"));
        assert!(second.is_ok(), "reconnect should succeed even if close fails");
        assert_eq!(closed.load(Ordering::SeqCst), 1);

        // The replacement is the one routed to
        assert!(registry.get("a").unwrap().read("k").is_err());
        assert_eq!(registry.cache_names(), vec!["a"]);

        assert!(matches!(
            registry.close_all(),
            Err(CacheError::InvalidConnection(_))
        ));
    }
}
