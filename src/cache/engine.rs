//! Cache Engine Module
//!
//! Concurrent key/value storage with lazy TTL expiration, numeric sequences
//! and prefix enumeration.
//!
//! Expired entries are never swept in the background. They stay in the map,
//! invisible to [`Engine::read`], until a read, delete or clear touches them.

use chrono::{Duration, Utc};
use dashmap::DashMap;

use crate::cache::{CacheEntry, CacheInstance, EngineSettings};
use crate::error::{CacheError, Result};

// == Engine ==
/// In-memory cache engine backing one named cache.
///
/// Every operation is individually atomic with respect to the map. Nothing is
/// atomic across operations: [`Engine::sequence`] and [`Engine::clear`] are
/// composed of several map operations and can race with concurrent callers.
#[derive(Debug, Default)]
pub struct Engine {
    /// Key-value storage
    entries: DashMap<String, CacheEntry>,
    /// Engine tuning settings
    settings: EngineSettings,
}

impl Engine {
    // == Constructor ==
    /// Creates an empty engine with the given settings.
    pub fn new(settings: EngineSettings) -> Self {
        Self {
            entries: DashMap::new(),
            settings,
        }
    }

    // == Connect ==
    /// Creates an empty engine for a cache instance.
    ///
    /// Fails with [`CacheError::InvalidConnection`] if the instance is
    /// structurally invalid.
    pub fn connect(instance: &CacheInstance) -> Result<Self> {
        instance.validate()?;
        Ok(Self::new(EngineSettings::from_map(&instance.setting)))
    }

    /// Returns the engine settings.
    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    // == Lifecycle ==
    /// Acquires backing resources. Nothing to acquire for the in-memory store.
    pub fn open(&self) -> Result<()> {
        Ok(())
    }

    /// Releases backing resources. Entries are kept.
    pub fn close(&self) -> Result<()> {
        Ok(())
    }

    // == Read ==
    /// Returns the value stored under `key`.
    ///
    /// An expired entry is removed as a side effect. Both a missing and an
    /// expired key fail with [`CacheError::InvalidData`].
    pub fn read(&self, key: &str) -> Result<Vec<u8>> {
        let now = Utc::now();

        // The map guard must be released before purging the shard.
        let expired = match self.entries.get(key) {
            Some(entry) if !entry.is_expired_at(now) => return Ok(entry.value.clone()),
            Some(_) => true,
            None => false,
        };

        if expired {
            // Only purge if no writer refreshed the entry in between.
            self.entries.remove_if(key, |_, entry| entry.is_expired_at(now));
        }

        Err(CacheError::InvalidData(key.to_string()))
    }

    // == Write ==
    /// Stores `data` under `key`, expiring `ttl` from now.
    ///
    /// Overwrites any existing entry. A zero or negative `ttl` is accepted and
    /// stores an entry that is already expired.
    pub fn write(&self, key: &str, data: Vec<u8>, ttl: Duration) -> Result<()> {
        self.entries.insert(key.to_string(), CacheEntry::new(data, ttl));
        Ok(())
    }

    // == Exists ==
    /// Reports whether `key` is present in the map.
    ///
    /// Expiry is not checked, so an expired entry that has not been purged yet
    /// still reports `true`. A missing key fails with
    /// [`CacheError::LookupFailure`].
    pub fn exists(&self, key: &str) -> Result<bool> {
        if self.entries.contains_key(key) {
            Ok(true)
        } else {
            Err(CacheError::LookupFailure(key.to_string()))
        }
    }

    // == Delete ==
    /// Removes `key` if present. Deleting a missing key succeeds.
    pub fn delete(&self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }

    // == Sequence ==
    /// Advances the counter stored under `key` by `step` and returns the new value.
    ///
    /// The current value is the stored decimal integer, or `start` when the
    /// key is missing, expired or holds anything that does not parse. The new
    /// value is written back as decimal text with a fresh `ttl`.
    ///
    /// This is a read followed by a write. Concurrent callers on the same key
    /// can lose increments.
    pub fn sequence(&self, key: &str, start: i64, step: i64, ttl: Duration) -> Result<i64> {
        let current = self
            .read(key)
            .ok()
            .and_then(|data| parse_counter(&data))
            .unwrap_or(start);

        let value = current.wrapping_add(step);
        self.write(key, value.to_string().into_bytes(), ttl)?;

        Ok(value)
    }

    // == Keys ==
    /// Returns every key starting with `prefix`, expired entries included.
    ///
    /// The order is unspecified.
    pub fn keys(&self, prefix: &str) -> Result<Vec<String>> {
        Ok(self
            .entries
            .iter()
            .filter(|entry| entry.key().starts_with(prefix))
            .map(|entry| entry.key().clone())
            .collect())
    }

    // == Clear ==
    /// Deletes every key starting with `prefix`.
    ///
    /// Keys are snapshotted first; keys inserted after the snapshot survive.
    pub fn clear(&self, prefix: &str) -> Result<()> {
        for key in self.keys(prefix)? {
            self.entries.remove(&key);
        }
        Ok(())
    }

    // == Length ==
    /// Returns the number of entries in the map, expired entries included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parses stored counter bytes as a base-10 signed integer.
fn parse_counter(data: &[u8]) -> Option<i64> {
    std::str::from_utf8(data).ok()?.parse().ok()
}
