//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with an absolute expiry.

use chrono::{DateTime, Duration, Utc};

// == Cache Entry ==
/// Represents a single cache entry: the stored bytes and when they expire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    /// The stored value
    pub value: Vec<u8>,
    /// Absolute expiration timestamp
    pub expires_at: DateTime<Utc>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry that expires `ttl` from now.
    ///
    /// A zero or negative `ttl` produces an entry that is already expired.
    /// A `ttl` too large to represent saturates at the latest possible timestamp.
    pub fn new(value: Vec<u8>, ttl: Duration) -> Self {
        Self::new_at(value, ttl, Utc::now())
    }

    /// Creates a new cache entry relative to an explicit `now`.
    pub fn new_at(value: Vec<u8>, ttl: Duration, now: DateTime<Utc>) -> Self {
        let expires_at = now
            .checked_add_signed(ttl)
            .unwrap_or(if ttl > Duration::zero() {
                DateTime::<Utc>::MAX_UTC
            } else {
                DateTime::<Utc>::MIN_UTC
            });

        Self { value, expires_at }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// An entry is live only while its expiry is strictly after the current
    /// time, so an entry written with a zero TTL is expired immediately.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Checks expiry against an explicit point in time.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}
