//! Request DTOs for the cache host API
//!
//! Defines the structure of incoming HTTP request bodies and query strings.

use chrono::Duration;
use serde::Deserialize;

/// Request body for the WRITE operation (PUT /caches/:cache/entries/:key)
///
/// # Fields
/// - `value`: The value to store
/// - `ttl`: Optional TTL in seconds (uses default if not specified, zero or negative allowed)
#[derive(Debug, Clone, Deserialize)]
pub struct WriteRequest {
    /// The value to store
    pub value: String,
    /// Optional TTL in seconds
    #[serde(default)]
    pub ttl: Option<i64>,
}

impl WriteRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        validate_ttl(self.ttl)
    }

    /// Returns the TTL in seconds to write with, falling back to `default_ttl`.
    pub fn ttl_secs_or(&self, default_ttl: i64) -> i64 {
        self.ttl.unwrap_or(default_ttl)
    }
}

/// Request body for the SEQUENCE operation (POST /caches/:cache/sequences/:key)
#[derive(Debug, Clone, Deserialize)]
pub struct SequenceRequest {
    /// Value the counter starts from when it is missing or unreadable
    #[serde(default)]
    pub start: i64,
    /// Increment applied on each call
    #[serde(default = "default_step")]
    pub step: i64,
    /// Optional TTL in seconds
    #[serde(default)]
    pub ttl: Option<i64>,
}

fn default_step() -> i64 {
    1
}

impl SequenceRequest {
    /// Validates the request data
    pub fn validate(&self) -> Option<String> {
        validate_ttl(self.ttl)
    }

    /// Returns the TTL to write with, falling back to `default_ttl` seconds.
    pub fn ttl_or(&self, default_ttl: i64) -> Duration {
        ttl_from_secs(self.ttl.unwrap_or(default_ttl))
    }
}

/// Query string for the KEYS and CLEAR operations
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PrefixQuery {
    /// Key prefix, empty matches every key
    #[serde(default)]
    pub prefix: String,
}

fn validate_ttl(ttl: Option<i64>) -> Option<String> {
    match ttl {
        Some(secs) if Duration::try_seconds(secs).is_none() => {
            Some(format!("TTL of {} seconds is out of range", secs))
        }
        _ => None,
    }
}

/// Converts TTL seconds to a duration, saturating values out of range.
pub fn ttl_from_secs(secs: i64) -> Duration {
    Duration::try_seconds(secs).unwrap_or(if secs > 0 {
        Duration::MAX
    } else {
        Duration::MIN
    })
}
