//! Response DTOs for the cache host API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

/// Response body for the READ operation (GET /caches/:cache/entries/:key)
#[derive(Debug, Clone, Serialize)]
pub struct GetResponse {
    /// The requested key
    pub key: String,
    /// The stored value, decoded as UTF-8
    pub value: String,
}

impl GetResponse {
    /// Creates a new GetResponse from raw stored bytes
    pub fn new(key: impl Into<String>, value: &[u8]) -> Self {
        Self {
            key: key.into(),
            value: String::from_utf8_lossy(value).into_owned(),
        }
    }
}

/// Response body for the WRITE operation (PUT /caches/:cache/entries/:key)
#[derive(Debug, Clone, Serialize)]
pub struct WriteResponse {
    /// Success message
    pub message: String,
    /// The key that was written
    pub key: String,
    /// TTL in seconds the entry was written with
    pub ttl: i64,
}

impl WriteResponse {
    /// Creates a new WriteResponse
    pub fn new(key: impl Into<String>, ttl: i64) -> Self {
        let key = key.into();
        Self {
            message: format!("Key '{}' written successfully", key),
            key,
            ttl,
        }
    }
}

/// Response body for the DELETE operation (DELETE /caches/:cache/entries/:key)
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    /// Success message
    pub message: String,
    /// The key that was deleted
    pub key: String,
}

impl DeleteResponse {
    /// Creates a new DeleteResponse
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            message: format!("Key '{}' deleted successfully", key),
            key,
        }
    }
}

/// Response body for the EXISTS operation (GET /caches/:cache/exists/:key)
#[derive(Debug, Clone, Serialize)]
pub struct ExistsResponse {
    pub key: String,
    pub exists: bool,
}

impl ExistsResponse {
    pub fn new(key: impl Into<String>, exists: bool) -> Self {
        Self {
            key: key.into(),
            exists,
        }
    }
}

/// Response body for the SEQUENCE operation (POST /caches/:cache/sequences/:key)
#[derive(Debug, Clone, Serialize)]
pub struct SequenceResponse {
    /// The counter key
    pub key: String,
    /// Counter value after this call
    pub value: i64,
}

impl SequenceResponse {
    pub fn new(key: impl Into<String>, value: i64) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// Response body for the KEYS operation (GET /caches/:cache/keys)
#[derive(Debug, Clone, Serialize)]
pub struct KeysResponse {
    /// The prefix that was matched
    pub prefix: String,
    /// Matching keys, sorted
    pub keys: Vec<String>,
}

impl KeysResponse {
    /// Creates a new KeysResponse, sorting the keys for stable output
    pub fn new(prefix: impl Into<String>, mut keys: Vec<String>) -> Self {
        keys.sort();
        Self {
            prefix: prefix.into(),
            keys,
        }
    }
}

/// Response body for the CLEAR operation (DELETE /caches/:cache/keys)
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    /// Success message
    pub message: String,
    /// The prefix that was cleared
    pub prefix: String,
}

impl ClearResponse {
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        Self {
            message: format!("Keys with prefix '{}' cleared", prefix),
            prefix,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
    /// Names of the connected caches
    pub caches: Vec<String>,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy(caches: Vec<String>) -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            caches,
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_response_serialize() {
        let resp = GetResponse::new("test_key", b"test_value");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("test_key"));
        assert!(json.contains("test_value"));
    }

    #[test]
    fn test_get_response_lossy_utf8() {
        let resp = GetResponse::new("k", &[0x66, 0x6f, 0xff]);
        assert_eq!(resp.value, "fo\u{fffd}");
    }

    #[test]
    fn test_write_response_serialize() {
        let resp = WriteResponse::new("my_key", 60);
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("my_key"));
        assert!(json.contains("successfully"));
        assert!(json.contains("\"ttl\":60"));
    }

    #[test]
    fn test_keys_response_sorted() {
        let resp = KeysResponse::new("user:", vec!["user:2".into(), "user:1".into()]);
        assert_eq!(resp.keys, vec!["user:1", "user:2"]);
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy(vec!["default".to_string()]);
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
        assert!(json.contains("default"));
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("Something went wrong");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("error"));
        assert!(json.contains("Something went wrong"));
    }
}
