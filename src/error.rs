//! Error types for the cache engine and its host
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Cache Error Enum ==
/// Unified error type for the cache engine, registry and HTTP host.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Cache instance configuration is structurally invalid
    #[error("Invalid cache connection: {0}")]
    InvalidConnection(String),

    /// Key absent or expired on read
    #[error("Invalid cache data: {0}")]
    InvalidData(String),

    /// Key absent on existence check
    #[error("Cache lookup failed: {0}")]
    LookupFailure(String),

    /// No driver registered under the requested name
    #[error("Driver not found: {0}")]
    DriverNotFound(String),

    /// No cache connected under the requested name
    #[error("Cache not found: {0}")]
    CacheNotFound(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = match &self {
            CacheError::InvalidData(_)
            | CacheError::LookupFailure(_)
            | CacheError::CacheNotFound(_) => StatusCode::NOT_FOUND,
            CacheError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            CacheError::InvalidConnection(_)
            | CacheError::DriverNotFound(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache engine.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        let cases = [
            (CacheError::InvalidData("k".into()), StatusCode::NOT_FOUND),
            (CacheError::LookupFailure("k".into()), StatusCode::NOT_FOUND),
            (CacheError::CacheNotFound("c".into()), StatusCode::NOT_FOUND),
            (CacheError::InvalidRequest("bad".into()), StatusCode::BAD_REQUEST),
            (
                CacheError::InvalidConnection("c".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                CacheError::DriverNotFound("d".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[test]
    fn test_lookup_failure_distinct_from_invalid_data() {
        let read = CacheError::InvalidData("k".into());
        let exists = CacheError::LookupFailure("k".into());
        assert_ne!(read, exists);
        assert_ne!(read.to_string(), exists.to_string());
    }
}
