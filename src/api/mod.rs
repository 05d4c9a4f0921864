//! API Module
//!
//! HTTP handlers and routing that expose named caches over REST.
//!
//! # Endpoints
//! - `PUT|GET|DELETE /caches/:cache/entries/:key` - Write, read or delete a key
//! - `GET /caches/:cache/exists/:key` - Check raw key presence
//! - `POST /caches/:cache/sequences/:key` - Advance a counter
//! - `GET|DELETE /caches/:cache/keys?prefix=` - List or clear keys by prefix
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
