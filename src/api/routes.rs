//! API Routes
//!
//! Configures the Axum router with all cache host endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    clear_handler, delete_handler, exists_handler, health_handler, keys_handler, read_handler,
    sequence_handler, write_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `PUT /caches/:cache/entries/:key` - Write a value
/// - `GET /caches/:cache/entries/:key` - Read a value
/// - `DELETE /caches/:cache/entries/:key` - Delete a key
/// - `GET /caches/:cache/exists/:key` - Check raw key presence
/// - `POST /caches/:cache/sequences/:key` - Advance a counter
/// - `GET /caches/:cache/keys?prefix=` - List keys by prefix
/// - `DELETE /caches/:cache/keys?prefix=` - Clear keys by prefix
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/caches/:cache/entries/:key",
            get(read_handler).put(write_handler).delete(delete_handler),
        )
        .route("/caches/:cache/exists/:key", get(exists_handler))
        .route("/caches/:cache/sequences/:key", post(sequence_handler))
        .route(
            "/caches/:cache/keys",
            get(keys_handler).delete(clear_handler),
        )
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
