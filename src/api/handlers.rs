//! API Handlers
//!
//! HTTP request handlers routing each cache operation to a named cache.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use tracing::debug;

use crate::config::Config;
use crate::driver::{MemoryDriver, MEMORY_DRIVER};
use crate::error::{CacheError, Result};
use crate::models::requests::ttl_from_secs;
use crate::models::{
    ClearResponse, DeleteResponse, ExistsResponse, GetResponse, HealthResponse, KeysResponse,
    PrefixQuery, SequenceRequest, SequenceResponse, WriteRequest, WriteResponse,
};
use crate::registry::Registry;

/// Application state shared across all handlers.
///
/// The registry is fully built before the server starts, so handlers only
/// ever read it.
#[derive(Clone)]
pub struct AppState {
    /// Connected caches, routed by name
    pub registry: Arc<Registry>,
    /// TTL in seconds for requests that do not specify one
    pub default_ttl: i64,
}

impl AppState {
    /// Creates a new AppState around a built registry.
    pub fn new(registry: Registry, default_ttl: i64) -> Self {
        Self {
            registry: Arc::new(registry),
            default_ttl,
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Registers the memory driver and connects every configured cache.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut registry = Registry::new();
        registry.register_driver(MEMORY_DRIVER, MemoryDriver);

        for instance in config.cache_instances() {
            registry.connect(&instance)?;
        }

        Ok(Self::new(registry, config.default_ttl))
    }
}

/// Handler for PUT /caches/:cache/entries/:key
pub async fn write_handler(
    State(state): State<AppState>,
    Path((cache, key)): Path<(String, String)>,
    Json(req): Json<WriteRequest>,
) -> Result<Json<WriteResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let ttl_secs = req.ttl_secs_or(state.default_ttl);
    debug!("write {}/{} ttl={}s", cache, key, ttl_secs);

    state
        .registry
        .get(&cache)?
        .write(&key, req.value.into_bytes(), ttl_from_secs(ttl_secs))?;

    Ok(Json(WriteResponse::new(key, ttl_secs)))
}

/// Handler for GET /caches/:cache/entries/:key
pub async fn read_handler(
    State(state): State<AppState>,
    Path((cache, key)): Path<(String, String)>,
) -> Result<Json<GetResponse>> {
    debug!("read {}/{}", cache, key);
    let value = state.registry.get(&cache)?.read(&key)?;

    Ok(Json(GetResponse::new(key, &value)))
}

/// Handler for DELETE /caches/:cache/entries/:key
pub async fn delete_handler(
    State(state): State<AppState>,
    Path((cache, key)): Path<(String, String)>,
) -> Result<Json<DeleteResponse>> {
    debug!("delete {}/{}", cache, key);
    state.registry.get(&cache)?.delete(&key)?;

    Ok(Json(DeleteResponse::new(key)))
}

/// Handler for GET /caches/:cache/exists/:key
pub async fn exists_handler(
    State(state): State<AppState>,
    Path((cache, key)): Path<(String, String)>,
) -> Result<Json<ExistsResponse>> {
    let exists = state.registry.get(&cache)?.exists(&key)?;

    Ok(Json(ExistsResponse::new(key, exists)))
}

/// Handler for POST /caches/:cache/sequences/:key
pub async fn sequence_handler(
    State(state): State<AppState>,
    Path((cache, key)): Path<(String, String)>,
    Json(req): Json<SequenceRequest>,
) -> Result<Json<SequenceResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let value = state.registry.get(&cache)?.sequence(
        &key,
        req.start,
        req.step,
        req.ttl_or(state.default_ttl),
    )?;
    debug!("sequence {}/{} -> {}", cache, key, value);

    Ok(Json(SequenceResponse::new(key, value)))
}

/// Handler for GET /caches/:cache/keys?prefix=
pub async fn keys_handler(
    State(state): State<AppState>,
    Path(cache): Path<String>,
    Query(query): Query<PrefixQuery>,
) -> Result<Json<KeysResponse>> {
    let keys = state.registry.get(&cache)?.keys(&query.prefix)?;

    Ok(Json(KeysResponse::new(query.prefix, keys)))
}

/// Handler for DELETE /caches/:cache/keys?prefix=
pub async fn clear_handler(
    State(state): State<AppState>,
    Path(cache): Path<String>,
    Query(query): Query<PrefixQuery>,
) -> Result<Json<ClearResponse>> {
    debug!("clear {}/{}*", cache, query.prefix);
    state.registry.get(&cache)?.clear(&query.prefix)?;

    Ok(Json(ClearResponse::new(query.prefix)))
}

/// Handler for GET /health
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::healthy(state.registry.cache_names()))
}
