//! Configuration Module
//!
//! Handles loading and managing host configuration from environment variables.

use std::env;

use crate::cache::CacheInstance;
use crate::driver::MEMORY_DRIVER;

/// Host configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// TTL in seconds for HTTP writes that do not specify one
    pub default_ttl: i64,
    /// Names of the caches to connect at startup
    pub cache_names: Vec<String>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `DEFAULT_TTL` - Default TTL in seconds (default: 300)
    /// - `CACHE_NAMES` - Comma-separated cache names (default: "default")
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
            default_ttl: env::var("DEFAULT_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.default_ttl),
            cache_names: env::var("CACHE_NAMES")
                .ok()
                .map(|v| parse_cache_names(&v))
                .filter(|names| !names.is_empty())
                .unwrap_or(defaults.cache_names),
        }
    }

    /// Returns one memory-backed instance per configured cache name.
    pub fn cache_instances(&self) -> Vec<CacheInstance> {
        self.cache_names
            .iter()
            .map(|name| CacheInstance::new(name.clone(), MEMORY_DRIVER))
            .collect()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            default_ttl: 300,
            cache_names: vec!["default".to_string()],
        }
    }
}

/// Splits a comma-separated list, dropping blanks and duplicates.
fn parse_cache_names(raw: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for name in raw.split(',').map(str::trim).filter(|n| !n.is_empty()) {
        if !names.iter().any(|existing| existing == name) {
            names.push(name.to_string());
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.default_ttl, 300);
        assert_eq!(config.cache_names, vec!["default"]);
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("SERVER_PORT");
        env::remove_var("DEFAULT_TTL");
        env::remove_var("CACHE_NAMES");

        let config = Config::from_env();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.default_ttl, 300);
        assert_eq!(config.cache_names, vec!["default"]);
    }

    #[test]
    fn test_parse_cache_names() {
        assert_eq!(
            parse_cache_names(" sessions, tokens,,sessions , "),
            vec!["sessions", "tokens"]
        );
        assert!(parse_cache_names(" , ").is_empty());
    }

    #[test]
    fn test_cache_instances_use_memory_driver() {
        let config = Config {
            cache_names: vec!["a".to_string(), "b".to_string()],
            ..Config::default()
        };

        let instances = config.cache_instances();
        assert_eq!(instances.len(), 2);
        assert!(instances.iter().all(|i| i.driver == MEMORY_DRIVER));
        assert_eq!(instances[1].name, "b");
    }
}
