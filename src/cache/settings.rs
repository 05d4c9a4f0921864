//! Cache Settings Module
//!
//! Configuration handles passed to a driver when a named cache is connected.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{CacheError, Result};

/// Tuning settings for an engine. Currently empty; reserved for future backing stores.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSettings {}

impl EngineSettings {
    /// Builds engine settings from an instance's free-form settings map.
    ///
    /// No keys are recognised yet, so every map yields the default settings.
    pub fn from_map(_setting: &HashMap<String, String>) -> Self {
        Self::default()
    }
}

// == Cache Instance ==
/// A named cache configuration handed to a driver on connect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheInstance {
    /// Name the cache is routed by
    pub name: String,
    /// Name of the driver that serves this cache
    pub driver: String,
    /// Driver specific settings
    #[serde(default)]
    pub setting: HashMap<String, String>,
}

impl CacheInstance {
    /// Creates an instance with no driver settings.
    pub fn new(name: impl Into<String>, driver: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            driver: driver.into(),
            setting: HashMap::new(),
        }
    }

    /// Adds a driver setting.
    pub fn with_setting(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.setting.insert(key.into(), value.into());
        self
    }

    /// Checks the instance is structurally valid.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(CacheError::InvalidConnection(
                "cache name cannot be empty".to_string(),
            ));
        }
        if self.driver.trim().is_empty() {
            return Err(CacheError::InvalidConnection(format!(
                "cache '{}' has no driver",
                self.name
            )));
        }
        Ok(())
    }
}
