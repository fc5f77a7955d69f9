//! Render context loading.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::ConfigError;
use crate::types::LoadedConfig;

/// Load template data from a `.json` or `.toml` file.
///
/// # Errors
///
/// * If the extension is not supported
/// * If the file cannot be read or parsed
pub fn load_data_file(path: &Path) -> Result<Value, ConfigError> {
    log::debug!("Loading template data from {}", path.display());

    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    if extension != "json" && extension != "toml" {
        return Err(ConfigError::UnsupportedFormat(path.to_path_buf()));
    }

    let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    if extension == "json" {
        serde_json::from_str(&content).map_err(|e| ConfigError::JsonParseError {
            path: path.to_path_buf(),
            source: e,
        })
    } else {
        toml::from_str(&content).map_err(|e| ConfigError::TomlParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

/// Overlay `overrides` onto `base`. Objects merge key by key at the top
/// level; anything else replaces `base` outright.
pub fn merge_data(base: &mut Value, overrides: Value) {
    match (base, overrides) {
        (Value::Object(base), Value::Object(overrides)) => base.extend(overrides),
        (base, overrides) => *base = overrides,
    }
}

impl LoadedConfig {
    /// Build the render context: `data_file` (resolved against the config
    /// directory) overlaid with inline `data`. An empty object if neither
    /// is set.
    ///
    /// # Errors
    ///
    /// * If the data file cannot be loaded
    pub fn load_data(&self) -> Result<Value, ConfigError> {
        let mut data = match &self.config.data_file {
            Some(path) => load_data_file(&self.resolve(path))?,
            None => Value::Object(Map::new()),
        };

        if let Some(inline) = &self.config.data {
            merge_data(&mut data, inline.clone());
        }

        Ok(data)
    }
}
