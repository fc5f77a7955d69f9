//! Configuration loading for staticdir.
//!
//! A `staticdir.toml` describes one translation: the two roots, exclusion
//! patterns, directory mode, template settings, and the render context.
//!
//! # Example
//!
//! ```rust,ignore
//! use staticdir_config::{discover_config, load_config};
//!
//! if let Some(path) = discover_config(&std::env::current_dir()?) {
//!     let loaded = load_config(&path)?;
//!     let data = loaded.load_data()?;
//!     let dirs = loaded.config.dir_filter()?;
//! }
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod data;
mod discovery;
mod error;
mod toml_loader;
mod types;

pub use data::{load_data_file, merge_data};
pub use discovery::{CONFIG_FILE_NAME, discover_config};
pub use error::ConfigError;
pub use toml_loader::load_toml_config;
pub use types::{Config, LoadedConfig};

use std::path::Path;

/// Load a configuration file and remember where it came from, so relative
/// paths inside it resolve against its directory.
///
/// # Arguments
///
/// * `path` - Path to the configuration file
///
/// # Errors
///
/// * If the file cannot be read
/// * If the file cannot be parsed
pub fn load_config(path: &Path) -> Result<LoadedConfig, ConfigError> {
    let config = load_toml_config(path)?;

    let config_dir = path
        .parent()
        .ok_or_else(|| ConfigError::InvalidPath(path.to_path_buf()))?
        .to_path_buf();

    Ok(LoadedConfig {
        config,
        config_path: path.to_path_buf(),
        config_dir,
    })
}
