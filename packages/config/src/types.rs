//! Configuration types for staticdir.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use staticdir_translate::{DEFAULT_DIR_MODE, NameFilter, TEMPLATE_EXTENSION};

use crate::error::ConfigError;

/// A single translation, as described by `staticdir.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Source tree root.
    pub source: Option<PathBuf>,

    /// Target tree root.
    pub target: Option<PathBuf>,

    /// Permission bits for created directories (`0o755` in TOML).
    pub dir_mode: u32,

    /// Render marked template files instead of copying them.
    pub templates: bool,

    /// Marker extension for template files, without the dot.
    pub template_extension: String,

    /// Fail on template variables missing from the data.
    pub strict: bool,

    /// Skip dotfiles and dot-directories.
    pub exclude_hidden: bool,

    /// Glob patterns matched against directory names to skip.
    pub exclude_dirs: Vec<String>,

    /// Glob patterns matched against file names to skip.
    pub exclude_files: Vec<String>,

    /// JSON or TOML file holding the render context.
    pub data_file: Option<PathBuf>,

    /// Inline render context; top-level keys override `data_file`.
    pub data: Option<serde_json::Value>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: None,
            target: None,
            dir_mode: DEFAULT_DIR_MODE,
            templates: true,
            template_extension: TEMPLATE_EXTENSION.to_string(),
            strict: false,
            exclude_hidden: false,
            exclude_dirs: Vec::new(),
            exclude_files: Vec::new(),
            data_file: None,
            data: None,
        }
    }
}

impl Config {
    /// Exclusion filter for directories.
    ///
    /// # Errors
    ///
    /// * If any pattern in `exclude_dirs` is invalid
    pub fn dir_filter(&self) -> Result<NameFilter, ConfigError> {
        Ok(NameFilter::new(&self.exclude_dirs)?.with_hidden(self.exclude_hidden))
    }

    /// Exclusion filter for files.
    ///
    /// # Errors
    ///
    /// * If any pattern in `exclude_files` is invalid
    pub fn file_filter(&self) -> Result<NameFilter, ConfigError> {
        Ok(NameFilter::new(&self.exclude_files)?.with_hidden(self.exclude_hidden))
    }
}

/// A loaded configuration with metadata.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    /// The parsed configuration.
    pub config: Config,
    /// Path to the configuration file.
    pub config_path: PathBuf,
    /// Directory containing the configuration file.
    pub config_dir: PathBuf,
}

impl LoadedConfig {
    /// Resolve a path from the config file relative to its directory.
    #[must_use]
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.config_dir.join(path)
        }
    }
}
