//! Configuration file discovery.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::{Path, PathBuf};

/// File name looked for by [`discover_config`].
pub const CONFIG_FILE_NAME: &str = "staticdir.toml";

/// Find the nearest `staticdir.toml`, starting at `dir` and walking up
/// through its ancestors.
#[must_use]
pub fn discover_config(dir: &Path) -> Option<PathBuf> {
    log::debug!("Discovering config from {}", dir.display());

    let found = dir
        .ancestors()
        .map(|ancestor| ancestor.join(CONFIG_FILE_NAME))
        .find(|candidate| candidate.is_file());

    if let Some(path) = &found {
        log::debug!("Found config {}", path.display());
    }

    found
}
