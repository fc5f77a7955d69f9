//! Metadata for a single entry in a source tree.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::ffi::{OsStr, OsString};
use std::fs::{self, DirEntry, Metadata};
use std::path::Path;
use std::time::SystemTime;

/// Name and filesystem metadata of a listed entry.
///
/// Metadata is read without following symlinks, so a link is reported as
/// a non-directory regardless of what it points at.
#[derive(Debug, Clone)]
pub struct FileInfo {
    name: OsString,
    metadata: Metadata,
}

impl FileInfo {
    /// Build from an entry yielded by [`std::fs::read_dir`].
    ///
    /// # Errors
    ///
    /// * If the entry's metadata cannot be read
    pub fn from_dir_entry(entry: &DirEntry) -> std::io::Result<Self> {
        Ok(Self {
            name: entry.file_name(),
            metadata: entry.metadata()?,
        })
    }

    /// Stat a path directly.
    ///
    /// # Errors
    ///
    /// * If the path cannot be stat'ed
    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let metadata = fs::symlink_metadata(path)?;
        let name = path
            .file_name()
            .map_or_else(|| path.as_os_str().to_os_string(), OsStr::to_os_string);

        Ok(Self { name, metadata })
    }

    /// Base name of the entry.
    #[must_use]
    pub fn name(&self) -> &OsStr {
        &self.name
    }

    /// Base name, lossily converted for matching and display.
    #[must_use]
    pub fn name_str(&self) -> std::borrow::Cow<'_, str> {
        self.name.to_string_lossy()
    }

    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.metadata.is_dir()
    }

    /// Size in bytes.
    #[must_use]
    pub fn len(&self) -> u64 {
        self.metadata.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.metadata.len() == 0
    }

    /// Last modification time, if the platform reports one.
    #[must_use]
    pub fn modified(&self) -> Option<SystemTime> {
        self.metadata.modified().ok()
    }

    /// Dotfile convention: the name starts with `.`.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.name.as_encoded_bytes().first() == Some(&b'.')
    }

    /// Permission bits.
    #[cfg(unix)]
    #[must_use]
    pub fn mode(&self) -> u32 {
        use std::os::unix::fs::PermissionsExt;

        self.metadata.permissions().mode() & 0o7777
    }

    /// Full metadata as returned by the filesystem.
    #[must_use]
    pub const fn metadata(&self) -> &Metadata {
        &self.metadata
    }
}
