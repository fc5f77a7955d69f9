//! Error types for tree translation.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use staticdir_copy::CopyError;
use thiserror::Error;

/// Errors that abort a translation.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// A source directory could not be opened or enumerated.
    #[error("Failed to list directory {}: {io_error}", path.display())]
    ListError {
        /// The source directory path.
        path: PathBuf,
        /// The underlying IO error.
        io_error: std::io::Error,
    },

    /// An entry was listed but its metadata could not be read.
    #[error("Failed to get metadata for {}: {io_error}", path.display())]
    MetadataError {
        /// The entry path.
        path: PathBuf,
        /// The underlying IO error.
        io_error: std::io::Error,
    },

    /// A target directory could not be created.
    #[error("Failed to create directory {}: {io_error}", path.display())]
    CreateDirError {
        /// The target directory path.
        path: PathBuf,
        /// The underlying IO error.
        io_error: std::io::Error,
    },

    /// A target directory path is occupied by something that is not a directory.
    #[error("Cannot create directory {}: path exists and is not a directory", path.display())]
    NotADirectory {
        /// The conflicting target path.
        path: PathBuf,
    },

    /// The copy strategy failed for a file.
    #[error(transparent)]
    Copy(#[from] CopyError),
}
