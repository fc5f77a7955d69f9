//! Error types for copy strategies.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

/// Errors that can occur while producing a single target file.
#[derive(Debug, thiserror::Error)]
pub enum CopyError {
    /// Failed to open the source file for reading.
    #[error("Failed to open {}: {io_error}", path.display())]
    OpenError {
        /// The source file path.
        path: PathBuf,
        /// The underlying IO error.
        io_error: std::io::Error,
    },

    /// Failed to create (or truncate) the target file.
    #[error("Failed to create {}: {io_error}", path.display())]
    CreateError {
        /// The target file path.
        path: PathBuf,
        /// The underlying IO error.
        io_error: std::io::Error,
    },

    /// Failed while streaming bytes from source to target.
    #[error("Failed to copy {} to {}: {io_error}", source_path.display(), target_path.display())]
    IoError {
        /// Source file path.
        source_path: PathBuf,
        /// Target file path.
        target_path: PathBuf,
        /// The underlying IO error.
        io_error: std::io::Error,
    },

    /// The source file could not be parsed as a template.
    #[error("Failed to parse template {}: {message}", path.display())]
    TemplateParseError {
        /// The template source path.
        path: PathBuf,
        /// Parser error message.
        message: String,
    },

    /// The template parsed but could not be rendered against the data.
    #[error("Failed to render template {}: {message}", path.display())]
    TemplateRenderError {
        /// The template source path.
        path: PathBuf,
        /// Renderer error message.
        message: String,
    },

    /// A caller-supplied strategy failed.
    #[error("Copy strategy failed for {}: {message}", path.display())]
    Custom {
        /// The source file path.
        path: PathBuf,
        /// Error message.
        message: String,
    },
}
