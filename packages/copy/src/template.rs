//! Template-or-copy strategy.
//!
//! Files whose name ends in the marker extension (`.tmpl` unless changed)
//! are parsed as [Handlebars](https://handlebarsjs.com/) templates and
//! rendered against the translator's data into a target with the marker
//! stripped, so `index.html.tmpl` becomes `index.html`. Every other file
//! is copied byte for byte.
//!
//! `{{value}}` HTML-escapes its output. Use `{{{value}}}` to emit raw text.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use handlebars::Handlebars;
use serde::Serialize;

use crate::copy::{CopyStrategy, copy_file};
use crate::error::CopyError;
use crate::info::FileInfo;

/// Default marker extension identifying template files.
pub const TEMPLATE_EXTENSION: &str = "tmpl";

/// Renders marked templates and copies everything else unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateCopy {
    extension: String,
    strict: bool,
}

impl TemplateCopy {
    /// Create a strategy using the `.tmpl` marker and lenient rendering.
    #[must_use]
    pub fn new() -> Self {
        Self {
            extension: TEMPLATE_EXTENSION.to_string(),
            strict: false,
        }
    }

    /// Use a different marker extension (without the leading dot).
    #[must_use]
    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        let extension = extension.into();
        self.extension = extension.trim_start_matches('.').to_string();
        self
    }

    /// In strict mode a variable missing from the data is a render error
    /// instead of rendering as empty.
    #[must_use]
    pub const fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// The marker extension in use.
    #[must_use]
    pub fn marker(&self) -> &str {
        &self.extension
    }

    /// Whether `source` carries the marker extension.
    #[must_use]
    pub fn is_template(&self, source: &Path) -> bool {
        source.extension() == Some(OsStr::new(&self.extension))
    }

    /// The rendered output path for a template target.
    #[must_use]
    pub fn output_path(&self, target: &Path) -> PathBuf {
        if self.is_template(target) {
            target.with_extension("")
        } else {
            target.to_path_buf()
        }
    }

    fn render<D: Serialize>(
        &self,
        source: &Path,
        target: &Path,
        data: &D,
    ) -> Result<(), CopyError> {
        let mut content = String::new();
        File::open(source)
            .map_err(|e| CopyError::OpenError {
                path: source.to_path_buf(),
                io_error: e,
            })?
            .read_to_string(&mut content)
            .map_err(|e| CopyError::IoError {
                source_path: source.to_path_buf(),
                target_path: target.to_path_buf(),
                io_error: e,
            })?;

        let name = source.to_string_lossy();
        let mut hbs = Handlebars::new();
        hbs.set_strict_mode(self.strict);
        hbs.register_template_string(&name, content)
            .map_err(|e| CopyError::TemplateParseError {
                path: source.to_path_buf(),
                message: e.to_string(),
            })?;

        let output = File::create(target).map_err(|e| CopyError::CreateError {
            path: target.to_path_buf(),
            io_error: e,
        })?;
        let mut output = BufWriter::new(output);

        hbs.render_to_write(&name, data, &mut output)
            .map_err(|e| CopyError::TemplateRenderError {
                path: source.to_path_buf(),
                message: e.to_string(),
            })?;
        output.flush().map_err(|e| CopyError::IoError {
            source_path: source.to_path_buf(),
            target_path: target.to_path_buf(),
            io_error: e,
        })?;

        Ok(())
    }
}

impl Default for TemplateCopy {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Serialize> CopyStrategy<D> for TemplateCopy {
    fn copy(
        &self,
        source: &Path,
        target: &Path,
        _info: &FileInfo,
        data: &D,
    ) -> Result<(), CopyError> {
        if !self.is_template(source) {
            return copy_file(source, target).map(|_| ());
        }

        let target = self.output_path(target);
        log::debug!(
            "Rendering template: {} -> {}",
            source.display(),
            target.display()
        );

        self.render(source, &target, data)
    }
}
