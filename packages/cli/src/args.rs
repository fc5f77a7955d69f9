//! CLI argument definitions.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::{Path, PathBuf};

use clap::Parser;
use staticdir_config::Config;

/// CLI arguments for staticdir.
#[derive(Debug, Parser)]
#[command(
    name = "staticdir",
    about = "Render a tree of templates into a tree of static files",
    version
)]
pub struct Args {
    /// Source directory (overrides `source` in the config).
    #[arg(index = 1)]
    pub source: Option<PathBuf>,

    /// Target directory (overrides `target` in the config).
    #[arg(index = 2)]
    pub target: Option<PathBuf>,

    /// Config file to use instead of the nearest staticdir.toml.
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// JSON or TOML file with template data.
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Copy template files verbatim instead of rendering them.
    #[arg(long = "no-templates")]
    pub no_templates: bool,

    /// Marker extension identifying templates.
    #[arg(long)]
    pub extension: Option<String>,

    /// Fail on template variables missing from the data.
    #[arg(long)]
    pub strict: bool,

    /// Glob for directory names to skip (can be specified multiple times).
    #[arg(long = "exclude-dir")]
    pub exclude_dirs: Vec<String>,

    /// Glob for file names to skip (can be specified multiple times).
    #[arg(long = "exclude-file")]
    pub exclude_files: Vec<String>,

    /// Skip dotfiles and dot-directories.
    #[arg(long = "exclude-hidden")]
    pub exclude_hidden: bool,

    /// Octal permission bits for created directories.
    #[arg(long, value_parser = parse_mode)]
    pub mode: Option<u32>,

    /// Enable verbose output.
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl Args {
    /// Overlay command-line values onto a loaded config. Paths given on the
    /// command line are made absolute against `cwd`.
    pub fn apply_to(&self, config: &mut Config, cwd: &Path) {
        if let Some(source) = &self.source {
            config.source = Some(cwd.join(source));
        }
        if let Some(target) = &self.target {
            config.target = Some(cwd.join(target));
        }
        if let Some(data) = &self.data {
            config.data_file = Some(cwd.join(data));
        }
        if self.no_templates {
            config.templates = false;
        }
        if let Some(extension) = &self.extension {
            config.template_extension.clone_from(extension);
        }
        if self.strict {
            config.strict = true;
        }
        if self.exclude_hidden {
            config.exclude_hidden = true;
        }
        if let Some(mode) = self.mode {
            config.dir_mode = mode;
        }
        config.exclude_dirs.extend(self.exclude_dirs.iter().cloned());
        config.exclude_files.extend(self.exclude_files.iter().cloned());
    }
}

fn parse_mode(value: &str) -> Result<u32, String> {
    let digits = value.strip_prefix("0o").unwrap_or(value);
    let mode = u32::from_str_radix(digits, 8).map_err(|e| format!("invalid octal mode: {e}"))?;

    if mode > 0o7777 {
        return Err(format!("mode out of range: {value}"));
    }

    Ok(mode)
}
