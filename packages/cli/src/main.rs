//! staticdir CLI entry point.
//!
//! Renders a source tree of templates into a target tree of static files.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod args;
mod output;

use std::env;
use std::path::Path;

use clap::Parser;
use serde_json::Value;

use args::Args;
use staticdir_config::{CONFIG_FILE_NAME, Config, LoadedConfig, discover_config, load_config};
use staticdir_translate::{CopyStrategy, IdentityCopy, TemplateCopy, Translator};

fn main() {
    let args = Args::parse();

    // Set up logging
    if args.verbose {
        // SAFETY: We're setting this before any other threads are spawned
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    pretty_env_logger::init();

    if let Err(e) = run(&args) {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}

/// Main application logic.
fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let cwd = env::current_dir()?;
    let mut loaded = load(args, &cwd)?;
    args.apply_to(&mut loaded.config, &cwd);

    let source = loaded
        .config
        .source
        .as_deref()
        .map(|p| loaded.resolve(p))
        .ok_or("No source directory given (pass SOURCE or set `source` in staticdir.toml)")?;
    let target = loaded
        .config
        .target
        .as_deref()
        .map(|p| loaded.resolve(p))
        .ok_or("No target directory given (pass TARGET or set `target` in staticdir.toml)")?;

    output::print_paths(&source, &target);

    let config = &loaded.config;
    let strategy: Box<dyn CopyStrategy<Value>> = if config.templates {
        Box::new(
            TemplateCopy::new()
                .extension(config.template_extension.as_str())
                .strict(config.strict),
        )
    } else {
        Box::new(IdentityCopy)
    };

    let summary = Translator::new(&source, &target)
        .exclude_dirs(config.dir_filter()?.into_predicate())
        .exclude_files(config.file_filter()?.into_predicate())
        .dir_mode(config.dir_mode)
        .with_strategy(strategy)
        .with_data(loaded.load_data()?)
        .translate()?;

    output::print_summary(&summary);
    Ok(())
}

/// Load the explicit config, the nearest discovered one, or defaults
/// rooted at the working directory.
fn load(args: &Args, cwd: &Path) -> Result<LoadedConfig, staticdir_config::ConfigError> {
    let path = match &args.config {
        Some(path) => Some(cwd.join(path)),
        None => discover_config(cwd),
    };

    if let Some(path) = path {
        output::print_config(&path);
        return load_config(&path);
    }

    log::debug!("No {CONFIG_FILE_NAME} found, using defaults");
    Ok(LoadedConfig {
        config: Config::default(),
        config_path: cwd.join(CONFIG_FILE_NAME),
        config_dir: cwd.to_path_buf(),
    })
}
