//! Terminal output formatting.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::Path;

use colored::Colorize;
use staticdir_translate::TranslateSummary;

/// Print the source and target of a translation.
pub fn print_paths(source: &Path, target: &Path) {
    println!(
        "{} {} {}",
        source.display().to_string().cyan(),
        "→".dimmed(),
        target.display().to_string().cyan()
    );
}

/// Print the config file in use.
pub fn print_config(path: &Path) {
    println!("Config: {}", path.display().to_string().yellow());
}

/// Print a summary of a completed translation.
pub fn print_summary(summary: &TranslateSummary) {
    println!(
        "{} {} file{} in {} director{} ({} new, {} excluded)",
        "✓".green(),
        summary.files_copied,
        if summary.files_copied == 1 { "" } else { "s" },
        summary.dirs_visited,
        if summary.dirs_visited == 1 { "y" } else { "ies" },
        summary.dirs_created,
        summary.excluded
    );
}

/// Print error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", "Error:".red().bold(), message);
}
