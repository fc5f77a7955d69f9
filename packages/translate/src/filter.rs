//! Exclusion predicates.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use globset::{Glob, GlobSet, GlobSetBuilder};
use staticdir_copy::FileInfo;

/// Excludes nothing. The default for both predicates.
#[must_use]
pub const fn exclude_none(_info: &FileInfo) -> bool {
    false
}

/// Excludes dotfiles and dot-directories.
#[must_use]
pub fn exclude_hidden(info: &FileInfo) -> bool {
    info.is_hidden()
}

/// Matches entry base names against a set of glob patterns.
///
/// Patterns see only the name (`*.swp`, `node_modules`), never the path.
#[derive(Debug, Clone)]
pub struct NameFilter {
    set: GlobSet,
    hidden: bool,
}

impl NameFilter {
    /// Build a filter from glob patterns.
    ///
    /// # Errors
    ///
    /// * If any pattern is not a valid glob
    pub fn new<I, S>(patterns: I) -> Result<Self, globset::Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            builder.add(Glob::new(pattern.as_ref())?);
        }

        Ok(Self {
            set: builder.build()?,
            hidden: false,
        })
    }

    /// Also match dotfiles, regardless of patterns.
    #[must_use]
    pub const fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    /// Whether the entry should be excluded.
    #[must_use]
    pub fn matches(&self, info: &FileInfo) -> bool {
        (self.hidden && info.is_hidden()) || self.set.is_match(info.name())
    }

    /// Convert into a closure suitable for the translator's predicates.
    pub fn into_predicate(self) -> impl Fn(&FileInfo) -> bool + 'static {
        move |info| self.matches(info)
    }
}
