//! Source-to-target tree translation for staticdir.
//!
//! A [`Translator`] walks a source directory depth-first and recreates it
//! under a target directory:
//!
//! * directories are created with a configurable mode; existing ones are reused
//! * files are handed to a [`CopyStrategy`], byte-identical by default
//! * two predicates decide which directories and files are skipped
//!
//! Translation is fail-fast: the first error aborts the walk and is
//! returned. Output written before the error is left in place.
//!
//! # Example
//!
//! ```rust,ignore
//! use staticdir_translate::{NameFilter, TemplateCopy, Translator};
//!
//! let drafts = NameFilter::new(["drafts"])?.with_hidden(true);
//! let summary = Translator::new("site", "public")
//!     .exclude_dirs(drafts.into_predicate())
//!     .with_strategy(TemplateCopy::new())
//!     .with_data(serde_json::json!({ "title": "Home" }))
//!     .translate()?;
//! println!("{} files", summary.files_copied);
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod filter;
mod translator;

pub use error::TranslateError;
pub use filter::{NameFilter, exclude_hidden, exclude_none};
pub use staticdir_copy::{
    CopyError, CopyStrategy, FileInfo, IdentityCopy, TEMPLATE_EXTENSION, TemplateCopy, copy_fn,
};
pub use translator::{DEFAULT_DIR_MODE, FileOutcome, TranslateSummary, Translator, list_children};
