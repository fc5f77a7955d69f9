//! Per-file copy strategies for staticdir.
//!
//! A [`CopyStrategy`] turns one source file into one target file. Two are
//! provided:
//!
//! * [`IdentityCopy`] streams the bytes unchanged
//! * [`TemplateCopy`] renders `*.tmpl` files with Handlebars (HTML-escaped)
//!   and copies everything else unchanged
//!
//! Callers can supply their own by implementing the trait or wrapping a
//! closure with [`copy_fn`].
//!
//! # Example
//!
//! ```rust,ignore
//! use staticdir_copy::{CopyStrategy, FileInfo, TemplateCopy};
//!
//! let info = FileInfo::from_path(source)?;
//! TemplateCopy::new().copy(source, target, &info, &serde_json::json!({ "title": "Home" }))?;
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod copy;
mod error;
mod info;
mod template;

pub use copy::{CopyStrategy, FnCopy, IdentityCopy, copy_file, copy_fn};
pub use error::CopyError;
pub use info::FileInfo;
pub use template::{TEMPLATE_EXTENSION, TemplateCopy};
