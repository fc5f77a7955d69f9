//! The copy strategy contract and the byte-identical strategy.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::CopyError;
use crate::info::FileInfo;

/// Produces the contents of one target file from one source file.
///
/// Called once per included file, after exclusion has been checked. `data`
/// is the caller's opaque context, passed through untouched from the
/// translator configuration.
pub trait CopyStrategy<D: ?Sized> {
    /// Create or overwrite `target` from `source`.
    ///
    /// # Errors
    ///
    /// * If the source cannot be read or the target cannot be written
    /// * Any strategy-specific failure (e.g. template parsing)
    fn copy(
        &self,
        source: &Path,
        target: &Path,
        info: &FileInfo,
        data: &D,
    ) -> Result<(), CopyError>;
}

impl<D: ?Sized, S: CopyStrategy<D> + ?Sized> CopyStrategy<D> for Box<S> {
    fn copy(
        &self,
        source: &Path,
        target: &Path,
        info: &FileInfo,
        data: &D,
    ) -> Result<(), CopyError> {
        (**self).copy(source, target, info, data)
    }
}

/// Byte-identical copy. Ignores metadata and data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdentityCopy;

impl<D: ?Sized> CopyStrategy<D> for IdentityCopy {
    fn copy(
        &self,
        source: &Path,
        target: &Path,
        _info: &FileInfo,
        _data: &D,
    ) -> Result<(), CopyError> {
        copy_file(source, target).map(|_| ())
    }
}

/// Strategy backed by a closure. See [`copy_fn`].
#[derive(Debug, Clone, Copy)]
pub struct FnCopy<F>(F);

impl<D, F> CopyStrategy<D> for FnCopy<F>
where
    D: ?Sized,
    F: Fn(&Path, &Path, &FileInfo, &D) -> Result<(), CopyError>,
{
    fn copy(
        &self,
        source: &Path,
        target: &Path,
        info: &FileInfo,
        data: &D,
    ) -> Result<(), CopyError> {
        (self.0)(source, target, info, data)
    }
}

/// Wrap a closure as a [`CopyStrategy`].
#[must_use]
pub const fn copy_fn<D, F>(f: F) -> FnCopy<F>
where
    D: ?Sized,
    F: Fn(&Path, &Path, &FileInfo, &D) -> Result<(), CopyError>,
{
    FnCopy(f)
}

/// Stream `source` into `target`, creating or truncating the target.
///
/// Both handles are closed before returning, on success or failure.
///
/// # Errors
///
/// * If the source cannot be opened
/// * If the target cannot be created
/// * If reading, writing, or flushing fails
pub fn copy_file(source: &Path, target: &Path) -> Result<u64, CopyError> {
    let mut input = File::open(source).map_err(|e| CopyError::OpenError {
        path: source.to_path_buf(),
        io_error: e,
    })?;
    let output = File::create(target).map_err(|e| CopyError::CreateError {
        path: target.to_path_buf(),
        io_error: e,
    })?;
    let mut output = BufWriter::new(output);

    let stream_error = |e: io::Error| CopyError::IoError {
        source_path: source.to_path_buf(),
        target_path: target.to_path_buf(),
        io_error: e,
    };

    let bytes = io::copy(&mut input, &mut output).map_err(stream_error)?;
    output.flush().map_err(stream_error)?;

    log::trace!(
        "Copied {} bytes {} -> {}",
        bytes,
        source.display(),
        target.display()
    );

    Ok(bytes)
}
