//! Recursive source-to-target tree translation.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use path_clean::PathClean;
use staticdir_copy::{CopyStrategy, FileInfo, IdentityCopy};

use crate::error::TranslateError;
use crate::filter::exclude_none;

/// Default permission bits for created directories.
pub const DEFAULT_DIR_MODE: u32 = 0o755;

type Predicate = Box<dyn Fn(&FileInfo) -> bool>;

/// Counts gathered over one translation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TranslateSummary {
    /// Source directories walked, including the root.
    pub dirs_visited: u64,
    /// Target directories that did not exist before.
    pub dirs_created: u64,
    /// Files handed to the copy strategy.
    pub files_copied: u64,
    /// Entries skipped by an exclusion predicate.
    pub excluded: u64,
}

impl std::ops::AddAssign for TranslateSummary {
    fn add_assign(&mut self, other: Self) {
        self.dirs_visited += other.dirs_visited;
        self.dirs_created += other.dirs_created;
        self.files_copied += other.files_copied;
        self.excluded += other.excluded;
    }
}

/// Outcome of offering a single file to the translator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// The copy strategy produced the target.
    Copied,
    /// The file exclusion predicate rejected it.
    Excluded,
}

/// Mirrors a source tree into a target tree, file by file.
///
/// Directories are recreated with [`Translator::dir_mode`]; files are
/// produced by the copy strategy `S`, which receives `data` unchanged on
/// every call. The translator holds no per-run state, so [`translate`]
/// can be called repeatedly.
///
/// [`translate`]: Translator::translate
///
/// # Example
///
/// ```rust,ignore
/// use staticdir_copy::TemplateCopy;
/// use staticdir_translate::{Translator, exclude_hidden};
///
/// let summary = Translator::new("site", "public")
///     .exclude_dirs(exclude_hidden)
///     .with_strategy(TemplateCopy::new())
///     .with_data(serde_json::json!({ "title": "Home" }))
///     .translate()?;
/// ```
pub struct Translator<D = (), S = IdentityCopy> {
    source: PathBuf,
    target: PathBuf,
    exclude_dir: Predicate,
    exclude_file: Predicate,
    dir_mode: u32,
    strategy: S,
    data: D,
}

impl Translator {
    /// Create a translator with default settings: nothing excluded,
    /// directories created `0755`, files copied byte for byte.
    ///
    /// Both roots are cleaned of redundant separators, `.` and `..`.
    #[must_use]
    pub fn new(source: impl AsRef<Path>, target: impl AsRef<Path>) -> Self {
        Self {
            source: source.as_ref().clean(),
            target: target.as_ref().clean(),
            exclude_dir: Box::new(exclude_none),
            exclude_file: Box::new(exclude_none),
            dir_mode: DEFAULT_DIR_MODE,
            strategy: IdentityCopy,
            data: (),
        }
    }
}

impl<D, S> Translator<D, S> {
    /// Skip directories (and their whole subtree) matching `predicate`.
    #[must_use]
    pub fn exclude_dirs(mut self, predicate: impl Fn(&FileInfo) -> bool + 'static) -> Self {
        self.exclude_dir = Box::new(predicate);
        self
    }

    /// Skip files matching `predicate`.
    #[must_use]
    pub fn exclude_files(mut self, predicate: impl Fn(&FileInfo) -> bool + 'static) -> Self {
        self.exclude_file = Box::new(predicate);
        self
    }

    /// Permission bits for created directories. Ignored on non-unix platforms.
    #[must_use]
    pub fn dir_mode(mut self, mode: u32) -> Self {
        self.dir_mode = mode;
        self
    }

    /// Replace the copy strategy.
    #[must_use]
    pub fn with_strategy<S2>(self, strategy: S2) -> Translator<D, S2> {
        Translator {
            source: self.source,
            target: self.target,
            exclude_dir: self.exclude_dir,
            exclude_file: self.exclude_file,
            dir_mode: self.dir_mode,
            strategy,
            data: self.data,
        }
    }

    /// Replace the data forwarded to the copy strategy.
    #[must_use]
    pub fn with_data<D2>(self, data: D2) -> Translator<D2, S> {
        Translator {
            source: self.source,
            target: self.target,
            exclude_dir: self.exclude_dir,
            exclude_file: self.exclude_file,
            dir_mode: self.dir_mode,
            strategy: self.strategy,
            data,
        }
    }

    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }

    #[must_use]
    pub fn target(&self) -> &Path {
        &self.target
    }

    #[must_use]
    pub const fn mode(&self) -> u32 {
        self.dir_mode
    }

    #[must_use]
    pub const fn strategy(&self) -> &S {
        &self.strategy
    }

    #[must_use]
    pub const fn data(&self) -> &D {
        &self.data
    }
}

impl<D, S: CopyStrategy<D>> Translator<D, S> {
    /// Translate the whole source tree into the target tree.
    ///
    /// Stops at the first error. Anything written before the failure is
    /// left in place.
    ///
    /// # Errors
    ///
    /// * If a source directory cannot be listed
    /// * If a target directory cannot be created (an existing directory is fine)
    /// * If the copy strategy fails for any file
    pub fn translate(&self) -> Result<TranslateSummary, TranslateError> {
        log::info!(
            "Translating {} -> {}",
            self.source.display(),
            self.target.display()
        );

        let summary = self.copy_dir(Path::new(""))?;

        log::info!(
            "Translated {} files across {} directories ({} excluded)",
            summary.files_copied,
            summary.dirs_visited,
            summary.excluded
        );

        Ok(summary)
    }

    /// Translate the directory at `subpath` (relative to both roots) and
    /// everything beneath it.
    ///
    /// The directory itself is not tested against the exclusion predicate;
    /// its children are.
    ///
    /// # Errors
    ///
    /// * See [`Translator::translate`]
    pub fn copy_dir(&self, subpath: &Path) -> Result<TranslateSummary, TranslateError> {
        let source = join(&self.source, subpath);
        let target = join(&self.target, subpath);
        log::debug!("Copying directory: {} -> {}", source.display(), target.display());

        let children = list_children(&source)?;

        let mut summary = TranslateSummary {
            dirs_visited: 1,
            ..TranslateSummary::default()
        };
        if self.create_dir(&target)? {
            summary.dirs_created += 1;
        }

        for child in &children {
            let child_path = subpath.join(child.name());

            if child.is_dir() {
                if (self.exclude_dir)(child) {
                    log::debug!("Excluding directory: {}", child_path.display());
                    summary.excluded += 1;
                    continue;
                }
                summary += self.copy_dir(&child_path)?;
            } else {
                match self.copy_file(&child_path, child)? {
                    FileOutcome::Copied => summary.files_copied += 1,
                    FileOutcome::Excluded => summary.excluded += 1,
                }
            }
        }

        Ok(summary)
    }

    /// Offer the file at `subpath` (relative to both roots) to the copy
    /// strategy, unless the file exclusion predicate rejects it.
    ///
    /// # Errors
    ///
    /// * If the copy strategy fails
    pub fn copy_file(&self, subpath: &Path, info: &FileInfo) -> Result<FileOutcome, TranslateError> {
        if (self.exclude_file)(info) {
            log::debug!("Excluding file: {}", subpath.display());
            return Ok(FileOutcome::Excluded);
        }

        let source = self.source.join(subpath);
        let target = self.target.join(subpath);
        log::debug!("Copying file: {} -> {}", source.display(), target.display());

        self.strategy.copy(&source, &target, info, &self.data)?;

        Ok(FileOutcome::Copied)
    }

    /// Create one target directory. Returns `false` if it already existed.
    fn create_dir(&self, path: &Path) -> Result<bool, TranslateError> {
        let mut builder = fs::DirBuilder::new();
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(self.dir_mode);
        }

        match builder.create(path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                if path.is_dir() {
                    log::trace!("Directory already exists: {}", path.display());
                    Ok(false)
                } else {
                    Err(TranslateError::NotADirectory {
                        path: path.to_path_buf(),
                    })
                }
            }
            Err(e) => Err(TranslateError::CreateDirError {
                path: path.to_path_buf(),
                io_error: e,
            }),
        }
    }
}

impl<D: fmt::Debug, S: fmt::Debug> fmt::Debug for Translator<D, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Translator")
            .field("source", &self.source)
            .field("target", &self.target)
            .field("dir_mode", &format_args!("{:o}", self.dir_mode))
            .field("strategy", &self.strategy)
            .field("data", &self.data)
            .finish_non_exhaustive()
    }
}

/// List the immediate children of a directory, in the order the
/// filesystem returns them.
///
/// # Errors
///
/// * If the directory cannot be opened or enumerated
/// * If a child's metadata cannot be read
pub fn list_children(dir: &Path) -> Result<Vec<FileInfo>, TranslateError> {
    let entries = fs::read_dir(dir).map_err(|e| TranslateError::ListError {
        path: dir.to_path_buf(),
        io_error: e,
    })?;

    entries
        .map(|entry| {
            let entry = entry.map_err(|e| TranslateError::ListError {
                path: dir.to_path_buf(),
                io_error: e,
            })?;
            FileInfo::from_dir_entry(&entry).map_err(|e| TranslateError::MetadataError {
                path: entry.path(),
                io_error: e,
            })
        })
        .collect()
}

fn join(root: &Path, subpath: &Path) -> PathBuf {
    if subpath.as_os_str().is_empty() {
        root.to_path_buf()
    } else {
        root.join(subpath)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use serde_json::json;
    use staticdir_copy::{CopyError, TemplateCopy, copy_fn};
    use tempfile::TempDir;

    /// Lay out a small site under `<dir>/src`.
    fn make_source(dir: &TempDir) -> PathBuf {
        let source = dir.path().join("src");
        fs::create_dir_all(source.join("blog/2024")).unwrap();
        fs::create_dir_all(source.join("drafts/deep")).unwrap();
        fs::create_dir_all(source.join("empty")).unwrap();
        fs::write(source.join("index.html.tmpl"), "<title>{{title}}</title>").unwrap();
        fs::write(source.join("readme.txt"), "plain {{title}}").unwrap();
        fs::write(source.join("blog/post.html"), "<p>post</p>").unwrap();
        fs::write(source.join("blog/2024/logo.bin"), [0u8, 159, 146, 150, 255]).unwrap();
        fs::write(source.join("drafts/wip.html"), "wip").unwrap();
        fs::write(source.join("drafts/deep/keep.txt"), "keep").unwrap();
        source
    }

    #[test]
    fn test_new_cleans_roots() {
        let translator = Translator::new("./site//pages/../", "out/./public/");

        assert_eq!(translator.source(), Path::new("site"));
        assert_eq!(translator.target(), Path::new("out/public"));
        assert_eq!(translator.mode(), DEFAULT_DIR_MODE);
    }

    #[test]
    fn test_translate_mirrors_tree() {
        let dir = TempDir::new().unwrap();
        let source = make_source(&dir);
        let target = dir.path().join("out");

        let summary = Translator::new(&source, &target).translate().unwrap();

        assert!(target.join("empty").is_dir());
        assert!(target.join("drafts/deep").is_dir());
        assert_eq!(
            fs::read(target.join("blog/2024/logo.bin")).unwrap(),
            fs::read(source.join("blog/2024/logo.bin")).unwrap()
        );
        assert_eq!(
            fs::read_to_string(target.join("index.html.tmpl")).unwrap(),
            "<title>{{title}}</title>"
        );
        assert_eq!(
            summary,
            TranslateSummary {
                dirs_visited: 6,
                dirs_created: 6,
                files_copied: 6,
                excluded: 0,
            }
        );
    }

    #[test]
    fn test_translate_templates() {
        let dir = TempDir::new().unwrap();
        let source = make_source(&dir);
        let target = dir.path().join("out");

        Translator::new(&source, &target)
            .with_strategy(TemplateCopy::new())
            .with_data(json!({ "title": "Fish & Chips" }))
            .translate()
            .unwrap();

        assert_eq!(
            fs::read_to_string(target.join("index.html")).unwrap(),
            "<title>Fish &amp; Chips</title>"
        );
        assert!(!target.join("index.html.tmpl").exists());
        assert_eq!(
            fs::read_to_string(target.join("readme.txt")).unwrap(),
            "plain {{title}}"
        );
    }

    #[test]
    fn test_excluded_directory_is_absent() {
        let dir = TempDir::new().unwrap();
        let source = make_source(&dir);
        let target = dir.path().join("out");

        let summary = Translator::new(&source, &target)
            .exclude_dirs(|info| info.name() == "drafts")
            .exclude_files(|info| info.name() == "wip.html" || info.name() == "keep.txt")
            .translate()
            .unwrap();

        assert!(!target.join("drafts").exists());
        assert!(target.join("blog/post.html").exists());
        assert_eq!(summary.excluded, 1);
        assert_eq!(summary.files_copied, 4);
    }

    #[test]
    fn test_excluded_directory_is_never_listed() {
        let dir = TempDir::new().unwrap();
        let source = make_source(&dir);
        let target = dir.path().join("out");

        // An unlistable directory only fails the run if it is visited.
        let locked = source.join("locked");
        fs::create_dir(&locked).unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
        }

        let result = Translator::new(&source, &target)
            .exclude_dirs(|info| info.name() == "locked")
            .translate();

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        }

        result.unwrap();
        assert!(!target.join("locked").exists());
    }

    #[test]
    fn test_excluded_files() {
        let dir = TempDir::new().unwrap();
        let source = make_source(&dir);
        let target = dir.path().join("out");

        let summary = Translator::new(&source, &target)
            .exclude_files(|info| info.name_str().ends_with(".html"))
            .translate()
            .unwrap();

        assert!(!target.join("blog/post.html").exists());
        assert!(!target.join("drafts/wip.html").exists());
        assert!(target.join("blog").is_dir());
        assert!(target.join("readme.txt").exists());
        assert_eq!(summary.excluded, 2);
    }

    #[test]
    fn test_translate_twice_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let source = make_source(&dir);
        let target = dir.path().join("out");
        let translator = Translator::new(&source, &target);

        let first = translator.translate().unwrap();
        fs::write(target.join("readme.txt"), "stale").unwrap();
        let second = translator.translate().unwrap();

        assert_eq!(first.dirs_created, 6);
        assert_eq!(second.dirs_created, 0);
        assert_eq!(second.files_copied, first.files_copied);
        assert_eq!(
            fs::read_to_string(target.join("readme.txt")).unwrap(),
            "plain {{title}}"
        );
    }

    #[test]
    fn test_target_into_existing_directory() {
        let dir = TempDir::new().unwrap();
        let source = make_source(&dir);
        let target = dir.path().join("out");
        fs::create_dir_all(target.join("blog")).unwrap();
        fs::write(target.join("unrelated.txt"), "kept").unwrap();

        Translator::new(&source, &target).translate().unwrap();

        assert!(target.join("blog/post.html").exists());
        assert_eq!(
            fs::read_to_string(target.join("unrelated.txt")).unwrap(),
            "kept"
        );
    }

    #[test]
    fn test_target_path_is_a_file() {
        let dir = TempDir::new().unwrap();
        let source = make_source(&dir);
        let target = dir.path().join("out");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("blog"), "not a directory").unwrap();

        let err = Translator::new(&source, &target).translate().unwrap_err();

        assert!(matches!(err, TranslateError::NotADirectory { ref path } if *path == target.join("blog")));
    }

    #[test]
    fn test_target_parent_missing() {
        let dir = TempDir::new().unwrap();
        let source = make_source(&dir);
        let target = dir.path().join("missing/parent/out");

        let err = Translator::new(&source, &target).translate().unwrap_err();

        assert!(matches!(err, TranslateError::CreateDirError { .. }));
    }

    #[test]
    fn test_source_missing() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("out");

        let err = Translator::new(dir.path().join("nope"), &target)
            .translate()
            .unwrap_err();

        assert!(matches!(err, TranslateError::ListError { .. }));
        assert!(!target.exists());
    }

    #[test]
    fn test_source_is_a_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("file.txt");
        fs::write(&file, "x").unwrap();

        let err = Translator::new(&file, dir.path().join("out"))
            .translate()
            .unwrap_err();

        assert!(matches!(err, TranslateError::ListError { .. }));
    }

    #[test]
    fn test_first_error_stops_translation() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("src");
        let target = dir.path().join("out");
        fs::create_dir(&source).unwrap();
        for name in ["a.txt", "b.txt", "c.txt", "d.txt"] {
            fs::write(source.join(name), name).unwrap();
        }

        let calls = RefCell::new(Vec::new());
        let strategy = copy_fn(|src: &Path, dst: &Path, info: &FileInfo, _: &()| {
            calls.borrow_mut().push(info.name_str().to_string());
            if info.name() == "c.txt" {
                return Err(CopyError::Custom {
                    path: src.to_path_buf(),
                    message: "refused".to_string(),
                });
            }
            staticdir_copy::copy_file(src, dst).map(|_| ())
        });

        let err = Translator::new(&source, &target)
            .with_strategy(strategy)
            .translate()
            .unwrap_err();

        assert!(matches!(
            err,
            TranslateError::Copy(CopyError::Custom { ref path, .. }) if *path == source.join("c.txt")
        ));

        let calls = calls.into_inner();
        assert_eq!(calls.last().map(String::as_str), Some("c.txt"));
        for name in &calls[..calls.len() - 1] {
            assert!(target.join(name).exists());
        }
        for name in ["a.txt", "b.txt", "d.txt"] {
            if !calls.iter().any(|c| c == name) {
                assert!(!target.join(name).exists());
            }
        }
    }

    #[test]
    fn test_subdirectory_error_propagates() {
        let dir = TempDir::new().unwrap();
        let source = make_source(&dir);
        let target = dir.path().join("out");
        fs::write(source.join("blog/2024/bad.html.tmpl"), "{{#each}}").unwrap();

        let err = Translator::new(&source, &target)
            .with_strategy(TemplateCopy::new())
            .with_data(json!({}))
            .translate()
            .unwrap_err();

        assert!(matches!(
            err,
            TranslateError::Copy(CopyError::TemplateParseError { .. })
        ));
    }

    #[test]
    fn test_strategy_receives_paths_and_data() {
        let dir = TempDir::new().unwrap();
        let source = make_source(&dir);
        let target = dir.path().join("out");

        let seen = RefCell::new(Vec::new());
        let strategy = copy_fn(|src: &Path, dst: &Path, _: &FileInfo, tag: &String| {
            seen.borrow_mut().push((
                src.strip_prefix(&source).unwrap().to_path_buf(),
                dst.strip_prefix(&target).unwrap().to_path_buf(),
                tag.clone(),
            ));
            Ok(())
        });

        Translator::new(&source, &target)
            .with_strategy(strategy)
            .with_data("ctx".to_string())
            .translate()
            .unwrap();

        let seen = seen.into_inner();
        assert_eq!(seen.len(), 6);
        assert!(seen.iter().all(|(s, d, tag)| s == d && tag == "ctx"));
        assert!(seen.contains(&(
            PathBuf::from("blog/2024/logo.bin"),
            PathBuf::from("blog/2024/logo.bin"),
            "ctx".to_string()
        )));
    }

    #[test]
    fn test_copy_file_alone() {
        let dir = TempDir::new().unwrap();
        let source = make_source(&dir);
        let target = dir.path().join("out");
        fs::create_dir(&target).unwrap();

        let translator = Translator::new(&source, &target)
            .exclude_files(|info| info.name() == "readme.txt");
        let readme = FileInfo::from_path(&source.join("readme.txt")).unwrap();
        let index = FileInfo::from_path(&source.join("index.html.tmpl")).unwrap();

        assert_eq!(
            translator.copy_file(Path::new("readme.txt"), &readme).unwrap(),
            FileOutcome::Excluded
        );
        assert_eq!(
            translator
                .copy_file(Path::new("index.html.tmpl"), &index)
                .unwrap(),
            FileOutcome::Copied
        );
        assert!(target.join("index.html.tmpl").exists());
        assert!(!target.join("readme.txt").exists());
    }

    #[test]
    fn test_copy_dir_subtree() {
        let dir = TempDir::new().unwrap();
        let source = make_source(&dir);
        let target = dir.path().join("out");
        fs::create_dir(&target).unwrap();

        let summary = Translator::new(&source, &target)
            .copy_dir(Path::new("blog"))
            .unwrap();

        assert!(target.join("blog/2024/logo.bin").exists());
        assert!(!target.join("readme.txt").exists());
        assert_eq!(summary.dirs_visited, 2);
        assert_eq!(summary.files_copied, 2);
    }

    #[cfg(unix)]
    #[test]
    fn test_dir_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let source = make_source(&dir);
        let target = dir.path().join("out");

        Translator::new(&source, &target)
            .dir_mode(0o700)
            .translate()
            .unwrap();

        let mode = fs::metadata(target.join("blog")).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o700);
    }

    #[test]
    fn test_list_children() {
        let dir = TempDir::new().unwrap();
        let source = make_source(&dir);

        let mut names: Vec<String> = list_children(&source)
            .unwrap()
            .iter()
            .map(|info| info.name_str().to_string())
            .collect();
        names.sort();

        assert_eq!(
            names,
            vec!["blog", "drafts", "empty", "index.html.tmpl", "readme.txt"]
        );
    }
}
