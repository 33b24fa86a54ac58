//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `strata-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::error::StrataResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `strata_adapters::filesystem::LocalFilesystem` (production)
/// - `strata_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - Nothing here deletes, truncates or overwrites
/// - Every mutating call is safe to repeat
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all missing parents. Succeeds if it already
    /// exists as a directory.
    fn create_dir_all(&self, path: &Path) -> StrataResult<()>;

    /// Create an empty file at `path` unless a file is already there.
    ///
    /// Returns `true` if the file was created, `false` if an existing file
    /// was left untouched. Anything other than a regular file occupying
    /// `path` is an error.
    fn create_marker(&self, path: &Path) -> StrataResult<bool>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Depth-first, pre-order search below `root` (inclusive) for the first
    /// directory whose immediate entries include a file named `file_name`.
    ///
    /// Siblings are visited in file-name order. Unreadable subtrees are
    /// skipped. Returns `Ok(None)` when nothing matches.
    fn find_dir_containing(&self, root: &Path, file_name: &str)
    -> StrataResult<Option<PathBuf>>;
}
