//! Local filesystem adapter using std::fs.

use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use strata_core::{application::ports::Filesystem, error::StrataResult};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> StrataResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn create_marker(&self, path: &Path) -> StrataResult<bool> {
        // `create_new` never truncates; an existing file reports AlreadyExists.
        match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists && path.is_file() => Ok(false),
            Err(e) => Err(map_io_error(path, e, "create marker file")),
        }
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn find_dir_containing(&self, root: &Path, file_name: &str) -> StrataResult<Option<PathBuf>> {
        let found = WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    debug!(error = %e, "Skipping unreadable entry during anchor search");
                    None
                }
            })
            .filter(|entry| entry.file_type().is_dir())
            .find(|entry| entry.path().join(file_name).is_file())
            .map(|entry| entry.into_path());

        Ok(found)
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> strata_core::error::StrataError {
    use strata_core::application::ApplicationError;

    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
