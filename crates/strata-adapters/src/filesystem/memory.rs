//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use strata_core::{
    application::{ApplicationError, ports::Filesystem},
    error::StrataResult,
};

/// In-memory filesystem for testing.
///
/// Paths are stored as given; `BTreeSet` ordering on components gives the
/// same pre-order, name-sorted traversal as the local adapter.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
}

impl MemoryFilesystemInner {
    fn insert_dirs(&mut self, path: &Path) -> Result<(), PathBuf> {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            if self.files.contains_key(&current) {
                return Err(current);
            }
            self.directories.insert(current.clone());
        }
        Ok(())
    }
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Seed a file (and its parent directories). Testing helper.
    pub fn add_file(&self, path: impl AsRef<Path>, content: &str) {
        let path = path.as_ref();
        let mut inner = self.write_lock_lenient();
        if let Some(parent) = path.parent() {
            // Seeding is test setup; a blocked parent is a broken fixture.
            inner
                .insert_dirs(parent)
                .unwrap_or_else(|p| panic!("cannot seed {}: {} is a file", path.display(), p.display()));
        }
        inner.files.insert(path.to_path_buf(), content.to_string());
    }

    /// Seed a directory tree. Testing helper.
    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        let mut inner = self.write_lock_lenient();
        inner
            .insert_dirs(path)
            .unwrap_or_else(|p| panic!("cannot seed {}: {} is a file", path.display(), p.display()));
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.read_lock_lenient().files.keys().cloned().collect()
    }

    /// Check if a path is a regular file.
    pub fn is_file(&self, path: &Path) -> bool {
        self.read_lock_lenient().files.contains_key(path)
    }

    fn read_lock(&self) -> StrataResult<RwLockReadGuard<'_, MemoryFilesystemInner>> {
        self.inner
            .read()
            .map_err(|_| ApplicationError::LockPoisoned.into())
    }

    fn write_lock(&self) -> StrataResult<RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        self.inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned.into())
    }

    fn read_lock_lenient(&self) -> RwLockReadGuard<'_, MemoryFilesystemInner> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_lock_lenient(&self) -> RwLockWriteGuard<'_, MemoryFilesystemInner> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> StrataResult<()> {
        let mut inner = self.write_lock()?;
        inner.insert_dirs(path).map_err(|blocked| {
            ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: format!("Not a directory: {}", blocked.display()),
            }
            .into()
        })
    }

    fn create_marker(&self, path: &Path) -> StrataResult<bool> {
        let mut inner = self.write_lock()?;

        if inner.files.contains_key(path) {
            return Ok(false);
        }

        if inner.directories.contains(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Is a directory".into(),
            }
            .into());
        }

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), String::new());
        Ok(true)
    }

    fn exists(&self, path: &Path) -> bool {
        self.read_lock()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.read_lock()
            .map(|inner| inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn find_dir_containing(&self, root: &Path, file_name: &str) -> StrataResult<Option<PathBuf>> {
        let inner = self.read_lock()?;

        let found = inner
            .directories
            .range(root.to_path_buf()..)
            .take_while(|dir| dir.starts_with(root))
            .find(|dir| inner.files.contains_key(&dir.join(file_name)))
            .cloned();

        Ok(found)
    }
}
