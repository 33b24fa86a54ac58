//! Blueprint entities: the declared directory lists that drive a run.
//!
//! A [`Blueprint`] is plain read-only data. It is handed to the services
//! explicitly; nothing in the core keeps a global copy.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::{entities::common::RelativePath, error::DomainError};

/// Default marker file name written into every declared directory.
pub const DEFAULT_MARKER: &str = ".gitkeep";

/// A root directory plus the ordered relative paths to materialise under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub name: String,
    pub root: PathBuf,
    pub paths: Vec<RelativePath>,
}

impl Section {
    pub fn new(name: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            root: root.into(),
            paths: Vec::new(),
        }
    }

    pub fn with_paths<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<RelativePath>,
    {
        self.paths.extend(paths.into_iter().map(Into::into));
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        validate_name(&self.name)?;
        validate_paths(&self.name, &self.paths)
    }
}

/// The native section: its package directory is located at run time.
///
/// `root` is searched for `anchor_file`; the directory holding it becomes
/// the base for `paths`. When the anchor is missing, `root/default_package`
/// is used instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendSection {
    pub name: String,
    pub root: PathBuf,
    pub anchor_file: String,
    pub default_package: RelativePath,
    pub paths: Vec<RelativePath>,
}

impl BackendSection {
    pub fn new(
        name: impl Into<String>,
        root: impl Into<PathBuf>,
        anchor_file: impl Into<String>,
        default_package: impl Into<RelativePath>,
    ) -> Self {
        Self {
            name: name.into(),
            root: root.into(),
            anchor_file: anchor_file.into(),
            default_package: default_package.into(),
            paths: Vec::new(),
        }
    }

    pub fn with_paths<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<RelativePath>,
    {
        self.paths.extend(paths.into_iter().map(Into::into));
        self
    }

    /// Package directory used when the anchor file cannot be found.
    pub fn default_package_dir(&self, base: &Path) -> PathBuf {
        base.join(&self.root).join(&self.default_package)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        validate_name(&self.name)?;
        validate_file_name(&self.anchor_file).map_err(|reason| DomainError::InvalidAnchor {
            name: self.anchor_file.clone(),
            reason,
        })?;
        validate_paths(&self.name, &self.paths)
    }
}

/// Both sections plus the marker file name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blueprint {
    pub marker: String,
    pub frontend: Section,
    pub backend: BackendSection,
}

impl Blueprint {
    pub fn new(frontend: Section, backend: BackendSection) -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
            frontend,
            backend,
        }
    }

    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    /// Total number of declared directories across both sections.
    pub fn path_count(&self) -> usize {
        self.frontend.paths.len() + self.backend.paths.len()
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        validate_file_name(&self.marker).map_err(|reason| DomainError::InvalidMarker {
            name: self.marker.clone(),
            reason,
        })?;
        self.frontend.validate()?;
        self.backend.validate()
    }
}

fn validate_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::MissingRequiredField {
            field: "section.name",
        });
    }
    Ok(())
}

fn validate_paths(section: &str, paths: &[RelativePath]) -> Result<(), DomainError> {
    if paths.is_empty() {
        return Err(DomainError::EmptySection {
            section: section.to_string(),
        });
    }

    let mut seen = HashSet::new();
    for path in paths {
        if !seen.insert(path) {
            return Err(DomainError::DuplicatePath {
                section: section.to_string(),
                path: path.to_string(),
            });
        }
    }
    Ok(())
}

/// A bare file name: non-empty, no separators, not `.` or `..`.
fn validate_file_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("name is empty".into());
    }
    if name == "." || name == ".." {
        return Err("name must not be a relative directory reference".into());
    }
    if name.contains('/') || name.contains('\\') {
        return Err("name must not contain path separators".into());
    }
    Ok(())
}
