use super::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// A filesystem path guaranteed to be relative and to stay below its root.
///
/// Invariant: never empty, never absolute, no `..` components, and at least
/// one named component. Enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RelativePath(PathBuf);

impl RelativePath {
    /// Create a new relative path.
    ///
    /// # Panics
    /// Panics if the path violates the invariant (use `try_new` for fallible).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        match Self::try_new(path) {
            Ok(path) => path,
            Err(e) => panic!("invalid RelativePath: {e}"),
        }
    }

    /// Fallible constructor.
    pub fn try_new(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();
        let display = path.display().to_string();

        if path.as_os_str().is_empty() {
            return Err(DomainError::InvalidPath {
                path: display,
                reason: "path is empty".into(),
            });
        }

        if path.is_absolute() || path.has_root() {
            return Err(DomainError::AbsolutePathNotAllowed { path: display });
        }

        let mut named = false;
        for component in path.components() {
            match component {
                Component::Normal(_) => named = true,
                Component::CurDir => {}
                Component::ParentDir => {
                    return Err(DomainError::InvalidPath {
                        path: display,
                        reason: "'..' would escape the section root".into(),
                    });
                }
                Component::Prefix(_) | Component::RootDir => {
                    return Err(DomainError::AbsolutePathNotAllowed { path: display });
                }
            }
        }

        if !named {
            return Err(DomainError::InvalidPath {
                path: display,
                reason: "path does not name a directory below the section root".into(),
            });
        }

        Ok(Self(path))
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        self.0.to_str().unwrap_or("")
    }
}

impl AsRef<Path> for RelativePath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl From<&str> for RelativePath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl TryFrom<String> for RelativePath {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<RelativePath> for String {
    fn from(path: RelativePath) -> Self {
        // Paths always come from UTF-8 strings, so lossy conversion is exact.
        path.0.to_string_lossy().into_owned()
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_nested_relative_path() {
        let path = RelativePath::try_new("features/triage/presentation/bloc").unwrap();
        assert_eq!(path.as_str(), "features/triage/presentation/bloc");
    }

    #[test]
    fn rejects_empty() {
        assert!(matches!(
            RelativePath::try_new(""),
            Err(DomainError::InvalidPath { .. })
        ));
    }

    #[test]
    fn rejects_absolute() {
        assert!(matches!(
            RelativePath::try_new("/etc/passwd"),
            Err(DomainError::AbsolutePathNotAllowed { .. })
        ));
    }

    #[test]
    fn rejects_parent_traversal() {
        assert!(matches!(
            RelativePath::try_new("core/../../outside"),
            Err(DomainError::InvalidPath { .. })
        ));
    }

    #[test]
    fn rejects_current_dir_only() {
        for path in [".", "./", "./."] {
            assert!(
                matches!(
                    RelativePath::try_new(path),
                    Err(DomainError::InvalidPath { .. })
                ),
                "{path} should be rejected"
            );
        }
    }

    #[test]
    fn leading_current_dir_is_allowed() {
        assert!(RelativePath::try_new("./core/di").is_ok());
    }

    #[test]
    fn owned_string_conversion_validates() {
        assert_eq!(
            RelativePath::try_from("core/di".to_string()).unwrap(),
            RelativePath::new("core/di")
        );
        assert!(RelativePath::try_from("../x".to_string()).is_err());
    }
}
