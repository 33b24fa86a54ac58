// ============================================================================
// domain/error.rs - BLUEPRINT ERROR DOMAIN
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (carried inside reports and core errors)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Path Errors
    // ========================================================================
    #[error("Invalid path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Duplicate path in section '{section}': {path}")]
    DuplicatePath { section: String, path: String },

    // ========================================================================
    // Blueprint Errors
    // ========================================================================
    #[error("Section '{section}' declares no directories")]
    EmptySection { section: String },

    #[error("Invalid marker file name '{name}': {reason}")]
    InvalidMarker { name: String, reason: String },

    #[error("Invalid anchor file name '{name}': {reason}")]
    InvalidAnchor { name: String, reason: String },

    #[error("Required field missing: {field}")]
    MissingRequiredField { field: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidPath { path, .. } | Self::AbsolutePathNotAllowed { path } => vec![
                format!("Offending path: {}", path),
                "Declared paths must be relative and stay inside their section root".into(),
                "Example: features/triage/presentation/pages".into(),
            ],
            Self::DuplicatePath { section, path } => vec![
                format!("'{}' is listed twice in the {} section", path, section),
                "Remove the duplicate entry from your strata.toml".into(),
            ],
            Self::EmptySection { section } => vec![
                format!("Add at least one path to the {} section", section),
                "Run 'strata init' to write the built-in blueprint as a starting point".into(),
            ],
            Self::InvalidMarker { .. } => vec![
                "The marker must be a bare file name such as .gitkeep".into(),
            ],
            Self::InvalidAnchor { .. } => vec![
                "The anchor must be a bare file name such as MainActivity.kt".into(),
            ],
            Self::MissingRequiredField { field } => vec![
                format!("Set '{}' in your configuration", field),
            ],
        }
    }
}
