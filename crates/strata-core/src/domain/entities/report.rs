use std::path::{Path, PathBuf};

use serde::Serialize;

/// What happened to one declared directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EmitStatus {
    /// Directory and marker were both created.
    Created,
    /// Directory existed; the marker was missing and has been added.
    MarkerAdded,
    /// Directory and marker already existed; nothing was touched.
    AlreadyPresent,
    /// Dry run: the directory or its marker would be created.
    Planned,
    /// The filesystem refused; the batch carried on.
    Failed { reason: String },
}

impl EmitStatus {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmitOutcome {
    pub path: PathBuf,
    #[serde(flatten)]
    pub status: EmitStatus,
}

impl EmitOutcome {
    pub fn new(path: impl Into<PathBuf>, status: EmitStatus) -> Self {
        Self {
            path: path.into(),
            status,
        }
    }
}

/// Ordered outcomes for one section, one record per declared path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EmitReport {
    pub root: PathBuf,
    pub outcomes: Vec<EmitOutcome>,
}

impl EmitReport {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            outcomes: Vec::new(),
        }
    }

    pub fn push(&mut self, outcome: EmitOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Directories or markers written during this run.
    pub fn created(&self) -> usize {
        self.count(|s| matches!(s, EmitStatus::Created | EmitStatus::MarkerAdded))
    }

    pub fn unchanged(&self) -> usize {
        self.count(|s| matches!(s, EmitStatus::AlreadyPresent))
    }

    pub fn planned(&self) -> usize {
        self.count(|s| matches!(s, EmitStatus::Planned))
    }

    pub fn failed(&self) -> usize {
        self.count(EmitStatus::is_failure)
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    fn count(&self, pred: impl Fn(&EmitStatus) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(&o.status)).count()
    }
}

/// Why the locator fell back to the default package directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackReason {
    /// The search root does not exist.
    RootMissing,
    /// No directory under the root contains the anchor file.
    AnchorNotFound,
}

impl std::fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RootMissing => write!(f, "search root does not exist"),
            Self::AnchorNotFound => write!(f, "anchor file not found"),
        }
    }
}

/// Resolved base directory for the backend section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Location {
    Discovered {
        path: PathBuf,
    },
    Fallback {
        path: PathBuf,
        reason: FallbackReason,
    },
}

impl Location {
    pub fn path(&self) -> &Path {
        match self {
            Self::Discovered { path } | Self::Fallback { path, .. } => path,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}

/// Result of a full two-phase run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaffoldReport {
    pub dry_run: bool,
    pub frontend: EmitReport,
    pub location: Location,
    pub backend: EmitReport,
}

impl ScaffoldReport {
    pub fn total(&self) -> usize {
        self.frontend.len() + self.backend.len()
    }

    pub fn failed_count(&self) -> usize {
        self.frontend.failed() + self.backend.failed()
    }

    pub fn has_failures(&self) -> bool {
        self.failed_count() > 0
    }

    pub fn created_count(&self) -> usize {
        self.frontend.created() + self.backend.created()
    }

    pub fn unchanged_count(&self) -> usize {
        self.frontend.unchanged() + self.backend.unchanged()
    }

    pub fn planned_count(&self) -> usize {
        self.frontend.planned() + self.backend.planned()
    }
}
