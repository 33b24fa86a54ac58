//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the two phases of a run:
//! 1. Emit the frontend section under its root
//! 2. Locate the backend package directory, then emit the backend section
//!    under it
//!
//! The phases share nothing but the filesystem port.

use std::path::Path;
use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::{
    application::{
        ports::Filesystem,
        services::{EmitService, LocateService},
    },
    domain::{Blueprint, DomainValidator as validator, EmitReport, RelativePath, ScaffoldReport},
    error::{StrataError, StrataResult},
};

/// Whether a run writes to disk or only reports what it would do.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RunMode {
    #[default]
    Apply,
    DryRun,
}

/// Main scaffolding service.
pub struct ScaffoldService {
    emitter: EmitService,
    locator: LocateService,
}

impl ScaffoldService {
    /// Create a new scaffold service backed by the given filesystem adapter.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    /// use strata_core::application::ScaffoldService;
    ///
    /// let service = ScaffoldService::new(Arc::new(filesystem)); // impl Filesystem
    /// ```
    pub fn new(filesystem: Arc<dyn Filesystem>) -> Self {
        Self {
            emitter: EmitService::new(Arc::clone(&filesystem)),
            locator: LocateService::new(filesystem),
        }
    }

    /// Run both phases against `base`, writing directories and markers.
    pub fn run(&self, blueprint: &Blueprint, base: &Path) -> StrataResult<ScaffoldReport> {
        self.execute(blueprint, base, RunMode::Apply)
    }

    /// Run both phases without writing anything.
    pub fn preview(&self, blueprint: &Blueprint, base: &Path) -> StrataResult<ScaffoldReport> {
        self.execute(blueprint, base, RunMode::DryRun)
    }

    /// Validate the blueprint, then emit frontend, locate, emit backend.
    ///
    /// Only an invalid blueprint is an error here. Per-directory failures
    /// are recorded in the returned report; the caller decides what they
    /// mean for the exit status.
    #[instrument(skip_all, fields(base = %base.display(), mode = ?mode))]
    pub fn execute(
        &self,
        blueprint: &Blueprint,
        base: &Path,
        mode: RunMode,
    ) -> StrataResult<ScaffoldReport> {
        validator::validate_blueprint(blueprint).map_err(StrataError::Domain)?;

        info!(
            frontend = blueprint.frontend.paths.len(),
            backend = blueprint.backend.paths.len(),
            "Scaffolding layered project skeleton"
        );

        // 1. Frontend
        let frontend_root = base.join(&blueprint.frontend.root);
        let frontend = self.emit(mode, &frontend_root, &blueprint.frontend.paths, &blueprint.marker);

        // 2. Backend
        let location = self.locator.resolve(&blueprint.backend, base);
        let backend = self.emit(
            mode,
            location.path(),
            &blueprint.backend.paths,
            &blueprint.marker,
        );

        let report = ScaffoldReport {
            dry_run: mode == RunMode::DryRun,
            frontend,
            location,
            backend,
        };

        if report.has_failures() {
            warn!(
                failed = report.failed_count(),
                total = report.total(),
                "Scaffold finished with failures"
            );
        } else {
            info!(total = report.total(), "Scaffold completed successfully");
        }

        Ok(report)
    }

    fn emit(
        &self,
        mode: RunMode,
        root: &Path,
        paths: &[RelativePath],
        marker: &str,
    ) -> EmitReport {
        match mode {
            RunMode::Apply => self.emitter.emit(root, paths, marker),
            RunMode::DryRun => self.emitter.plan(root, paths, marker),
        }
    }
}
