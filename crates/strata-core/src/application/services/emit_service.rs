//! Directory emitter.
//!
//! Materialises an ordered list of relative directories under a root and
//! drops one empty marker file into each. Every item gets its own outcome;
//! a failure on one path never stops the rest of the batch.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, instrument, warn};

use crate::{
    application::ports::Filesystem,
    domain::{EmitOutcome, EmitReport, EmitStatus, RelativePath},
    error::StrataResult,
};

/// Ensures declared directories exist and carry a marker file.
pub struct EmitService {
    filesystem: Arc<dyn Filesystem>,
}

impl EmitService {
    pub fn new(filesystem: Arc<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Create every `root/path` directory and its marker.
    ///
    /// Existing directories and markers are left as they are, so running
    /// this twice is harmless.
    #[instrument(skip_all, fields(root = %root.display(), count = paths.len()))]
    pub fn emit(&self, root: &Path, paths: &[RelativePath], marker: &str) -> EmitReport {
        let mut report = EmitReport::new(root);

        for rel in paths {
            let dir = root.join(rel);
            let status = match self.emit_one(&dir, marker) {
                Ok(status) => {
                    debug!(path = %dir.display(), ?status, "Directory emitted");
                    status
                }
                Err(e) => {
                    warn!(path = %dir.display(), error = %e, "Failed to emit directory");
                    EmitStatus::Failed {
                        reason: e.to_string(),
                    }
                }
            };
            report.push(EmitOutcome::new(dir, status));
        }

        report
    }

    /// Dry-run counterpart of [`Self::emit`]: reports what would change
    /// without touching the filesystem.
    #[instrument(skip_all, fields(root = %root.display(), count = paths.len()))]
    pub fn plan(&self, root: &Path, paths: &[RelativePath], marker: &str) -> EmitReport {
        let mut report = EmitReport::new(root);

        for rel in paths {
            let dir = root.join(rel);
            let status = if self.filesystem.is_dir(&dir) && self.filesystem.exists(&dir.join(marker))
            {
                EmitStatus::AlreadyPresent
            } else {
                EmitStatus::Planned
            };
            report.push(EmitOutcome::new(dir, status));
        }

        report
    }

    fn emit_one(&self, dir: &Path, marker: &str) -> StrataResult<EmitStatus> {
        let existed = self.filesystem.is_dir(dir);
        self.filesystem.create_dir_all(dir)?;
        let created = self.filesystem.create_marker(&dir.join(marker))?;

        Ok(match (existed, created) {
            (false, _) => EmitStatus::Created,
            (true, true) => EmitStatus::MarkerAdded,
            (true, false) => EmitStatus::AlreadyPresent,
        })
    }
}
