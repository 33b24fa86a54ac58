//! Package path locator.
//!
//! Finds the directory holding the native entry-point file so that backend
//! directories land next to it. Never fails: anything short of a match
//! resolves to the section's default package directory.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::ports::Filesystem,
    domain::{BackendSection, FallbackReason, Location},
};

pub struct LocateService {
    filesystem: Arc<dyn Filesystem>,
}

impl LocateService {
    pub fn new(filesystem: Arc<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// First directory under `root` whose listing contains `anchor_file`.
    ///
    /// `None` when `root` is missing or nothing matches. With several
    /// matches the winner is whichever the traversal reaches first.
    #[instrument(skip(self, root), fields(root = %root.display()))]
    pub fn locate(&self, root: &Path, anchor_file: &str) -> Option<PathBuf> {
        if !self.filesystem.is_dir(root) {
            debug!("Search root does not exist");
            return None;
        }

        match self.filesystem.find_dir_containing(root, anchor_file) {
            Ok(found) => found,
            Err(e) => {
                warn!(error = %e, "Anchor search failed");
                None
            }
        }
    }

    /// Resolve the backend base directory, falling back to the default
    /// package path when the anchor cannot be found.
    pub fn resolve(&self, section: &BackendSection, base: &Path) -> Location {
        let root = base.join(&section.root);

        let reason = if self.filesystem.is_dir(&root) {
            if let Some(path) = self.locate(&root, &section.anchor_file) {
                info!(path = %path.display(), anchor = %section.anchor_file, "Package directory discovered");
                return Location::Discovered { path };
            }
            FallbackReason::AnchorNotFound
        } else {
            FallbackReason::RootMissing
        };

        let path = section.default_package_dir(base);
        info!(
            anchor = %section.anchor_file,
            fallback = %path.display(),
            %reason,
            "Using default package directory"
        );
        Location::Fallback { path, reason }
    }
}
