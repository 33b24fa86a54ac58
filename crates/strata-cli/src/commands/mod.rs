//! One module per subcommand. Handlers translate arguments, call the core
//! services and render the result; no business logic lives here.

use std::path::PathBuf;

use strata_core::domain::Blueprint;

use crate::{cli::RootArgs, config::AppConfig};

pub mod completions;
pub mod config;
pub mod generate;
pub mod init;
pub mod list;
pub mod locate;

/// Apply root overrides to the configured blueprint and pick the base dir.
///
/// An absent `--dir` yields an empty base so reported paths stay relative
/// (`lib/core/di` rather than `./lib/core/di`).
pub(crate) fn prepare(roots: &RootArgs, config: AppConfig) -> (Blueprint, PathBuf) {
    let config = config.with_roots(
        roots.frontend_root.as_deref(),
        roots.backend_root.as_deref(),
        roots.anchor.as_deref(),
    );
    (config.blueprint, roots.dir.clone().unwrap_or_default())
}
