//! `strata locate`: report where backend directories would go.

use std::sync::Arc;

use serde::Serialize;
use tracing::instrument;

use strata_adapters::LocalFilesystem;
use strata_core::{
    application::LocateService,
    domain::{DomainValidator, Location},
    error::StrataError,
};

use crate::{cli::LocateArgs, config::AppConfig, error::CliResult, output::OutputManager};

#[derive(Serialize)]
struct LocateOutput<'a> {
    anchor: &'a str,
    #[serde(flatten)]
    location: &'a Location,
}

/// Execute the `strata locate` command. Read-only; a fallback is not an error.
#[instrument(skip_all)]
pub fn execute(args: LocateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let (blueprint, base) = super::prepare(&args.roots, config);
    DomainValidator::validate_blueprint(&blueprint).map_err(StrataError::Domain)?;
    let anchor = blueprint.backend.anchor_file.as_str();

    let locator = LocateService::new(Arc::new(LocalFilesystem::new()));
    let location = locator.resolve(&blueprint.backend, &base);

    if output.is_json() {
        output.json(&LocateOutput {
            anchor,
            location: &location,
        })?;
        return Ok(());
    }

    match &location {
        Location::Discovered { path } => {
            output.success(&format!("{anchor} found in {}", path.display()))?;
        }
        Location::Fallback { path, reason } => {
            output.warning(&format!("{anchor} not located ({reason})"))?;
            output.info(&format!("Default package directory: {}", path.display()))?;
        }
    }

    Ok(())
}
