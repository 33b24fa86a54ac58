//! `strata generate`: create every declared directory with its marker.
//!
//! Also runs when `strata` is invoked without a subcommand.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use strata_adapters::LocalFilesystem;
use strata_core::{
    application::ScaffoldService,
    domain::{EmitReport, EmitStatus, Location, ScaffoldReport},
};

use crate::{
    cli::GenerateArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `strata generate` command.
///
/// Per-item failures do not stop the run. They are reported, then turned
/// into [`CliError::PartialFailure`] unless `--allow-failures` was given.
#[instrument(skip_all, fields(dry_run = args.dry_run))]
pub fn execute(args: GenerateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let (blueprint, base) = super::prepare(&args.roots, config);
    debug!(
        base = %base.display(),
        frontend = %blueprint.frontend.root.display(),
        backend = %blueprint.backend.root.display(),
        "Blueprint resolved"
    );

    let service = ScaffoldService::new(Arc::new(LocalFilesystem::new()));
    let report = if args.dry_run {
        service.preview(&blueprint, &base)?
    } else {
        service.run(&blueprint, &base)?
    };

    if output.is_json() {
        output.json(&report)?;
    } else {
        render(&report, &blueprint.backend.anchor_file, &output)?;
    }

    info!(
        created = report.created_count(),
        failed = report.failed_count(),
        "Generate finished"
    );

    if report.has_failures() && !args.allow_failures {
        return Err(CliError::PartialFailure {
            failed: report.failed_count(),
            total: report.total(),
        });
    }

    Ok(())
}

fn render(report: &ScaffoldReport, anchor: &str, output: &OutputManager) -> CliResult<()> {
    if report.dry_run {
        output.info("Dry run: nothing will be written")?;
    }

    output.header(&format!("Frontend ({})", report.frontend.root.display()))?;
    render_section(&report.frontend, output)?;

    output.print("")?;
    match &report.location {
        Location::Discovered { path } => {
            output.info(&format!("Found {anchor} in {}", path.display()))?;
        }
        Location::Fallback { path, reason } => {
            output.warning(&format!(
                "{anchor} not located ({reason}); using default {}",
                path.display()
            ))?;
        }
    }
    output.header(&format!("Backend ({})", report.backend.root.display()))?;
    render_section(&report.backend, output)?;

    output.print("")?;
    let summary = summary_line(report);
    if report.has_failures() {
        output.error(&summary)?;
    } else {
        output.success(&summary)?;
    }

    Ok(())
}

fn render_section(section: &EmitReport, output: &OutputManager) -> CliResult<()> {
    for outcome in &section.outcomes {
        let path = outcome.path.display();
        match &outcome.status {
            EmitStatus::Created => output.success(&format!("Created {path}"))?,
            EmitStatus::MarkerAdded => output.success(&format!("Added marker to {path}"))?,
            EmitStatus::AlreadyPresent => output.print(&format!("  Exists {path}"))?,
            EmitStatus::Planned => output.info(&format!("Would create {path}"))?,
            EmitStatus::Failed { reason } => output.error(&format!("{path}: {reason}"))?,
        }
    }
    Ok(())
}

fn summary_line(report: &ScaffoldReport) -> String {
    if report.dry_run {
        return format!(
            "{} of {} directories would be created",
            report.planned_count(),
            report.total()
        );
    }

    let mut line = format!(
        "{} created, {} already present",
        report.created_count(),
        report.unchanged_count()
    );
    if report.has_failures() {
        line.push_str(&format!(", {} failed", report.failed_count()));
    }
    line
}
