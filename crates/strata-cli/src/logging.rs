//! Tracing subscriber for the `strata` binary.
//!
//! `RUST_LOG` wins when set. Otherwise `-q`/`-v` choose one level for the
//! three workspace crates and every other target stays silent. Events go to
//! stderr; stdout carries only the report.

use std::io::{self, IsTerminal as _};

use anyhow::Context as _;
use tracing_subscriber::{EnvFilter, filter::LevelFilter, fmt, prelude::*};

use crate::cli::GlobalArgs;

const TARGETS: [&str; 3] = ["strata", "strata_core", "strata_adapters"];

/// Install the global subscriber. Call once, before any events fire.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| workspace_filter(args.log_level()));

    let stderr = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(!args.no_color && io::stderr().is_terminal())
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr)
        .try_init()
        .context("Failed to install the tracing subscriber")
}

fn workspace_filter(level: LevelFilter) -> EnvFilter {
    let directives: Vec<String> = TARGETS.iter().map(|t| format!("{t}={level}")).collect();
    EnvFilter::new(directives.join(","))
}
