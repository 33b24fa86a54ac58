//! Implementation of the `strata list` command.

use serde_json::json;

use strata_core::domain::{Blueprint, RelativePath};

use crate::{
    cli::{ListArgs, ListFormat, SectionFilter},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ListArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let blueprint = &config.blueprint;

    // The global --output-format json wins over --format.
    let format = if output.is_json() {
        ListFormat::Json
    } else {
        args.format
    };

    match format {
        ListFormat::Table => {
            if args.section.frontend() {
                output.header(&format!(
                    "Frontend (under {}):",
                    blueprint.frontend.root.display()
                ))?;
                print_paths(&blueprint.frontend.paths, &output)?;
            }
            if args.section.frontend() && args.section.backend() {
                output.print("")?;
            }
            if args.section.backend() {
                let backend = &blueprint.backend;
                output.header(&format!(
                    "Backend (next to {} under {}, default {}):",
                    backend.anchor_file,
                    backend.root.display(),
                    backend.default_package
                ))?;
                print_paths(&backend.paths, &output)?;
            }
        }

        ListFormat::List => {
            for path in selected(blueprint, args.section) {
                output.print(path.as_str())?;
            }
        }

        ListFormat::Json => {
            output.json(&to_json(blueprint, args.section))?;
        }
    }

    Ok(())
}

fn print_paths(paths: &[RelativePath], output: &OutputManager) -> CliResult<()> {
    for path in paths {
        output.print(&format!("  {path}"))?;
    }
    Ok(())
}

fn selected(blueprint: &Blueprint, filter: SectionFilter) -> impl Iterator<Item = &RelativePath> {
    let frontend = filter
        .frontend()
        .then_some(&blueprint.frontend.paths)
        .into_iter()
        .flatten();
    let backend = filter
        .backend()
        .then_some(&blueprint.backend.paths)
        .into_iter()
        .flatten();
    frontend.chain(backend)
}

fn to_json(blueprint: &Blueprint, filter: SectionFilter) -> serde_json::Value {
    let mut value = json!({ "marker": blueprint.marker });
    if filter.frontend() {
        value["frontend"] = json!(blueprint.frontend);
    }
    if filter.backend() {
        value["backend"] = json!(blueprint.backend);
    }
    value
}
