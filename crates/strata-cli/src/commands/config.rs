//! `strata config`: inspect the merged configuration.

use strata_core::domain::RelativePath;

use crate::{
    cli::{ConfigCommands, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Keys accepted by `strata config get`.
pub const KEYS: &[&str] = &[
    "blueprint.marker",
    "blueprint.frontend.root",
    "blueprint.frontend.paths",
    "blueprint.backend.root",
    "blueprint.backend.anchor_file",
    "blueprint.backend.default_package",
    "blueprint.backend.paths",
    "output.no_color",
    "output.format",
];

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            output.print(&get_config_value(&config, &key)?)?;
        }

        ConfigCommands::List => {
            if output.is_json() {
                output.json(&config)?;
                return Ok(());
            }
            output.header("Current Configuration:")?;
            let serialised = config.to_toml().map_err(|e| CliError::ConfigError {
                message: format!("Failed to serialise config: {e}"),
                source: Some(Box::new(e)),
            })?;
            output.print(serialised.trim_end())?;
        }

        ConfigCommands::Path => match AppConfig::active_path(global.config.as_ref()) {
            Some(path) => output.print(&path.display().to_string())?,
            None => {
                output.print(&AppConfig::local_path().display().to_string())?;
                output.info("No configuration file found; built-in defaults are in use")?;
            }
        },
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    let blueprint = &config.blueprint;

    match key {
        "blueprint.marker" => Ok(blueprint.marker.clone()),
        "blueprint.frontend.root" => Ok(blueprint.frontend.root.display().to_string()),
        "blueprint.frontend.paths" => Ok(join(&blueprint.frontend.paths)),
        "blueprint.backend.root" => Ok(blueprint.backend.root.display().to_string()),
        "blueprint.backend.anchor_file" => Ok(blueprint.backend.anchor_file.clone()),
        "blueprint.backend.default_package" => Ok(blueprint.backend.default_package.to_string()),
        "blueprint.backend.paths" => Ok(join(&blueprint.backend.paths)),
        "output.no_color" => Ok(config.output.no_color.to_string()),
        "output.format" => Ok(config.output.format.clone()),
        _ => Err(CliError::UnknownConfigKey { key: key.into() }),
    }
}

fn join(paths: &[RelativePath]) -> String {
    paths
        .iter()
        .map(RelativePath::as_str)
        .collect::<Vec<_>>()
        .join("\n")
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_known_key() {
        let cfg = AppConfig::default();
        assert_eq!(
            get_config_value(&cfg, "blueprint.backend.anchor_file").unwrap(),
            "MainActivity.kt"
        );
        assert_eq!(
            get_config_value(&cfg, "blueprint.backend.default_package").unwrap(),
            "com/triage/triage_gallery"
        );
    }

    #[test]
    fn every_listed_key_resolves() {
        let cfg = AppConfig::default();
        for key in KEYS {
            assert!(get_config_value(&cfg, key).is_ok(), "{key} did not resolve");
        }
    }

    #[test]
    fn path_lists_are_one_per_line() {
        let cfg = AppConfig::default();
        let frontend = get_config_value(&cfg, "blueprint.frontend.paths").unwrap();
        assert_eq!(frontend.lines().count(), 10);
        assert_eq!(frontend.lines().next(), Some("core/native_bridge"));
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "does.not.exist"),
            Err(CliError::UnknownConfigKey { .. })
        ));
    }

    #[test]
    fn get_no_color_default() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "output.no_color").unwrap(), "false");
    }
}
