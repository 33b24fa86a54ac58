//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only ever sees the [`Blueprint`]
//! it carries.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `STRATA_` prefix, `__` between nested keys,
//!    e.g. `STRATA_BLUEPRINT__MARKER=.keep`
//! 3. Config file: `--config FILE`, else `./strata.toml`, else the per-user
//!    file, whichever exists first
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};
use tracing::debug;

use strata_core::domain::Blueprint;

/// File name of the project-local configuration.
pub const LOCAL_CONFIG_FILE: &str = "strata.toml";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Output settings.
    pub output: OutputConfig,
    /// Directory lists, roots and marker name.
    pub blueprint: Blueprint,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`; `--output-format` wins when given.
    pub format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output: OutputConfig {
                no_color: false,
                format: "auto".into(),
            },
            blueprint: strata_adapters::builtin_blueprint(),
        }
    }
}

impl AppConfig {
    /// Load configuration, layering file and environment over the defaults.
    ///
    /// `config_file` is the path the user passed via `--config`; it must
    /// exist. Without it the first existing default location is used, if any.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let defaults = config::Config::try_from(&Self::default())
            .context("Failed to build default configuration")?;

        let mut builder = config::Config::builder().add_source(defaults);

        if let Some(path) = Self::resolve_file(config_file)? {
            debug!(path = %path.display(), "Loading configuration file");
            builder = builder.add_source(config::File::from(path).required(true));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("STRATA")
                .prefix_separator("_")
                .separator("__"),
        );

        let cfg: Self = builder
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")?;

        Ok(cfg)
    }

    /// The file that [`Self::load`] would read, if any.
    pub fn active_path(config_file: Option<&PathBuf>) -> Option<PathBuf> {
        Self::resolve_file(config_file).ok().flatten()
    }

    fn resolve_file(config_file: Option<&PathBuf>) -> anyhow::Result<Option<PathBuf>> {
        if let Some(path) = config_file {
            if !path.is_file() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            return Ok(Some(path.clone()));
        }

        Ok([Self::local_path(), Self::config_path()]
            .into_iter()
            .find(|p| p.is_file()))
    }

    /// Project-local configuration file (`./strata.toml`).
    pub fn local_path() -> PathBuf {
        PathBuf::from(LOCAL_CONFIG_FILE)
    }

    /// Path to the per-user configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.strata.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "strata", "strata")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".strata.toml"))
    }

    /// Serialise to the TOML written by `strata init`.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Apply per-invocation root overrides.
    pub fn with_roots(
        mut self,
        frontend_root: Option<&Path>,
        backend_root: Option<&Path>,
        anchor: Option<&str>,
    ) -> Self {
        if let Some(root) = frontend_root {
            self.blueprint.frontend.root = root.to_path_buf();
        }
        if let Some(root) = backend_root {
            self.blueprint.backend.root = root.to_path_buf();
        }
        if let Some(anchor) = anchor {
            self.blueprint.backend.anchor_file = anchor.to_string();
        }
        self
    }
}
