//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
///
/// Running `strata` without a subcommand is the same as `strata generate`.
#[derive(Debug, Parser)]
#[command(
    name    = "strata",
    bin_name = "strata",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f9f1} Layered mobile project skeleton generator",
    long_about = "Strata creates the empty directory skeleton of a layered \
                  Flutter + native Android project: UI folders under lib/, \
                  domain/data/native folders next to MainActivity.kt. Every \
                  folder gets an empty .gitkeep so version control keeps it.",
    after_help = "EXAMPLES:\n\
        \x20 strata                      # generate in the current directory\n\
        \x20 strata --dry-run            # show what would be created\n\
        \x20 strata generate -C ./my_app\n\
        \x20 strata locate\n\
        \x20 strata list --section backend\n\
        \x20 strata completions bash > /usr/share/bash-completion/completions/strata",
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Arguments for the implicit `generate`; ignored when a subcommand is given.
    #[command(flatten)]
    pub generate: GenerateArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create the directory skeleton.
    #[command(
        visible_alias = "gen",
        about = "Create the directory skeleton (default)",
        after_help = "EXAMPLES:\n\
            \x20 strata generate\n\
            \x20 strata generate --dir ../my_app --dry-run\n\
            \x20 strata generate --backend-root android/app/src/main/java"
    )]
    Generate(GenerateArgs),

    /// Report where backend directories would be placed.
    #[command(
        about = "Locate the native package directory",
        after_help = "EXAMPLES:\n\
            \x20 strata locate\n\
            \x20 strata locate --anchor MainApplication.kt"
    )]
    Locate(LocateArgs),

    /// Print the declared directory lists.
    #[command(
        visible_alias = "ls",
        about = "List declared directories",
        after_help = "EXAMPLES:\n\
            \x20 strata list\n\
            \x20 strata list --section frontend --format list"
    )]
    List(ListArgs),

    /// Write a configuration file holding the built-in blueprint.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 strata init           # ./strata.toml\n\
            \x20 strata init --global  # per-user config"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 strata completions bash > ~/.local/share/bash-completion/completions/strata\n\
            \x20 strata completions zsh  > ~/.zfunc/_strata\n\
            \x20 strata completions fish > ~/.config/fish/completions/strata.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the active configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 strata config get blueprint.marker\n\
            \x20 strata config list\n\
            \x20 strata config path"
    )]
    Config(ConfigCommands),
}

// ── shared ────────────────────────────────────────────────────────────────────

/// Where to run, and per-invocation overrides of the configured roots.
#[derive(Debug, Clone, Default, Args)]
pub struct RootArgs {
    /// Project directory the roots are resolved against.
    #[arg(
        short = 'C',
        long = "dir",
        value_name = "DIR",
        help = "Project directory (default: current directory)"
    )]
    pub dir: Option<PathBuf>,

    /// Override the frontend root (default `lib`).
    #[arg(long = "frontend-root", value_name = "PATH", help = "Frontend root")]
    pub frontend_root: Option<PathBuf>,

    /// Override the backend search root (default `android/app/src/main/kotlin`).
    #[arg(long = "backend-root", value_name = "PATH", help = "Backend search root")]
    pub backend_root: Option<PathBuf>,

    /// Override the entry-point file name (default `MainActivity.kt`).
    #[arg(long = "anchor", value_name = "FILE", help = "Entry-point file to search for")]
    pub anchor: Option<String>,
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `strata generate`.
#[derive(Debug, Clone, Default, Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub roots: RootArgs,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,

    /// Exit 0 even when some directories could not be created.
    #[arg(
        long = "allow-failures",
        help = "Exit successfully even if some directories failed"
    )]
    pub allow_failures: bool,
}

// ── locate ────────────────────────────────────────────────────────────────────

/// Arguments for `strata locate`.
#[derive(Debug, Args)]
pub struct LocateArgs {
    #[command(flatten)]
    pub roots: RootArgs,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `strata list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Which section to print.
    #[arg(
        short = 's',
        long = "section",
        value_enum,
        default_value = "all",
        help = "Section to list"
    )]
    pub section: SectionFilter,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SectionFilter {
    Frontend,
    Backend,
    All,
}

impl SectionFilter {
    pub fn frontend(self) -> bool {
        matches!(self, Self::Frontend | Self::All)
    }

    pub fn backend(self) -> bool {
        matches!(self, Self::Backend | Self::All)
    }
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One relative path per line.
    List,
    /// JSON object.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `strata init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to the per-user config location instead of `./strata.toml`.
    #[arg(long = "global", help = "Create global configuration")]
    pub global: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `strata completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `strata config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `blueprint.backend.anchor_file`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
