//! Built-in blueprint.
//!
//! This module provides [`builtin_blueprint`], the skeleton that ships with
//! Strata: a Flutter `lib/` UI tree plus an Android Kotlin tree for the
//! domain, data and native layers.
//!
//! # Frontend (`lib/`)
//!
//! UI only: a `core/` bridge to the native side plus `presentation/` folders
//! (pages, widgets, bloc) per feature.
//!
//! # Backend (`android/app/src/main/kotlin/<package>/`)
//!
//! The package directory is wherever `MainActivity.kt` lives. When it cannot
//! be found, `com/triage/triage_gallery` is assumed.
//!
//! A `strata.toml` written by `strata init` starts from exactly this data.

use strata_core::domain::{BackendSection, Blueprint, Section};

pub const FRONTEND_ROOT: &str = "lib";

pub const FRONTEND_DIRS: &[&str] = &[
    // Native bridge and app-wide plumbing
    "core/native_bridge",
    "core/di",
    "core/theme",
    // Features: presentation only
    "features/triage/presentation/pages",
    "features/triage/presentation/widgets",
    "features/triage/presentation/bloc",
    "features/gallery/presentation/pages",
    "features/gallery/presentation/widgets",
    "features/gallery/presentation/bloc",
    "features/settings/presentation/pages",
];

pub const BACKEND_ROOT: &str = "android/app/src/main/kotlin";

pub const ANCHOR_FILE: &str = "MainActivity.kt";

pub const DEFAULT_PACKAGE: &str = "com/triage/triage_gallery";

pub const BACKEND_DIRS: &[&str] = &[
    // Domain: pure models and repository contracts
    "domain/models",
    "domain/repository",
    // Data: Room database
    "data/local/db/entities",
    "data/local/db/dao",
    // Data: files and on-device inference
    "data/local/files",
    "data/ai",
    // Data: repository implementations
    "data/repository",
    "core/extensions",
    "core/utils",
];

/// The skeleton Strata generates when no configuration overrides it.
pub fn builtin_blueprint() -> Blueprint {
    Blueprint::new(
        Section::new("frontend", FRONTEND_ROOT).with_paths(FRONTEND_DIRS.iter().copied()),
        BackendSection::new("backend", BACKEND_ROOT, ANCHOR_FILE, DEFAULT_PACKAGE)
            .with_paths(BACKEND_DIRS.iter().copied()),
    )
}
