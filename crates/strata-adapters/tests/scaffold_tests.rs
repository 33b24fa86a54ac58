//! End-to-end scaffold runs against the in-memory and local adapters.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use strata_adapters::{
    LocalFilesystem, MemoryFilesystem, builtin_blueprint,
    builtin_blueprint::{ANCHOR_FILE, BACKEND_DIRS, BACKEND_ROOT, DEFAULT_PACKAGE, FRONTEND_DIRS},
};
use strata_core::prelude::*;
use tempfile::TempDir;

fn local_service() -> ScaffoldService {
    ScaffoldService::new(Arc::new(LocalFilesystem::new()))
}

fn assert_empty_marker(dir: &Path) {
    let marker = dir.join(".gitkeep");
    let meta = fs::metadata(&marker)
        .unwrap_or_else(|e| panic!("missing marker {}: {e}", marker.display()));
    assert!(meta.is_file());
    assert_eq!(meta.len(), 0, "marker {} is not empty", marker.display());
}

// ── real disk ────────────────────────────────────────────────────────────────

#[test]
fn fresh_tree_gets_every_frontend_directory() {
    let tmp = TempDir::new().unwrap();
    let report = local_service().run(&builtin_blueprint(), tmp.path()).unwrap();

    assert!(!report.has_failures());
    for rel in FRONTEND_DIRS {
        assert_empty_marker(&tmp.path().join("lib").join(rel));
    }
}

#[test]
fn missing_lib_scenario() {
    let tmp = TempDir::new().unwrap();
    assert!(!tmp.path().join("lib").exists());

    local_service().run(&builtin_blueprint(), tmp.path()).unwrap();

    for rel in [
        "lib/core/native_bridge",
        "lib/features/triage/presentation/bloc",
        "lib/features/settings/presentation/pages",
    ] {
        assert_empty_marker(&tmp.path().join(rel));
    }
}

#[test]
fn backend_uses_default_package_when_anchor_missing() {
    let tmp = TempDir::new().unwrap();
    let report = local_service().run(&builtin_blueprint(), tmp.path()).unwrap();

    let expected = tmp.path().join(BACKEND_ROOT).join(DEFAULT_PACKAGE);
    assert_eq!(
        report.location,
        Location::Fallback {
            path: expected.clone(),
            reason: FallbackReason::RootMissing,
        }
    );
    for rel in BACKEND_DIRS {
        assert_empty_marker(&expected.join(rel));
    }
}

#[test]
fn backend_follows_discovered_anchor() {
    let tmp = TempDir::new().unwrap();
    let pkg = tmp.path().join(BACKEND_ROOT).join("com/acme/photos");
    fs::create_dir_all(&pkg).unwrap();
    fs::write(pkg.join(ANCHOR_FILE), "class MainActivity").unwrap();

    let report = local_service().run(&builtin_blueprint(), tmp.path()).unwrap();

    assert_eq!(report.location, Location::Discovered { path: pkg.clone() });
    for rel in BACKEND_DIRS {
        assert_empty_marker(&pkg.join(rel));
    }
    assert!(!tmp.path().join(BACKEND_ROOT).join(DEFAULT_PACKAGE).exists());
}

#[test]
fn anchor_absent_under_existing_root_falls_back() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir_all(tmp.path().join(BACKEND_ROOT).join("com/other")).unwrap();

    let report = local_service().run(&builtin_blueprint(), tmp.path()).unwrap();

    assert!(matches!(
        report.location,
        Location::Fallback {
            reason: FallbackReason::AnchorNotFound,
            ..
        }
    ));
}

#[test]
fn second_run_is_idempotent() {
    let tmp = TempDir::new().unwrap();
    let service = local_service();
    let blueprint = builtin_blueprint();

    let first = service.run(&blueprint, tmp.path()).unwrap();
    assert_eq!(first.created_count(), blueprint.path_count());

    // A marker someone wrote into must survive a re-run untouched.
    let noted = tmp.path().join("lib/core/di/.gitkeep");
    fs::write(&noted, "keep").unwrap();

    let second = service.run(&blueprint, tmp.path()).unwrap();
    assert!(!second.has_failures());
    assert_eq!(second.unchanged_count(), blueprint.path_count());
    assert_eq!(second.created_count(), 0);
    assert_eq!(fs::read_to_string(&noted).unwrap(), "keep");
}

#[test]
fn file_in_the_way_fails_only_that_item() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir_all(tmp.path().join("lib/core")).unwrap();
    fs::write(tmp.path().join("lib/core/di"), "not a directory").unwrap();

    let report = local_service().run(&builtin_blueprint(), tmp.path()).unwrap();

    assert_eq!(report.failed_count(), 1);
    let failed: Vec<_> = report
        .frontend
        .outcomes
        .iter()
        .filter(|o| o.status.is_failure())
        .map(|o| o.path.clone())
        .collect();
    assert_eq!(failed, vec![tmp.path().join("lib/core/di")]);

    assert_empty_marker(&tmp.path().join("lib/core/native_bridge"));
    assert_empty_marker(&tmp.path().join("lib/core/theme"));
    assert_eq!(report.backend.len(), BACKEND_DIRS.len());
    assert!(report.backend.is_success());
}

#[test]
fn dry_run_writes_nothing() {
    let tmp = TempDir::new().unwrap();
    let report = local_service()
        .preview(&builtin_blueprint(), tmp.path())
        .unwrap();

    assert!(report.dry_run);
    assert_eq!(report.planned_count(), builtin_blueprint().path_count());
    assert!(!tmp.path().join("lib").exists());
    assert!(!tmp.path().join("android").exists());
}

// ── in memory ────────────────────────────────────────────────────────────────

#[test]
fn memory_run_creates_markers_for_every_path() {
    let fs_mem = MemoryFilesystem::new();
    let service = ScaffoldService::new(Arc::new(fs_mem.clone()));

    let report = service.run(&builtin_blueprint(), Path::new("")).unwrap();

    assert_eq!(report.total(), FRONTEND_DIRS.len() + BACKEND_DIRS.len());
    assert_eq!(fs_mem.list_files().len(), report.total());
    assert_eq!(
        fs_mem.read_file(Path::new("lib/core/native_bridge/.gitkeep")).as_deref(),
        Some("")
    );
}

#[test]
fn memory_locator_finds_single_anchor() {
    let fs_mem = MemoryFilesystem::new();
    fs_mem.add_file(format!("{BACKEND_ROOT}/io/triage/app/{ANCHOR_FILE}"), "");
    fs_mem.add_dir(format!("{BACKEND_ROOT}/io/unrelated"));

    let locator = LocateService::new(Arc::new(fs_mem));
    assert_eq!(
        locator.locate(Path::new(BACKEND_ROOT), ANCHOR_FILE),
        Some(PathBuf::from(BACKEND_ROOT).join("io/triage/app"))
    );
}

#[test]
fn memory_custom_marker_name() {
    let fs_mem = MemoryFilesystem::new();
    let blueprint = builtin_blueprint().with_marker(".keep");

    ScaffoldService::new(Arc::new(fs_mem.clone()))
        .run(&blueprint, Path::new("app"))
        .unwrap();

    assert!(fs_mem.is_file(Path::new("app/lib/core/di/.keep")));
    assert!(!fs_mem.is_file(Path::new("app/lib/core/di/.gitkeep")));
}
