//! Integration tests for the `strata` binary.

use std::fs;
use std::path::Path;

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

const PACKAGE_DIR: &str = "android/app/src/main/kotlin/com/triage/triage_gallery";

fn strata(dir: &Path) -> assert_cmd::Command {
    let mut cmd = cargo::cargo_bin_cmd!("strata");
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

fn is_empty_marker(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_file() && m.len() == 0).unwrap_or(false)
}

// ── help / version ───────────────────────────────────────────────────────────

#[test]
fn help_lists_subcommands() {
    let tmp = TempDir::new().unwrap();
    strata(tmp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("locate"))
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn version_flag() {
    let tmp = TempDir::new().unwrap();
    strata(tmp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// ── generate ─────────────────────────────────────────────────────────────────

#[test]
fn bare_run_generates_both_trees() {
    let tmp = TempDir::new().unwrap();

    strata(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Created lib/core/native_bridge"))
        .stdout(predicate::str::contains("⚠ MainActivity.kt not located"))
        .stdout(predicate::str::contains(PACKAGE_DIR))
        .stdout(predicate::str::contains("19 created, 0 already present"))
        .stderr(predicate::str::contains("WARN").not());

    assert!(is_empty_marker(&tmp.path().join("lib/core/native_bridge/.gitkeep")));
    assert!(is_empty_marker(
        &tmp.path().join("lib/features/settings/presentation/pages/.gitkeep")
    ));
    assert!(is_empty_marker(
        &tmp.path().join(PACKAGE_DIR).join("core/utils/.gitkeep")
    ));
}

#[test]
fn second_run_changes_nothing() {
    let tmp = TempDir::new().unwrap();
    strata(tmp.path()).assert().success();

    strata(tmp.path())
        .arg("generate")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 created, 19 already present"));
}

#[test]
fn discovered_anchor_is_used() {
    let tmp = TempDir::new().unwrap();
    let pkg = tmp.path().join("android/app/src/main/kotlin/com/acme/gallery");
    fs::create_dir_all(&pkg).unwrap();
    fs::write(pkg.join("MainActivity.kt"), "class MainActivity").unwrap();

    strata(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Found MainActivity.kt"))
        .stdout(predicate::str::contains("⚠").not());

    assert!(is_empty_marker(&pkg.join("domain/models/.gitkeep")));
    assert!(!tmp.path().join(PACKAGE_DIR).exists());
}

#[test]
fn dir_flag_targets_another_directory() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join("app")).unwrap();

    strata(tmp.path()).args(["generate", "-C", "app"]).assert().success();

    assert!(is_empty_marker(&tmp.path().join("app/lib/core/di/.gitkeep")));
    assert!(!tmp.path().join("lib").exists());
}

#[test]
fn dry_run_writes_nothing() {
    let tmp = TempDir::new().unwrap();

    strata(tmp.path())
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("Would create lib/core/di"))
        .stdout(predicate::str::contains("19 of 19 directories would be created"));

    assert!(!tmp.path().join("lib").exists());
    assert!(!tmp.path().join("android").exists());
}

#[test]
fn blocked_directory_fails_the_run_but_not_the_batch() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir_all(tmp.path().join("lib/core")).unwrap();
    fs::write(tmp.path().join("lib/core/di"), "in the way").unwrap();

    strata(tmp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("✗ lib/core/di"))
        .stdout(predicate::str::contains("18 created, 0 already present, 1 failed"))
        .stderr(predicate::str::contains("1 of 19 directories could not be created"));

    assert!(is_empty_marker(&tmp.path().join("lib/core/theme/.gitkeep")));
    assert!(is_empty_marker(&tmp.path().join(PACKAGE_DIR).join("domain/models/.gitkeep")));
}

#[test]
fn allow_failures_exits_zero() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir_all(tmp.path().join("lib/core")).unwrap();
    fs::write(tmp.path().join("lib/core/di"), "in the way").unwrap();

    strata(tmp.path())
        .arg("--allow-failures")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 failed"));
}

#[test]
fn json_report() {
    let tmp = TempDir::new().unwrap();

    let out = strata(tmp.path())
        .args(["--output-format", "json", "generate"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(report["dry_run"], false);
    assert_eq!(report["location"]["kind"], "fallback");
    assert_eq!(report["location"]["reason"], "root_missing");
    assert_eq!(report["frontend"]["outcomes"][0]["path"], "lib/core/native_bridge");
    assert_eq!(report["frontend"]["outcomes"][0]["status"], "created");
}

// ── configuration ────────────────────────────────────────────────────────────

#[test]
fn project_config_changes_marker() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("strata.toml"), "[blueprint]\nmarker = \".keep\"\n").unwrap();

    strata(tmp.path()).assert().success();

    assert!(is_empty_marker(&tmp.path().join("lib/core/di/.keep")));
    assert!(!tmp.path().join("lib/core/di/.gitkeep").exists());
}

#[test]
fn env_overrides_anchor() {
    let tmp = TempDir::new().unwrap();
    let pkg = tmp.path().join("android/app/src/main/kotlin/io/acme");
    fs::create_dir_all(&pkg).unwrap();
    fs::write(pkg.join("MainApplication.kt"), "").unwrap();

    strata(tmp.path())
        .arg("locate")
        .env("STRATA_BLUEPRINT__BACKEND__ANCHOR_FILE", "MainApplication.kt")
        .assert()
        .success()
        .stdout(predicate::str::contains("MainApplication.kt found in"));
}

#[test]
fn missing_explicit_config_is_configuration_error() {
    let tmp = TempDir::new().unwrap();
    strata(tmp.path())
        .args(["--config", "nope.toml", "list"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn invalid_blueprint_is_configuration_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("strata.toml"),
        "[blueprint.frontend]\npaths = [\"core/di\", \"core/di\"]\n",
    )
    .unwrap();

    strata(tmp.path()).assert().code(4);
    assert!(!tmp.path().join("lib").exists());
}

#[test]
fn init_writes_loadable_config() {
    let tmp = TempDir::new().unwrap();

    strata(tmp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration created"));
    assert!(tmp.path().join("strata.toml").is_file());

    strata(tmp.path())
        .arg("init")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--force"));

    strata(tmp.path()).args(["init", "--force"]).assert().success();

    strata(tmp.path())
        .args(["config", "get", "blueprint.backend.default_package"])
        .assert()
        .success()
        .stdout("com/triage/triage_gallery\n");
}

#[test]
fn config_path_reports_project_file() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("strata.toml"), "").unwrap();

    strata(tmp.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("strata.toml"));
}

#[test]
fn unknown_config_key_is_user_error() {
    let tmp = TempDir::new().unwrap();
    strata(tmp.path())
        .args(["config", "get", "blueprint.colour"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("blueprint.marker"));
}

// ── list / locate / completions ──────────────────────────────────────────────

#[test]
fn list_frontend_as_lines() {
    let tmp = TempDir::new().unwrap();
    strata(tmp.path())
        .args(["list", "--section", "frontend", "--format", "list"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("core/native_bridge\ncore/di\n"))
        .stdout(predicate::str::contains("domain/models").not());
}

#[test]
fn list_json_has_both_sections() {
    let tmp = TempDir::new().unwrap();
    let out = strata(tmp.path())
        .args(["ls", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["frontend"]["paths"].as_array().unwrap().len(), 10);
    assert_eq!(value["backend"]["paths"].as_array().unwrap().len(), 9);
}

#[test]
fn locate_reports_fallback_without_writing() {
    let tmp = TempDir::new().unwrap();
    strata(tmp.path())
        .arg("locate")
        .assert()
        .success()
        .stdout(predicate::str::contains("search root does not exist"))
        .stdout(predicate::str::contains(PACKAGE_DIR))
        .stderr(predicate::str::contains("Using default package directory").not());

    assert!(!tmp.path().join("android").exists());
}

#[test]
fn locate_rejects_anchor_that_is_not_a_file_name() {
    let tmp = TempDir::new().unwrap();
    let kotlin = tmp.path().join("android/app/src/main/kotlin");
    fs::create_dir_all(kotlin.join("com/acme")).unwrap();
    fs::write(kotlin.join("com/acme/MainActivity.kt"), "").unwrap();

    strata(tmp.path())
        .args(["locate", "--anchor", "com/acme/MainActivity.kt"])
        .assert()
        .code(4)
        .stdout(predicate::str::contains("found in").not());

    strata(tmp.path())
        .args(["locate", "--anchor", "a/b"])
        .assert()
        .code(4);

    strata(tmp.path())
        .args(["locate", "--anchor", ""])
        .assert()
        .code(4);
}

#[test]
fn completions_use_binary_name() {
    let tmp = TempDir::new().unwrap();
    strata(tmp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("strata"));
}
