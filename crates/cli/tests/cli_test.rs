//! End-to-end tests for the multijust binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const JUSTFILE: &str = "build: deps\n    echo hi\n.hidden: ; echo secret\ntest:\n";

fn project_with_justfile(contents: &str) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("justfile"), contents).unwrap();
    temp_dir
}

fn multijust(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("multijust").unwrap();
    cmd.arg("--cwd").arg(dir.path()).env_remove("MULTIJUST_CACHE_DIR");
    cmd
}

#[test]
fn test_list_prints_labels_in_file_order() {
    let project = project_with_justfile(JUSTFILE);

    multijust(&project)
        .args(["--no-persist", "list"])
        .assert()
        .success()
        .stdout("just:build\njust:test\n");
}

#[test]
fn test_list_with_project_type_prefix() {
    let project = project_with_justfile(JUSTFILE);

    multijust(&project)
        .args(["--no-persist", "list", "--project-type", "rust"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("rust:build\n"));
}

#[test]
fn test_list_json() {
    let project = project_with_justfile("fmt:\n");

    let output = multijust(&project)
        .args(["--no-persist", "list", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let actions: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(actions[0]["label"], "just:fmt");
    assert_eq!(actions[0]["target"], "fmt");
    assert_eq!(actions[0]["command"]["program"], "just");
}

#[test]
fn test_list_without_justfile_is_empty() {
    let project = TempDir::new().unwrap();

    multijust(&project)
        .args(["--no-persist", "list"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_list_explicit_missing_justfile_fails() {
    let project = TempDir::new().unwrap();

    multijust(&project)
        .args(["--no-persist", "list", "--justfile", "missing.just"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read just targets"));
}

#[test]
fn test_custom_candidate() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("Justfile"), "release:\n").unwrap();

    multijust(&temp_dir)
        .args(["--no-persist", "--justfile-candidate", "Justfile", "list"])
        .assert()
        .success()
        .stdout("just:release\n");
}

#[test]
fn test_run_dry_run() {
    let project = project_with_justfile(JUSTFILE);

    multijust(&project)
        .args(["--no-persist", "run", "build", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("just --justfile "))
        .stdout(predicate::str::contains("justfile build\n"))
        .stdout(predicate::str::contains("Working directory: "));
}

#[test]
fn test_run_unknown_target() {
    let project = project_with_justfile(JUSTFILE);

    multijust(&project)
        .args(["--no-persist", "run", "hidden", "--dry-run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No target named 'hidden'"));
}

#[test]
fn test_pick_by_number() {
    let project = project_with_justfile(JUSTFILE);

    multijust(&project)
        .args(["--no-persist", "pick", "--dry-run"])
        .write_stdin("2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("justfile test\n"))
        .stderr(predicate::str::contains("1) just:build"));
}

#[test]
fn test_pick_cancel() {
    let project = project_with_justfile(JUSTFILE);

    multijust(&project)
        .args(["--no-persist", "pick", "--dry-run"])
        .write_stdin("\n")
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_pick_without_targets() {
    let project = TempDir::new().unwrap();

    multijust(&project)
        .args(["--no-persist", "pick"])
        .assert()
        .success()
        .stderr(predicate::str::contains("No just targets found"));
}

#[test]
fn test_cached_targets_survive_edits_when_always_cached() {
    let project = project_with_justfile("one:\n");
    let cache = TempDir::new().unwrap();
    let cache_dir = cache.path().to_str().unwrap();

    multijust(&project)
        .args(["--cache-dir", cache_dir, "--cache-targets", "true", "list"])
        .assert()
        .success()
        .stdout("just:one\n");

    fs::write(project.path().join("justfile"), "one:\ntwo:\n").unwrap();

    multijust(&project)
        .args(["--cache-dir", cache_dir, "--cache-targets", "true", "list"])
        .assert()
        .success()
        .stdout("just:one\n");

    multijust(&project)
        .args(["--cache-dir", cache_dir, "--cache-targets", "false", "list"])
        .assert()
        .success()
        .stdout("just:one\njust:two\n");
}

#[test]
fn test_cache_list_and_clear() {
    let project = project_with_justfile(JUSTFILE);
    let cache = TempDir::new().unwrap();
    let cache_dir = cache.path().join("store");
    let cache_dir = cache_dir.to_str().unwrap();

    multijust(&project)
        .args(["--cache-dir", cache_dir, "list"])
        .assert()
        .success();

    multijust(&project)
        .args(["--cache-dir", cache_dir, "cache", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Just targets\t2 items"));

    multijust(&project)
        .args(["--cache-dir", cache_dir, "cache", "clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared cache"));

    multijust(&project)
        .args(["--cache-dir", cache_dir, "cache", "list"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_invalid_cache_policy_is_rejected() {
    let project = project_with_justfile(JUSTFILE);

    multijust(&project)
        .args(["--cache-targets", "sometimes", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid cache_targets value"));
}
