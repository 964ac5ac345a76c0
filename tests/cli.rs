//! CLI argument parsing and validation tests.
//!
//! These tests verify that invalid arguments are rejected before any image
//! is written.

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("genimages").unwrap();
    cmd.env_remove("GENIMAGES_CONFIG");
    cmd
}

#[test]
fn help_lists_flags() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--output"))
        .stdout(predicate::str::contains("--interval"))
        .stdout(predicate::str::contains("--count"));
}

#[test]
fn non_numeric_interval_is_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    cmd()
        .args(["--output", out.to_str().unwrap(), "--interval", "soon", "--count", "1"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("invalid value"));
    assert!(!out.exists(), "nothing should be created on a usage error");
}

#[test]
fn negative_count_is_usage_error() {
    cmd().args(["--count", "-1"]).assert().failure().code(2);
}

#[test]
fn non_finite_interval_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    cmd()
        .args(["--output", out.to_str().unwrap(), "--interval", "inf", "--count", "1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid argument"));
    assert!(!out.exists());
}

#[test]
fn invalid_quality_exits_with_error() {
    cmd()
        .args(["--quality", "0", "--count", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported quality"));
}

#[test]
fn unparsable_config_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("genimages.toml");
    std::fs::write(&config, "this is not valid toml {{{").unwrap();

    cmd()
        .args(["--config", config.to_str().unwrap(), "--count", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config error"));
}
