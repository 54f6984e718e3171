//! CLI integration tests for the demo binary
//!
//! Exercises argument parsing and configuration validation without starting
//! the server.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_version_flag() {
    let mut cmd = cargo_bin_cmd!("rapidoc-demo");
    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help_flag() {
    let mut cmd = cargo_bin_cmd!("rapidoc-demo");
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--route"))
        .stdout(predicate::str::contains("--theme"))
        .stdout(predicate::str::contains("--port"));
}

#[test]
fn test_unknown_theme_rejected() {
    let mut cmd = cargo_bin_cmd!("rapidoc-demo");
    cmd.args(["--theme", "solarized"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("solarized"));
}

#[test]
fn test_route_without_leading_slash_rejected() {
    let mut cmd = cargo_bin_cmd!("rapidoc-demo");
    cmd.args(["--route", "api-docs"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("must start with '/'"));
}
