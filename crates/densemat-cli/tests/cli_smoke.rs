//! CLI binary smoke tests using assert_cmd.
//!
//! These tests exercise the compiled `densemat` binary to verify that
//! argument parsing, help text, and error handling work end-to-end.

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("densemat").unwrap()
}

// ---------------------------------------------------------------------------
// Top-level
// ---------------------------------------------------------------------------

#[test]
fn no_args_shows_help() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_flag() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("showcase"))
        .stdout(predicate::str::contains("elementary"));
}

#[test]
fn version_flag() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("densemat"));
}

// ---------------------------------------------------------------------------
// showcase subcommand
// ---------------------------------------------------------------------------

#[test]
fn showcase_prints_sample_matrix() {
    cmd()
        .arg("showcase")
        .assert()
        .success()
        .stdout(predicate::str::contains("Matrix A"))
        .stdout(predicate::str::contains("A transposed"));
}

// ---------------------------------------------------------------------------
// elementary subcommand
// ---------------------------------------------------------------------------

#[test]
fn elementary_no_subcommand_errors() {
    cmd().arg("elementary").assert().failure();
}

#[test]
fn elementary_swap_prints_matrix() {
    cmd()
        .args(["elementary", "swap", "-n", "3", "-i", "0", "-j", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Elementary matrix"))
        .stdout(predicate::str::contains("E * M"));
}

#[test]
fn elementary_scale_prints_matrix() {
    cmd()
        .args(["elementary", "scale", "-n", "3", "-r", "1", "-f", "2.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("scale row 1 by 2.5"));
}

#[test]
fn elementary_add_prints_matrix() {
    cmd()
        .args(["elementary", "add", "-n", "3", "-s", "0", "-d", "2", "-f", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("into row 2"));
}

#[test]
fn elementary_swap_out_of_range_fails() {
    cmd()
        .args(["elementary", "swap", "-n", "2", "-i", "0", "-j", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn elementary_swap_missing_args_fails() {
    cmd()
        .args(["elementary", "swap", "-n", "3"])
        .assert()
        .failure();
}
