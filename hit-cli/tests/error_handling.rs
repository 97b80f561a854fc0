//! Integration tests for error handling and exit codes.
//!
//! These tests verify that hit returns the right exit codes:
//! - Exit code 0: success (and `--help`/`--version`)
//! - Exit code 1: usage error, I/O failure, parse failure, validation
//!   failure, or a diff that found differences

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_success_exit_code() {
    let env = TestEnv::new();
    env.command()
        .args(["find", "a", "-"])
        .write_stdin("a = 1\n")
        .assert()
        .code(0);
}

#[test]
fn test_help_exits_zero() {
    let env = TestEnv::new();
    env.command()
        .arg("--help")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_version_exits_zero() {
    let env = TestEnv::new();
    env.command().arg("--version").assert().code(0);
}

#[test]
fn test_missing_subcommand_exits_one() {
    let env = TestEnv::new();
    env.command().assert().code(1);
}

#[test]
fn test_unknown_subcommand_exits_one() {
    let env = TestEnv::new();
    env.command().arg("frobnicate").assert().code(1);
}

#[test]
fn test_missing_positionals_exit_one() {
    let env = TestEnv::new();
    env.command().arg("find").assert().code(1);
    env.command().arg("validate").assert().code(1);
    env.command().arg("format").assert().code(1);
}

#[test]
fn test_unreadable_file_exits_one_with_message() {
    let env = TestEnv::new();
    env.command()
        .args(["validate", "missing.i"])
        .assert()
        .code(1)
        .stderr("Can't open 'missing.i'\n");
}

#[test]
fn test_parse_error_location_format() {
    let env = TestEnv::new();
    let file = env.write_file("broken.i", "a = 1\nb ==\n");
    env.command()
        .args(["validate", &file])
        .assert()
        .code(1)
        // file:line:col: message
        .stderr(predicate::str::is_match(r":2:\d+: ").unwrap());
}

#[test]
fn test_diff_differences_exit_one_without_error_message() {
    let env = TestEnv::new();
    let a = env.write_file("a.i", "x = 1\n");
    let b = env.write_file("b.i", "x = 2\n");
    env.command()
        .args(["diff", &a, &b])
        .assert()
        .code(1)
        .stderr("");
}
