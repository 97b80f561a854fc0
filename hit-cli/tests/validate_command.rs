//! Integration tests for `hit validate`.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_validate_clean_file_succeeds_quietly() {
    let env = TestEnv::new();
    let file = env.write_file("ok.i", "[x]\n  p = 1\n  q = 2\n[]\n");
    env.command()
        .args(["validate", &file])
        .assert()
        .code(0)
        .stdout("");
}

#[test]
fn test_validate_reports_duplicate_parameter_with_both_lines() {
    let env = TestEnv::new();
    let file = env.write_file("dup.i", "[x]\n  p = 1\n[]\n[x]\n  p = 2\n[]\n");
    env.command()
        .args(["validate", &file])
        .assert()
        .code(1)
        .stdout(format!(
            "{file}:2: parameter 'x/p' supplied multiple times\n\
             {file}:5: parameter 'x/p' supplied multiple times\n"
        ));
}

#[test]
fn test_validate_reports_triple_occurrence_once_each() {
    let env = TestEnv::new();
    let file = env.write_file("triple.i", "a = 1\na = 2\na = 3\n");
    let output = env
        .command()
        .args(["validate", &file])
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();
    assert_eq!(stdout.lines().count(), 3);
}

#[test]
fn test_validate_from_stdin() {
    let env = TestEnv::new();
    env.command()
        .args(["validate", "-"])
        .write_stdin("a = 1\na = 2\n")
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "stdin:1: parameter 'a' supplied multiple times",
        ));
}

#[test]
fn test_validate_parse_error_skips_file_and_fails() {
    let env = TestEnv::new();
    let bad = env.write_file("bad.i", "[oops\n");
    let good = env.write_file("good.i", "a = 1\n");
    env.command()
        .args(["validate", &bad, &good])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("bad.i"));
}

#[test]
fn test_validate_multiple_clean_files() {
    let env = TestEnv::new();
    let a = env.write_file("a.i", "x = 1\n");
    let b = env.write_file("b.i", "y = 2\n");
    env.command().args(["validate", &a, &b]).assert().code(0);
}
