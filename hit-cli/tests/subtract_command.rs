//! Integration tests for `hit subtract`.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_subtract_removes_left_paths_from_right() {
    let env = TestEnv::new();
    let left = env.write_file("left.i", "[s]\n  x = 1\n[]\n");
    let right = env.write_file("right.i", "[s]\n  x = 1\n  y = 2\n[]\n");
    env.command()
        .args(["subtract", &left, &right])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("y = 2"))
        .stdout(predicate::str::contains("x = 1").not());
}

#[test]
fn test_subtract_removes_by_path_even_when_values_differ() {
    let env = TestEnv::new();
    let left = env.write_file("left.i", "k = 1\n");
    let right = env.write_file("right.i", "k = 999\nkept = 5\n");
    env.command()
        .args(["subtract", &left, &right])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("kept = 5"))
        .stdout(predicate::str::contains("k = 999").not());
}

#[test]
fn test_subtract_drops_sections_left_empty() {
    let env = TestEnv::new();
    let left = env.write_file("left.i", "[s]\n  x = 1\n[]\n");
    let right = env.write_file("right.i", "[s]\n  x = 1\n[]\nz = 3\n");
    env.command()
        .args(["subtract", &left, &right])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("[s]").not())
        .stdout(predicate::str::contains("z = 3"));
}

#[test]
fn test_subtract_announces_operands_on_stderr() {
    let env = TestEnv::new();
    let left = env.write_file("left.i", "x = 1\n");
    let right = env.write_file("right.i", "x = 1\n");
    env.command()
        .args(["subtract", &left, &right])
        .assert()
        .code(0)
        .stderr(predicate::str::contains("Subtracting:"))
        .stderr(predicate::str::contains(left))
        .stderr(predicate::str::contains(right));
}

#[test]
fn test_subtract_preserves_unrelated_values() {
    let env = TestEnv::new();
    let left = env.write_file("left.i", "a = 1\n");
    let right = env.write_file("right.i", "b = 'keep me'\n");
    env.command()
        .args(["subtract", &left, &right])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("b = 'keep me'"));
}

#[test]
fn test_subtract_requires_two_files() {
    let env = TestEnv::new();
    let left = env.write_file("left.i", "a = 1\n");
    env.command().args(["subtract", &left]).assert().code(1);
}
