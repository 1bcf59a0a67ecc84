//! Integration tests for the struct commands.

mod common;

use common::prepkit;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_shuffle_with_seed() {
    let dir = TempDir::new().unwrap();
    let first = prepkit(&dir)
        .args(["struct", "shuffle", "1", "2", "3", "--seed", "42", "-f", "lines"])
        .assert()
        .success();
    let first = String::from_utf8(first.get_output().stdout.clone()).unwrap();

    let mut lines: Vec<&str> = first.lines().collect();
    lines.sort_unstable();
    assert_eq!(lines, vec!["1", "2", "3"]);

    prepkit(&dir)
        .args(["struct", "shuffle", "1", "2", "3", "--seed", "42", "-f", "lines"])
        .assert()
        .success()
        .stdout(first);
}

#[test]
fn test_flatten() {
    let dir = TempDir::new().unwrap();
    prepkit(&dir)
        .args(["struct", "flatten", "[1,2]", "[3,4]"])
        .assert()
        .success()
        .stdout("[1, 2, 3, 4]\n");
}

#[test]
fn test_flatten_mixed_items() {
    let dir = TempDir::new().unwrap();
    prepkit(&dir)
        .args(["struct", "flatten", r#"["a", null]"#, "[[1], 2.5]"])
        .assert()
        .success()
        .stdout("['a', None, [1], 2.5]\n");
}

#[test]
fn test_flatten_accepts_python_literals() {
    let dir = TempDir::new().unwrap();
    prepkit(&dir)
        .args(["struct", "flatten", "['a', 'b']", "[None, True]"])
        .assert()
        .success()
        .stdout("['a', 'b', None, True]\n");
}

#[test]
fn test_repr_output_feeds_back_into_flatten() {
    let dir = TempDir::new().unwrap();
    let assert = prepkit(&dir)
        .args(["struct", "unique", "a", "it's", "a", "x\u{a0}y"])
        .assert()
        .success();
    let listed = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    prepkit(&dir)
        .args(["struct", "flatten", listed.trim(), "[1, 2.5]"])
        .assert()
        .success()
        .stdout("['a', \"it's\", 'x\\xa0y', 1, 2.5]\n");
}

#[test]
fn test_flatten_malformed_literal_fails() {
    let dir = TempDir::new().unwrap();
    prepkit(&dir)
        .args(["struct", "flatten", "[1,2"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("invalid list literal"))
        .stderr(predicate::str::contains("caused by"));
}

#[test]
fn test_flatten_non_list_fails() {
    let dir = TempDir::new().unwrap();
    prepkit(&dir)
        .args(["struct", "flatten", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported list literal"));
}

#[test]
fn test_unique() {
    let dir = TempDir::new().unwrap();
    prepkit(&dir)
        .args(["struct", "unique", "1", "2", "2", "3", "1"])
        .assert()
        .success()
        .stdout("['1', '2', '3']\n");
}

#[test]
fn test_unique_json_output() {
    let dir = TempDir::new().unwrap();
    prepkit(&dir)
        .args(["--format", "json", "struct", "unique", "b", "a", "b"])
        .assert()
        .success()
        .stdout("[\"b\",\"a\"]\n");
}
