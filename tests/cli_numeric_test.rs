//! Integration tests for the numeric commands.

mod common;

use common::prepkit;
use predicates::prelude::*;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_normalize() {
    let dir = TempDir::new().unwrap();
    prepkit(&dir)
        .args(["numeric", "normalize", "0", "5", "10", "--new-min", "0", "--new-max", "1"])
        .assert()
        .success()
        .stdout("[0.0, 0.5, 1.0]\n");
}

#[test]
fn test_normalize_negative_range() {
    let dir = TempDir::new().unwrap();
    prepkit(&dir)
        .args(["numeric", "normalize", "-10", "0", "10", "--new-min", "-1"])
        .assert()
        .success()
        .stdout("[-1.0, 0.0, 1.0]\n");
}

#[test]
fn test_standardize_returns_five_values() {
    let dir = TempDir::new().unwrap();
    let assert = prepkit(&dir)
        .args(["numeric", "standardize", "1", "2", "3", "4", "5", "--format", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let values: Vec<f64> = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(values.len(), 5);
    assert!((values[2]).abs() < 1e-12);
    assert!((values[4] - 2.0_f64.sqrt()).abs() < 1e-12);
}

#[test]
fn test_clip() {
    let dir = TempDir::new().unwrap();
    prepkit(&dir)
        .args(["numeric", "clip", "1", "2", "3", "4", "5", "--min", "2", "--max", "4"])
        .assert()
        .success()
        .stdout("[2.0, 2.0, 3.0, 4.0, 4.0]\n");
}

#[test]
fn test_clip_inverted_range_fails() {
    let dir = TempDir::new().unwrap();
    prepkit(&dir)
        .args(["numeric", "clip", "1", "--min", "4", "--max", "2"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("invalid range"));
}

#[test]
fn test_to_integers() {
    let dir = TempDir::new().unwrap();
    prepkit(&dir)
        .args(["numeric", "to-integers", "1.5", "2", "abc"])
        .assert()
        .success()
        .stdout("[1, 2]\n");
}

#[test]
fn test_log_transform() {
    let dir = TempDir::new().unwrap();
    prepkit(&dir)
        .args(["numeric", "log-transform", "1", "-3", "0", "--format", "lines"])
        .assert()
        .success()
        .stdout("0.0\n");
}

#[test]
fn test_non_numeric_argument_is_usage_error() {
    let dir = TempDir::new().unwrap();
    prepkit(&dir)
        .args(["numeric", "normalize", "1", "abc"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("not a valid number"))
        .stderr(predicate::str::contains("Usage: prepkit numeric normalize"));
}

#[test]
fn test_nan_argument_is_usage_error() {
    let dir = TempDir::new().unwrap();
    prepkit(&dir)
        .args(["numeric", "standardize", "nan"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("not a finite number"))
        .stderr(predicate::str::contains("Usage: prepkit numeric standardize"));
}

#[test]
fn test_bad_number_in_input_file_fails() {
    let dir = TempDir::new().unwrap();
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "1\n2\nthree").unwrap();

    prepkit(&dir)
        .args(["numeric", "normalize", "--input"])
        .arg(file.path())
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("line 3"));
}
