//! Tests for the scan command

#![allow(clippy::expect_used)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use crate::commands::scan::{file_header, match_line, run};

fn default_suffixes() -> Vec<String> {
    vec![".py".to_string(), ".js".to_string(), ".ts".to_string()]
}

#[test]
fn test_file_header_format() {
    assert_eq!(
        file_header(Path::new("src/billing.py")),
        "\n Commented-out code found in: src/billing.py"
    );
}

#[test]
fn test_match_line_format() {
    assert_eq!(match_line("# total(a, b)"), "  → # total(a, b)");
}

#[test]
fn test_run_on_clean_tree_returns_false() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(temp_dir.path().join("a.py"), "print(\"hi\")\n").expect("Failed to write file");

    let found = run(temp_dir.path(), &default_suffixes()).expect("Run failed");

    assert!(!found);
}

#[test]
fn test_run_on_offending_tree_returns_true() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(temp_dir.path().join("b.py"), "    # total(a, b)\n").expect("Failed to write file");

    let found = run(temp_dir.path(), &default_suffixes()).expect("Run failed");

    assert!(found);
}

#[test]
fn test_run_ignores_unrecognized_suffixes() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(temp_dir.path().join("d.txt"), "# total(a,b)\n").expect("Failed to write file");

    let found = run(temp_dir.path(), &default_suffixes()).expect("Run failed");

    assert!(!found);
}

#[test]
fn test_run_with_missing_root_is_an_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let missing = temp_dir.path().join("does-not-exist");

    let result = run(&missing, &default_suffixes());

    assert!(result.is_err());
}

#[test]
fn test_run_with_custom_suffixes() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(temp_dir.path().join("task.rb"), "# total(a, b)\n").expect("Failed to write file");

    let found = run(temp_dir.path(), &[".rb".to_string()]).expect("Run failed");

    assert!(found);
}
