//! Tests for the bookshelf binary
//!
//! Tests verify:
//! - Exit status for validation, parse and I/O failures
//! - Empty-library listing succeeds
//! - Library file taken from BOOKSHELF_FILE

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use bookshelf::BookStore;
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn bookshelf() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_bookshelf"));
    cmd.env_remove("BOOKSHELF_FILE").env_remove("RUST_LOG");
    cmd
}

fn run_with_file(file: &Path, args: &[&str]) -> Output {
    bookshelf()
        .arg("--file")
        .arg(file)
        .args(args)
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

const DUNE: &[&str] = &[
    "add", "--title", "Dune", "--author", "Frank Herbert", "--year", "1965", "--genre", "Sci-Fi",
    "--read",
];

// =============================================================================
// Success Tests
// =============================================================================

#[test]
fn test_add_then_list() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("library_data.json");

    let added = run_with_file(&path, DUNE);
    assert!(added.status.success());
    assert!(stdout(&added).contains("Book added successfully!"));

    let listed = run_with_file(&path, &["list"]);
    assert!(listed.status.success());
    assert!(stdout(&listed).contains("1. Dune by Frank Herbert (1965) - Sci-Fi - Read"));
}

#[test]
fn test_list_empty_library_succeeds() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("library_data.json");

    let output = run_with_file(&path, &["list"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("Your library is empty."));
}

#[test]
fn test_remove_from_empty_library_succeeds() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("library_data.json");

    let output = run_with_file(&path, &["remove", "Anything"]);

    assert!(output.status.success());
    assert!(!path.exists());
}

#[test]
fn test_file_from_environment() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("from_env.json");

    let output = bookshelf()
        .env("BOOKSHELF_FILE", &path)
        .args(DUNE)
        .output()
        .unwrap();

    assert!(output.status.success());
    let store = BookStore::open_path(&path).unwrap();
    assert_eq!(store.titles(), vec!["Dune"]);
}

// =============================================================================
// Failure Tests
// =============================================================================

#[test]
fn test_add_empty_title_fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("library_data.json");

    let output = run_with_file(
        &path,
        &["add", "--title", "", "--author", "Someone", "--year", "2000", "--genre", "Drama"],
    );

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("title"));
    assert!(!path.exists());
}

#[test]
fn test_malformed_file_fails_on_open() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("library_data.json");
    fs::write(&path, "[{").unwrap();

    let output = run_with_file(&path, &["list"]);

    assert!(!output.status.success());
    assert_eq!(fs::read_to_string(&path).unwrap(), "[{");
}

#[test]
fn test_unwritable_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("library_data.json");
    // A directory in place of the file cannot be read or written
    fs::create_dir(&path).unwrap();

    let output = run_with_file(&path, DUNE);

    assert!(!output.status.success());
}
