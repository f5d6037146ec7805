//! Tests for Book records
//!
//! Tests verify:
//! - Presence validation of required fields
//! - Single-line formatting
//! - JSON field names
//! - Search field parsing

use bookshelf::{Book, LibraryError, SearchField};

// =============================================================================
// Validation Tests
// =============================================================================

#[test]
fn test_valid_book_passes() {
    let book = Book::new("Dune", "Frank Herbert", 1965, "Sci-Fi", true);
    assert!(book.validate().is_ok());
}

#[test]
fn test_missing_title_rejected() {
    let book = Book::new("", "Frank Herbert", 1965, "Sci-Fi", true);

    match book.validate() {
        Err(LibraryError::Validation(field)) => assert_eq!(field, "title"),
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn test_missing_author_rejected() {
    let book = Book::new("Dune", "", 1965, "Sci-Fi", true);

    match book.validate() {
        Err(LibraryError::Validation(field)) => assert_eq!(field, "author"),
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn test_whitespace_genre_rejected() {
    let book = Book::new("Dune", "Frank Herbert", 1965, "   ", false);

    match book.validate() {
        Err(LibraryError::Validation(field)) => assert_eq!(field, "genre"),
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn test_year_zero_is_valid() {
    let book = Book::new("Beowulf", "Unknown", 0, "Epic", false);
    assert!(book.validate().is_ok());
}

// =============================================================================
// Formatting Tests
// =============================================================================

#[test]
fn test_format_read_book() {
    let book = Book::new("Dune", "Frank Herbert", 1965, "Sci-Fi", true);
    assert_eq!(book.format(), "Dune by Frank Herbert (1965) - Sci-Fi - Read");
}

#[test]
fn test_format_unread_book() {
    let book = Book::new("Emma", "Jane Austen", 1815, "Romance", false);
    assert_eq!(book.to_string(), "Emma by Jane Austen (1815) - Romance - Unread");
}

// =============================================================================
// Serialization Tests
// =============================================================================

#[test]
fn test_json_uses_capitalized_keys() {
    let book = Book::new("Dune", "Frank Herbert", 1965, "Sci-Fi", true);
    let value = serde_json::to_value(&book).unwrap();

    assert_eq!(value["Title"], "Dune");
    assert_eq!(value["Author"], "Frank Herbert");
    assert_eq!(value["Year"], 1965);
    assert_eq!(value["Genre"], "Sci-Fi");
    assert_eq!(value["Read"], true);
}

#[test]
fn test_negative_year_does_not_parse() {
    let json = r#"{"Title":"X","Author":"Y","Year":-5,"Genre":"Z","Read":false}"#;
    assert!(serde_json::from_str::<Book>(json).is_err());
}

// =============================================================================
// SearchField Tests
// =============================================================================

#[test]
fn test_search_field_parse() {
    assert_eq!("title".parse::<SearchField>().unwrap(), SearchField::Title);
    assert_eq!("Author".parse::<SearchField>().unwrap(), SearchField::Author);
    assert_eq!(" TITLE ".parse::<SearchField>().unwrap(), SearchField::Title);
    assert!("genre".parse::<SearchField>().is_err());
}

#[test]
fn test_field_accessor() {
    let book = Book::new("Dune", "Frank Herbert", 1965, "Sci-Fi", true);
    assert_eq!(book.field(SearchField::Title), "Dune");
    assert_eq!(book.field(SearchField::Author), "Frank Herbert");
}
