//! Book Module
//!
//! The record type held by the library.
//!
//! ## Responsibilities
//! - Field set of one book (title, author, year, genre, read flag)
//! - Presence checks before a record enters the library
//! - Single-line rendering: `Title by Author (Year) - Genre - Read|Unread`
//! - Selecting which text field a search runs against
//!
//! ## File Representation
//! Keys are capitalized in the library file:
//! ```text
//! {
//!     "Title": "Dune",
//!     "Author": "Frank Herbert",
//!     "Year": 1965,
//!     "Genre": "Sci-Fi",
//!     "Read": true
//! }
//! ```

mod record;

use std::fmt;
use std::str::FromStr;

pub use record::Book;

/// Text field a search runs against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Title,
    Author,
}

impl SearchField {
    /// Lowercase name, as typed by users
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchField::Title => "title",
            SearchField::Author => "author",
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchField::Title => f.write_str("Title"),
            SearchField::Author => f.write_str("Author"),
        }
    }
}

impl FromStr for SearchField {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "title" | "t" => Ok(SearchField::Title),
            "author" | "a" => Ok(SearchField::Author),
            other => Err(format!(
                "unknown search field '{}' (expected title or author)",
                other
            )),
        }
    }
}
