//! Book record
//!
//! Serde-backed record with presence validation and display formatting.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{LibraryError, Result};
use super::SearchField;

/// One book in the library
///
/// Title doubles as the removal key, so two records with the same title
/// cannot be told apart by `remove`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Book {
    pub title: String,
    pub author: String,
    pub year: u32,
    pub genre: String,
    pub read: bool,
}

impl Book {
    /// Create a record (not yet validated)
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: u32,
        genre: impl Into<String>,
        read: bool,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year,
            genre: genre.into(),
            read,
        }
    }

    /// Check that title, author and genre are present
    ///
    /// Whitespace-only text counts as missing. The first missing field is
    /// named in the error.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("title", &self.title),
            ("author", &self.author),
            ("genre", &self.genre),
        ];

        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(LibraryError::Validation(name.to_string()));
            }
        }

        Ok(())
    }

    /// "Read" or "Unread"
    pub fn status(&self) -> &'static str {
        if self.read {
            "Read"
        } else {
            "Unread"
        }
    }

    /// Value of the given text field
    pub fn field(&self, field: SearchField) -> &str {
        match field {
            SearchField::Title => &self.title,
            SearchField::Author => &self.author,
        }
    }

    /// Case-insensitive substring match; `needle` must already be lowercase
    pub(crate) fn matches_lowercase(&self, field: SearchField, needle: &str) -> bool {
        self.field(field).to_lowercase().contains(needle)
    }

    /// Human-readable single line: `Title by Author (Year) - Genre - Read|Unread`
    pub fn format(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} by {} ({}) - {} - {}",
            self.title,
            self.author,
            self.year,
            self.genre,
            self.status()
        )
    }
}
