//! Library statistics

use std::fmt;

use crate::book::Book;

/// Summary of the library: how many books, and how many have been read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Statistics {
    /// Total number of records
    pub total: usize,

    /// Records with the read flag set
    pub read: usize,
}

impl Statistics {
    /// Compute statistics over a library
    pub fn from_books(books: &[Book]) -> Self {
        Self {
            total: books.len(),
            read: books.iter().filter(|book| book.read).count(),
        }
    }

    /// Percentage of books read, or `None` for an empty library
    pub fn percent_read(&self) -> Option<f64> {
        if self.total == 0 {
            return None;
        }
        Some(self.read as f64 / self.total as f64 * 100.0)
    }

    /// Percentage read to one decimal place, e.g. `"66.7"`
    pub fn percent_read_display(&self) -> Option<String> {
        self.percent_read().map(|p| format!("{:.1}", p))
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.percent_read_display() {
            Some(percent) => write!(
                f,
                "Total books: {}\nPercentage read: {}%",
                self.total, percent
            ),
            None => write!(f, "Total books: 0"),
        }
    }
}
