//! Store Module
//!
//! The book store that owns the library and keeps its file in sync.
//!
//! ## Responsibilities
//! - Load the library once when opened
//! - Validate and append new records
//! - Remove records by title
//! - Answer search, listing and statistics queries
//! - Rewrite the library file after every mutation

use std::path::Path;

use crate::book::{Book, SearchField};
use crate::config::Config;
use crate::error::{LibraryError, Result};
use crate::stats::Statistics;
use crate::storage::LibraryFile;

/// The book store
///
/// ## Ownership Model
///
/// One store per session: built at program start, borrowed mutably by
/// whichever front-end drives it, dropped at exit. Mutations take `&mut self`,
/// so no locking is involved.
///
/// ## Durability
///
/// Every successful `add`/`remove` overwrites the file with the whole
/// library. If that write fails the in-memory library keeps the change and
/// the error is returned; memory and disk then disagree until the next
/// successful save.
pub struct BookStore {
    /// Store configuration
    config: Config,

    /// Durable library file
    file: LibraryFile,

    /// The library, in insertion order
    books: Vec<Book>,
}

impl BookStore {
    /// Open a store with the given config
    ///
    /// Reads the library file if it exists, otherwise starts empty.
    pub fn open(config: Config) -> Result<Self> {
        config.validate()?;

        let file = LibraryFile::from_config(&config);
        let books = file.load()?;

        tracing::info!(
            "Opened library {} ({} books)",
            file.path().display(),
            books.len()
        );

        Ok(Self {
            config,
            file,
            books,
        })
    }

    /// Open with a path (convenience method)
    ///
    /// Uses default config with the specified library file
    pub fn open_path(path: &Path) -> Result<Self> {
        Self::open(Config::builder().data_file(path).build())
    }

    /// Re-read the library file, replacing the in-memory library
    pub fn load(&mut self) -> Result<()> {
        self.books = self.file.load()?;
        Ok(())
    }

    /// Write the whole in-memory library to the file
    pub fn save(&self) -> Result<()> {
        self.file.save(&self.books)
    }

    /// Append a book
    ///
    /// Rejects the record (without touching the library) if title, author or
    /// genre is missing.
    pub fn add(&mut self, book: Book) -> Result<()> {
        book.validate()?;

        tracing::info!("Adding \"{}\" by {}", book.title, book.author);
        self.books.push(book);

        self.save()
    }

    /// Remove every book whose title equals `title` exactly
    ///
    /// Returns the number of books removed. An empty library yields
    /// `LibraryError::EmptyLibrary` and nothing changes. The file is only
    /// rewritten when something was removed.
    pub fn remove(&mut self, title: &str) -> Result<usize> {
        if self.books.is_empty() {
            return Err(LibraryError::EmptyLibrary);
        }

        let before = self.books.len();
        self.books.retain(|book| book.title != title);
        let removed = before - self.books.len();

        if removed == 0 {
            tracing::debug!("No book titled \"{}\"", title);
            return Ok(0);
        }

        tracing::info!("Removed {} book(s) titled \"{}\"", removed, title);
        self.save()?;

        Ok(removed)
    }

    /// Books whose `field` contains `query`, ignoring case
    ///
    /// An empty query matches every book.
    pub fn search(&self, field: SearchField, query: &str) -> Vec<&Book> {
        let needle = query.to_lowercase();
        let results: Vec<&Book> = self
            .books
            .iter()
            .filter(|book| book.matches_lowercase(field, &needle))
            .collect();

        tracing::debug!(
            "Search {} for \"{}\": {} match(es)",
            field,
            query,
            results.len()
        );

        results
    }

    /// Every book with its display number (starting at 1), in insertion order
    pub fn list_all(&self) -> Vec<(usize, &Book)> {
        self.books
            .iter()
            .enumerate()
            .map(|(i, book)| (i + 1, book))
            .collect()
    }

    /// Count and read percentage
    pub fn statistics(&self) -> Statistics {
        Statistics::from_books(&self.books)
    }

    /// Single-line rendering of a book
    pub fn format(book: &Book) -> String {
        book.format()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// All books, in insertion order
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Titles in insertion order (duplicates included)
    pub fn titles(&self) -> Vec<&str> {
        self.books.iter().map(|book| book.title.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Path of the library file
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
