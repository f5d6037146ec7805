//! Library File
//!
//! Reads and writes the whole library as one JSON document.
//!
//! ## Responsibilities
//! - Treat a missing file as an empty library
//! - Surface malformed content as a parse error (never recovered)
//! - Overwrite the file with the full sequence on every save

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::book::Book;
use crate::config::Config;
use crate::error::Result;

/// Handle on the durable library file
#[derive(Debug, Clone)]
pub struct LibraryFile {
    /// Location of the JSON document
    path: PathBuf,

    /// Indentation unit used when writing (spaces)
    indent: Vec<u8>,
}

impl LibraryFile {
    /// Create a handle; nothing is touched on disk
    pub fn new(path: impl Into<PathBuf>, indent: usize) -> Self {
        Self {
            path: path.into(),
            indent: vec![b' '; indent],
        }
    }

    /// Create a handle from a store config
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.data_file, config.indent)
    }

    /// Read the library
    ///
    /// Returns:
    /// - `Ok(books)` — parsed records in file order
    /// - `Ok(vec![])` — the file does not exist
    /// - `Err(Parse)` — the file exists but is not a valid library
    pub fn load(&self) -> Result<Vec<Book>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No library file at {}, starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let books: Vec<Book> = serde_json::from_str(&contents)?;
        tracing::debug!("Loaded {} books from {}", books.len(), self.path.display());

        Ok(books)
    }

    /// Overwrite the file with the given library
    ///
    /// Not atomic: a crash mid-write can leave a truncated file.
    pub fn save(&self, books: &[Book]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let encoded = self.encode(books)?;
        fs::write(&self.path, encoded)?;
        tracing::debug!("Saved {} books to {}", books.len(), self.path.display());

        Ok(())
    }

    /// Render the library as pretty-printed JSON
    pub fn encode(&self, books: &[Book]) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(&self.indent);
        let mut serializer = Serializer::with_formatter(&mut buf, formatter);
        books.serialize(&mut serializer)?;
        Ok(buf)
    }

    /// Path of the library file
    pub fn path(&self) -> &Path {
        &self.path
    }
}
