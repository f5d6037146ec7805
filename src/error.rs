//! Error types for Bookshelf
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using LibraryError
pub type Result<T> = std::result::Result<T, LibraryError>;

/// Unified error type for Bookshelf operations
#[derive(Debug, Error)]
pub enum LibraryError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Durable File Errors
    // -------------------------------------------------------------------------
    #[error("Malformed library file: {0}")]
    Parse(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // Record Errors
    // -------------------------------------------------------------------------
    #[error("Missing required field: {0}")]
    Validation(String),

    #[error("Library is empty")]
    EmptyLibrary,

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl LibraryError {
    /// True for conditions that are reported to the user as info, not failures
    pub fn is_informational(&self) -> bool {
        matches!(self, LibraryError::EmptyLibrary)
    }
}
