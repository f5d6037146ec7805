//! Configuration for Bookshelf
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{LibraryError, Result};

/// Default name of the durable library file
pub const DEFAULT_DATA_FILE: &str = "library_data.json";

/// Default JSON indentation width (spaces)
pub const DEFAULT_INDENT: usize = 4;

/// Main configuration for a book store
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Path of the JSON file holding the whole library.
    /// Missing parent directories are created on first save.
    pub data_file: PathBuf,

    /// Number of spaces per indentation level in the saved file
    pub indent: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            indent: DEFAULT_INDENT,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check the config before opening a store
    pub fn validate(&self) -> Result<()> {
        if self.data_file.as_os_str().is_empty() {
            return Err(LibraryError::Config(
                "data file path must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the library file path
    pub fn data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_file = path.into();
        self
    }

    /// Set the indentation width of the saved file
    pub fn indent(mut self, spaces: usize) -> Self {
        self.config.indent = spaces;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
