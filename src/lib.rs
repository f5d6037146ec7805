//! # Bookshelf
//!
//! A personal book catalog with:
//! - An ordered library of book records (title, author, year, genre, read)
//! - A pretty-printed JSON file rewritten on every change
//! - Case-insensitive search by title or author
//! - Read-percentage statistics
//! - A menu-driven session for interactive use
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │              CLI (subcommands / menu Session)                │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ &mut
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                       BookStore                              │
//! │        add / remove / search / list_all / statistics         │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ load once, save after every mutation
//!                       ▼
//!               ┌───────────────┐
//!               │  LibraryFile  │
//!               │    (JSON)     │
//!               └───────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod book;
pub mod stats;
pub mod storage;
pub mod store;
pub mod menu;
pub mod session;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{LibraryError, Result};
pub use config::Config;
pub use book::{Book, SearchField};
pub use stats::Statistics;
pub use store::BookStore;
pub use session::Session;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Bookshelf
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
