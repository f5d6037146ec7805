//! Storage Module
//!
//! Durable representation of the library.
//!
//! ## File Format
//! A single JSON array, pretty-printed, one object per book in insertion
//! order. Every save rewrites the whole file; there is no append mode and no
//! versioning.
//!
//! ```text
//! [
//!     { "Title": ..., "Author": ..., "Year": ..., "Genre": ..., "Read": ... },
//!     ...
//! ]
//! ```

mod file;

pub use file::LibraryFile;
