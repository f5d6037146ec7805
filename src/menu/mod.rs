//! Menu Module
//!
//! Vocabulary of the interactive front-end.
//!
//! ## Main Menu
//! ```text
//! 1. Add a Book
//! 2. Remove a Book
//! 3. Search for a Book
//! 4. Display All Books
//! 5. Display Statistics
//! 6. Exit
//! ```
//!
//! ## Notices
//! Each action ends with zero or more notices, rendered as `Level: message`:
//! - Success: the library changed
//! - Warning: the input was rejected or nothing matched
//! - Info: nothing to do (empty library)
//! - Error: the library file could not be read or written

mod action;
mod notice;

pub use action::MenuAction;
pub use notice::{Level, Notice};
