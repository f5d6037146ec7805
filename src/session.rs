//! Menu Session
//!
//! Drives a `BookStore` from a line-oriented reader/writer pair.

use std::io::{BufRead, Write};

use crate::book::{Book, SearchField};
use crate::error::{LibraryError, Result};
use crate::menu::{MenuAction, Notice};
use crate::store::BookStore;

/// What the loop does after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// One interactive session over a book store
///
/// Reads choices and field values line by line and writes menus, listings
/// and notices back. Store failures become error notices and the session
/// carries on; only failures of the reader or writer end it with an error.
pub struct Session<'a, R, W> {
    /// The store being managed
    store: &'a mut BookStore,

    /// Input (stdin in the binary)
    reader: R,

    /// Output (stdout in the binary)
    writer: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    /// Create a new session
    pub fn new(store: &'a mut BookStore, reader: R, writer: W) -> Self {
        Self {
            store,
            reader,
            writer,
        }
    }

    /// Run the menu loop (blocking until Exit or end of input)
    pub fn run(&mut self) -> Result<()> {
        tracing::debug!("Session started on {}", self.store.path().display());

        loop {
            self.print_menu()?;

            let choice = match self.prompt("Choose an option")? {
                Some(line) => line,
                None => {
                    tracing::debug!("Input closed, ending session");
                    break;
                }
            };

            if choice.trim().is_empty() {
                continue;
            }

            let Some(action) = MenuAction::parse(&choice) else {
                self.notify(Notice::warning(format!(
                    "Unknown option '{}'.",
                    choice.trim()
                )))?;
                continue;
            };

            tracing::trace!("Menu action: {:?}", action);

            if self.perform(action)? == Flow::Quit {
                break;
            }
        }

        self.farewell()
    }

    /// Execute one menu action
    fn perform(&mut self, action: MenuAction) -> Result<Flow> {
        match action {
            MenuAction::AddBook => self.add_book(),
            MenuAction::RemoveBook => self.remove_book(),
            MenuAction::SearchBooks => self.search_books(),
            MenuAction::DisplayAll => self.display_all(),
            MenuAction::DisplayStatistics => self.display_statistics(),
            MenuAction::Exit => Ok(Flow::Quit),
        }
    }

    // =========================================================================
    // Actions
    // =========================================================================

    fn add_book(&mut self) -> Result<Flow> {
        self.heading(MenuAction::AddBook)?;

        let Some(title) = self.prompt("Enter the book title")? else {
            return Ok(Flow::Quit);
        };
        let Some(author) = self.prompt("Enter the author")? else {
            return Ok(Flow::Quit);
        };
        let Some(year) = self.prompt("Enter the publication year")? else {
            return Ok(Flow::Quit);
        };
        let Some(genre) = self.prompt("Enter the genre")? else {
            return Ok(Flow::Quit);
        };
        let Some(read) = self.prompt("Have you read this book? (y/n)")? else {
            return Ok(Flow::Quit);
        };

        // A blank year is recorded as 0
        let year = match year.trim() {
            "" => 0,
            text => match text.parse::<u32>() {
                Ok(year) => year,
                Err(_) => {
                    self.notify(Notice::warning(
                        "Publication year must be a non-negative whole number.",
                    ))?;
                    return Ok(Flow::Continue);
                }
            },
        };

        let read = match read.trim().to_ascii_lowercase().as_str() {
            "" | "y" | "yes" => true,
            "n" | "no" => false,
            _ => {
                self.notify(Notice::warning("Please answer y or n."))?;
                return Ok(Flow::Continue);
            }
        };

        let notice = match self.store.add(Book::new(title, author, year, genre, read)) {
            Ok(()) => Notice::success("Book added successfully!"),
            Err(LibraryError::Validation(_)) => Notice::warning("Please fill out all fields."),
            Err(e) => Notice::error(e.to_string()),
        };
        self.notify(notice)?;

        Ok(Flow::Continue)
    }

    fn remove_book(&mut self) -> Result<Flow> {
        self.heading(MenuAction::RemoveBook)?;

        if self.store.is_empty() {
            self.notify(Notice::info("Library is empty."))?;
            return Ok(Flow::Continue);
        }

        let titles: Vec<String> = self.store.titles().into_iter().map(String::from).collect();
        for (i, title) in titles.iter().enumerate() {
            writeln!(self.writer, "  {}. {}", i + 1, title)?;
        }

        let Some(choice) = self.prompt("Select a book to remove (number or title)")? else {
            return Ok(Flow::Quit);
        };

        // An exact title wins over a list number
        let selected = titles
            .iter()
            .find(|title| title.as_str() == choice || title.as_str() == choice.trim())
            .cloned()
            .or_else(|| match choice.trim().parse::<usize>() {
                Ok(n) if (1..=titles.len()).contains(&n) => Some(titles[n - 1].clone()),
                _ => None,
            });

        let Some(title) = selected else {
            self.notify(Notice::warning(format!(
                "No book titled '{}'.",
                choice.trim()
            )))?;
            return Ok(Flow::Continue);
        };

        let notice = match self.store.remove(&title) {
            Ok(_) => Notice::success("Book removed successfully!"),
            Err(LibraryError::EmptyLibrary) => Notice::info("Library is empty."),
            Err(e) => Notice::error(e.to_string()),
        };
        self.notify(notice)?;

        Ok(Flow::Continue)
    }

    fn search_books(&mut self) -> Result<Flow> {
        self.heading(MenuAction::SearchBooks)?;

        let Some(field) = self.prompt("Search by (title/author)")? else {
            return Ok(Flow::Quit);
        };
        let field: SearchField = match field.parse() {
            Ok(field) => field,
            Err(message) => {
                self.notify(Notice::warning(message))?;
                return Ok(Flow::Continue);
            }
        };

        let Some(query) = self.prompt(&format!("Enter the {}", field.as_str()))? else {
            return Ok(Flow::Quit);
        };
        if query.is_empty() {
            return Ok(Flow::Continue);
        }

        let lines: Vec<String> = self
            .store
            .search(field, &query)
            .into_iter()
            .map(BookStore::format)
            .collect();

        if lines.is_empty() {
            self.notify(Notice::warning("No matching books found."))?;
        } else {
            writeln!(self.writer, "Matching Books:")?;
            for line in lines {
                writeln!(self.writer, "{}", line)?;
            }
        }

        Ok(Flow::Continue)
    }

    fn display_all(&mut self) -> Result<Flow> {
        self.heading(MenuAction::DisplayAll)?;

        if self.store.is_empty() {
            self.notify(Notice::info("Your library is empty."))?;
            return Ok(Flow::Continue);
        }

        for (n, book) in self.store.list_all() {
            writeln!(self.writer, "{}. {}", n, book)?;
        }

        Ok(Flow::Continue)
    }

    fn display_statistics(&mut self) -> Result<Flow> {
        self.heading(MenuAction::DisplayStatistics)?;

        let stats = self.store.statistics();
        if stats.is_empty() {
            self.notify(Notice::info("No books to show statistics."))?;
        } else {
            writeln!(self.writer, "{}", stats)?;
        }

        Ok(Flow::Continue)
    }

    // =========================================================================
    // I/O Helpers
    // =========================================================================

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "=== Personal Library Manager ===")?;
        for action in MenuAction::ALL {
            writeln!(self.writer, "{}. {}", action.number(), action.label())?;
        }
        Ok(())
    }

    fn heading(&mut self, action: MenuAction) -> Result<()> {
        writeln!(self.writer, "--- {} ---", action.label())?;
        Ok(())
    }

    fn farewell(&mut self) -> Result<()> {
        writeln!(self.writer, "Thanks for using Library Manager!")?;
        writeln!(self.writer, "Your data has been saved automatically.")?;
        self.writer.flush()?;
        Ok(())
    }

    fn notify(&mut self, notice: Notice) -> Result<()> {
        writeln!(self.writer, "{}", notice)?;
        Ok(())
    }

    /// Print `label: ` and read one line
    ///
    /// Returns `None` at end of input. The line terminator is stripped and
    /// invalid UTF-8 is replaced rather than ending the session.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.writer, "{}: ", label)?;
        self.writer.flush()?;

        let mut raw = Vec::new();
        if self.reader.read_until(b'\n', &mut raw)? == 0 {
            return Ok(None);
        }

        let mut line = String::from_utf8_lossy(&raw).into_owned();

        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);

        Ok(Some(line))
    }
}
