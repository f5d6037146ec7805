//! Menu action definitions
//!
//! The six entries of the main menu.

/// Menu entries, numbered as displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum MenuAction {
    AddBook = 1,
    RemoveBook = 2,
    SearchBooks = 3,
    DisplayAll = 4,
    DisplayStatistics = 5,
    Exit = 6,
}

impl MenuAction {
    /// Every action in display order
    pub const ALL: [MenuAction; 6] = [
        MenuAction::AddBook,
        MenuAction::RemoveBook,
        MenuAction::SearchBooks,
        MenuAction::DisplayAll,
        MenuAction::DisplayStatistics,
        MenuAction::Exit,
    ];

    /// Number shown next to the action
    pub fn number(&self) -> u8 {
        *self as u8
    }

    /// Menu label
    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::AddBook => "Add a Book",
            MenuAction::RemoveBook => "Remove a Book",
            MenuAction::SearchBooks => "Search for a Book",
            MenuAction::DisplayAll => "Display All Books",
            MenuAction::DisplayStatistics => "Display Statistics",
            MenuAction::Exit => "Exit",
        }
    }

    /// Parse a user's choice: the menu number or a keyword
    ///
    /// Keywords are matched on the first word, ignoring case
    /// (`add`, `remove`, `search`, `list`, `stats`, `exit`, ...).
    pub fn parse(input: &str) -> Option<Self> {
        let word = input.split_whitespace().next()?.to_ascii_lowercase();

        if let Ok(n) = word.parse::<u8>() {
            return Self::ALL.into_iter().find(|action| action.number() == n);
        }

        match word.as_str() {
            "add" | "new" => Some(MenuAction::AddBook),
            "remove" | "delete" | "rm" => Some(MenuAction::RemoveBook),
            "search" | "find" => Some(MenuAction::SearchBooks),
            "list" | "display" | "all" | "ls" => Some(MenuAction::DisplayAll),
            "stats" | "statistics" => Some(MenuAction::DisplayStatistics),
            "exit" | "quit" | "q" => Some(MenuAction::Exit),
            _ => None,
        }
    }
}
