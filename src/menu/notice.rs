//! Notice definitions
//!
//! Messages shown to the user after an action.

use std::fmt;

/// Notice severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Warning,
    Info,
    Error,
}

impl Level {
    pub fn prefix(&self) -> &'static str {
        match self {
            Level::Success => "Success",
            Level::Warning => "Warning",
            Level::Info => "Info",
            Level::Error => "Error",
        }
    }
}

/// A message to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Severity
    pub level: Level,

    /// Message text
    pub message: String,
}

impl Notice {
    /// Create a SUCCESS notice
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: Level::Success,
            message: message.into(),
        }
    }

    /// Create a WARNING notice
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: Level::Warning,
            message: message.into(),
        }
    }

    /// Create an INFO notice
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: Level::Info,
            message: message.into(),
        }
    }

    /// Create an ERROR notice
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.level.prefix(), self.message)
    }
}
