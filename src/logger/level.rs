//! Verbosity thresholds and message categories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Threshold deciding which messages reach the log file.
///
/// Levels are totally ordered: `None < Errors < Warning < ImportantMessages < All`.
/// A message is written when the configured threshold is at least the level
/// its category requires.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VerbosityLevel {
    /// Nothing is written.
    None = 0,
    /// Only errors are written.
    Errors = 1,
    /// Errors and warnings are written.
    Warning = 2,
    /// Errors, warnings and important messages are written.
    ImportantMessages = 3,
    /// Every entry is written.
    All = 4,
}

impl VerbosityLevel {
    /// All levels in ascending order.
    pub const ALL: [Self; 5] = [
        Self::None,
        Self::Errors,
        Self::Warning,
        Self::ImportantMessages,
        Self::All,
    ];

    /// Gate check: returns `true` if a message requiring `required` passes this threshold.
    #[must_use]
    pub fn allows(self, required: Self) -> bool {
        self >= required
    }

    /// Canonical lowercase name, as used in config files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Errors => "errors",
            Self::Warning => "warning",
            Self::ImportantMessages => "important-messages",
            Self::All => "all",
        }
    }
}

impl fmt::Display for VerbosityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a verbosity level cannot be parsed from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError {
    input: String,
}

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid logging level '{}' (expected none, errors, warning, important-messages or all)",
            self.input
        )
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for VerbosityLevel {
    type Err = ParseLevelError;

    /// Parse a level (case-insensitive). Accepts a few common aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "off" => Ok(Self::None),
            "errors" | "error" | "err" => Ok(Self::Errors),
            "warning" | "warnings" | "warn" => Ok(Self::Warning),
            "important"
            | "importantmessages"
            | "important-messages"
            | "important_messages" => Ok(Self::ImportantMessages),
            "all" | "info" => Ok(Self::All),
            _ => Err(ParseLevelError {
                input: s.to_string(),
            }),
        }
    }
}

/// Kind of a logged message. Selects the bracketed tag of a line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MessageCategory {
    /// Error message.
    Error,
    /// Warning message.
    Warning,
    /// Important message.
    ImportantMessage,
    /// Info message.
    Info,
}

impl MessageCategory {
    /// Threshold a writer needs for messages of this category to be written.
    #[must_use]
    pub const fn required_level(self) -> VerbosityLevel {
        match self {
            Self::Error => VerbosityLevel::Errors,
            Self::Warning => VerbosityLevel::Warning,
            Self::ImportantMessage => VerbosityLevel::ImportantMessages,
            Self::Info => VerbosityLevel::All,
        }
    }

    /// Tag text placed between the brackets of a log line.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Error => "Error",
            Self::Warning => "Warning",
            Self::ImportantMessage => "ImportantMessage",
            Self::Info => "Info",
        }
    }
}

impl fmt::Display for MessageCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
