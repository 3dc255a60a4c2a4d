//! Leveled file logger.
//!
//! - [`VerbosityLevel`] is the threshold a [`LogWriter`] is configured with.
//! - [`MessageCategory`] tags every line and maps to the level it requires.
//! - [`LogWriter`] owns the resolved log file and performs the writes.
//!
//! The `error!`, `warning!`, `important!` and `info!` macros format their
//! arguments and hand the result to a writer.

mod level;
mod writer;

pub use level::{MessageCategory, ParseLevelError, VerbosityLevel};
pub use writer::{
    format_message, LogWriter, LINE_STAMP_FORMAT, MAX_CAUSE_DEPTH, OVERWRITE_FILE_NAME,
    SESSION_STAMP_FORMAT,
};

#[macro_export]
/// Writes a formatted error message through a [`LogWriter`](crate::logger::LogWriter).
macro_rules! error {
    ($writer:expr, $($arg:tt)*) => {
        $writer.write($crate::logger::MessageCategory::Error, &::std::format!($($arg)*))
    };
}

#[macro_export]
/// Writes a formatted warning message through a [`LogWriter`](crate::logger::LogWriter).
macro_rules! warning {
    ($writer:expr, $($arg:tt)*) => {
        $writer.write($crate::logger::MessageCategory::Warning, &::std::format!($($arg)*))
    };
}

#[macro_export]
/// Writes a formatted important message through a [`LogWriter`](crate::logger::LogWriter).
macro_rules! important {
    ($writer:expr, $($arg:tt)*) => {
        $writer.write(
            $crate::logger::MessageCategory::ImportantMessage,
            &::std::format!($($arg)*),
        )
    };
}

#[macro_export]
/// Writes a formatted info message through a [`LogWriter`](crate::logger::LogWriter).
macro_rules! info {
    ($writer:expr, $($arg:tt)*) => {
        $writer.write($crate::logger::MessageCategory::Info, &::std::format!($($arg)*))
    };
}
