//! Leveled, file-based session logging.
//!
//! A [`LogWriter`] writes timestamped, categorized lines to one log file per
//! session (or to a reused `log.txt`), dropping messages below its configured
//! [`VerbosityLevel`].
//!
//! ```no_run
//! use session_log::{LogWriter, VerbosityLevel};
//!
//! # fn main() -> std::io::Result<()> {
//! let log = LogWriter::new("/tmp", VerbosityLevel::Warning, false)?;
//! log.warning("cache miss ratio above 40%")?;
//! log.info("not written, below the threshold")?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod logger;

pub use logger::{LogWriter, MessageCategory, VerbosityLevel};

/// Returns the current version of the `session-log` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
