//! File-backed log writer.
//!
//! A [`LogWriter`] resolves its target file once, at construction, and then
//! opens the file in append mode for every message it accepts. No handle is
//! kept between calls.

use std::error::Error;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use chrono::Local;

use super::level::{MessageCategory, VerbosityLevel};
use crate::config::LoggingConfig;

/// File name used in overwrite mode.
pub const OVERWRITE_FILE_NAME: &str = "log.txt";

/// `chrono` format of the timestamp embedded in session file names.
pub const SESSION_STAMP_FORMAT: &str = "%d-%m-%Y_%H-%M-%S";

/// `chrono` format of the timestamp that starts every log line.
pub const LINE_STAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Maximum number of errors of a `source()` chain written by [`LogWriter::exception`].
pub const MAX_CAUSE_DEPTH: usize = 32;

/// Writes leveled, categorized messages to a single log file.
#[derive(Debug)]
pub struct LogWriter {
    directory: PathBuf,
    overwrite: bool,
    path: PathBuf,
    threshold: VerbosityLevel,
    append_lock: Mutex<()>,
}

impl LogWriter {
    /// Create a writer for `directory`.
    ///
    /// With `overwrite` set, the writer targets `directory/log.txt` and deletes
    /// any existing file of that name right away. Otherwise it targets
    /// `directory/log-<dd-MM-yyyy_HH-mm-ss>.txt`, stamped with the current local
    /// time. Writers created within the same second share that name.
    ///
    /// The file itself is only created by the first accepted message.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if an existing `log.txt` cannot be removed.
    pub fn new(
        directory: impl Into<PathBuf>,
        threshold: VerbosityLevel,
        overwrite: bool,
    ) -> io::Result<Self> {
        let directory = directory.into();
        let path = if overwrite {
            let path = directory.join(OVERWRITE_FILE_NAME);
            remove_if_exists(&path)?;
            path
        } else {
            directory.join(session_file_name())
        };

        Ok(Self {
            directory,
            overwrite,
            path,
            threshold,
            append_lock: Mutex::new(()),
        })
    }

    /// Create a writer from the `[logging]` section of the configuration.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidInput` error if the configured level does not parse,
    /// or the I/O error of [`LogWriter::new`].
    pub fn from_config(config: &LoggingConfig) -> io::Result<Self> {
        let threshold = config
            .threshold()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        Self::new(config.directory(), threshold, config.overwrite)
    }

    /// Full path of the log file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory the log file lives in.
    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Configured threshold.
    #[must_use]
    pub const fn threshold(&self) -> VerbosityLevel {
        self.threshold
    }

    /// Whether the writer reuses `log.txt`.
    #[must_use]
    pub const fn overwrite(&self) -> bool {
        self.overwrite
    }

    /// Returns `true` if messages of `category` pass the threshold.
    #[must_use]
    pub fn is_enabled(&self, category: MessageCategory) -> bool {
        self.threshold.allows(category.required_level())
    }

    /// Write one message of `category`. A no-op when the category is below the threshold.
    ///
    /// # Errors
    ///
    /// Returns the I/O error raised while opening or appending to the log file.
    pub fn write(&self, category: MessageCategory, message: &str) -> io::Result<()> {
        if !self.is_enabled(category) {
            return Ok(());
        }
        let line = format_message(message, category);
        self.append(|file| writeln!(file, "{line}"))
    }

    /// Write an error message.
    ///
    /// # Errors
    ///
    /// See [`LogWriter::write`].
    pub fn error(&self, message: &str) -> io::Result<()> {
        self.write(MessageCategory::Error, message)
    }

    /// Write a warning message.
    ///
    /// # Errors
    ///
    /// See [`LogWriter::write`].
    pub fn warning(&self, message: &str) -> io::Result<()> {
        self.write(MessageCategory::Warning, message)
    }

    /// Write an important message.
    ///
    /// # Errors
    ///
    /// See [`LogWriter::write`].
    pub fn important_message(&self, message: &str) -> io::Result<()> {
        self.write(MessageCategory::ImportantMessage, message)
    }

    /// Write an info message.
    ///
    /// # Errors
    ///
    /// See [`LogWriter::write`].
    pub fn info(&self, message: &str) -> io::Result<()> {
        self.write(MessageCategory::Info, message)
    }

    /// Write several error messages, one append per message, in order.
    ///
    /// # Errors
    ///
    /// Stops at the first failed append. Messages before it stay written.
    pub fn errors<I>(&self, messages: I) -> io::Result<()>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.write_each(MessageCategory::Error, messages)
    }

    /// Write several warning messages, one append per message, in order.
    ///
    /// # Errors
    ///
    /// Stops at the first failed append. Messages before it stay written.
    pub fn warnings<I>(&self, messages: I) -> io::Result<()>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.write_each(MessageCategory::Warning, messages)
    }

    /// Write several important messages, one append per message, in order.
    ///
    /// # Errors
    ///
    /// Stops at the first failed append. Messages before it stay written.
    pub fn important_messages<I>(&self, messages: I) -> io::Result<()>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.write_each(MessageCategory::ImportantMessage, messages)
    }

    /// Write several info messages, one append per message, in order.
    ///
    /// # Errors
    ///
    /// Stops at the first failed append. Messages before it stay written.
    pub fn infos<I>(&self, messages: I) -> io::Result<()>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.write_each(MessageCategory::Info, messages)
    }

    /// Write an error together with its chain of causes.
    ///
    /// Gated like [`LogWriter::error`]. For `error` and every error reachable
    /// through [`Error::source`], outermost first, two lines are appended: an
    /// `[Error]` line with the error's `Display` text, then the unprefixed
    /// `Debug` rendering of the error. At most [`MAX_CAUSE_DEPTH`] errors of
    /// the chain are written.
    ///
    /// A derived `Debug` usually prints the nested causes as well, so the
    /// trace line of an outer error repeats every error below it and the
    /// block grows quadratically with the chain length. Implement `Debug` by
    /// hand on deeply nested error types to keep the log compact.
    ///
    /// # Errors
    ///
    /// Returns the first I/O error. Blocks of outer errors stay written.
    pub fn exception(&self, error: &(dyn Error + 'static)) -> io::Result<()> {
        if !self.is_enabled(MessageCategory::Error) {
            return Ok(());
        }

        let mut current = Some(error);
        let mut depth = 0;
        while let Some(err) = current {
            if depth == MAX_CAUSE_DEPTH {
                break;
            }
            let line = format_message(&err.to_string(), MessageCategory::Error);
            let trace = format!("{err:?}");
            self.append(|file| {
                writeln!(file, "{line}")?;
                writeln!(file, "{trace}")
            })?;
            current = err.source();
            depth += 1;
        }
        Ok(())
    }

    /// Write several messages of `category`, one append per message, in order.
    ///
    /// # Errors
    ///
    /// Stops at the first failed append. Messages before it stay written.
    pub fn write_each<I>(&self, category: MessageCategory, messages: I) -> io::Result<()>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for message in messages {
            self.write(category, message.as_ref())?;
        }
        Ok(())
    }

    /// One append cycle: lock, open, write, close.
    fn append<F>(&self, write: F) -> io::Result<()>
    where
        F: FnOnce(&mut File) -> io::Result<()>,
    {
        let _guard = self
            .append_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        write(&mut file)?;
        file.flush()
    }
}

/// Format one log line: `<timestamp>: [<Category>] - <message>`.
#[must_use]
pub fn format_message(message: &str, category: MessageCategory) -> String {
    format!(
        "{}: [{category}] - {message}",
        Local::now().format(LINE_STAMP_FORMAT)
    )
}

fn session_file_name() -> String {
    format!("log-{}.txt", Local::now().format(SESSION_STAMP_FORMAT))
}

fn remove_if_exists(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        other => other,
    }
}
