//! CLI argument definitions for `sessionlog`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use session_log::config::ConfigOverrides;
use session_log::{MessageCategory, VerbosityLevel};

/// CLI verbosity argument
///
/// Converts to the config string for storage and to `VerbosityLevel` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LevelArg {
    /// Write nothing
    None,
    /// Errors only
    Errors,
    /// Errors and warnings
    Warning,
    /// Errors, warnings and important messages
    ImportantMessages,
    /// Everything
    All,
}

impl From<LevelArg> for VerbosityLevel {
    fn from(arg: LevelArg) -> Self {
        match arg {
            LevelArg::None => Self::None,
            LevelArg::Errors => Self::Errors,
            LevelArg::Warning => Self::Warning,
            LevelArg::ImportantMessages => Self::ImportantMessages,
            LevelArg::All => Self::All,
        }
    }
}

impl std::fmt::Display for LevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", VerbosityLevel::from(*self))
    }
}

/// CLI message category argument
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum CategoryArg {
    /// `[Error]` lines
    Error,
    /// `[Warning]` lines
    Warning,
    /// `[ImportantMessage]` lines
    Important,
    /// `[Info]` lines
    Info,
}

impl From<CategoryArg> for MessageCategory {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Error => Self::Error,
            CategoryArg::Warning => Self::Warning,
            CategoryArg::Important => Self::ImportantMessage,
            CategoryArg::Info => Self::Info,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (`location`, `level`, `overwrite`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Append messages to the log.
    ///
    /// Each message becomes one line. Messages below the configured level are dropped.
    Write {
        /// Category of the messages
        #[arg(value_enum, value_name = "CATEGORY")]
        category: CategoryArg,

        /// Messages to append, in order
        #[arg(value_name = "MESSAGES", num_args = 1.., required = true)]
        messages: Vec<String>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "sessionlog",
    about = "Append leveled messages to a session log file",
    version = session_log::get_version()
)]
pub struct Cli {
    /// Override the log directory for this run
    #[arg(long, value_name = "DIR", global = true)]
    pub location: Option<PathBuf>,

    /// Override the verbosity level for this run
    #[arg(long, value_enum, global = true)]
    pub level: Option<LevelArg>,

    /// Override the overwrite flag for this run (true/false)
    #[arg(long, value_parser = BoolishValueParser::new(), global = true)]
    pub overwrite: Option<bool>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            location: self
                .location
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            level: self.level.map(|lvl| lvl.to_string()),
            overwrite: self.overwrite,
        }
    }
}
