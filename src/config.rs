//! Configuration module for `session-log`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::logger::{ParseLevelError, VerbosityLevel};

/// Default configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Token expanded to the config directory inside config values.
const DIR_VARIABLE: &str = "$SESSION_LOG";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Directory the log files are written to
    #[serde(default)]
    pub location: String,
    /// Verbosity threshold (none, errors, warning, important-messages, all)
    #[serde(default)]
    pub level: String,
    /// Reuse `log.txt` instead of creating one file per session
    #[serde(default)]
    pub overwrite: bool,
}

impl LoggingConfig {
    /// Parse the configured level.
    ///
    /// # Errors
    ///
    /// Returns an error if `level` is not a known verbosity level.
    pub fn threshold(&self) -> Result<VerbosityLevel, ParseLevelError> {
        self.level.parse()
    }

    /// The configured log directory as a path.
    #[must_use]
    pub fn directory(&self) -> PathBuf {
        PathBuf::from(&self.location)
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override log directory
    pub location: Option<String>,
    /// Override verbosity threshold
    pub level: Option<String>,
    /// Override overwrite flag
    pub overwrite: Option<bool>,
}

impl Config {
    /// Get the `$SESSION_LOG` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/sessionlog`
    /// - macOS: `~/Library/Application Support/sessionlog`
    /// - Windows: `%APPDATA%\sessionlog`
    #[must_use]
    pub fn get_sessionlog_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("sessionlog")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Used when loading an existing config file so that fields added in a newer
    /// version pick up their defaults. Only string fields that are empty here and
    /// non-empty in `defaults` are updated.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    #[allow(clippy::useless_let_if_seq)]
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        if self.logging.location.is_empty() && !defaults.logging.location.is_empty() {
            self.logging.location.clone_from(&defaults.logging.location);
            changed = true;
        }
        if self.logging.level.is_empty() && !defaults.logging.level.is_empty() {
            self.logging.level.clone_from(&defaults.logging.level);
            changed = true;
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Only non-`None` values replace config values. The config file itself is
    /// not touched.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(location) = &overrides.location {
            self.logging.location = Self::expand_variables(location);
        }
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(overwrite) = overrides.overwrite {
            self.logging.overwrite = overwrite;
        }
    }

    /// Get the user config file path
    ///
    /// - `config.toml` for release builds
    /// - `dconfig.toml` for debug builds
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_sessionlog_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$SESSION_LOG` variable in a string
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let dir = Self::get_sessionlog_dir();
            value.replace(DIR_VARIABLE, dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Missing fields use their serde defaults. `$SESSION_LOG` in `location`
    /// is expanded.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;
        config.logging.location = Self::expand_variables(&config.logging.location);
        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML. The defaults
    /// are compiled into the binary, so this points to a build problem.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create from defaults if not found
    ///
    /// - If the config file exists: loads it, merges missing fields from defaults
    ///   and saves the file again when something was added.
    /// - On first run: creates the config directory and writes the defaults.
    ///
    /// Falls back to defaults if the file cannot be read or parsed.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    if config.merge_defaults(&defaults) {
                        let _ = config.save();
                    }
                    return config;
                }
            }
        } else {
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = defaults.save();
            return defaults;
        }

        defaults
    }

    /// Save configuration to file
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be created or the file
    /// cannot be written.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `location`, `level`, `overwrite`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "location" | "dir" => Some(self.logging.location.clone()),
            "level" => Some(self.logging.level.clone()),
            "overwrite" => Some(self.logging.overwrite.to_string()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Values are validated: `level` must be a known verbosity level and
    /// `overwrite` a boolean. Call [`save()`](Config::save) to persist changes.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized or the value does not parse.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "location" | "dir" => self.logging.location = Self::expand_variables(value),
            "level" => {
                let level = value
                    .parse::<VerbosityLevel>()
                    .map_err(|e| e.to_string())?;
                self.logging.level = level.to_string();
            }
            "overwrite" => {
                self.logging.overwrite = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'overwrite': '{value}'"))?;
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "location" | "dir" => self.logging.location.clone_from(&defaults.logging.location),
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "overwrite" => self.logging.overwrite = defaults.logging.overwrite,
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults
    ///
    /// Deletes the configuration file so the next [`load()`](Config::load)
    /// recreates it. Succeeds if there is no file.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted.
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  location = \"{}\"", self.logging.location)?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  overwrite = {}", self.logging.overwrite)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_parse_and_have_valid_level() {
        let config = Config::from_defaults();
        assert!(!config.logging.location.is_empty());
        assert!(config.logging.threshold().is_ok());
        assert!(!config.logging.location.contains(DIR_VARIABLE));
    }

    #[test]
    fn expand_variables_leaves_plain_values() {
        assert_eq!(Config::expand_variables("/var/log/app"), "/var/log/app");
    }

    #[test]
    fn expand_variables_replaces_token() {
        let expanded = Config::expand_variables("$SESSION_LOG/logs");
        let dir = Config::get_sessionlog_dir();
        assert_eq!(PathBuf::from(expanded), dir.join("logs"));
    }
}
