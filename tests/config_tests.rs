//! Integration tests for configuration management

use session_log::config::{Config, ConfigOverrides, LoggingConfig};
use session_log::{LogWriter, VerbosityLevel};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    assert!(
        !config.logging.location.is_empty(),
        "Default log location should not be empty"
    );
    assert!(
        config.logging.threshold().is_ok(),
        "Default level should parse: {}",
        config.logging.level
    );
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
location = "/tmp/app-logs"
level = "important-messages"
overwrite = true
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.location, "/tmp/app-logs");
    assert_eq!(config.logging.level, "important-messages");
    assert!(config.logging.overwrite);
    assert_eq!(
        config.logging.threshold(),
        Ok(VerbosityLevel::ImportantMessages)
    );
    assert_eq!(config.logging.directory(), PathBuf::from("/tmp/app-logs"));
}

#[test]
fn test_config_from_toml_partial() {
    let toml_str = r#"
[logging]
level = "errors"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse partial TOML");

    assert_eq!(config.logging.level, "errors");
    assert_eq!(config.logging.location, "");
    assert!(!config.logging.overwrite);
}

#[test]
fn test_config_rejects_wrong_types() {
    let toml_str = r#"
[logging]
overwrite = "sometimes"
"#;
    assert!(Config::from_toml(toml_str).is_err());
}

#[test]
fn test_config_variable_expansion() {
    let toml_str = r#"
[logging]
location = "$SESSION_LOG/logs"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML with variables");

    assert!(config.logging.location.contains("sessionlog"));
    assert!(!config.logging.location.contains("$SESSION_LOG"));
}

#[test]
fn test_config_get_set() {
    let mut config = Config::from_defaults();

    assert!(config.get("level").is_some());

    config.set("level", "WARN").expect("Failed to set level");
    assert_eq!(config.get("level").unwrap(), "warning");

    config
        .set("overwrite", "true")
        .expect("Failed to set overwrite");
    assert_eq!(config.get("overwrite").unwrap(), "true");
    assert!(config.logging.overwrite);

    config.set("location", "/var/log/x").expect("Failed to set location");
    assert_eq!(config.get("location").unwrap(), "/var/log/x");

    assert!(config.get("unknown_key").is_none());
    assert!(config.set("unknown_key", "value").is_err());
}

#[test]
fn test_config_set_validates_values() {
    let mut config = Config::from_defaults();
    let before = config.logging.level.clone();

    let err = config.set("level", "chatty").unwrap_err();
    assert!(err.contains("chatty"));
    assert_eq!(config.logging.level, before);

    assert!(config.set("overwrite", "maybe").is_err());
}

#[test]
fn test_config_unset() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    config.set("level", "none").expect("Failed to set level");
    config.set("overwrite", &(!defaults.logging.overwrite).to_string()).unwrap();

    config.unset("level", &defaults).expect("Failed to unset level");
    config.unset("overwrite", &defaults).expect("Failed to unset overwrite");

    assert_eq!(config.logging.level, defaults.logging.level);
    assert_eq!(config.logging.overwrite, defaults.logging.overwrite);
    assert!(config.unset("nope", &defaults).is_err());
}

#[test]
fn test_config_save_and_load_roundtrip_through_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_file = temp_dir.path().join("config.toml");

    let mut config = Config::from_defaults();
    config.set("level", "errors").expect("Failed to set level");

    let toml_str = toml::to_string_pretty(&config).expect("Failed to serialize");
    fs::write(&config_file, toml_str).expect("Failed to write config");

    let content = fs::read_to_string(&config_file).expect("Failed to read config");
    let loaded = Config::from_toml(&content).expect("Failed to parse loaded config");

    assert_eq!(loaded.logging.level, "errors");
    assert_eq!(loaded.logging.location, config.logging.location);
    assert_eq!(loaded.logging.overwrite, config.logging.overwrite);
}

#[test]
fn test_config_overrides_apply() {
    let mut config = Config::from_defaults();

    let overrides = ConfigOverrides {
        location: Some("/custom/logs".to_string()),
        level: Some("none".to_string()),
        overwrite: Some(true),
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.location, "/custom/logs");
    assert_eq!(config.logging.level, "none");
    assert!(config.logging.overwrite);
}

#[test]
fn test_config_overrides_partial() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    let overrides = ConfigOverrides {
        level: Some("all".to_string()),
        ..Default::default()
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "all");
    assert_eq!(config.logging.location, defaults.logging.location);
    assert_eq!(config.logging.overwrite, defaults.logging.overwrite);
}

#[test]
fn test_config_display_format() {
    let config = Config::from_defaults();
    let display_str = format!("{config}");

    assert!(display_str.contains("[logging]"));
    assert!(display_str.contains("location"));
    assert!(display_str.contains("level"));
    assert!(display_str.contains("overwrite"));
}

#[test]
fn test_merge_defaults_adds_missing_fields() {
    let toml_str = r#"
[logging]
location = ""
level = ""
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse minimal config");
    let defaults = Config::from_defaults();

    assert!(
        config.merge_defaults(&defaults),
        "merge_defaults should return true when fields are added"
    );
    assert_eq!(config.logging.level, defaults.logging.level);
    assert_eq!(config.logging.location, defaults.logging.location);
}

#[test]
fn test_merge_defaults_preserves_existing() {
    let toml_str = r#"
[logging]
location = "/my/logs"
level = "errors"
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse config");
    let defaults = Config::from_defaults();

    assert!(!config.merge_defaults(&defaults));
    assert_eq!(config.logging.level, "errors");
    assert_eq!(config.logging.location, "/my/logs");
}

#[test]
fn test_get_sessionlog_dir() {
    let dir = Config::get_sessionlog_dir();

    assert!(dir.to_string_lossy().contains("sessionlog"));
    assert_ne!(dir, PathBuf::from("."));
}

#[test]
fn test_get_config_file_path() {
    let path = Config::get_config_file_path();

    let path_str = path.to_string_lossy();
    assert!(path_str.ends_with("config.toml") || path_str.ends_with("dconfig.toml"));
}

#[test]
fn test_writer_from_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let logging = LoggingConfig {
        location: temp_dir.path().to_string_lossy().to_string(),
        level: "warning".to_string(),
        overwrite: true,
    };

    let writer = LogWriter::from_config(&logging).expect("Failed to build writer");
    assert_eq!(writer.threshold(), VerbosityLevel::Warning);
    assert_eq!(writer.path(), temp_dir.path().join("log.txt"));

    writer.warning("from config").unwrap();
    writer.info("dropped").unwrap();
    let contents = fs::read_to_string(writer.path()).unwrap();
    assert_eq!(contents.lines().count(), 1);
}

#[test]
fn test_writer_from_config_rejects_bad_level() {
    let logging = LoggingConfig {
        location: ".".to_string(),
        level: "loud".to_string(),
        overwrite: false,
    };

    let err = LogWriter::from_config(&logging).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
}
