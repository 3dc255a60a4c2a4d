//! Config command handler

use crate::args::ConfigSubcommand;
use session_log::config::Config;
use std::io::{self, BufRead, Write};

/// Dispatch config subcommands
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) {
    match subcommand {
        None | Some(ConfigSubcommand::Get { key: None }) => show_all(config),
        Some(ConfigSubcommand::Get { key: Some(key) }) => show_key(config, &key),
        Some(ConfigSubcommand::Set { key, value }) => {
            exit_on_error(config.set(&key, &value));
            persist(config);
            println!("✓ Set {key} = {}", config.get(&key).unwrap_or(value));
        }
        Some(ConfigSubcommand::Unset { key }) => {
            exit_on_error(config.unset(&key, defaults));
            persist(config);
            println!("✓ Reset {key} to default");
        }
        Some(ConfigSubcommand::Reset) => reset(),
    }
}

fn show_all(config: &Config) {
    println!("\n=== Configuration ({}) ===\n", Config::get_config_file_path().display());
    print!("{config}");
    if let Err(e) = config.logging.threshold() {
        eprintln!("\n✗ {e}");
    }
}

fn show_key(config: &Config, key: &str) {
    match config.get(key) {
        Some(value) => println!("{value}"),
        None => eprintln!("Unknown config key: '{key}' (expected location, level or overwrite)"),
    }
}

fn exit_on_error(result: Result<(), String>) {
    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn persist(config: &Config) {
    if let Err(e) = config.save() {
        eprintln!("Failed to save config: {e}");
        std::process::exit(1);
    }
}

fn reset() {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return;
    }

    print!("Are you sure you want to reset config to defaults? (y/n): ");
    io::stdout().flush().ok();

    if !confirm(&mut io::stdin().lock()) {
        println!("✗ Reset cancelled");
        return;
    }

    if let Err(e) = Config::reset() {
        eprintln!("Failed to remove config file: {e}");
        std::process::exit(1);
    }
    println!("✓ Config reset to defaults");
}

/// Read one answer line and return `true` for `y`/`yes` (case-insensitive).
fn confirm(input: &mut impl BufRead) -> bool {
    let mut response = String::new();
    if input.read_line(&mut response).is_err() {
        return false;
    }
    let answer = response.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}
