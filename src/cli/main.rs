//! Command-line interface entry point for `sessionlog`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use session_log::config::Config;

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut config, &defaults);
        }
        Command::Write { category, messages } => {
            if let Err(e) = commands::write::run(&config, category.into(), &messages) {
                eprintln!("✗ {e}");
                std::process::exit(1);
            }
        }
    }
}
