//! Write command handler

use session_log::config::Config;
use session_log::{LogWriter, MessageCategory};

/// Append `messages` under `category` to the log described by `config`.
///
/// Prints the resolved log file path when at least one message passed the
/// threshold.
///
/// # Errors
///
/// Returns a printable message if the log directory cannot be prepared or a
/// write fails.
pub fn run(config: &Config, category: MessageCategory, messages: &[String]) -> Result<(), String> {
    let threshold = config.logging.threshold().map_err(|e| e.to_string())?;

    let directory = config.logging.directory();
    std::fs::create_dir_all(&directory).map_err(|e| {
        format!("Failed to create log directory {}: {e}", directory.display())
    })?;

    let writer = LogWriter::new(&directory, threshold, config.logging.overwrite)
        .map_err(|e| format!("Failed to open log in {}: {e}", directory.display()))?;

    if !writer.is_enabled(category) {
        println!(
            "✓ Skipped {} message(s): [{category}] is below level '{}'",
            messages.len(),
            writer.threshold()
        );
        return Ok(());
    }

    writer
        .write_each(category, messages)
        .map_err(|e| format!("Failed to write to {}: {e}", writer.path().display()))?;
    println!("✓ Wrote {} line(s) to {}", messages.len(), writer.path().display());
    Ok(())
}
