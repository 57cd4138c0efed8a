//! User-facing reporting
//!
//! Colored status output. Everything here goes to stderr so the match
//! stream on stdout stays clean enough to pipe; the one exception is the
//! preset table, which is the requested output of --list-presets.

use crate::filter::RunResult;
use crate::presets::PresetRegistry;

use colored::*;

/// Print an error message
pub fn print_error(text: &str) {
    eprintln!("{} {}", "✖".red(), text.red());
}

/// Print a warning message
pub fn print_warning(text: &str) {
    eprintln!("{} {}", "⚠".yellow(), text.yellow());
}

/// Print an info message
pub fn print_info(text: &str) {
    eprintln!("{} {}", "ℹ".cyan(), text);
}

/// Dump the registry table for --list-presets
pub fn print_preset_table(registry: &PresetRegistry) {
    println!("Available presets (--presets ID_OR_NAME ...):");
    println!("{:<10} {:<32} {}", "ID".green().bold(), "Name".green().bold(), "Description".green().bold());
    println!("{:-<9} {:-<31} {:-<40}", "", "", "");
    for preset in registry.list_all() {
        println!("{:<10} {:<32} {}", preset.short_id.green(), preset.long_name, preset.description);
    }
}

/// Print the end-of-run summary to stderr
pub fn print_summary(result: &RunResult, destination: &str) {
    eprintln!(
        "{} Processed {} passwords, matched {} (written to {})",
        "✔".green(),
        result.lines_seen.to_string().green(),
        result.lines_matched.to_string().green().bold(),
        destination
    );
}
