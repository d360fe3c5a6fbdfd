use std::fmt::Display;

use colored::Colorize;

/// Print a note about the key that is not an error, e.g. nothing to show.
pub fn notice(msg: &str) {
    println!("  {} {}", "ℹ".cyan(), msg);
}

/// Print a command failure to stderr.
pub fn failure(err: &dyn Display) {
    eprintln!("  {} {} {err}", "✗".red(), "Error:".red().bold());
}

/// Print a section title of the profile view.
pub fn section(title: &str) {
    println!("\n{}", title.bold().underline());
}

/// Print one `label: value` line of a detail block.
pub fn field(label: &str, value: &str) {
    println!("  {} {}", format!("{label}:").dimmed(), value);
}

/// Print one bulleted list item.
pub fn item(msg: &str) {
    println!("    • {msg}");
}
