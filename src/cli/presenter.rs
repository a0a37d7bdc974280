//! CLI presenter for output formatting

use std::io::{self, Write};

use colored::*;

/// Presenter for CLI output formatting.
///
/// Operator messages go to stderr; exported data goes to stdout so it can
/// be piped or redirected.
pub struct Presenter;

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print a notice the operator has to act on
    pub fn notice(&self, message: &str) {
        eprintln!("{} {}", "‼".magenta().bold(), message.bold());
    }

    /// Render the navigator control
    pub fn control(&self, label: &str) {
        eprintln!("{}", Self::format_control(label).cyan().bold());
    }

    /// Output text to stdout (export payloads)
    pub fn output(&self, text: &str) {
        println!("{}", text);
        let _ = io::stdout().flush();
    }

    /// Print a key-value pair (for config list and status)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }

    /// Print one collected item, marking whether it has a media URL
    pub fn list_entry(&self, position: usize, title: &str, url: &str, captured: bool) {
        let mark = if captured {
            "●".green()
        } else {
            "○".dimmed()
        };
        println!("{} {:>3}. {} {}", mark, position, title, url.dimmed());
    }

    /// Format the navigator control text
    pub fn format_control(label: &str) -> String {
        format!("[ {} ]", label)
    }

    /// Shorten long URLs for one-line messages
    pub fn shorten(text: &str, max_chars: usize) -> String {
        if text.chars().count() <= max_chars {
            return text.to_string();
        }
        let head: String = text.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}…", head)
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}
