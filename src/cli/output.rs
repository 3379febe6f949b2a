//! Shared CLI output helpers for consistent terminal output.
//!
//! Color scheme (disabled automatically when stdout is not a terminal):
//! - Green: success, checkmarks
//! - Red: errors
//! - Yellow: warnings
//! - Cyan: paths, hints
//! - Bold: headers, generated passwords
//! - Dimmed: secondary info

use console::style;
use std::fmt::Display;
use std::io::{self, Write as IoWrite};

const RULE_WIDTH: usize = 40;

/// Print a success message with checkmark (green).
///
/// Example: `✓ password saved`
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green(), msg);
}

/// Print an error message to stderr (red).
///
/// Example: `✗ invalid configuration: no character sets selected`
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red(), msg);
}

/// Print a warning message (yellow).
pub fn warn(msg: &str) {
    println!("{} {}", style("⚠").yellow(), msg);
}

/// Print a hint message (cyan).
///
/// Example: `→ run: strongpass wipe --yes`
pub fn hint(msg: &str) {
    println!("{} {}", style("→").cyan(), style(msg).cyan());
}

/// Print a bold header.
pub fn header(title: &str) {
    println!("{}", style(title).bold());
}

/// Print a key-value pair (label dimmed, value bold).
pub fn kv(label: &str, value: impl Display) {
    println!("  {}  {}", style(label).dim(), style(value).bold());
}

/// Print a list item with a leading dash.
///
/// Example: `- Tr0ub4dor&3`
pub fn list_item(item: &str) {
    println!("- {}", item);
}

/// Print a horizontal rule separator.
pub fn rule() {
    println!("{}", style("─".repeat(RULE_WIDTH)).dim());
}

/// Print a dimmed/secondary message.
///
/// Example: `no saved passwords`
pub fn dimmed(msg: &str) {
    println!("{}", style(msg).dim());
}

/// Print a value on its own line, unstyled, for copy and paste or piping.
pub fn data(value: &str) {
    println!("{}", value);
}

/// Print an empty line.
pub fn blank() {
    println!();
}

/// Format a path string in cyan.
pub fn path(p: impl Display) -> String {
    style(p).cyan().to_string()
}

/// Print a prompt without a trailing newline.
pub fn prompt(label: &str) {
    print!("{}: ", label);
    let _ = io::stdout().flush();
}

/// Print a section header with a separator line.
pub fn section(title: &str) {
    blank();
    header(title);
    rule();
}
