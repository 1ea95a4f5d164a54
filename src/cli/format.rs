//! Output formatting for CLI display.

use crossterm::style::Stylize;

/// A user-facing error line: `ERROR: <message>`, red when `color` is set.
pub fn format_error(message: &str, color: bool) -> String {
    if color {
        format!("{} {message}", "ERROR:".red().bold())
    } else {
        format!("ERROR: {message}")
    }
}
