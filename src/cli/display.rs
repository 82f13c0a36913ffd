//! Terminal styling for report lines.
//!
//! Colors go through `console`, which drops them automatically when stdout
//! is not a terminal or `NO_COLOR` is set.

use console::style;

/// Column where the `[STATUS]` tag starts
pub const STATUS_COLUMN: usize = 60;

/// Color family of a status tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Failure,
    Warning,
}

/// `<message padded to 60> [STATUS]`
pub fn status_line(message: &str, status: &str, tone: Tone) -> String {
    let tag = match tone {
        Tone::Success => style(status).green(),
        Tone::Failure => style(status).red(),
        Tone::Warning => style(status).yellow(),
    };
    format!("{message:<STATUS_COLUMN$} [{tag}]")
}

/// Report banner with an `=` underline of matching width
pub fn banner(title: &str) -> String {
    format!(
        "{}\n{}",
        style(title).magenta().bold(),
        style("=".repeat(title.chars().count())).bold()
    )
}

pub fn section_header(title: &str) -> String {
    style(title).bold().to_string()
}

/// ` - <error>` bullet
pub fn error_item(message: &str) -> String {
    format!(" - {}", style(message).red())
}

pub fn warning(message: &str) -> String {
    style(format!("Warning: {message}")).yellow().to_string()
}

pub fn failure(message: &str) -> String {
    style(message).red().to_string()
}

pub fn summary_success(message: &str) -> String {
    style(format!("\u{2713} {message}")).green().bold().to_string()
}

pub fn summary_failure(message: &str) -> String {
    style(format!("\u{2717} {message}")).red().bold().to_string()
}
