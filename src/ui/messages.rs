//! User-facing console messages.
//!
//! Every message is also emitted as a `tracing` event at the matching level,
//! so a log file captures what the user saw.

use crate::errors::AppResult;
use crate::utils::colors::{BOLD, CYAN, DIM, GREEN, RED, YELLOW, paint};
use std::fmt;
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

const TAG_INFO: &str = "info";
const TAG_OK: &str = "ok";
const TAG_WARN: &str = "warn";
const TAG_ERR: &str = "error";

/// `[tag]` label, bold and colored.
fn tag(color: &str, label: &str) -> String {
    paint(&format!("{BOLD}{color}"), &format!("[{label}]"))
}

pub fn info<T: fmt::Display>(msg: T) {
    tracing::info!(target: "timepunch::ui", "{msg}");
    println!("{} {msg}", tag(CYAN, TAG_INFO));
}

pub fn success<T: fmt::Display>(msg: T) {
    tracing::info!(target: "timepunch::ui", "{msg}");
    println!("{} {msg}", tag(GREEN, TAG_OK));
}

pub fn warning<T: fmt::Display>(msg: T) {
    tracing::warn!(target: "timepunch::ui", "{msg}");
    println!("{} {msg}", tag(YELLOW, TAG_WARN));
}

pub fn error<T: fmt::Display>(msg: T) {
    tracing::error!(target: "timepunch::ui", "{msg}");
    eprintln!("{} {msg}", tag(RED, TAG_ERR));
}

/// Section title used by `list`, underlined to its own width.
pub fn header<T: fmt::Display>(msg: T) {
    let title = msg.to_string();
    let rule = "-".repeat(UnicodeWidthStr::width(title.as_str()));
    println!();
    println!("{}", paint(BOLD, &title));
    println!("{}", paint(DIM, &rule));
}

/// Asks a yes/no question on stdin; anything but `y`/`yes` is a no.
/// A closed stdin also counts as no.
pub fn confirm(question: &str) -> AppResult<bool> {
    print!("{question} [y/N]: ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let ans = answer.trim().to_ascii_lowercase();

    Ok(ans == "y" || ans == "yes")
}
