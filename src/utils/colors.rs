//! Terminal styling shared by console output.

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Wraps `text` in `style`, resetting afterwards.
pub fn paint(style: &str, text: &str) -> String {
    format!("{style}{text}{RESET}")
}

