// file: src/format/ansi.rs
// description: ansi color constants and escape sequence stripping
// reference: https://docs.rs/regex

use crate::models::Severity;
use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const CYAN: &str = "\x1b[0;36m";
pub const YELLOW: &str = "\x1b[1;33m";
pub const RED: &str = "\x1b[0;31m";

lazy_static! {
    // CSI sequences plus the single-character escape forms
    pub static ref ANSI_ESCAPE: Regex = Regex::new(
        r"\x1B(?:[@-Z\\-_]|\[[0-?]*[ -/]*[@-~])"
    ).expect("ANSI_ESCAPE regex is valid");
}

pub fn color_for(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => CYAN,
        Severity::Warning => YELLOW,
        Severity::Error => RED,
    }
}

/// Removes every ANSI escape sequence. Borrows the input when nothing matched.
pub fn strip_ansi(input: &str) -> Cow<'_, str> {
    ANSI_ESCAPE.replace_all(input, "")
}
