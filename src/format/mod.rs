// file: src/format/mod.rs
// description: line formatting module exports
// reference: internal module structure

pub mod ansi;
pub mod timestamp;

pub use ansi::{color_for, strip_ansi};
pub use timestamp::{TimestampMode, format_date, format_time};
