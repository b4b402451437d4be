// file: src/utils/mod.rs
// description: utility functions module exports
// reference: internal module structure

pub mod logging;

pub use logging::{format_cleaned, format_log_file, format_stage, init_tracing};
