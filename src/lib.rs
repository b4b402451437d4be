// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod format;
pub mod logger;
pub mod models;
pub mod utils;

pub use config::LoggerConfig;
pub use error::{LoggerError, Result};
pub use format::{TimestampMode, format_date, format_time, strip_ansi};
pub use logger::Logger;
pub use models::{IntoSeverity, Severity};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let _config = LoggerConfig::default();
        let _logger: Logger = Logger::from_config(&_config);
    }
}
