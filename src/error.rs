// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Error, Debug)]
pub enum LoggerError {
    #[error("Invalid severity: {0} (expected info, warning or error)")]
    InvalidSeverity(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl LoggerError {
    pub fn is_invalid_severity(&self) -> bool {
        matches!(self, LoggerError::InvalidSeverity(_))
    }
}
