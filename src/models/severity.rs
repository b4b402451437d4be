// file: src/models/severity.rs
// description: severity levels accepted by the logger and their conversions
// reference: https://doc.rust-lang.org/std/str/trait.FromStr.html

use crate::error::{LoggerError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Severity {
    #[default]
    Info = 0,
    Warning = 1,
    Error = 2,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Info, Severity::Warning, Severity::Error];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }

    /// Uppercase tag printed in every emitted line.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "info" => Ok(Severity::Info),
            "warning" | "warn" => Ok(Severity::Warning),
            "error" => Ok(Severity::Error),
            _ => Err(LoggerError::InvalidSeverity(s.to_string())),
        }
    }
}

impl TryFrom<String> for Severity {
    type Error = LoggerError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl TryFrom<u8> for Severity {
    type Error = LoggerError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Severity::Info),
            1 => Ok(Severity::Warning),
            2 => Ok(Severity::Error),
            other => Err(LoggerError::InvalidSeverity(other.to_string())),
        }
    }
}

/// Candidate values accepted by `Logger::set_severity`.
pub trait IntoSeverity {
    fn into_severity(self) -> Result<Severity>;
}

impl IntoSeverity for Severity {
    fn into_severity(self) -> Result<Severity> {
        Ok(self)
    }
}

impl IntoSeverity for &str {
    fn into_severity(self) -> Result<Severity> {
        self.parse()
    }
}

impl IntoSeverity for String {
    fn into_severity(self) -> Result<Severity> {
        self.as_str().parse()
    }
}

impl IntoSeverity for u8 {
    fn into_severity(self) -> Result<Severity> {
        Severity::try_from(self)
    }
}
