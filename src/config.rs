// file: src/config.rs
// description: logger construction options loaded from the environment
// reference: https://docs.rs/config

use crate::error::{LoggerError, Result};
use crate::format::TimestampMode;
use crate::models::Severity;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_LOG_PATH: &str = "logs.txt";
pub const ENV_PREFIX: &str = "LEVELED_LOGGER";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub severity: Severity,
    pub log_to_file: bool,
    pub log_path: PathBuf,
    pub timestamp_mode: TimestampMode,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            severity: Severity::Info,
            log_to_file: false,
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
            timestamp_mode: TimestampMode::Captured,
        }
    }
}

impl LoggerConfig {
    /// Reads `.env` then `LEVELED_LOGGER_*` variables; unset keys keep their defaults.
    pub fn load() -> Result<Self> {
        dotenv().ok();

        Self::from_env(ENV_PREFIX)
    }

    /// Reads `<prefix>_SEVERITY`, `<prefix>_LOG_TO_FILE` and so on. Keys are flat.
    pub fn from_env(prefix: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(
                config::Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| LoggerError::Config(e.to_string()))?;

        Self::from_settings(settings)
    }

    pub fn from_settings(settings: config::Config) -> Result<Self> {
        let config: LoggerConfig = settings
            .try_deserialize()
            .map_err(|e| LoggerError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.log_path.as_os_str().is_empty() {
            return Err(LoggerError::Config(
                "log_path must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
