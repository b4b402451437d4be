// file: src/logger.rs
// description: leveled logger printing colored lines and mirroring plain text to a file
// reference: ansi escape codes, append-only text logs

use crate::config::{DEFAULT_LOG_PATH, LoggerConfig};
use crate::error::Result;
use crate::format::ansi::{BOLD, RESET};
use crate::format::timestamp::{self, TimestampMode};
use crate::format::{color_for, format_date, format_time, strip_ansi};
use crate::models::{IntoSeverity, Severity};
use chrono::NaiveDateTime;
use std::fs::{self, OpenOptions};
use std::io::{self, Stdout, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Prints colored, severity-tagged lines to a console sink and optionally
/// appends a color-stripped copy of each line to a log file.
///
/// Not synchronized: concurrent writers to the same log file may interleave.
pub struct Logger<W: Write = Stdout> {
    severity: Severity,
    log_to_file: bool,
    captured_at: NaiveDateTime,
    timestamp_mode: TimestampMode,
    log_path: PathBuf,
    console: W,
}

impl Logger<Stdout> {
    pub fn new(severity: Severity, log_to_file: bool) -> Self {
        Self::with_console(io::stdout(), severity, log_to_file)
    }

    pub fn from_config(config: &LoggerConfig) -> Self {
        Self::new(config.severity, config.log_to_file)
            .with_log_path(&config.log_path)
            .with_timestamp_mode(config.timestamp_mode)
    }
}

impl Default for Logger<Stdout> {
    fn default() -> Self {
        Self::new(Severity::default(), false)
    }
}

impl<W: Write> Logger<W> {
    pub fn with_console(console: W, severity: Severity, log_to_file: bool) -> Self {
        Self {
            severity,
            log_to_file,
            captured_at: timestamp::now(),
            timestamp_mode: TimestampMode::Captured,
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
            console,
        }
    }

    pub fn with_log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_path = path.into();
        self
    }

    /// Replaces the instant captured at construction.
    pub fn with_timestamp(mut self, at: NaiveDateTime) -> Self {
        self.captured_at = at;
        self
    }

    pub fn with_timestamp_mode(mut self, mode: TimestampMode) -> Self {
        self.timestamp_mode = mode;
        self
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn file_logging_enabled(&self) -> bool {
        self.log_to_file
    }

    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    pub fn captured_at(&self) -> NaiveDateTime {
        self.captured_at
    }

    pub fn timestamp_mode(&self) -> TimestampMode {
        self.timestamp_mode
    }

    pub fn console(&self) -> &W {
        &self.console
    }

    pub fn reset(&mut self) {
        self.severity = Severity::Info;
    }

    /// Fails with `InvalidSeverity` and leaves the current level untouched
    /// when `level` does not name one of the three severities.
    pub fn set_severity(&mut self, level: impl IntoSeverity) -> Result<()> {
        let severity = level.into_severity()?;
        debug!(from = %self.severity, to = %severity, "severity changed");
        self.severity = severity;
        Ok(())
    }

    pub fn enable_file_logging(&mut self) {
        self.log_to_file = true;
    }

    pub fn disable_file_logging(&mut self) {
        self.log_to_file = false;
    }

    /// Removes the log file. A missing file is not an error.
    pub fn clean_logs(&self) -> Result<()> {
        match fs::remove_file(&self.log_path) {
            Ok(()) => {
                debug!(path = %self.log_path.display(), "log file removed");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn log(&mut self, message: &str) -> Result<()> {
        match self.severity {
            Severity::Info => self.info(message),
            Severity::Warning => self.warning(message),
            Severity::Error => self.error(message),
        }
    }

    pub fn info(&mut self, message: &str) -> Result<()> {
        self.emit(Severity::Info, message)
    }

    pub fn warning(&mut self, message: &str) -> Result<()> {
        self.emit(Severity::Warning, message)
    }

    pub fn error(&mut self, message: &str) -> Result<()> {
        self.emit(Severity::Error, message)
    }

    /// Builds the colored console line for `message`. The message itself is
    /// not escaped.
    pub fn format_line(&self, severity: Severity, message: &str) -> String {
        let at = match self.timestamp_mode {
            TimestampMode::Captured => self.captured_at,
            TimestampMode::PerCall => timestamp::now(),
        };
        let color = color_for(severity);

        format!(
            "{BOLD}{color}[{} at {}] {}:{RESET}{color} {message}",
            format_date(&at),
            format_time(&at),
            severity.label(),
        )
    }

    fn emit(&mut self, severity: Severity, message: &str) -> Result<()> {
        let line = self.format_line(severity, message);

        // the file goes first so a failed append never reaches the console
        if self.log_to_file {
            self.append_to_file(&line)?;
        }

        writeln!(self.console, "{line}")?;
        writeln!(self.console, "{RESET}")?;
        Ok(())
    }

    fn append_to_file(&self, line: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)?;
        writeln!(file, "{}", strip_ansi(line))?;
        Ok(())
    }
}
