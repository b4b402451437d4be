// file: src/utils/logging.rs
// description: Tracing subscriber initialization and colored status lines for the driver

use crate::models::Severity;
use colored::*;
use std::path::Path;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub fn init_tracing(colored_output: bool, verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::new(level);

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .compact()
        .with_writer(std::io::stderr)
        .with_ansi(colored_output);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Info => Color::Cyan,
        Severity::Warning => Color::Yellow,
        Severity::Error => Color::Red,
    }
}

/// Header for one stage of the demo session, tagged with the severity it exercises.
pub fn format_stage(step: usize, total: usize, severity: Severity, msg: &str) -> String {
    format!(
        "{} {} {}",
        format!("[{}/{}]", step, total).bold(),
        severity.label().color(severity_color(severity)).bold(),
        msg
    )
}

/// Summary of the log file after a run; `lines` is `None` when nothing was written.
pub fn format_log_file(path: &Path, lines: Option<usize>) -> String {
    match lines {
        Some(count) => format!(
            "{} {} ({} lines)",
            "✓".green().bold(),
            path.display(),
            count
        ),
        None => format!(
            "{} {} was not written",
            "⚠".yellow().bold(),
            path.display()
        ),
    }
}

pub fn format_cleaned(path: &Path, existed: bool) -> String {
    if existed {
        format!("{} removed {}", "✓".green().bold(), path.display())
    } else {
        format!("{} {} did not exist", "⚠".yellow().bold(), path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::strip_ansi;

    #[test]
    fn test_status_lines_keep_message() {
        let path = Path::new("logs.txt");
        assert_eq!(
            strip_ansi(&format_stage(2, 4, Severity::Warning, "warning")),
            "[2/4] WARNING warning"
        );
        assert_eq!(strip_ansi(&format_log_file(path, Some(3))), "✓ logs.txt (3 lines)");
        assert_eq!(strip_ansi(&format_log_file(path, None)), "⚠ logs.txt was not written");
        assert_eq!(strip_ansi(&format_cleaned(path, false)), "⚠ logs.txt did not exist");
    }
}
