// file: src/main.rs
// description: commandline demonstration driver for the leveled logger
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use leveled_logger::utils::{format_cleaned, format_log_file, format_stage};
use leveled_logger::{Logger, LoggerConfig, Severity};
use std::fs;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "leveled_logger")]
#[command(version = "0.1.0")]
#[command(about = "Leveled console logger with plain-text file mirroring", long_about = None)]
struct Cli {
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a short session covering every logger operation
    Demo {
        #[arg(long)]
        no_file: bool,
    },

    /// Log each message at a fixed severity
    Emit {
        #[arg(short, long, default_value = "info")]
        severity: Severity,

        #[arg(long)]
        to_file: bool,

        #[arg(required = true)]
        messages: Vec<String>,
    },

    /// Remove the log file
    Clean,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    leveled_logger::utils::init_tracing(cli.color, cli.verbose);

    let config = LoggerConfig::load().unwrap_or_else(|e| {
        warn!("Falling back to built-in defaults: {}", e);
        LoggerConfig::default()
    });
    info!("Log file: {}", config.log_path.display());

    match cli.command {
        Commands::Demo { no_file } => cmd_demo(&config, !no_file)?,
        Commands::Emit {
            severity,
            to_file,
            messages,
        } => cmd_emit(&config, severity, to_file, &messages)?,
        Commands::Clean => cmd_clean(&config)?,
    }

    Ok(())
}

fn cmd_demo(config: &LoggerConfig, to_file: bool) -> Result<()> {
    let mut logger = Logger::from_config(config);
    if to_file {
        logger.enable_file_logging();
    }

    println!("{}", format_stage(1, 4, Severity::Info, "default severity"));
    logger.log("default log level with logger.log")?;
    logger.info("info with logger.info")?;

    println!("{}", format_stage(2, 4, Severity::Warning, "set, log, reset"));
    logger.set_severity(Severity::Warning)?;
    logger.log("this is a warning using set_severity")?;
    logger.warning("this is a warning using logger.warning")?;
    logger.reset();
    logger.log("this has been reset")?;

    println!("{}", format_stage(3, 4, Severity::Error, "set and log"));
    logger.set_severity(Severity::Error)?;
    logger.log("this is an error using set_severity")?;
    logger.error("this is an error with logger.error")?;

    println!("{}", format_stage(4, 4, Severity::Info, "clean and disable"));
    logger
        .clean_logs()
        .context("Failed to remove log file")?;
    logger.set_severity(Severity::Info)?;
    logger.log("hello world, written to a fresh log file")?;
    logger.disable_file_logging();
    logger.log("not saved to a file")?;

    if to_file {
        let lines = fs::read_to_string(logger.log_path())
            .ok()
            .map(|content| content.lines().count());
        println!("{}", format_log_file(logger.log_path(), lines));
    }

    Ok(())
}

fn cmd_emit(
    config: &LoggerConfig,
    severity: Severity,
    to_file: bool,
    messages: &[String],
) -> Result<()> {
    let mut logger = Logger::from_config(config);
    logger.set_severity(severity)?;
    if to_file {
        logger.enable_file_logging();
    }

    for message in messages {
        logger
            .log(message)
            .with_context(|| format!("Failed to log to {}", logger.log_path().display()))?;
    }

    Ok(())
}

fn cmd_clean(config: &LoggerConfig) -> Result<()> {
    let logger = Logger::from_config(config);
    let existed = logger.log_path().exists();

    logger.clean_logs().context("Failed to remove log file")?;
    println!("{}", format_cleaned(logger.log_path(), existed));
    Ok(())
}
