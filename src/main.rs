//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `url_triage` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use url_triage::initialization::init_logger_with;
use url_triage::{run_clean, Config};

fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_clean(config) {
        Ok(report) => {
            eprintln!(
                "✅ {} processed {} line{} into {} output line{} in {:.3}s",
                report.operation,
                report.lines_in,
                if report.lines_in == 1 { "" } else { "s" },
                report.lines_out,
                if report.lines_out == 1 { "" } else { "s" },
                report.elapsed_seconds
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("url_triage error: {:#}", e);
            process::exit(1);
        }
    }
}
