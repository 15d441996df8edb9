//! Configuration types and CLI options.
//!
//! This module defines the enums and the `Config` struct used for
//! command-line argument parsing and for programmatic use of the library.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use strum_macros::Display;

use crate::domain::ValidationOptions;

/// Logging level for the application.
#[derive(Clone, Debug, Display, ValueEnum)]
#[strum(serialize_all = "kebab-case")]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
#[derive(Clone, Debug, Display, ValueEnum)]
#[strum(serialize_all = "kebab-case")]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// The batch operation to apply to the input lines.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, ValueEnum)]
#[strum(serialize_all = "kebab-case")]
pub enum Operation {
    /// Remove exact duplicate lines
    Dedupe,
    /// Keep one line per extracted bare domain
    DedupeDomains,
    /// Keep one line per normalized URL shape
    DedupePatterns,
    /// Keep one line per base endpoint
    DedupeEndpoints,
    /// Keep one line per case-folded reduced path
    DedupePaths,
    /// Sort lines case-insensitively
    Sort,
    /// Keep lines that classify as URLs
    Validate,
    /// Keep lines that are valid domains
    ValidateDomains,
    /// Keep lines whose domain matches the include list
    FilterInclude,
    /// Drop lines whose domain matches the exclude list
    FilterExclude,
    /// Force https:// on every line
    AddHttps,
    /// Force http:// on every line
    AddHttp,
    /// Strip http:// and https://
    RemoveProtocol,
    /// Insert www. where missing
    AddWww,
    /// Remove a leading www.
    RemoveWww,
    /// Append a trailing slash where sensible
    AddSlash,
    /// Output the unique bare domains
    Domains,
    /// Output the unique root domains
    RootDomains,
    /// Output the unique TLDs
    Tlds,
    /// Group domains by TLD
    GroupTld,
    /// Output input statistics as JSON
    Summary,
}

/// Application configuration.
///
/// Doubles as the CLI definition and the programmatic entry point; library
/// callers can construct it directly and rely on `Default` for everything
/// but the operation.
///
/// # Examples
///
/// ```no_run
/// use url_triage::{run_clean, Config, Operation};
/// use std::path::PathBuf;
///
/// let config = Config {
///     operation: Operation::Dedupe,
///     file: PathBuf::from("urls.txt"),
///     ..Default::default()
/// };
/// let report = run_clean(config)?;
/// println!("{} lines in, {} out", report.lines_in, report.lines_out);
/// # Ok::<(), anyhow::Error>(())
/// ```
#[derive(Debug, Clone, Parser)]
#[command(name = "url_triage", version, about = "Classify, sanitize and normalize URL lists")]
pub struct Config {
    /// Operation to apply to the input lines
    #[arg(value_enum)]
    pub operation: Operation,

    /// File to read lines from, or "-" for stdin
    #[arg(default_value = "-")]
    pub file: PathBuf,

    /// Write output to this file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Domain-list file for the filter-include operation
    #[arg(long)]
    pub include: Option<PathBuf>,

    /// Domain-list file for the filter-exclude operation
    #[arg(long)]
    pub exclude: Option<PathBuf>,

    /// Accept dotted-quad IPv4 literals in domain validation
    #[arg(long)]
    pub allow_ip: bool,

    /// Use pure-syntax domain validation instead of the strict tier
    #[arg(long)]
    pub lenient: bool,

    /// Keep only the first whitespace-delimited token of each line
    #[arg(long)]
    pub first_token: bool,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            operation: Operation::Dedupe,
            file: PathBuf::from("-"),
            output: None,
            include: None,
            exclude: None,
            allow_ip: false,
            lenient: false,
            first_token: false,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

impl Config {
    /// Maps the CLI validation flags onto [`ValidationOptions`].
    pub fn validation_options(&self) -> ValidationOptions {
        ValidationOptions {
            allow_ip: self.allow_ip,
            require_network: false,
            strict_mode: !self.lenient,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_operation_display_is_kebab_case() {
        assert_eq!(Operation::DedupePatterns.to_string(), "dedupe-patterns");
        assert_eq!(Operation::GroupTld.to_string(), "group-tld");
    }

    #[test]
    fn test_validation_options_mapping() {
        let config = Config {
            allow_ip: true,
            lenient: true,
            ..Default::default()
        };
        let opts = config.validation_options();
        assert!(opts.allow_ip);
        assert!(!opts.strict_mode);
        assert!(!opts.require_network);
    }
}
