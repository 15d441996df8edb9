//! url_triage library: URL/domain classification and normalization.
//!
//! This library classifies, sanitizes and normalizes URLs and domain names
//! supplied as free-form text. Given a batch of pasted lines it determines
//! which are syntactically valid, extracts canonical domain and registrable
//! "root domain" values, and produces normalized representations for
//! deduplication, filtering and grouping - all with string-shape heuristics,
//! without a public-suffix list, and without ever touching the network.
//!
//! Every core function is total: malformed input is an expected case and
//! yields `false`, `None`, an empty string or the unmodified input, never a
//! panic or an error.
//!
//! # Example
//!
//! ```
//! use url_triage::{extract_root_domain, normalize_url};
//!
//! assert_eq!(
//!     extract_root_domain("https://mail.example.co.uk/inbox"),
//!     Some("example.co.uk".to_string())
//! );
//! assert_eq!(
//!     normalize_url("api.site.com/users/12345?token=abcdef1234567890"),
//!     "api.site.com/users/{id}?token={hash}"
//! );
//! ```

#![warn(missing_docs)]

mod app;
pub mod batch;
mod classify;
pub mod config;
mod domain;
mod endpoint;
mod error_handling;
mod extract;
pub mod initialization;
mod normalize;
mod utils;

// Re-export public API
pub use classify::is_valid_url;
pub use config::{Config, LogFormat, LogLevel, Operation};
pub use domain::root::root_from_labels;
pub use domain::{
    has_suspicious_pattern, is_valid_domain, is_valid_domain_advanced, is_valid_domain_native,
    is_valid_domain_pure, is_valid_ipv4, is_valid_tld_pattern, ValidationOptions,
};
pub use endpoint::extract_base_endpoint;
pub use error_handling::{InitializationError, LineDisposition, LineStats};
pub use extract::{extract_domain, extract_root_domain, extract_tld};
pub use normalize::normalize_url;
pub use run::{run_clean, CleanReport};
pub use utils::sanitize;

// Internal run module (contains the batch orchestration)
mod run {
    use anyhow::{bail, Context, Result};
    use log::{debug, info, warn};
    use std::io::Read;
    use std::path::{Path, PathBuf};

    use crate::app::{log_input_summary, print_line_statistics, print_simple_summary};
    use crate::batch;
    use crate::batch::transform::first_token;
    use crate::config::constants::MAX_LINE_LENGTH;
    use crate::config::{Config, Operation};
    use crate::error_handling::{LineDisposition, LineStats};
    use crate::utils::sanitize;

    /// Results of a batch cleaning run.
    #[derive(Debug, Clone)]
    pub struct CleanReport {
        /// The operation that was applied
        pub operation: Operation,
        /// Input lines surviving sanitization and input hygiene
        pub lines_in: usize,
        /// Lines written to the output
        pub lines_out: usize,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs one batch operation over the configured input.
    ///
    /// Reads lines from the input file (or stdin for `-`), sanitizes them,
    /// skips blank/comment/oversize lines, applies the configured
    /// [`Operation`], and writes the result to the output file or stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if the input file cannot be read, a required
    /// domain-list file is missing or empty, or the output cannot be
    /// written. Classification failures are never errors; they surface as
    /// dropped lines.
    pub fn run_clean(config: Config) -> Result<CleanReport> {
        let start_time = std::time::Instant::now();

        let raw = read_input(&config.file)?;

        let mut stats = LineStats::new();
        let mut lines: Vec<String> = Vec::new();

        for raw_line in raw.lines() {
            let line = sanitize(raw_line);

            if line.is_empty() {
                stats.increment(LineDisposition::Blank);
                continue;
            }
            if line.starts_with('#') {
                stats.increment(LineDisposition::Comment);
                continue;
            }
            if line.len() > MAX_LINE_LENGTH {
                warn!(
                    "Skipping line exceeding maximum length ({} > {}): {}...",
                    line.len(),
                    MAX_LINE_LENGTH,
                    &line[..50.min(line.len())]
                );
                stats.increment(LineDisposition::Oversize);
                continue;
            }

            if config.first_token {
                lines.push(first_token(&line).to_string());
            } else {
                lines.push(line);
            }
        }

        let summary = batch::summarize(&lines);
        log_input_summary(&summary);

        let output = apply_operation(&config, &lines, &summary)?;

        if let Some(disposition) = drop_disposition(config.operation) {
            stats.add(disposition, lines.len().saturating_sub(output.len()));
        }
        stats.add(LineDisposition::Kept, output.len());

        log_operation_outcome(config.operation, lines.len(), output.len());

        write_output(config.output.as_deref(), &output)?;

        print_line_statistics(&stats);

        let elapsed_seconds = start_time.elapsed().as_secs_f64();
        print_simple_summary(lines.len(), output.len(), elapsed_seconds);

        Ok(CleanReport {
            operation: config.operation,
            lines_in: lines.len(),
            lines_out: output.len(),
            elapsed_seconds,
        })
    }

    /// Reads the raw input text from a file, or stdin when the path is `-`.
    fn read_input(path: &Path) -> Result<String> {
        if path.as_os_str() == "-" {
            info!("Reading lines from stdin");
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            Ok(buffer)
        } else {
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to open input file: {}", path.display()))
        }
    }

    /// Loads and parses a domain-list file for the include/exclude filters.
    fn read_domain_list(path: Option<&PathBuf>, flag: &str, operation: Operation) -> Result<Vec<String>> {
        let Some(path) = path else {
            bail!("--{flag} <FILE> is required for the {operation} operation");
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to open domain list: {}", path.display()))?;
        let entries = batch::parse_domain_list(&text);
        if entries.is_empty() {
            bail!("Domain list {} contains no usable entries", path.display());
        }
        debug!("Loaded {} domain-list entries from {}", entries.len(), path.display());
        Ok(entries)
    }

    /// Applies the configured operation to the prepared input lines.
    fn apply_operation(
        config: &Config,
        lines: &[String],
        summary: &batch::InputSummary,
    ) -> Result<Vec<String>> {
        let output = match config.operation {
            Operation::Dedupe => batch::dedupe_exact(lines),
            Operation::DedupeDomains => batch::dedupe_by_domain(lines),
            Operation::DedupePatterns => batch::dedupe_by_pattern(lines),
            Operation::DedupeEndpoints => batch::dedupe_by_endpoint(lines),
            Operation::DedupePaths => batch::dedupe_by_path_casefold(lines),
            Operation::Sort => batch::sort_lines(lines),
            Operation::Validate => batch::retain_valid_urls(lines),
            Operation::ValidateDomains => {
                batch::retain_valid_domains(lines, &config.validation_options())
            }
            Operation::FilterInclude => {
                let allowed =
                    read_domain_list(config.include.as_ref(), "include", config.operation)?;
                batch::filter_include(lines, &allowed)
            }
            Operation::FilterExclude => {
                let denied =
                    read_domain_list(config.exclude.as_ref(), "exclude", config.operation)?;
                batch::filter_exclude(lines, &denied)
            }
            Operation::AddHttps => batch::add_https(lines),
            Operation::AddHttp => batch::add_http(lines),
            Operation::RemoveProtocol => batch::remove_protocols(lines),
            Operation::AddWww => batch::add_www(lines),
            Operation::RemoveWww => batch::remove_www(lines),
            Operation::AddSlash => batch::add_trailing_slash(lines),
            Operation::Domains => batch::extract_domains(lines),
            Operation::RootDomains => batch::extract_root_domains(lines),
            Operation::Tlds => batch::extract_tlds(lines),
            Operation::GroupTld => batch::render_tld_groups(&batch::group_by_tld(lines)),
            Operation::Summary => vec![serde_json::to_string_pretty(summary)
                .context("Failed to serialize input summary")?],
        };

        Ok(output)
    }

    /// Which disposition dropped lines are charged to, for operations that
    /// filter the input. Transforms and extractions drop nothing.
    fn drop_disposition(operation: Operation) -> Option<LineDisposition> {
        match operation {
            Operation::Dedupe
            | Operation::DedupeDomains
            | Operation::DedupePatterns
            | Operation::DedupeEndpoints
            | Operation::DedupePaths => Some(LineDisposition::Duplicate),
            Operation::Validate | Operation::ValidateDomains => Some(LineDisposition::Invalid),
            Operation::FilterInclude | Operation::FilterExclude => {
                Some(LineDisposition::Excluded)
            }
            _ => None,
        }
    }

    /// Logs the per-operation outcome line the original tool showed as a
    /// toast notification.
    fn log_operation_outcome(operation: Operation, lines_in: usize, lines_out: usize) {
        let dropped = lines_in.saturating_sub(lines_out);
        match operation {
            Operation::Dedupe => info!("Removed {dropped} duplicates"),
            Operation::DedupeDomains => info!("Removed {dropped} duplicates by domain"),
            Operation::DedupePatterns => {
                info!("Normalized {lines_in} URLs, found {lines_out} unique patterns")
            }
            Operation::DedupeEndpoints => info!(
                "Removed {dropped} endpoint duplicates, {lines_out} unique endpoints remaining"
            ),
            Operation::DedupePaths => {
                info!("Removed {dropped} case-insensitive path duplicates")
            }
            Operation::Sort => info!("Sorted {lines_out} lines alphabetically"),
            Operation::Validate => {
                info!("Found {lines_out} valid URLs, removed {dropped} invalid")
            }
            Operation::ValidateDomains => {
                info!("Found {lines_out} valid domains, removed {dropped} invalid")
            }
            Operation::FilterInclude => {
                info!("Filtered to {lines_out} lines matching include list")
            }
            Operation::FilterExclude => {
                info!("Filtered to {lines_out} lines not in exclude list")
            }
            Operation::AddHttps => info!("Added HTTPS to all lines"),
            Operation::AddHttp => info!("Added HTTP to all lines"),
            Operation::RemoveProtocol => info!("Removed all protocols"),
            Operation::AddWww => info!("Added WWW where missing"),
            Operation::RemoveWww => info!("Removed WWW from all lines"),
            Operation::AddSlash => {
                info!("Added trailing slash to lines without query/fragment")
            }
            Operation::Domains => {
                info!("Extracted {lines_out} unique domains from {lines_in} lines")
            }
            Operation::RootDomains => info!("Extracted {lines_out} unique root domains"),
            Operation::Tlds => info!("Extracted {lines_out} unique TLDs"),
            Operation::GroupTld => info!("Grouped domains by TLD"),
            Operation::Summary => {}
        }
    }

    /// Writes the output lines to the given file, or stdout when absent.
    fn write_output(path: Option<&Path>, lines: &[String]) -> Result<()> {
        match path {
            Some(path) => {
                let mut text = lines.join("\n");
                if !text.is_empty() {
                    text.push('\n');
                }
                std::fs::write(path, text)
                    .with_context(|| format!("Failed to write output file: {}", path.display()))?;
                info!("Results saved to {}", path.display());
            }
            None => {
                for line in lines {
                    println!("{line}");
                }
            }
        }
        Ok(())
    }
}
