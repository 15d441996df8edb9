//! Validity and domain-list filters.

use crate::classify::is_valid_url;
use crate::domain::{is_valid_domain, ValidationOptions};
use crate::extract::{extract_domain, strip_protocol, strip_www};
use crate::utils::sanitize;

/// Keeps lines that classify as URLs.
pub fn retain_valid_urls(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .filter(|line| is_valid_url(line))
        .cloned()
        .collect()
}

/// Keeps lines that are valid domains under the given options.
pub fn retain_valid_domains(lines: &[String], options: &ValidationOptions) -> Vec<String> {
    lines
        .iter()
        .filter(|line| is_valid_domain(line, options))
        .cloned()
        .collect()
}

/// True when `domain` equals a list entry or is a dot-suffix child of one
/// (`mail.example.com` matches the entry `example.com`).
fn matches_any(domain: &str, entries: &[String]) -> bool {
    entries
        .iter()
        .any(|entry| domain == entry.as_str() || domain.ends_with(&format!(".{entry}")))
}

/// Keeps lines whose extracted domain matches the include list. Lines with
/// no extractable domain are dropped.
pub fn filter_include(lines: &[String], include: &[String]) -> Vec<String> {
    lines
        .iter()
        .filter(|line| match extract_domain(line) {
            Some(domain) => matches_any(&domain, include),
            None => false,
        })
        .cloned()
        .collect()
}

/// Drops lines whose extracted domain matches the exclude list. Lines with
/// no extractable domain are kept.
pub fn filter_exclude(lines: &[String], exclude: &[String]) -> Vec<String> {
    lines
        .iter()
        .filter(|line| match extract_domain(line) {
            Some(domain) => !matches_any(&domain, exclude),
            None => true,
        })
        .cloned()
        .collect()
}

/// Parses a domain-list text into comparable entries: each line is
/// sanitized, protocol and `www.` stripped, truncated at the first `/`,
/// and lower-cased. Empty lines and `#` comment lines are skipped.
pub fn parse_domain_list(text: &str) -> Vec<String> {
    text.lines()
        .map(sanitize)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| {
            let stripped = strip_www(strip_protocol(&line));
            stripped
                .split('/')
                .next()
                .unwrap_or("")
                .to_lowercase()
        })
        .filter(|entry| !entry.is_empty())
        .collect()
}
