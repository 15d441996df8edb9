//! Batch operations over ordered line sequences.
//!
//! Every operation takes sanitized, non-empty input lines and produces an
//! ordered output sequence, deterministic for identical input order. The
//! submodules cover deduplication, filtering, line rewrites and TLD
//! grouping; list extraction, sorting and input summaries live here.

pub mod dedupe;
pub mod filter;
pub mod group;
pub mod transform;

pub use dedupe::{
    dedupe_by_domain, dedupe_by_endpoint, dedupe_by_path_casefold, dedupe_by_pattern, dedupe_exact,
};
pub use filter::{
    filter_exclude, filter_include, parse_domain_list, retain_valid_domains, retain_valid_urls,
};
pub use group::{group_by_tld, render_tld_groups, TldGroup};
pub use transform::{
    add_http, add_https, add_trailing_slash, add_www, first_token, remove_protocols, remove_www,
};

use serde::Serialize;
use std::collections::HashSet;

use crate::classify::is_valid_url;
use crate::extract::{extract_domain, extract_root_domain, extract_tld};

/// Sorts lines case-insensitively, ascending. The sort is stable, so
/// applying it twice is a no-op.
pub fn sort_lines(lines: &[String]) -> Vec<String> {
    let mut sorted = lines.to_vec();
    sorted.sort_by_cached_key(|line| line.to_lowercase());
    sorted
}

/// Extracts the unique bare domains of `lines`, first-seen order.
pub fn extract_domains(lines: &[String]) -> Vec<String> {
    unique_extracted(lines, extract_domain)
}

/// Extracts the unique root domains of `lines`, first-seen order.
pub fn extract_root_domains(lines: &[String]) -> Vec<String> {
    unique_extracted(lines, extract_root_domain)
}

/// Extracts the unique TLDs of `lines`, first-seen order.
pub fn extract_tlds(lines: &[String]) -> Vec<String> {
    unique_extracted(lines, |line| {
        extract_domain(line).and_then(|domain| extract_tld(&domain))
    })
}

fn unique_extracted<F>(lines: &[String], extract: F) -> Vec<String>
where
    F: Fn(&str) -> Option<String>,
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    for line in lines {
        if let Some(value) = extract(line) {
            if seen.insert(value.clone()) {
                out.push(value);
            }
        }
    }

    out
}

/// Counts describing a batch of input lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputSummary {
    /// Non-empty lines after sanitization.
    pub total_lines: usize,
    /// Lines that classify as URLs.
    pub valid_urls: usize,
    /// Distinct root domains across all lines.
    pub unique_root_domains: usize,
}

/// Summarizes a batch of sanitized input lines.
pub fn summarize(lines: &[String]) -> InputSummary {
    let valid_urls = lines.iter().filter(|line| is_valid_url(line)).count();

    let unique_root_domains = lines
        .iter()
        .filter_map(|line| extract_root_domain(line))
        .collect::<HashSet<_>>()
        .len();

    InputSummary {
        total_lines: lines.len(),
        valid_urls,
        unique_root_domains,
    }
}
