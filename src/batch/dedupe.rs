//! First-seen deduplication over ordered line sequences.
//!
//! Every operation here keys each line, keeps the first line seen for each
//! key, and preserves input order among survivors. None of them can grow
//! the sequence.

use std::collections::HashSet;

use crate::endpoint::extract_base_endpoint;
use crate::extract::{extract_domain, strip_protocol};
use crate::normalize::normalize_url;

/// Dedupes lines keyed by a derived string. Lines with no key (the
/// extractor found nothing to collide on) pass through unchanged.
fn dedupe_by_key<F>(lines: &[String], key_fn: F) -> Vec<String>
where
    F: Fn(&str) -> Option<String>,
{
    let mut seen = HashSet::new();
    let mut kept = Vec::new();

    for line in lines {
        match key_fn(line) {
            Some(key) => {
                if seen.insert(key) {
                    kept.push(line.clone());
                }
            }
            None => kept.push(line.clone()),
        }
    }

    kept
}

/// Removes exact duplicate lines, keeping the first occurrence.
pub fn dedupe_exact(lines: &[String]) -> Vec<String> {
    dedupe_by_key(lines, |line| Some(line.to_string()))
}

/// Keeps one line per extracted bare domain. Lines whose domain cannot be
/// extracted pass through.
pub fn dedupe_by_domain(lines: &[String]) -> Vec<String> {
    dedupe_by_key(lines, extract_domain)
}

/// Keeps one line per normalized-URL shape key, folding URLs that differ
/// only in ids, opaque tokens and query values.
pub fn dedupe_by_pattern(lines: &[String]) -> Vec<String> {
    dedupe_by_key(lines, |line| Some(normalize_url(line)))
}

/// Keeps one line per base endpoint. Lines that reduce to an empty
/// endpoint (nothing but a protocol) are dropped.
pub fn dedupe_by_endpoint(lines: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut kept = Vec::new();

    for line in lines {
        let endpoint = extract_base_endpoint(line);
        if !endpoint.is_empty() && seen.insert(endpoint) {
            kept.push(line.clone());
        }
    }

    kept
}

/// Keeps one line per case-folded reduced path: protocol stripped, query
/// and fragment removed, trailing slash removed, lower-cased.
pub fn dedupe_by_path_casefold(lines: &[String]) -> Vec<String> {
    dedupe_by_key(lines, |line| {
        let stripped = strip_protocol(line);
        let stripped = stripped.split(['?', '#']).next().unwrap_or("");
        let stripped = stripped.strip_suffix('/').unwrap_or(stripped);
        Some(stripped.to_lowercase())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_dedupe_exact_keeps_first_seen_order() {
        let input = lines(&["b.com", "a.com", "b.com", "c.com", "a.com"]);
        assert_eq!(dedupe_exact(&input), lines(&["b.com", "a.com", "c.com"]));
    }

    #[test]
    fn test_dedupe_by_domain_folds_paths() {
        let input = lines(&[
            "https://a.com/one",
            "http://a.com/two",
            "https://b.com/one",
        ]);
        assert_eq!(
            dedupe_by_domain(&input),
            lines(&["https://a.com/one", "https://b.com/one"])
        );
    }

    #[test]
    fn test_dedupe_by_domain_passes_through_unextractable() {
        let input = lines(&["???", "a.com", "???"]);
        assert_eq!(dedupe_by_domain(&input), lines(&["???", "a.com", "???"]));
    }

    #[test]
    fn test_dedupe_by_pattern_folds_same_shape() {
        let input = lines(&[
            "site.com/users/1?page=2",
            "site.com/users/999?page=31",
            "site.com/users/1/posts",
        ]);
        assert_eq!(
            dedupe_by_pattern(&input),
            lines(&["site.com/users/1?page=2", "site.com/users/1/posts"])
        );
    }

    #[test]
    fn test_dedupe_by_endpoint_folds_ids() {
        let input = lines(&[
            "https://site.com/users/1",
            "https://site.com/users/2",
            "https://site.com/posts/9",
        ]);
        assert_eq!(
            dedupe_by_endpoint(&input),
            lines(&["https://site.com/users/1", "https://site.com/posts/9"])
        );
    }

    #[test]
    fn test_dedupe_by_endpoint_drops_empty() {
        let input = lines(&["https://", "site.com/x"]);
        assert_eq!(dedupe_by_endpoint(&input), lines(&["site.com/x"]));
    }

    #[test]
    fn test_dedupe_by_path_casefold() {
        let input = lines(&[
            "https://Site.com/Admin/",
            "http://site.com/admin",
            "site.com/ADMIN?x=1",
            "site.com/other",
        ]);
        assert_eq!(
            dedupe_by_path_casefold(&input),
            lines(&["https://Site.com/Admin/", "site.com/other"])
        );
    }

    #[test]
    fn test_dedupe_never_grows() {
        let input = lines(&["a.com", "a.com/1", "b.com", "b.com"]);
        for op in [
            dedupe_exact,
            dedupe_by_domain,
            dedupe_by_pattern,
            dedupe_by_endpoint,
            dedupe_by_path_casefold,
        ] {
            assert!(op(&input).len() <= input.len());
        }
    }
}
