//! Base-endpoint reduction.
//!
//! [`extract_base_endpoint`] strips identifier-like path content from a URL
//! to recover the canonical endpoint it addresses. It is a coarser key than
//! [`crate::normalize_url`]: `site.com/users/17` and `site.com/users/99`
//! reduce to the same `site.com/users`, so endpoint-level deduplication
//! folds them together.

use regex::Regex;
use std::sync::LazyLock;

use crate::extract::strip_protocol;
use crate::utils::{compile_regex_unsafe, sanitize};

// Path reduction steps, applied in order to the sub-path (the part after
// the first slash). Order matters: trailing ids must go before interior
// ones, and slash cleanup runs last.
const TRAILING_ID_PATTERN: &str = r"/\d+/?$";
const INTERIOR_ID_PATTERN: &str = r"/\d+/";
const ID_PARAM_PATTERN: &str = r"(?i)/[a-z_]*id[=_]\d+";
const NUMBERED_FILE_PATTERN: &str = r"([a-zA-Z_]+)\d+(\.[a-zA-Z]+)$";
const REPEATED_SLASH_PATTERN: &str = r"/+";
const TRAILING_SLASH_PATTERN: &str = r"/$";

static REDUCTION_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    vec![
        (compile_regex_unsafe(TRAILING_ID_PATTERN, "TRAILING_ID"), ""),
        (compile_regex_unsafe(INTERIOR_ID_PATTERN, "INTERIOR_ID"), "/"),
        (compile_regex_unsafe(ID_PARAM_PATTERN, "ID_PARAM"), ""),
        (
            compile_regex_unsafe(NUMBERED_FILE_PATTERN, "NUMBERED_FILE"),
            "$1$2",
        ),
        (
            compile_regex_unsafe(REPEATED_SLASH_PATTERN, "REPEATED_SLASH"),
            "/",
        ),
        (
            compile_regex_unsafe(TRAILING_SLASH_PATTERN, "TRAILING_SLASH"),
            "",
        ),
    ]
});

/// Reduces a URL to its base endpoint.
///
/// The input is sanitized and the protocol stripped (a leading `www.` is
/// kept, unlike normalization). A URL without a path returns just the host.
/// Otherwise the query and fragment are removed and the path goes through
/// the reduction table: trailing and interior numeric segments, id
/// parameters, and digits glued to a file-extension stem are elided, then
/// slashes are cleaned up.
///
/// # Examples
///
/// ```
/// use url_triage::extract_base_endpoint;
///
/// assert_eq!(extract_base_endpoint("https://site.com/users/42"), "site.com/users");
/// assert_eq!(extract_base_endpoint("site.com/report7.php?x=1"), "site.com/report.php");
/// ```
pub fn extract_base_endpoint(url: &str) -> String {
    let cleaned = sanitize(url);
    if cleaned.is_empty() {
        return String::new();
    }

    let stripped = strip_protocol(&cleaned);

    let (domain_part, full_path) = match stripped.split_once('/') {
        Some((domain, path)) => (domain, path),
        None => return stripped.to_string(),
    };

    // Query parameters and fragments never distinguish endpoints.
    let full_path = full_path.split('?').next().unwrap_or("");
    let full_path = full_path.split('#').next().unwrap_or("");

    let mut base_path = full_path.to_string();
    for (re, replacement) in REDUCTION_RULES.iter() {
        base_path = re.replace_all(&base_path, *replacement).into_owned();
    }

    if base_path.is_empty() {
        domain_part.to_string()
    } else {
        format!("{domain_part}/{base_path}")
    }
}
