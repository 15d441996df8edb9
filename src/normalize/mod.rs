//! Structural URL normalization for duplicate detection.
//!
//! [`normalize_url`] rewrites the variable parts of a URL (numeric ids,
//! opaque tokens, query values) into typed placeholders, producing a key
//! under which URLs with the same shape collide. The key is only displayed
//! when explicitly requested; batch deduplication maps each key back to the
//! first original line that produced it.

use regex::Regex;
use std::sync::LazyLock;

use crate::extract::{strip_protocol, strip_www};
use crate::utils::{compile_regex_unsafe, sanitize};

const ALL_DIGITS_PATTERN: &str = r"^\d+$";
const UID_SEGMENT_PATTERN: &str = r"(?i)^[a-z0-9]{8,}$";
const ID_PARAM_SEGMENT_PATTERN: &str = r"(?i)^(?:id|user_id|item_id|product_id)[=_]\d+$";
const TRAILING_DIGITS_PATTERN: &str = r"\d+$";
const HEX_VALUE_PATTERN: &str = r"(?i)^[a-f0-9]{8,}$";

static ALL_DIGITS_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(ALL_DIGITS_PATTERN, "ALL_DIGITS_RE"));
static UID_SEGMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(UID_SEGMENT_PATTERN, "UID_SEGMENT_RE"));
static ID_PARAM_SEGMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(ID_PARAM_SEGMENT_PATTERN, "ID_PARAM_SEGMENT_RE"));
static TRAILING_DIGITS_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(TRAILING_DIGITS_PATTERN, "TRAILING_DIGITS_RE"));
static HEX_VALUE_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(HEX_VALUE_PATTERN, "HEX_VALUE_RE"));

/// Query-value placeholder table, applied in order; values matching no
/// pattern become `{val}`.
static QUERY_VALUE_RULES: LazyLock<Vec<(&'static LazyLock<Regex>, &'static str)>> =
    LazyLock::new(|| vec![(&ALL_DIGITS_RE, "{num}"), (&HEX_VALUE_RE, "{hash}")]);

/// Rewrites one path segment into its placeholder form.
fn normalize_segment(segment: &str) -> String {
    if ALL_DIGITS_RE.is_match(segment) {
        return "{id}".to_string();
    }

    if UID_SEGMENT_RE.is_match(segment) {
        return "{uid}".to_string();
    }

    if ID_PARAM_SEGMENT_RE.is_match(segment) {
        return TRAILING_DIGITS_RE.replace(segment, "{id}").into_owned();
    }

    segment.to_string()
}

/// Rewrites one `key=value` query parameter, preserving the key verbatim.
fn normalize_param(param: &str) -> String {
    let (key, value) = match param.split_once('=') {
        Some((key, value)) => (key, value),
        None => (param, ""),
    };

    for (re, placeholder) in QUERY_VALUE_RULES.iter() {
        if re.is_match(value) {
            return format!("{key}={placeholder}");
        }
    }

    format!("{key}={{val}}")
}

/// Normalizes a URL into its structural-shape key.
///
/// The input is sanitized, protocol and `www.` are stripped, and the path
/// and query are rewritten:
///
/// - all-digit path segments become `{id}`
/// - opaque alphanumeric segments of 8+ characters become `{uid}`
/// - `id`/`user_id`/`item_id`/`product_id` segments keep their prefix and
///   have the trailing digits replaced with `{id}`
/// - all-digit query values become `{num}`, 8+-character hex values
///   `{hash}`, anything else `{val}`; keys are preserved
///
/// # Examples
///
/// ```
/// use url_triage::normalize_url;
///
/// assert_eq!(
///     normalize_url("api.site.com/users/12345?token=abcdef1234567890"),
///     "api.site.com/users/{id}?token={hash}"
/// );
/// ```
pub fn normalize_url(url: &str) -> String {
    let cleaned = sanitize(url);
    if cleaned.is_empty() {
        return String::new();
    }

    let stripped = strip_www(strip_protocol(&cleaned));

    let (domain, path) = match stripped.split_once('/') {
        Some((domain, path)) => (domain, path),
        None => (stripped, ""),
    };

    let (path_only, query) = match path.split_once('?') {
        Some((path_only, query)) => (path_only, Some(query)),
        None => (path, None),
    };

    let normalized_path = path_only
        .split('/')
        .map(normalize_segment)
        .collect::<Vec<_>>()
        .join("/");

    let normalized_query = match query {
        Some(q) if !q.is_empty() => {
            let params: Vec<String> = q
                .split('&')
                .filter(|p| !p.is_empty())
                .map(normalize_param)
                .collect();
            if params.is_empty() {
                String::new()
            } else {
                format!("?{}", params.join("&"))
            }
        }
        _ => String::new(),
    };

    let path_part = if normalized_path.is_empty() {
        String::new()
    } else {
        format!("/{normalized_path}")
    };

    format!("{domain}{path_part}{normalized_query}")
}
