//! Whole-string URL classification.
//!
//! [`is_valid_url`] answers "does this line look like a URL at all?". It is
//! looser than the domain validator on purpose: it never checks label
//! lengths or hyphen placement, and both strictness levels are needed
//! because different call sites filter at different granularity (a line can
//! be a plausible URL whose host still fails strict domain validation).

use regex::Regex;
use std::sync::LazyLock;

use crate::utils::{compile_regex_unsafe, sanitize};

// Anchored whole-string patterns, all case-insensitive.
const DOMAIN_URL_PATTERN: &str = r"(?i)^(?:https?://)?(?:[a-z0-9-]+\.)+[a-z]{2,}(?:/\S*)?$";
const IPV4_URL_PATTERN: &str = r"(?i)^(?:https?://)?(?:\d{1,3}\.){3}\d{1,3}(?::\d+)?(?:/\S*)?$";
const LOCALHOST_URL_PATTERN: &str = r"(?i)^(?:https?://)?localhost(?::\d+)?(?:/\S*)?$";

static DOMAIN_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(DOMAIN_URL_PATTERN, "DOMAIN_URL_RE"));
static IPV4_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(IPV4_URL_PATTERN, "IPV4_URL_RE"));
static LOCALHOST_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(LOCALHOST_URL_PATTERN, "LOCALHOST_URL_RE"));

/// Returns true when the sanitized input parses as a URL.
///
/// Accepts, as a whole-string match:
///
/// - an optional `http(s)://`, one or more dotted labels, a final alphabetic
///   label of at least two characters, and an optional path
/// - an optional `http(s)://`, a dotted-quad IPv4 literal, an optional port,
///   and an optional path
/// - an optional `http(s)://`, the literal `localhost`, an optional port,
///   and an optional path
///
/// Note that only IP and localhost forms may carry a port; a port after a
/// named host does not match any pattern.
pub fn is_valid_url(input: &str) -> bool {
    let url = sanitize(input);
    if url.is_empty() {
        return false;
    }

    DOMAIN_URL_RE.is_match(&url) || IPV4_URL_RE.is_match(&url) || LOCALHOST_URL_RE.is_match(&url)
}
