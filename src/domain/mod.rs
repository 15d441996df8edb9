//! Domain syntax validation.
//!
//! Three validation tiers, each building on the previous:
//!
//! - [`is_valid_domain_pure`] - structural label checks only
//! - [`is_valid_domain_native`] - cross-check through the `url` crate's
//!   hostname parser
//! - [`is_valid_domain_advanced`] - structural checks plus TLD plausibility
//!   and suspicious-pattern rejection
//!
//! [`is_valid_domain`] is the top-level entry point and selects a tier based
//! on [`ValidationOptions`]. All functions are total: malformed input is an
//! expected case and yields `false`, never an error.

use regex::Regex;
use std::sync::LazyLock;

use crate::config::constants::{MAX_DOMAIN_LENGTH, MAX_LABEL_COUNT, MAX_LABEL_LENGTH, MAX_TLD_LENGTH};
use crate::utils::compile_regex_unsafe;

pub mod root;

/// Dotted-quad shape (`1.2.3.4`). Shape only: octet ranges are checked
/// separately by [`is_valid_ipv4`].
const IPV4_SHAPE_PATTERN: &str = r"^\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}$";

static IPV4_SHAPE_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(IPV4_SHAPE_PATTERN, "IPV4_SHAPE_RE"));

/// Options controlling how [`is_valid_domain`] classifies input.
#[derive(Debug, Clone, Copy)]
pub struct ValidationOptions {
    /// Accept dotted-quad IPv4 literals as valid "domains".
    pub allow_ip: bool,
    /// Reserved, currently unused by validation logic.
    pub require_network: bool,
    /// Apply the advanced TLD/suspicious-pattern checks instead of pure
    /// syntax only.
    pub strict_mode: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            allow_ip: false,
            require_network: false,
            strict_mode: true,
        }
    }
}

/// Returns true if the string has the dotted-quad IPv4 shape.
pub(crate) fn is_ipv4_shape(s: &str) -> bool {
    IPV4_SHAPE_RE.is_match(s)
}

/// Validates a domain name using structural syntax checks only.
///
/// The input is case-folded and trimmed first. A valid domain:
///
/// - is non-empty and at most 253 characters
/// - has no leading/trailing dot and no empty label (`..`)
/// - splits into at least two labels of 1-63 characters from `[a-z0-9-]`,
///   none starting or ending with `-`
/// - ends in a label of at least 2 characters that contains a letter and is
///   not all digits
pub fn is_valid_domain_pure(domain: &str) -> bool {
    let domain = domain.to_lowercase();
    let domain = domain.trim();

    if domain.is_empty() || domain.len() > MAX_DOMAIN_LENGTH {
        return false;
    }

    if domain.starts_with('.') || domain.ends_with('.') {
        return false;
    }

    if domain.contains("..") {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();

    if labels.len() < 2 {
        return false;
    }

    for (i, label) in labels.iter().enumerate() {
        if label.is_empty() || label.len() > MAX_LABEL_LENGTH {
            return false;
        }

        if !label
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return false;
        }

        if label.starts_with('-') || label.ends_with('-') {
            return false;
        }

        if i == labels.len() - 1 {
            if label.len() < 2 {
                return false;
            }

            if label.chars().all(|c| c.is_ascii_digit()) {
                return false;
            }

            if !label.chars().any(|c| c.is_ascii_alphabetic()) {
                return false;
            }
        }
    }

    true
}

/// Validates a domain by round-tripping it through the `url` crate's
/// hostname parser.
///
/// A synthetic `http://<domain>` URL is constructed and the parsed hostname
/// read back. The domain is rejected when parsing fails, when the hostname
/// is a bare dotted-quad IP, when it has no dot, or when the round-tripped
/// hostname differs from the case-folded input (which catches
/// parser-normalization artifacts such as percent-decoding or punycode
/// rewriting).
///
/// This tier is a cross-check; the strict/pure tier selection in
/// [`is_valid_domain`] does not depend on it.
pub fn is_valid_domain_native(domain: &str) -> bool {
    if domain.is_empty() {
        return false;
    }

    let Ok(parsed) = url::Url::parse(&format!("http://{domain}")) else {
        return false;
    };

    let Some(hostname) = parsed.host_str() else {
        return false;
    };

    if hostname.is_empty() || is_ipv4_shape(hostname) {
        return false;
    }

    if !hostname.contains('.') {
        return false;
    }

    hostname == domain.to_lowercase()
}

/// Validates a domain using the pure-syntax tier plus TLD-pattern
/// plausibility and suspicious-pattern checks.
pub fn is_valid_domain_advanced(domain: &str) -> bool {
    let domain = domain.to_lowercase();
    let domain = domain.trim();

    if domain.is_empty() || !is_valid_domain_pure(domain) {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    let tld = labels[labels.len() - 1];

    if !is_valid_tld_pattern(tld) {
        return false;
    }

    if has_suspicious_pattern(domain) {
        return false;
    }

    true
}

/// Checks whether a final label is plausible as a TLD.
///
/// A plausible TLD is 2-10 characters, at least half letters, and not all
/// digits. This is a shape heuristic, not a registry lookup.
pub fn is_valid_tld_pattern(tld: &str) -> bool {
    if tld.len() < 2 || tld.len() > MAX_TLD_LENGTH {
        return false;
    }

    let letter_count = tld.chars().filter(|c| c.is_ascii_alphabetic()).count();

    // At least 50% letters.
    if letter_count * 2 < tld.len() {
        return false;
    }

    if tld.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }

    true
}

/// Checks a domain for shapes common in abuse: excessive subdomain depth,
/// doubled hyphens, or a hyphen adjacent to a dot.
pub fn has_suspicious_pattern(domain: &str) -> bool {
    let label_count = domain.split('.').count();
    if label_count > MAX_LABEL_COUNT {
        return true;
    }

    if domain.contains("--") {
        return true;
    }

    if domain.contains(".-") || domain.contains("-.") {
        return true;
    }

    false
}

/// Top-level domain validation entry point.
///
/// Dotted-quad inputs are accepted only when `options.allow_ip` is set and
/// every octet passes strict validation (see [`is_valid_ipv4`]). Anything
/// else is validated with the advanced tier when `options.strict_mode` is
/// set (the default), or the pure-syntax tier otherwise.
///
/// # Examples
///
/// ```
/// use url_triage::{is_valid_domain, ValidationOptions};
///
/// let opts = ValidationOptions::default();
/// assert!(is_valid_domain("example.co.uk", &opts));
/// assert!(!is_valid_domain("192.168.1.1", &opts));
///
/// let opts = ValidationOptions { allow_ip: true, ..Default::default() };
/// assert!(is_valid_domain("192.168.1.1", &opts));
/// assert!(!is_valid_domain("999.999.999.999", &opts));
/// ```
pub fn is_valid_domain(domain: &str, options: &ValidationOptions) -> bool {
    if domain.is_empty() {
        return false;
    }

    if is_ipv4_shape(domain) {
        return options.allow_ip && is_valid_ipv4(domain);
    }

    if options.strict_mode {
        is_valid_domain_advanced(domain)
    } else {
        is_valid_domain_pure(domain)
    }
}

/// Strict dotted-quad IPv4 validation.
///
/// Requires exactly four groups, each in `0..=255`, written in canonical
/// decimal form: the group must round-trip through integer parsing
/// unchanged, so forms like `01` or `+1` are rejected.
pub fn is_valid_ipv4(ip: &str) -> bool {
    let parts: Vec<&str> = ip.split('.').collect();
    if parts.len() != 4 {
        return false;
    }

    parts.iter().all(|part| match part.parse::<u32>() {
        Ok(num) => num <= 255 && *part == num.to_string(),
        Err(_) => false,
    })
}
