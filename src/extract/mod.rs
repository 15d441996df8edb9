//! Domain, root-domain and TLD extraction from raw URL strings.
//!
//! Extraction is total and returns `Option` values: `None` means "no domain
//! found", a first-class outcome rather than an error. Hosts are lower-cased
//! before validation so that `http://A.com` and `a.com` converge on the same
//! extracted domain.

use crate::domain::root::root_from_labels;
use crate::domain::{is_ipv4_shape, is_valid_domain_advanced};
use crate::utils::sanitize;

/// Strips a leading `http://` or `https://`, case-insensitively.
pub(crate) fn strip_protocol(s: &str) -> &str {
    let lower = s.to_ascii_lowercase();
    for prefix in ["https://", "http://"] {
        if lower.starts_with(prefix) {
            return &s[prefix.len()..];
        }
    }
    s
}

/// Strips a leading `www.`, case-insensitively.
pub(crate) fn strip_www(s: &str) -> &str {
    match s.get(..4) {
        Some(prefix) if prefix.eq_ignore_ascii_case("www.") => &s[4..],
        _ => s,
    }
}

/// Cuts a protocol-less URL down to its host: everything before the first
/// `/`, `?`, `#` or `:` (port), lower-cased.
fn host_of(stripped: &str) -> String {
    let end = stripped
        .find(['/', '?', '#', ':'])
        .unwrap_or(stripped.len());
    stripped[..end].to_lowercase()
}

/// Extracts the bare host from a URL string.
///
/// The input is sanitized, the protocol and a leading `www.` are stripped,
/// and the host is cut at the first path, query, fragment or port
/// separator. Returns the host when it contains a dot or is a dotted-quad
/// IPv4 literal, `None` otherwise.
///
/// # Examples
///
/// ```
/// use url_triage::extract_domain;
///
/// assert_eq!(extract_domain("https://www.Example.com/path"), Some("example.com".into()));
/// assert_eq!(extract_domain("192.168.1.1:8080"), Some("192.168.1.1".into()));
/// assert_eq!(extract_domain("not a url"), None);
/// ```
pub fn extract_domain(url: &str) -> Option<String> {
    let cleaned = sanitize(url);
    if cleaned.is_empty() {
        return None;
    }

    let host = host_of(strip_www(strip_protocol(&cleaned)));

    if !host.is_empty() && (host.contains('.') || is_ipv4_shape(&host)) {
        Some(host)
    } else {
        None
    }
}

/// Extracts the registrable root domain from a URL string.
///
/// The host is cleaned as in [`extract_domain`], then validated with the
/// advanced tier; invalid hosts (including IP literals) yield `None`. Hosts
/// of more than two labels go through the heuristic root resolver, so
/// `mail.example.co.uk` becomes `example.co.uk` while `mail.example.com`
/// becomes `example.com`.
pub fn extract_root_domain(url: &str) -> Option<String> {
    let cleaned = sanitize(url);
    if cleaned.is_empty() {
        return None;
    }

    let host = host_of(strip_www(strip_protocol(&cleaned)));

    if !is_valid_domain_advanced(&host) {
        return None;
    }

    let labels: Vec<&str> = host.split('.').collect();

    if labels.len() <= 2 {
        return Some(host);
    }

    Some(root_from_labels(&labels))
}

/// Extracts the TLD (final label of the registrable root) from a domain.
///
/// Returns `None` when the input has fewer than two labels or root-domain
/// extraction fails.
pub fn extract_tld(domain: &str) -> Option<String> {
    let cleaned = sanitize(domain);

    if cleaned.split('.').count() < 2 {
        return None;
    }

    let root = extract_root_domain(&cleaned)?;
    root.rsplit('.').next().map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_domain_strips_protocol_and_www() {
        assert_eq!(
            extract_domain("https://www.example.com/path?q=1#frag"),
            Some("example.com".to_string())
        );
        assert_eq!(
            extract_domain("http://example.com:8080"),
            Some("example.com".to_string())
        );
        assert_eq!(extract_domain("www.example.com"), Some("example.com".to_string()));
    }

    #[test]
    fn test_extract_domain_case_insensitive() {
        assert_eq!(extract_domain("HTTP://A.com/1"), Some("a.com".to_string()));
        assert_eq!(extract_domain("WWW.Example.COM"), Some("example.com".to_string()));
    }

    #[test]
    fn test_extract_domain_accepts_ip() {
        assert_eq!(
            extract_domain("192.168.1.1:8080/admin"),
            Some("192.168.1.1".to_string())
        );
    }

    #[test]
    fn test_extract_domain_absent_for_dotless_hosts() {
        assert_eq!(extract_domain("localhost"), None);
        assert_eq!(extract_domain("localhost:3000"), None);
        assert_eq!(extract_domain(""), None);
        assert_eq!(extract_domain("   "), None);
    }

    #[test]
    fn test_extract_root_domain_country_code() {
        assert_eq!(
            extract_root_domain("https://mail.example.co.uk/path"),
            Some("example.co.uk".to_string())
        );
    }

    #[test]
    fn test_extract_root_domain_plain() {
        assert_eq!(
            extract_root_domain("https://www.example.com"),
            Some("example.com".to_string())
        );
        assert_eq!(
            extract_root_domain("a.b.example.org/x"),
            Some("example.org".to_string())
        );
    }

    #[test]
    fn test_extract_root_domain_rejects_invalid() {
        assert_eq!(extract_root_domain("192.168.1.1"), None);
        assert_eq!(extract_root_domain("a.b.c.d.e.f.g.com"), None);
        assert_eq!(extract_root_domain("no-dots"), None);
    }

    #[test]
    fn test_extract_root_domain_idempotent() {
        let urls = [
            "https://mail.example.co.uk/path",
            "https://www.example.com",
            "sub.deep.example.org",
        ];
        for url in urls {
            let root = extract_root_domain(url).unwrap();
            assert_eq!(extract_root_domain(&root), Some(root.clone()));
        }
    }

    #[test]
    fn test_extract_tld() {
        assert_eq!(extract_tld("example.com"), Some("com".to_string()));
        assert_eq!(extract_tld("mail.example.co.uk"), Some("uk".to_string()));
        assert_eq!(extract_tld("example"), None);
        assert_eq!(extract_tld("192.168.1.1"), None);
    }
}
