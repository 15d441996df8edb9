//! Line-level rewrites: protocol, `www.` and trailing-slash handling.

use crate::extract::strip_protocol;

/// Case-insensitive check for a `www.` prefix.
fn has_www(s: &str) -> bool {
    matches!(s.get(..4), Some(prefix) if prefix.eq_ignore_ascii_case("www."))
}

/// Splits off a leading `http://`/`https://` prefix, preserving its
/// original spelling, or returns the line whole.
fn split_protocol(line: &str) -> (&str, &str) {
    let rest = strip_protocol(line);
    let split = line.len() - rest.len();
    (&line[..split], rest)
}

/// Forces every line to `https://`, replacing any existing protocol.
pub fn add_https(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .map(|line| format!("https://{}", strip_protocol(line)))
        .collect()
}

/// Forces every line to `http://`, replacing any existing protocol.
pub fn add_http(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .map(|line| format!("http://{}", strip_protocol(line)))
        .collect()
}

/// Removes a leading `http://`/`https://` from every line.
pub fn remove_protocols(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .map(|line| strip_protocol(line).to_string())
        .collect()
}

/// Inserts `www.` after the protocol (or at the start of a bare line)
/// unless the host already carries it.
pub fn add_www(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .map(|line| {
            let (protocol, rest) = split_protocol(line);
            if has_www(rest) {
                line.clone()
            } else {
                format!("{protocol}www.{rest}")
            }
        })
        .collect()
}

/// Removes a `www.` directly after the protocol (or at the start of a bare
/// line), keeping the protocol itself.
pub fn remove_www(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .map(|line| {
            let (protocol, rest) = split_protocol(line);
            if has_www(rest) {
                format!("{protocol}{}", &rest[4..])
            } else {
                line.clone()
            }
        })
        .collect()
}

/// Appends a trailing `/` to lines that have neither one nor a query or
/// fragment.
pub fn add_trailing_slash(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .map(|line| {
            if line.contains('?') || line.contains('#') || line.ends_with('/') {
                line.clone()
            } else {
                format!("{line}/")
            }
        })
        .collect()
}

/// Returns the first whitespace-delimited token of a line (for input
/// pasted from tools that append status columns).
pub fn first_token(line: &str) -> &str {
    line.split_whitespace().next().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_add_https_replaces_existing_protocol() {
        let input = lines(&["a.com", "http://b.com", "https://c.com", "HTTP://d.com"]);
        assert_eq!(
            add_https(&input),
            lines(&[
                "https://a.com",
                "https://b.com",
                "https://c.com",
                "https://d.com"
            ])
        );
    }

    #[test]
    fn test_add_http_replaces_existing_protocol() {
        let input = lines(&["a.com", "https://b.com"]);
        assert_eq!(add_http(&input), lines(&["http://a.com", "http://b.com"]));
    }

    #[test]
    fn test_remove_protocols() {
        let input = lines(&["https://a.com/x", "http://b.com", "c.com"]);
        assert_eq!(remove_protocols(&input), lines(&["a.com/x", "b.com", "c.com"]));
    }

    #[test]
    fn test_add_www() {
        let input = lines(&[
            "https://a.com",
            "https://www.b.com",
            "c.com",
            "www.d.com",
            "http://WWW.e.com",
        ]);
        assert_eq!(
            add_www(&input),
            lines(&[
                "https://www.a.com",
                "https://www.b.com",
                "www.c.com",
                "www.d.com",
                "http://WWW.e.com"
            ])
        );
    }

    #[test]
    fn test_remove_www() {
        let input = lines(&["https://www.a.com", "www.b.com", "c.com", "x.www.d.com"]);
        assert_eq!(
            remove_www(&input),
            lines(&["https://a.com", "b.com", "c.com", "x.www.d.com"])
        );
    }

    #[test]
    fn test_add_trailing_slash_skips_query_and_fragment() {
        let input = lines(&["a.com", "b.com/", "c.com/x?q=1", "d.com/y#top"]);
        assert_eq!(
            add_trailing_slash(&input),
            lines(&["a.com/", "b.com/", "c.com/x?q=1", "d.com/y#top"])
        );
    }

    #[test]
    fn test_first_token() {
        assert_eq!(first_token("https://a.com 200 OK"), "https://a.com");
        assert_eq!(first_token("bare.com"), "bare.com");
        assert_eq!(first_token(""), "");
    }
}
