//! Registrable-root inference without a public-suffix list.
//!
//! Given the labels of an already-validated domain, decides how many
//! trailing labels form the registrable unit (`sub.example.co.uk` →
//! `example.co.uk`) using string-shape heuristics alone. The rule set is
//! deliberately frozen: it is approximate by design, and callers depend on
//! its exact output for deduplication keys, so the token tables below must
//! not be "improved" with real suffix data.

/// Second-level labels that signal a multi-part TLD when a third level is
/// present (business/organization registry conventions).
const MULTI_PART_SECOND_LEVEL_TOKENS: &[&str] = &["ltd", "inc", "llc", "pvt", "pty"];

/// Short functional second-level labels used by country registries
/// (academic, commercial, organization, network, government, education,
/// military, informational).
const SECOND_LEVEL_TLD_TOKENS: &[&str] = &["ac", "co", "or", "ne", "go", "ed", "mi", "in"];

/// Infers the registrable root from a domain's labels.
///
/// Two-label domains are returned whole. For longer domains the trailing
/// three labels are taken when the second-to-last label looks like part of
/// a multi-part TLD, otherwise the trailing two.
///
/// # Arguments
///
/// * `labels` - The domain's labels in order, already validated and
///   lower-cased (at least two)
///
/// # Returns
///
/// The dot-joined trailing 2 or 3 labels.
pub fn root_from_labels(labels: &[&str]) -> String {
    if labels.len() <= 2 {
        return labels.join(".");
    }

    let second_level = labels[labels.len() - 2];

    // Short second levels under a third level often indicate a multi-part
    // TLD (example.co.uk).
    if second_level.len() <= 3 && is_likely_multi_part_tld(second_level) {
        return labels[labels.len() - 3..].join(".");
    }

    if is_second_level_tld_pattern(second_level) {
        return labels[labels.len() - 3..].join(".");
    }

    // Default: assume a single-label TLD.
    labels[labels.len() - 2..].join(".")
}

/// Whether a second-level label looks like the first half of a multi-part
/// TLD: exactly two letters (country-code style second levels), or one of
/// the business-registry tokens.
fn is_likely_multi_part_tld(second_level: &str) -> bool {
    if second_level.len() > 4 {
        return false;
    }

    if second_level.len() == 2 && second_level.chars().all(|c| c.is_ascii_lowercase()) {
        return true;
    }

    MULTI_PART_SECOND_LEVEL_TOKENS.contains(&second_level)
}

/// Whether a second-level label matches the common second-level-TLD shapes:
/// any two-letter label, or one of the functional registry tokens.
fn is_second_level_tld_pattern(second_level: &str) -> bool {
    if second_level.len() == 2 && second_level.chars().all(|c| c.is_ascii_lowercase()) {
        return true;
    }

    SECOND_LEVEL_TLD_TOKENS.contains(&second_level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_two_labels_returned_whole() {
        assert_eq!(root_from_labels(&["example", "com"]), "example.com");
        assert_eq!(root_from_labels(&["stone", "co"]), "stone.co");
    }

    #[test]
    fn test_root_country_code_second_level() {
        assert_eq!(
            root_from_labels(&["mail", "example", "co", "uk"]),
            "example.co.uk"
        );
        assert_eq!(root_from_labels(&["example", "co", "jp"]), "example.co.jp");
        assert_eq!(root_from_labels(&["www", "site", "go", "id"]), "site.go.id");
    }

    #[test]
    fn test_root_business_token_second_level() {
        assert_eq!(
            root_from_labels(&["shop", "example", "ltd", "uk"]),
            "example.ltd.uk"
        );
        assert_eq!(root_from_labels(&["a", "b", "pty", "au"]), "b.pty.au");
    }

    #[test]
    fn test_root_plain_subdomain_takes_two() {
        assert_eq!(
            root_from_labels(&["mail", "example", "com"]),
            "example.com"
        );
        assert_eq!(
            root_from_labels(&["a", "b", "c", "example", "org"]),
            "example.org"
        );
    }

    #[test]
    fn test_root_three_letter_second_level_not_multi_part() {
        // "www" is three letters but matches neither token table, so the
        // default two-label rule applies.
        assert_eq!(root_from_labels(&["x", "www", "com"]), "www.com");
    }

    #[test]
    fn test_root_misclassifies_two_letter_business_names() {
        // Known heuristic limitation: a genuine two-letter second-level
        // name under a single-label TLD is treated as a multi-part TLD.
        assert_eq!(root_from_labels(&["www", "hp", "com"]), "www.hp.com");
    }

    #[test]
    fn test_is_likely_multi_part_tld() {
        assert!(is_likely_multi_part_tld("co"));
        assert!(is_likely_multi_part_tld("uk"));
        assert!(is_likely_multi_part_tld("ltd"));
        assert!(is_likely_multi_part_tld("pvt"));
        assert!(!is_likely_multi_part_tld("www"));
        assert!(!is_likely_multi_part_tld("shop"));
        assert!(!is_likely_multi_part_tld("c1"));
    }

    #[test]
    fn test_is_second_level_tld_pattern() {
        assert!(is_second_level_tld_pattern("ac"));
        assert!(is_second_level_tld_pattern("xy"));
        assert!(!is_second_level_tld_pattern("com"));
        assert!(!is_second_level_tld_pattern("12"));
    }
}
