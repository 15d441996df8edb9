//! Integration tests for the batch-operation surface of the library.

use url_triage::batch::{
    dedupe_by_endpoint, dedupe_by_pattern, dedupe_exact, extract_domains, extract_root_domains,
    extract_tlds, filter_exclude, filter_include, group_by_tld, parse_domain_list,
    retain_valid_urls, sort_lines, summarize,
};
use url_triage::{
    extract_base_endpoint, extract_domain, extract_root_domain, is_valid_domain, is_valid_url,
    normalize_url, sanitize, ValidationOptions,
};

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_messy_paste_to_unique_domains() {
    // A realistic paste: mixed protocols, stray whitespace, unicode junk,
    // duplicate hosts under different casings.
    let input = lines(&[
        "https://www.Example.com/home",
        "  http://example.com/about  ",
        "example.com",
        "https://blog.example.com/post/1",
        "☃ https://other.org ☃",
    ]);
    let cleaned: Vec<String> = input.iter().map(|l| sanitize(l)).collect();
    let domains = extract_domains(&cleaned);

    assert_eq!(
        domains,
        lines(&["example.com", "blog.example.com", "other.org"])
    );
}

#[test]
fn test_root_domain_scenarios_from_classification() {
    assert_eq!(
        extract_root_domain("https://mail.example.co.uk/path"),
        Some("example.co.uk".to_string())
    );
    assert_eq!(
        extract_root_domain("https://www.example.com"),
        Some("example.com".to_string())
    );
}

#[test]
fn test_ip_validation_options() {
    let deny = ValidationOptions::default();
    let allow = ValidationOptions {
        allow_ip: true,
        ..Default::default()
    };

    assert!(!is_valid_domain("999.999.999.999", &deny));
    assert!(!is_valid_domain("999.999.999.999", &allow));
    assert!(is_valid_domain("192.168.1.1", &allow));
    assert!(!is_valid_domain("192.168.1.1", &deny));
}

#[test]
fn test_case_insensitive_domain_convergence() {
    let input = lines(&["http://A.com/1", "https://a.com/2", "a.com/3"]);
    assert_eq!(extract_domains(&input), lines(&["a.com"]));
}

#[test]
fn test_dedupe_preserves_first_seen_and_never_grows() {
    let input = lines(&[
        "https://a.com/x",
        "https://a.com/x",
        "https://b.com/y",
        "https://a.com/x",
    ]);
    let deduped = dedupe_exact(&input);
    assert_eq!(deduped, lines(&["https://a.com/x", "https://b.com/y"]));
    assert!(deduped.len() <= input.len());
}

#[test]
fn test_pattern_dedup_keeps_first_concrete_url() {
    let input = lines(&[
        "shop.example.com/item/1111?ref=123",
        "shop.example.com/item/2222?ref=456",
        "shop.example.com/cart",
    ]);
    assert_eq!(
        dedupe_by_pattern(&input),
        lines(&["shop.example.com/item/1111?ref=123", "shop.example.com/cart"])
    );
}

#[test]
fn test_endpoint_dedup_folds_numeric_ids() {
    let input = lines(&[
        "https://api.example.com/v1/users/17/posts/4",
        "https://api.example.com/v1/users/99/posts/7",
        "https://api.example.com/v1/health",
    ]);
    let deduped = dedupe_by_endpoint(&input);
    assert_eq!(
        deduped,
        lines(&[
            "https://api.example.com/v1/users/17/posts/4",
            "https://api.example.com/v1/health"
        ])
    );
    assert_eq!(
        extract_base_endpoint(&deduped[0]),
        "api.example.com/v1/users/posts"
    );
}

#[test]
fn test_sort_is_case_insensitive_and_idempotent() {
    let input = lines(&["Zeta.com", "alpha.com", "BETA.com"]);
    let sorted = sort_lines(&input);
    assert_eq!(sorted, lines(&["alpha.com", "BETA.com", "Zeta.com"]));
    assert_eq!(sort_lines(&sorted), sorted);
}

#[test]
fn test_validity_filter() {
    let input = lines(&[
        "https://good.example.com/path",
        "http://localhost:8080",
        "10.0.0.1",
        "definitely not a url",
        "missing tld.",
    ]);
    assert_eq!(
        retain_valid_urls(&input),
        lines(&[
            "https://good.example.com/path",
            "http://localhost:8080",
            "10.0.0.1"
        ])
    );
}

#[test]
fn test_include_exclude_round_trip() {
    let input = lines(&[
        "https://app.example.com/login",
        "https://example.com",
        "https://cdn.vendor.net/lib.js",
    ]);
    let list = parse_domain_list("https://www.Example.com/ignored-path\n");
    assert_eq!(list, lines(&["example.com"]));

    assert_eq!(
        filter_include(&input, &list),
        lines(&["https://app.example.com/login", "https://example.com"])
    );
    assert_eq!(
        filter_exclude(&input, &list),
        lines(&["https://cdn.vendor.net/lib.js"])
    );
}

#[test]
fn test_group_by_tld_ordering() {
    let input = lines(&[
        "https://b.org",
        "https://a.com",
        "https://site.co.uk/x",
        "https://a.com/dup",
    ]);
    let groups = group_by_tld(&input);

    let tlds: Vec<&str> = groups.iter().map(|g| g.tld.as_str()).collect();
    assert_eq!(tlds, vec!["com", "org", "uk"]);
    assert_eq!(groups[0].domains, lines(&["a.com"]));
    assert_eq!(groups[2].domains, lines(&["site.co.uk"]));
}

#[test]
fn test_tld_extraction_skips_ips() {
    let input = lines(&["a.com", "192.168.1.1", "b.co.uk"]);
    assert_eq!(extract_tlds(&input), lines(&["com", "uk"]));
}

#[test]
fn test_root_domain_extraction_is_stable() {
    let input = lines(&[
        "https://one.two.example.co.uk",
        "https://www.example.com/a",
        "plain.org",
    ]);
    let roots = extract_root_domains(&input);
    // Extracting again from the extracted roots is a fixed point.
    assert_eq!(extract_root_domains(&roots), roots);
}

#[test]
fn test_summary_counts() {
    let input = lines(&[
        "https://a.example.com/1",
        "https://b.example.com/2",
        "not!!valid",
        "https://other.org",
    ]);
    let summary = summarize(&input);
    assert_eq!(summary.total_lines, 4);
    assert_eq!(summary.valid_urls, 3);
    assert_eq!(summary.unique_root_domains, 2);
}

#[test]
fn test_api_token_url_normalization() {
    assert!(is_valid_url("api.site.com/users/12345?token=abcdef1234567890"));
    assert_eq!(
        normalize_url("api.site.com/users/12345?token=abcdef1234567890"),
        "api.site.com/users/{id}?token={hash}"
    );
}

#[test]
fn test_extract_domain_handles_ports_and_fragments() {
    assert_eq!(
        extract_domain("https://example.com:8443/path#frag"),
        Some("example.com".to_string())
    );
    assert_eq!(extract_domain("#fragment-only"), None);
}
