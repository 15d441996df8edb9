//! TLD grouping.

use std::collections::BTreeMap;
use std::collections::HashSet;

use crate::extract::{extract_domain, extract_tld};

/// One TLD bucket: the TLD and the deduped, sorted domains under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TldGroup {
    /// The bucket's TLD. Empty when TLD extraction failed for the member
    /// domains (IP literals and other hosts without a resolvable root).
    pub tld: String,
    /// Unique domains in the bucket, sorted ascending.
    pub domains: Vec<String>,
}

/// Buckets the extracted domains of `lines` by TLD.
///
/// Buckets are ordered by TLD name ascending; within a bucket, domains are
/// deduped and sorted. Lines with no extractable domain are skipped;
/// domains whose TLD cannot be resolved land in a bucket with an empty
/// TLD name.
pub fn group_by_tld(lines: &[String]) -> Vec<TldGroup> {
    let mut buckets: BTreeMap<String, (HashSet<String>, Vec<String>)> = BTreeMap::new();

    for line in lines {
        let Some(domain) = extract_domain(line) else {
            continue;
        };
        let tld = extract_tld(&domain).unwrap_or_default();

        let (seen, members) = buckets.entry(tld).or_default();
        if seen.insert(domain.clone()) {
            members.push(domain);
        }
    }

    buckets
        .into_iter()
        .map(|(tld, (_, mut domains))| {
            domains.sort();
            TldGroup { tld, domains }
        })
        .collect()
}

/// Renders TLD groups as output lines: a `=== .<tld> ===` header per
/// bucket, its domains, and a blank spacer line.
pub fn render_tld_groups(groups: &[TldGroup]) -> Vec<String> {
    let mut out = Vec::new();
    for group in groups {
        out.push(format!("=== .{} ===", group.tld));
        out.extend(group.domains.iter().cloned());
        out.push(String::new());
    }
    out
}
