//! Input sanitization.
//!
//! Every string entering the engine goes through [`sanitize`] first. The
//! reduction to printable ASCII is deliberate: Unicode homoglyph spoofing is
//! neutralized by stripping rather than by IDNA-decoding, and the rest of the
//! engine only ever has to reason about `[\x20-\x7E]`.

/// Reduces a string to trimmed, whitespace-collapsed printable ASCII.
///
/// Characters outside `0x20..=0x7E` (including all control characters and
/// every non-ASCII code point) are removed, leading/trailing whitespace is
/// trimmed, and internal whitespace runs collapse to a single space.
///
/// Total and idempotent: `sanitize(&sanitize(s)) == sanitize(s)` for all `s`.
///
/// # Arguments
///
/// * `input` - The raw line as typed or pasted by the user
///
/// # Returns
///
/// The sanitized string, possibly empty. Characters that survive keep their
/// original relative order.
pub fn sanitize(input: &str) -> String {
    let printable: String = input
        .chars()
        .filter(|c| {
            let code = *c as u32;
            (0x20..=0x7E).contains(&code)
        })
        .collect();

    // Only ASCII spaces can remain at this point, so splitting on whitespace
    // and rejoining both trims and collapses runs.
    printable.split_whitespace().collect::<Vec<_>>().join(" ")
}
