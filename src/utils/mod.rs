//! Shared utilities.

mod sanitize;

pub use sanitize::sanitize;

use regex::Regex;

/// Compiles a regex pattern, panicking with a detailed message if compilation
/// fails. Used for static patterns that are compile-time constants, where a
/// failure is a programming error rather than a runtime condition.
pub(crate) fn compile_regex_unsafe(pattern: &str, context: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in {}: {}. This is a programming error.",
            pattern, context, e
        )
    })
}
