//! Centralized limits for validation and input handling.

/// Maximum overall domain length in characters.
pub const MAX_DOMAIN_LENGTH: usize = 253;

/// Maximum length of a single domain label.
pub const MAX_LABEL_LENGTH: usize = 63;

/// Maximum plausible TLD length. Longer final labels are treated as
/// implausible by the advanced validation tier.
pub const MAX_TLD_LENGTH: usize = 10;

/// Maximum label count before a domain counts as suspiciously deep.
pub const MAX_LABEL_COUNT: usize = 6;

/// Maximum accepted input line length (matches common browser and server
/// URL limits). Longer lines are skipped rather than processed.
pub const MAX_LINE_LENGTH: usize = 2048;
