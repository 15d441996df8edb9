//! Error and disposition type definitions.

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// What happened to an input line on its way through a run.
///
/// The engine itself never errors; these dispositions are the only
/// user-visible "failure" vocabulary, surfaced as counters at the end of a
/// run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum LineDisposition {
    /// Line survived into the output.
    Kept,
    /// Line was empty after sanitization.
    Blank,
    /// Line was a `#` comment.
    Comment,
    /// Line exceeded the maximum accepted length.
    Oversize,
    /// Line was folded into an earlier duplicate.
    Duplicate,
    /// Line failed URL or domain validation.
    Invalid,
    /// Line was removed by an include/exclude filter.
    Excluded,
}

impl LineDisposition {
    /// Human-readable counter label.
    pub fn as_str(&self) -> &'static str {
        match self {
            LineDisposition::Kept => "kept",
            LineDisposition::Blank => "blank",
            LineDisposition::Comment => "comment",
            LineDisposition::Oversize => "oversize",
            LineDisposition::Duplicate => "duplicate",
            LineDisposition::Invalid => "invalid",
            LineDisposition::Excluded => "excluded",
        }
    }
}
