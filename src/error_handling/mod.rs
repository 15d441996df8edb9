//! Error types and run statistics.
//!
//! The core engine is total and never raises; the types here cover the two
//! places failure is real: process initialization, and the per-line
//! bookkeeping surfaced to the user at the end of a run.

mod stats;
mod types;

pub use stats::LineStats;
pub use types::{InitializationError, LineDisposition};
