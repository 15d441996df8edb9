//! Configuration: CLI options, enums, and shared constants.

pub mod constants;
mod types;

pub use types::{Config, LogFormat, LogLevel, Operation};
