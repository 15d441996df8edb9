//! Application-level helpers shared by the run orchestration.

pub mod statistics;

pub use statistics::{log_input_summary, print_line_statistics, print_simple_summary};
