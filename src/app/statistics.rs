//! Statistics printing.

use log::info;
use strum::IntoEnumIterator;

use crate::batch::InputSummary;
use crate::error_handling::{LineDisposition, LineStats};

/// Logs the input summary the way the interactive surface showed it.
pub fn log_input_summary(summary: &InputSummary) {
    info!(
        "Input: {} line{}, {} valid URL{}, {} unique root domain{}",
        summary.total_lines,
        if summary.total_lines == 1 { "" } else { "s" },
        summary.valid_urls,
        if summary.valid_urls == 1 { "" } else { "s" },
        summary.unique_root_domains,
        if summary.unique_root_domains == 1 { "" } else { "s" },
    );
}

/// Logs non-zero disposition counters for a completed run.
pub fn print_line_statistics(stats: &LineStats) {
    let dropped = stats.total_dropped();
    if dropped == 0 {
        return;
    }

    info!("Dropped lines ({} total):", dropped);
    for disposition in LineDisposition::iter() {
        if disposition == LineDisposition::Kept {
            continue;
        }
        let count = stats.get(disposition);
        if count > 0 {
            info!("   {}: {}", disposition.as_str(), count);
        }
    }
}

/// Logs a simple one-line summary of the run.
pub fn print_simple_summary(lines_in: usize, lines_out: usize, elapsed_seconds: f64) {
    info!(
        "Processed {} line{} into {} output line{} in {:.3}s",
        lines_in,
        if lines_in == 1 { "" } else { "s" },
        lines_out,
        if lines_out == 1 { "" } else { "s" },
        elapsed_seconds
    );
}
