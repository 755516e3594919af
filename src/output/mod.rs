pub mod human;

use crate::batch::{BatchSummary, FileReport};

/// Print the status line for one file, unstyled.
pub fn print_report(report: &FileReport) {
    println!("{report}");
}

/// Print the closing summary of a batch.
pub fn print_summary(summary: &BatchSummary) {
    let line = summary.to_string();
    if summary.has_failures() {
        human::warning(&line);
    } else {
        human::success(&line);
    }
}
