//! CLI output formatting for a finished run.
//!
//! Progress is logged while the walk runs; this is the summary printed to
//! stdout once it is over.
//!
//! ```text
//! Generated 42 pages in 10 directories
//! Skipped 2 excluded directories
//! Wrote 2 shared assets
//!
//! Failures (1)
//!     write page failed for '/srv/maps/zip.html': Permission denied (os error 13)
//! ```
//!
//! [`format_report`] is pure and returns lines for testability;
//! [`print_report`] writes them.

use crate::generate::RunReport;

fn plural(n: usize, one: &str, many: &str) -> String {
    format!("{} {}", n, if n == 1 { one } else { many })
}

/// Format the end-of-run summary.
pub fn format_report(report: &RunReport) -> Vec<String> {
    let mut lines = vec![format!(
        "Generated {} in {}",
        plural(report.pages_written, "page", "pages"),
        plural(report.directories_visited, "directory", "directories"),
    )];

    if report.directories_excluded > 0 {
        lines.push(format!(
            "Skipped {}",
            plural(report.directories_excluded, "excluded directory", "excluded directories")
        ));
    }
    if report.assets_written > 0 {
        lines.push(format!(
            "Wrote {}",
            plural(report.assets_written, "shared asset", "shared assets")
        ));
    }

    if !report.failures.is_empty() {
        lines.push(String::new());
        lines.push(format!("Failures ({})", report.failures.len()));
        for failure in &report.failures {
            lines.push(format!("    {}", failure));
        }
    }

    lines
}

/// Print the end-of-run summary to stdout.
pub fn print_report(report: &RunReport) {
    for line in format_report(report) {
        println!("{}", line);
    }
}
