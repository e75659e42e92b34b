//! Fixed-width size and date strings for file listings.
//!
//! Listings are rendered in a monospace font with `white-space: pre`, so every
//! size is padded to the same width and every date has the same shape. That
//! keeps columns aligned without a table.

use chrono::{DateTime, Utc};

const KIB: u64 = 1024;
const MIB: u64 = KIB * 1024;
const GIB: u64 = MIB * 1024;

/// Shown when a file's size could not be read.
pub const SIZE_PLACEHOLDER: &str = "N/A  B";

/// Shown when a file's modification time could not be read.
pub const DATE_PLACEHOLDER: &str = "N/A";

/// Human-readable byte count, right-justified to a fixed width.
///
/// ```text
///     512  B
///     1.5 KB
///   100.0 MB
///     2.0 GB
/// ```
pub fn format_size(bytes: Option<u64>) -> String {
    let Some(bytes) = bytes else {
        return SIZE_PLACEHOLDER.to_string();
    };
    if bytes >= GIB {
        format!("{:6.1} GB", bytes as f64 / GIB as f64)
    } else if bytes >= MIB {
        format!("{:6.1} MB", bytes as f64 / MIB as f64)
    } else if bytes >= KIB {
        format!("{:6.1} KB", bytes as f64 / KIB as f64)
    } else {
        format!("{:6}  B", bytes)
    }
}

/// Modification time as `YYYY-MM-DD HH:MM` in UTC.
pub fn format_date(modified: Option<DateTime<Utc>>) -> String {
    match modified {
        Some(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        None => DATE_PLACEHOLDER.to_string(),
    }
}
