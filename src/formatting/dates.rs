// src/formatting/dates.rs
//! Publication-date display formatting.
//!
//! Dates render as `dd MMM yyyy` with Brazilian-Portuguese month
//! abbreviations (`15 mar 2021`), matching how the blog has always
//! displayed them. A missing timestamp renders as an empty slot rather
//! than a fabricated date.

use chrono::{DateTime, Datelike, FixedOffset};

/// Month abbreviations in pt-BR, indexed by `month0`.
const MONTH_ABBREVIATIONS: [&str; 12] = [
    "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
];

/// Formats a publication timestamp for display.
pub fn format_publication_date(published_at: Option<&DateTime<FixedOffset>>) -> String {
    match published_at {
        Some(timestamp) => format!(
            "{:02} {} {}",
            timestamp.day(),
            MONTH_ABBREVIATIONS[timestamp.month0() as usize],
            timestamp.year()
        ),
        None => String::new(),
    }
}
