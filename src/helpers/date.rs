//! Date helper functions

use chrono::NaiveDate;

/// Parse an ISO-like calendar date string in a handful of common formats.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    let formats = ["%Y-%m-%d", "%Y/%m/%d", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];
    for fmt in formats {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }

    // Datetime strings carry the calendar date in their first ten characters.
    if let Some(prefix) = s.get(..10) {
        if let Ok(d) = NaiveDate::parse_from_str(prefix, "%Y-%m-%d") {
            return Some(d);
        }
    }

    None
}

/// Full month name for a 1-based calendar month.
pub fn month_name(month: u32) -> &'static str {
    const NAMES: [&str; 12] = [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ];
    NAMES
        .get(month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("Unknown")
}

/// Format a post date like "January 15, 2024". Falls back to the raw string
/// when the date does not parse.
pub fn full_date(date: &str) -> String {
    match parse_date(date) {
        Some(d) => d.format("%B %-d, %Y").to_string(),
        None => date.to_string(),
    }
}

/// Format a post date like "Jan 15" for archive rows.
pub fn short_date(date: &str) -> String {
    match parse_date(date) {
        Some(d) => d.format("%b %-d").to_string(),
        None => date.to_string(),
    }
}
