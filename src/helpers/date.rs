//! Date helper functions
//!
//! Published dates in front matter are either bare calendar dates
//! (`2026-02-24`) or full timestamps. Bare dates are read as local midnight
//! so the rendered day never shifts in zones west of UTC.

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime};

use crate::error::{Error, Result};

/// Local timestamp layouts accepted after normalisation, tried in order
const LOCAL_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// Offset-bearing layouts not covered by RFC 3339 (which requires seconds)
const OFFSET_FORMATS: [&str; 1] = ["%Y-%m-%dT%H:%M%:z"];

/// Years that render as exactly four digits
const YEAR_RANGE: std::ops::RangeInclusive<i32> = 1000..=9999;

/// Format a date for display, optionally followed by how long ago it was
///
/// Relative suffixes are measured against today's date on the local clock.
///
/// # Examples
/// ```ignore
/// format_date("2026-02-24", false)? // -> "February 24, 2026"
/// format_date("2026-02-20", true)?  // -> "February 20, 2026 (4d ago)" on 2026-02-24
/// ```
pub fn format_date(input: &str, include_relative: bool) -> Result<String> {
    format_date_at(input, include_relative, Local::now().date_naive())
}

/// Same as [`format_date`] with "today" supplied by the caller
pub fn format_date_at(input: &str, include_relative: bool, today: NaiveDate) -> Result<String> {
    let date = parse_date(input)?.date();
    let absolute = full_date(date);

    if !include_relative {
        return Ok(absolute);
    }

    let days = today.signed_duration_since(date).num_days();
    Ok(format!("{} ({})", absolute, relative_label(days)))
}

/// Parse a published date into local wall-clock time
///
/// Inputs without a time component get `T00:00:00` appended. Timestamps
/// with `Z` or a numeric offset are converted to the local zone. Years
/// outside 1000..=9999 are rejected so the year always renders as four
/// digits.
pub fn parse_date(input: &str) -> Result<NaiveDateTime> {
    let trimmed = input.trim();
    let normalized = if trimmed.contains('T') {
        trimmed.to_string()
    } else {
        format!("{}T00:00:00", trimmed)
    };

    let parsed = parse_with_offset(&normalized).or_else(|| {
        LOCAL_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(&normalized, fmt).ok())
    });

    match parsed {
        Some(dt) if YEAR_RANGE.contains(&dt.year()) => Ok(dt),
        _ => Err(Error::InvalidDate {
            input: input.to_string(),
        }),
    }
}

/// Parse a timestamp carrying `Z` or `±HH:MM` and convert it to local time
fn parse_with_offset(normalized: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(normalized) {
        return Some(dt.with_timezone(&Local).naive_local());
    }

    let explicit = match normalized.strip_suffix(['Z', 'z']) {
        Some(rest) => format!("{}+00:00", rest),
        None => normalized.to_string(),
    };
    OFFSET_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(&explicit, fmt).ok())
        .map(|dt| dt.with_timezone(&Local).naive_local())
}

/// Format date in full format (like "January 1, 2024")
pub fn full_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Bucket a day difference into a short label
///
/// Months are 30-day blocks and years 365-day blocks, not calendar-aware.
fn relative_label(days: i64) -> String {
    if days < 0 {
        "in the future".to_string()
    } else if days == 0 {
        "Today".to_string()
    } else if days < 30 {
        format!("{}d ago", days)
    } else if days < 365 {
        format!("{}mo ago", days / 30)
    } else {
        format!("{}y ago", days / 365)
    }
}
