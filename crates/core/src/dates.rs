// ABOUTME: Date helpers: today's date, timestamp conversion, and "pretty" rendering.
// ABOUTME: Uses chrono; flexible parsing tries a list of common formats in order.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, Utc};

use crate::error::{CoreError, Result};

/// Input format assumed by [`prettify_date`] callers that have ISO dates.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Dates equal to this marker are passed through [`prettify_date`] untouched.
pub const UNKNOWN_DATE: &str = "?";

/// English medium date form: "Jan 1, 2004".
const PRETTY_DATE_FORMAT: &str = "%b %-d, %Y";

/// Today's local date in ISO 8601 form (YYYY-MM-DD).
pub fn current_date() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Converts a Unix timestamp (seconds) to an ISO 8601 date, in UTC.
///
/// Returns None for timestamps chrono cannot represent.
pub fn date_from_timestamp(secs: i64) -> Option<String> {
    let dt = DateTime::<Utc>::from_timestamp(secs, 0)?;
    Some(dt.date_naive().format("%Y-%m-%d").to_string())
}

/// Parses `date` with the strftime-style `input_format` and renders it as "Jan 1, 2004".
///
/// The unknown-date marker `?` is returned unchanged.
pub fn prettify_date(date: &str, input_format: &str) -> Result<String> {
    if date == UNKNOWN_DATE {
        return Ok(date.to_string());
    }

    let parsed = NaiveDate::parse_from_str(date.trim(), input_format)
        .or_else(|_| {
            NaiveDateTime::parse_from_str(date.trim(), input_format).map(|dt| dt.date())
        })
        .map_err(|_| CoreError::date(date, input_format))?;

    Ok(format_pretty(parsed))
}

/// Renders a date in the English medium form used by [`prettify_date`].
pub fn format_pretty(date: NaiveDate) -> String {
    date.format(PRETTY_DATE_FORMAT).to_string()
}

/// Parses a date string written in one of several common shapes.
///
/// Covers ISO dates and datetimes, RFC 3339, RFC 2822, and loose English forms
/// like "Jan 5, 2024" or "5 January 2024". Returns None if nothing matches.
pub fn parse_flexible_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.date_naive());
    }

    let datetime_formats = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];
    for fmt in &datetime_formats {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(naive.date());
        }
    }

    let date_formats = [
        "%Y-%m-%d", // 2024-01-05
        "%Y/%m/%d", // 2024/01/05
        "%b %e, %Y", // Jan 5, 2024
        "%B %e, %Y", // January 5, 2024
        "%e %b %Y", // 5 Jan 2024
        "%e %B %Y", // 5 January 2024
        "%d.%m.%Y", // 05.01.2024
    ];
    for fmt in &date_formats {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Some(date);
        }
    }

    None
}
