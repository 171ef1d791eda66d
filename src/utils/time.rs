//! Date utilities for burn history display
//!
//! Burn history records carry either a calendar day (`2024-12-30`) or a full
//! block timestamp (`2024-12-30T23:59:53.178086+00:00`). Both are reduced to
//! the calendar date as written; timestamps keep their own offset.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use tracing::debug;

/// Parse a date-like string into its calendar date
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps and `YYYY-MM-DD HH:MM:SS`.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use lava_burn_stats::utils::time::parse_date_like;
///
/// assert_eq!(parse_date_like("2024-12-30"), NaiveDate::from_ymd_opt(2024, 12, 30));
/// assert_eq!(
///     parse_date_like("2024-12-30T23:59:53.178086+00:00"),
///     NaiveDate::from_ymd_opt(2024, 12, 30)
/// );
/// assert_eq!(parse_date_like("yesterday"), None);
/// ```
pub fn parse_date_like(date_like: &str) -> Option<NaiveDate> {
    let trimmed = date_like.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.date());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    None
}

/// Format as `"<year> <Mon>"`, e.g. `"2024 Dec"`
///
/// Unparseable input is returned unchanged.
pub fn format_date(date_like: &str) -> String {
    match parse_date_like(date_like) {
        Some(date) => date.format("%Y %b").to_string(),
        None => {
            debug!("Unparseable date left as-is: {}", date_like);
            date_like.to_string()
        }
    }
}

/// Format as `"<Month> <day>, <year>"`, e.g. `"December 30, 2024"`
///
/// Unparseable input is returned unchanged.
pub fn format_full_date(date_like: &str) -> String {
    match parse_date_like(date_like) {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => {
            debug!("Unparseable date left as-is: {}", date_like);
            date_like.to_string()
        }
    }
}

/// Whole days from `start` to `end` (negative when `end` precedes `start`)
pub fn days_between(start: &str, end: &str) -> Option<i64> {
    let start = parse_date_like(start)?;
    let end = parse_date_like(end)?;
    Some((end - start).num_days())
}
