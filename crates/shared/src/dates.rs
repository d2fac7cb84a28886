//! Date option parsing and display formatting.

use chrono::{DateTime, Datelike, NaiveDate};
use thiserror::Error;

/// Error returned when a proposed date list cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateParseError {
    #[error("No dates were provided")]
    Empty,
    #[error("Invalid date: {0}")]
    Invalid(String),
}

/// Parses a single date in one of the accepted input formats.
///
/// Accepted: `YYYY-MM-DD`, an RFC 3339 timestamp (its calendar date), or `MM/DD/YYYY`.
pub fn parse_date(raw: &str) -> Result<NaiveDate, DateParseError> {
    let trimmed = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(timestamp.date_naive());
    }
    NaiveDate::parse_from_str(trimmed, "%m/%d/%Y")
        .map_err(|_| DateParseError::Invalid(trimmed.to_string()))
}

/// Parses a comma-separated list of dates and returns them sorted ascending.
///
/// Blank segments are skipped. Duplicates are kept.
pub fn parse_date_list(raw: &str) -> Result<Vec<NaiveDate>, DateParseError> {
    let mut dates = raw
        .split(',')
        .filter(|segment| !segment.trim().is_empty())
        .map(parse_date)
        .collect::<Result<Vec<_>, _>>()?;

    if dates.is_empty() {
        return Err(DateParseError::Empty);
    }

    dates.sort();
    Ok(dates)
}

/// English ordinal suffix for a day of month.
pub fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// Formats a date as "MMM Do", e.g. `Jan 2nd`.
pub fn format_date_label(date: NaiveDate) -> String {
    let day = date.day();
    format!("{} {}{}", date.format("%b"), day, ordinal_suffix(day))
}
