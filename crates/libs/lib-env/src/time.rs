//! # Time Parsing
//!
//! Timestamp conversion using chrono.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

/// Parse `moment` with a strftime-style `format`, normalised to UTC.
///
/// An empty format means RFC 3339 (`2020-01-05T00:00:00Z`). Otherwise the
/// value is tried as a date-time with an offset, then as a date-time without
/// one (taken as UTC), then as a bare date (UTC midnight).
pub fn parse_time(moment: &str, format: &str) -> Result<DateTime<Utc>, Error> {
    if format.is_empty() {
        return parse_utc(moment);
    }

    if let Ok(dt) = DateTime::parse_from_str(moment, format) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(moment, format) {
        return Ok(naive.and_utc());
    }
    NaiveDate::parse_from_str(moment, format)
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        .map_err(|e| Error::FailToDateParse(format!("{e} (format {format:?})")))
}

/// Parse RFC3339 string to UTC DateTime.
pub fn parse_utc(moment: &str) -> Result<DateTime<Utc>, Error> {
    DateTime::parse_from_rfc3339(moment)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| Error::FailToDateParse(format!("{e} (format RFC 3339)")))
}

// region:    --- Error
#[derive(Debug)]
pub enum Error {
    FailToDateParse(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::FailToDateParse(reason) => write!(fmt, "{reason}"),
        }
    }
}

impl std::error::Error for Error {}
// endregion: --- Error
