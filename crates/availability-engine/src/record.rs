//! Booking records as the Holidaze API returns them.
//!
//! This is the schema step between the transport layer and the engine: JSON
//! booking objects are deserialized into [`BookingRecord`], their timestamps
//! are converted to the configured timezone and truncated to calendar dates,
//! and the result is a [`BookingInterval`].

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::range::BookingInterval;

/// A booking object from `GET /holidaze/venues/{id}?_bookings=true`.
///
/// Only `dateFrom` and `dateTo` are required; the remaining fields are kept
/// for callers that display them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    #[serde(default)]
    pub id: Option<String>,
    pub date_from: String,
    pub date_to: String,
    #[serde(default)]
    pub guests: Option<u32>,
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub updated: Option<String>,
}

impl BookingRecord {
    /// Convert to the inclusive interval of calendar dates in `tz`.
    ///
    /// # Errors
    /// Returns `EngineError::InvalidDate` if either timestamp is unparseable,
    /// and `EngineError::InvalidArgument` if `dateTo` falls before `dateFrom`.
    pub fn to_interval(&self, tz: Tz) -> Result<BookingInterval> {
        let start = parse_api_date(&self.date_from, tz)?;
        let end = parse_api_date(&self.date_to, tz)?;
        BookingInterval::new(start, end).map_err(|e| match (&self.id, e) {
            (Some(id), EngineError::InvalidArgument(msg)) => {
                EngineError::InvalidArgument(format!("booking {}: {}", id, msg))
            }
            (_, e) => e,
        })
    }
}

/// Parse an API date into a calendar date.
///
/// Accepts, in order:
/// - RFC 3339 timestamps (e.g., "2024-06-01T00:00:00.000Z"), converted to `tz`
/// - naive datetimes (e.g., "2024-06-01T14:00:00"), taken as already local
/// - plain dates (e.g., "2024-06-01")
///
/// # Errors
/// Returns `EngineError::InvalidDate` if none of the formats match.
pub fn parse_api_date(s: &str, tz: Tz) -> Result<NaiveDate> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&tz).date_naive());
    }
    if let Ok(ndt) = s.parse::<NaiveDateTime>() {
        return Ok(ndt.date());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| EngineError::InvalidDate(format!("'{}': {}", s, e)))
}

/// Parse a caller-supplied "now" into wall-clock time in `tz`.
///
/// Accepts RFC 3339 (e.g., the output of `new Date().toISOString()`), a naive
/// local datetime, or a plain date, which is taken as midnight.
///
/// # Errors
/// Returns `EngineError::InvalidDate` if none of the formats match.
pub fn parse_now(s: &str, tz: Tz) -> Result<NaiveDateTime> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&tz).naive_local());
    }
    if let Ok(ndt) = s.parse::<NaiveDateTime>() {
        return Ok(ndt);
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map(|d| d.and_time(NaiveTime::MIN))
        .map_err(|e| EngineError::InvalidDate(format!("'{}': {}", s, e)))
}

/// Parse an IANA timezone name.
///
/// # Errors
/// Returns `EngineError::InvalidTimezone` if the name is not a known zone.
pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.parse()
        .map_err(|_| EngineError::InvalidTimezone(name.to_string()))
}

/// Convert a JSON array of API booking objects into intervals.
///
/// # Errors
/// Returns `EngineError::Json` for malformed JSON and the errors of
/// [`BookingRecord::to_interval`] for malformed records.
pub fn intervals_from_json(json: &str, tz: Tz) -> Result<Vec<BookingInterval>> {
    let records: Vec<BookingRecord> = serde_json::from_str(json)?;
    records.iter().map(|r| r.to_interval(tz)).collect()
}
