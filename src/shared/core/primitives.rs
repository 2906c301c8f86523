// Calendar-day and timestamp helpers.
//
// Purpose
// - Key daily records by the UTC calendar day of a timestamp.
// - Interpret ISO-8601 inputs from the inbound adapters in one place.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::shared::core::errors::ApplicationError;

/// Truncates `timestamp` to midnight UTC of its UTC calendar date.
pub fn normalize(timestamp: DateTime<Utc>) -> DateTime<Utc> {
    timestamp.date_naive().and_time(NaiveTime::MIN).and_utc()
}

/// Parses an ISO-8601 date-time. Minute precision with a `Z` suffix is accepted too.
pub fn parse_timestamp(input: &str) -> Result<DateTime<Utc>, ApplicationError> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(input) {
        return Ok(parsed.with_timezone(&Utc));
    }
    input
        .strip_suffix('Z')
        .and_then(|naive| NaiveDateTime::parse_from_str(naive, "%Y-%m-%dT%H:%M").ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| ApplicationError::InvalidArgument(format!("invalid date-time: {input}")))
}

/// Parses a date-only (`2024-01-02`) or date-time string into its calendar day.
pub fn parse_calendar_day(input: &str) -> Result<DateTime<Utc>, ApplicationError> {
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }
    parse_timestamp(input)
        .map(normalize)
        .map_err(|_| ApplicationError::InvalidArgument(format!("invalid date: {input}")))
}
