//! HamStudy timestamp handling and ISO 8601 input validation.

use super::RenderError;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Shape of every timestamp HamStudy returns. Milliseconds are always zero
/// and the trailing `Z` marks UTC.
const HAMSTUDY_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S.000Z";

/// Extended and basic calendar dates.
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y%m%d"];

/// Extended and basic times of day, with optional fractional seconds.
const TIME_FORMATS: [&str; 4] = ["%H:%M:%S%.f", "%H:%M", "%H%M%S%.f", "%H%M"];

/// `±HH:MM` and `±HHMM` offsets (the sign is split off first).
const OFFSET_FORMATS: [&str; 2] = ["%H:%M", "%H%M"];

/// Converts a HamStudy timestamp into whole seconds since the Unix epoch.
///
/// The parsed value is tagged as UTC before conversion; the host time zone
/// never participates.
///
/// # Errors
///
/// Returns [`RenderError::MalformedTimestamp`] when `value` does not match
/// `YYYY-MM-DDTHH:MM:SS.000Z`.
///
/// # Examples
///
/// ```
/// use hamstudy_bot::exam::domain::to_epoch_seconds;
///
/// assert_eq!(to_epoch_seconds("2024-06-01T12:00:00.000Z"), Ok(1_717_243_200));
/// ```
pub fn to_epoch_seconds(value: &str) -> Result<i64, RenderError> {
    NaiveDateTime::parse_from_str(value, HAMSTUDY_TIMESTAMP_FORMAT)
        .map(|naive| naive.and_utc().timestamp())
        .map_err(|_| RenderError::MalformedTimestamp(value.to_owned()))
}

/// Formats a HamStudy timestamp as a chat timestamp token (`<t:EPOCH:f>`),
/// which clients display in the reader's local time.
///
/// # Errors
///
/// Returns [`RenderError::MalformedTimestamp`] when `value` cannot be parsed.
pub fn timestamp_token(value: &str) -> Result<String, RenderError> {
    Ok(format!("<t:{}:f>", to_epoch_seconds(value)?))
}

/// Reports whether `value` is an ISO 8601 calendar date or date-time.
///
/// Accepts `YYYY-MM-DD` or `YYYYMMDD`, optionally joined by `T` or a space
/// to a time of `HH`, `HH:MM`, `HH:MM:SS[.fff]` or their basic forms,
/// followed by `Z` or a `±HH[:MM]` offset.
///
/// # Examples
///
/// ```
/// use hamstudy_bot::exam::domain::is_iso_8601;
///
/// assert!(is_iso_8601("2024-06-01T12:00Z"));
/// assert!(is_iso_8601("20240601"));
/// assert!(!is_iso_8601("06/01/2024"));
/// ```
#[must_use]
pub fn is_iso_8601(value: &str) -> bool {
    match value.split_once(['T', ' ']) {
        Some((date, time)) => is_calendar_date(date) && is_time_with_offset(time),
        None => is_calendar_date(value),
    }
}

fn is_calendar_date(value: &str) -> bool {
    DATE_FORMATS
        .iter()
        .any(|format| NaiveDate::parse_from_str(value, format).is_ok())
}

fn is_time_with_offset(value: &str) -> bool {
    if let Some(local) = value.strip_suffix('Z') {
        return is_time_of_day(local);
    }
    match value.rsplit_once(['+', '-']) {
        Some((local, offset)) => is_time_of_day(local) && is_utc_offset(offset),
        None => is_time_of_day(value),
    }
}

fn is_time_of_day(value: &str) -> bool {
    is_bare_hour(value)
        || TIME_FORMATS
            .iter()
            .any(|format| NaiveTime::parse_from_str(value, format).is_ok())
}

fn is_utc_offset(value: &str) -> bool {
    is_bare_hour(value)
        || OFFSET_FORMATS
            .iter()
            .any(|format| NaiveTime::parse_from_str(value, format).is_ok())
}

/// Two-digit hour with no minutes, as in `2024-06-01T12` or `+05`.
fn is_bare_hour(value: &str) -> bool {
    value.len() == 2
        && value.bytes().all(|byte| byte.is_ascii_digit())
        && value.parse::<u8>().is_ok_and(|hour| hour < 24)
}
