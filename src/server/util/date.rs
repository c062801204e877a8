use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::server::error::AppError;

const DATE_FORMAT: &str = "%Y-%m-%d";

const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Normalizes an exam date to its `YYYY-MM-DD` calendar-date portion.
///
/// A plain calendar date is kept as is. A date-time (RFC 3339 with offset, or a naive
/// `YYYY-MM-DDTHH:MM[:SS[.fff]]`) is truncated to the date written in it: time-of-day and
/// offset are dropped, not converted, so `2025-03-10T23:30:00-05:00` becomes `2025-03-10`.
///
/// # Arguments
/// - `value` - Date or date-time text supplied by the caller
///
/// # Returns
/// - `Ok(String)` - The calendar date as `YYYY-MM-DD`
/// - `Err(AppError::Validation)` - The value is neither a date nor a date-time
pub fn normalize_exam_date(value: &str) -> Result<String, AppError> {
    let value = value.trim();

    let date = if let Ok(date) = NaiveDate::parse_from_str(value, DATE_FORMAT) {
        date
    } else if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        datetime.date_naive()
    } else {
        NAIVE_DATETIME_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
            .map(|datetime| datetime.date())
            .ok_or_else(|| {
                AppError::Validation(format!(
                    "Invalid exam date '{}': expected YYYY-MM-DD or an ISO 8601 date-time",
                    value
                ))
            })?
    };

    Ok(date.format(DATE_FORMAT).to_string())
}
