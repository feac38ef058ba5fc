//! Timestamp handling for provider dates and refresh times.

use chrono::{DateTime, Datelike, NaiveDate, Utc};

use crate::errors::{Result, StockDataError};

/// Number of trailing characters replaced by `Z` when correcting refresh times.
const REFRESH_SUFFIX_LEN: usize = 5;

/// Normalize a provider refresh time, e.g. `2018-03-27T21:46:11.036Z` becomes
/// `2018-03-27T21:46:11Z`.
pub fn corrected_timestamp(raw: &str) -> Result<String> {
    let cut = raw
        .char_indices()
        .rev()
        .nth(REFRESH_SUFFIX_LEN - 1)
        .map(|(idx, _)| idx)
        .ok_or_else(|| StockDataError::InvalidTimestamp(raw.to_string()))?;

    Ok(format!("{}Z", &raw[..cut]))
}

/// Format a provider refresh time as a long, locale-independent UTC string,
/// e.g. `"Tuesday, March 27th, 2018, 9:46 PM UTC+0"`.
pub fn last_update_time(raw: &str) -> Result<String> {
    let corrected = corrected_timestamp(raw)?;
    let instant = DateTime::parse_from_rfc3339(&corrected)
        .map_err(|_| StockDataError::InvalidTimestamp(raw.to_string()))?
        .with_timezone(&Utc);

    Ok(format_long(&instant))
}

/// Milliseconds since the epoch for a row date.
///
/// Date-only values resolve to midnight UTC.
pub fn epoch_millis(date: &str) -> Result<i64> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(date) {
        return Ok(instant.timestamp_millis());
    }

    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp_millis())
        .ok_or_else(|| StockDataError::InvalidTimestamp(date.to_string()))
}

fn format_long(instant: &DateTime<Utc>) -> String {
    let day = instant.day();
    format!(
        "{}, {} {}{}, {}, {} UTC+0",
        instant.format("%A"),
        instant.format("%B"),
        day,
        ordinal_suffix(day),
        instant.year(),
        instant.format("%-I:%M %p"),
    )
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corrected_timestamp() {
        assert_eq!(
            corrected_timestamp("2018-03-27T21:46:11.036Z").unwrap(),
            "2018-03-27T21:46:11Z"
        );
    }

    #[test]
    fn test_corrected_timestamp_too_short() {
        assert_eq!(
            corrected_timestamp("036Z"),
            Err(StockDataError::InvalidTimestamp("036Z".to_string()))
        );
    }

    #[test]
    fn test_last_update_time() {
        assert_eq!(
            last_update_time("2018-03-27T21:46:11.036Z").unwrap(),
            "Tuesday, March 27th, 2018, 9:46 PM UTC+0"
        );
    }

    #[test]
    fn test_last_update_time_morning() {
        assert_eq!(
            last_update_time("2018-01-01T00:05:59.999Z").unwrap(),
            "Monday, January 1st, 2018, 12:05 AM UTC+0"
        );
    }

    #[test]
    fn test_last_update_time_invalid() {
        assert_eq!(
            last_update_time("yesterday-ish").unwrap_err().code(),
            "INVALID_TIMESTAMP"
        );
        assert_eq!(last_update_time("").unwrap_err().code(), "INVALID_TIMESTAMP");
    }

    #[test]
    fn test_ordinal_suffix() {
        let cases = [
            (1, "st"),
            (2, "nd"),
            (3, "rd"),
            (4, "th"),
            (11, "th"),
            (12, "th"),
            (13, "th"),
            (21, "st"),
            (22, "nd"),
            (23, "rd"),
            (31, "st"),
        ];
        for (day, suffix) in cases {
            assert_eq!(ordinal_suffix(day), suffix, "day {day}");
        }
    }

    #[test]
    fn test_epoch_millis_date_only() {
        assert_eq!(epoch_millis("2018-03-27").unwrap(), 1_522_108_800_000);
    }

    #[test]
    fn test_epoch_millis_rfc3339() {
        assert_eq!(
            epoch_millis("2018-03-27T00:00:01.5Z").unwrap(),
            1_522_108_801_500
        );
    }

    #[test]
    fn test_epoch_millis_invalid() {
        assert_eq!(
            epoch_millis("27/03/2018"),
            Err(StockDataError::InvalidTimestamp("27/03/2018".to_string()))
        );
    }
}
