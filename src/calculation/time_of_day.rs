//! Time-of-day parsing.
//!
//! Shift records carry their start and end times as strings. This module
//! turns them into [`NaiveTime`] values or reports
//! [`EngineError::InvalidTimeFormat`].

use chrono::NaiveTime;

use crate::error::{EngineError, EngineResult};

/// Formats accepted for a time of day, tried in order.
///
/// `%.f` makes a fractional-seconds suffix optional, so values read back
/// from a `time` column (`09:00:00.000000`) are accepted as well.
const TIME_FORMATS: [&str; 2] = ["%H:%M:%S%.f", "%H:%M"];

/// Parses a time of day written as `HH:MM:SS` or `HH:MM`.
///
/// # Arguments
///
/// * `value` - The time string, surrounding whitespace ignored
///
/// # Returns
///
/// The parsed time, or [`EngineError::InvalidTimeFormat`] carrying the
/// original input.
///
/// # Examples
///
/// ```
/// use shift_pay_engine::calculation::parse_time_of_day;
/// use chrono::NaiveTime;
///
/// assert_eq!(parse_time_of_day("17:30").unwrap(), NaiveTime::from_hms_opt(17, 30, 0).unwrap());
/// assert_eq!(parse_time_of_day("06:00:00").unwrap(), NaiveTime::from_hms_opt(6, 0, 0).unwrap());
/// assert!(parse_time_of_day("5pm").is_err());
/// ```
pub fn parse_time_of_day(value: &str) -> EngineResult<NaiveTime> {
    let trimmed = value.trim();

    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| EngineError::InvalidTimeFormat {
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hms(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn test_parses_hours_minutes_seconds() {
        assert_eq!(parse_time_of_day("22:15:30").unwrap(), hms(22, 15, 30));
    }

    #[test]
    fn test_parses_hours_minutes() {
        assert_eq!(parse_time_of_day("09:00").unwrap(), hms(9, 0, 0));
    }

    #[test]
    fn test_parses_fractional_seconds() {
        assert_eq!(parse_time_of_day("09:00:00.000000").unwrap(), hms(9, 0, 0));
    }

    #[test]
    fn test_ignores_surrounding_whitespace() {
        assert_eq!(parse_time_of_day(" 18:00 ").unwrap(), hms(18, 0, 0));
    }

    #[test]
    fn test_midnight() {
        assert_eq!(parse_time_of_day("00:00").unwrap(), hms(0, 0, 0));
    }

    #[test]
    fn test_rejects_out_of_range_hour() {
        match parse_time_of_day("24:30") {
            Err(EngineError::InvalidTimeFormat { value }) => assert_eq!(value, "24:30"),
            other => panic!("Expected InvalidTimeFormat error, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_out_of_range_minute() {
        assert!(matches!(
            parse_time_of_day("10:75"),
            Err(EngineError::InvalidTimeFormat { .. })
        ));
    }

    #[test]
    fn test_rejects_empty_and_garbage() {
        assert!(parse_time_of_day("").is_err());
        assert!(parse_time_of_day("noon").is_err());
        assert!(parse_time_of_day("2024-01-05T09:00:00").is_err());
    }
}
