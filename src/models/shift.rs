//! Shift model.
//!
//! This module defines the [`Shift`] record: one logged work period for one
//! employer, as supplied by the record store.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Represents a logged work shift.
///
/// Times of day are kept as the strings the store holds (`HH:MM:SS` or
/// `HH:MM`); the calculation engine parses them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    /// Identifier assigned by the record store.
    pub id: i64,
    /// The employer this shift was worked for.
    pub employer_id: i64,
    /// The calendar date the shift begins.
    pub work_date: NaiveDate,
    /// Time of day the shift begins.
    pub start_time: String,
    /// Time of day the shift ends.
    pub end_time: String,
    /// When true, `end_time` falls on the day after `work_date` (or on `end_date`).
    #[serde(default)]
    pub is_overnight_shift: bool,
    /// Explicit end date, honoured only for overnight shifts.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

impl Shift {
    /// Returns the calendar date on which the shift ends.
    ///
    /// For an overnight shift this is the explicit `end_date` when present,
    /// otherwise the day after `work_date`. Same-day shifts end on
    /// `work_date`, whatever `end_date` says. Returns `None` only when the
    /// following day is outside chrono's date range.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_pay_engine::models::Shift;
    /// use chrono::NaiveDate;
    ///
    /// let shift = Shift {
    ///     id: 1,
    ///     employer_id: 1,
    ///     work_date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
    ///     start_time: "22:00".to_string(),
    ///     end_time: "06:00".to_string(),
    ///     is_overnight_shift: true,
    ///     end_date: None,
    /// };
    /// assert_eq!(shift.resolved_end_date(), NaiveDate::from_ymd_opt(2024, 1, 6));
    /// ```
    pub fn resolved_end_date(&self) -> Option<NaiveDate> {
        if !self.is_overnight_shift {
            return Some(self.work_date);
        }
        match self.end_date {
            Some(end_date) => Some(end_date),
            None => self.work_date.succ_opt(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_shift(work_date: &str, overnight: bool, end_date: Option<&str>) -> Shift {
        Shift {
            id: 1,
            employer_id: 1,
            work_date: make_date(work_date),
            start_time: "22:00:00".to_string(),
            end_time: "06:00:00".to_string(),
            is_overnight_shift: overnight,
            end_date: end_date.map(make_date),
        }
    }

    #[test]
    fn test_same_day_shift_ends_on_work_date() {
        let shift = make_shift("2024-01-08", false, None);
        assert_eq!(shift.resolved_end_date(), Some(make_date("2024-01-08")));
    }

    #[test]
    fn test_same_day_shift_ignores_explicit_end_date() {
        let shift = make_shift("2024-01-08", false, Some("2024-01-10"));
        assert_eq!(shift.resolved_end_date(), Some(make_date("2024-01-08")));
    }

    #[test]
    fn test_overnight_shift_defaults_to_next_day() {
        let shift = make_shift("2024-02-29", true, None);
        assert_eq!(shift.resolved_end_date(), Some(make_date("2024-03-01")));
    }

    #[test]
    fn test_overnight_shift_uses_explicit_end_date() {
        let shift = make_shift("2024-01-05", true, Some("2024-01-07"));
        assert_eq!(shift.resolved_end_date(), Some(make_date("2024-01-07")));
    }

    #[test]
    fn test_overnight_shift_at_max_date_has_no_end() {
        let mut shift = make_shift("2024-01-05", true, None);
        shift.work_date = NaiveDate::MAX;
        assert_eq!(shift.resolved_end_date(), None);
    }

    #[test]
    fn test_shift_deserialization_defaults() {
        let json = r#"{
            "id": 4,
            "employer_id": 2,
            "work_date": "2024-01-08",
            "start_time": "09:00",
            "end_time": "17:30"
        }"#;

        let shift: Shift = serde_json::from_str(json).unwrap();
        assert!(!shift.is_overnight_shift);
        assert_eq!(shift.end_date, None);
        assert_eq!(shift.start_time, "09:00");
    }
}
