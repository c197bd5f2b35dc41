//! Date range and fortnight window models.
//!
//! This module contains the [`DateRange`] type used by range listings and
//! the [`FortnightWindows`] pair used by the fortnight view.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A half-open range of calendar dates: `start` inclusive, `end` exclusive.
///
/// # Example
///
/// ```
/// use shift_pay_engine::models::DateRange;
/// use chrono::NaiveDate;
///
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
/// ).unwrap();
///
/// assert!(range.contains_date(NaiveDate::from_ymd_opt(2024, 1, 8).unwrap())); // start date
/// assert!(range.contains_date(NaiveDate::from_ymd_opt(2024, 1, 14).unwrap()));
/// assert!(!range.contains_date(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())); // end date
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    /// First date in the range.
    pub start: NaiveDate,
    /// First date after the range.
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a range, rejecting empty or inverted ones.
    pub fn new(start: NaiveDate, end: NaiveDate) -> EngineResult<Self> {
        if start >= end {
            return Err(EngineError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates the range of `days` days beginning at `start`.
    pub fn starting_at(start: NaiveDate, days: u64) -> EngineResult<Self> {
        let end = start
            .checked_add_days(Days::new(days))
            .ok_or(EngineError::InvalidDateRange { start, end: start })?;
        Self::new(start, end)
    }

    /// Checks whether `date` falls inside the range.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end
    }

    /// Returns the number of days covered.
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}

/// Two consecutive, non-overlapping 7-day windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FortnightWindows {
    /// The week containing the reference date.
    pub first: DateRange,
    /// The week immediately after `first`.
    pub second: DateRange,
}

impl FortnightWindows {
    /// Returns the 14-day range covered by both windows.
    pub fn span(&self) -> DateRange {
        DateRange {
            start: self.first.start,
            end: self.second.end,
        }
    }
}
