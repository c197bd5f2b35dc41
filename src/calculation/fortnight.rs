//! Fortnight view calculation.
//!
//! Splits the two weeks starting at the beginning of the current week into
//! two non-overlapping 7-day windows and prices each through
//! [`list_range`], so window totals always add up to the range listing of
//! the whole fortnight.

use std::collections::HashMap;

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::error::{EngineError, EngineResult};
use crate::models::{DateRange, Employer, FortnightSummary, FortnightWindows, Shift, WindowTotals};

use super::listing::{list_range, summarize_listing};

/// Days in each fortnight window.
pub const WEEK_LENGTH_DAYS: u64 = 7;

/// Computes the fortnight windows around `today`.
///
/// The first window starts on the latest `week_start` on or before `today`;
/// the second starts seven days later.
///
/// # Examples
///
/// ```
/// use shift_pay_engine::calculation::fortnight_windows;
/// use chrono::{NaiveDate, Weekday};
///
/// // 2024-01-10 is a Wednesday
/// let windows = fortnight_windows(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(), Weekday::Mon).unwrap();
/// assert_eq!(windows.first.start, NaiveDate::from_ymd_opt(2024, 1, 8).unwrap());
/// assert_eq!(windows.second.start, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
/// assert_eq!(windows.second.end, NaiveDate::from_ymd_opt(2024, 1, 22).unwrap());
/// ```
pub fn fortnight_windows(today: NaiveDate, week_start: Weekday) -> EngineResult<FortnightWindows> {
    let offset = (today.weekday().num_days_from_monday() + 7
        - week_start.num_days_from_monday())
        % 7;

    let first_start = today
        .checked_sub_days(Days::new(u64::from(offset)))
        .ok_or(EngineError::InvalidDateRange {
            start: today,
            end: today,
        })?;
    let first = DateRange::starting_at(first_start, WEEK_LENGTH_DAYS)?;
    let second = DateRange::starting_at(first.end, WEEK_LENGTH_DAYS)?;

    Ok(FortnightWindows { first, second })
}

/// Prices the shifts falling in each fortnight window.
///
/// # Errors
///
/// Any error from [`list_range`] for a shift inside either window, or
/// [`EngineError::AmountOverflow`] when a window total no longer fits.
pub fn summarize_fortnight(
    shifts: &[Shift],
    employers_by_id: &HashMap<i64, Employer>,
    windows: &FortnightWindows,
) -> EngineResult<FortnightSummary> {
    let window_totals = |range: &DateRange| -> EngineResult<WindowTotals> {
        let rows = list_range(shifts, employers_by_id, range)?;
        let summary = summarize_listing(&rows)?;
        Ok(WindowTotals {
            range: *range,
            shifts: rows,
            summary,
        })
    };

    Ok(FortnightSummary {
        first_week: window_totals(&windows.first)?,
        second_week: window_totals(&windows.second)?,
    })
}
