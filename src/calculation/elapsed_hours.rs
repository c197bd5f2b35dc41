//! Elapsed time calculation for shifts.
//!
//! This module combines a shift's dates and times of day into start and end
//! instants and measures the time between them, including shifts that run
//! past midnight.

use chrono::{Duration, NaiveDateTime};
use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{Shift, minutes_to_hours};

use super::time_of_day::parse_time_of_day;

/// The start and end instants of a shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftInterval {
    /// `work_date` combined with `start_time`.
    pub start: NaiveDateTime,
    /// The resolved end date combined with `end_time`.
    pub end: NaiveDateTime,
}

/// Builds the start and end instants of a shift.
///
/// The start is `work_date` at `start_time`. The end is `end_time` on
/// `work_date` for same-day shifts, and on `end_date` (or the following
/// day when absent) for overnight shifts. No wrapping is applied: an end
/// before the start is returned as is.
///
/// # Errors
///
/// [`EngineError::InvalidTimeFormat`] when either time cannot be parsed.
pub fn resolve_interval(shift: &Shift) -> EngineResult<ShiftInterval> {
    let start_time = parse_time_of_day(&shift.start_time)?;
    let end_time = parse_time_of_day(&shift.end_time)?;

    let end_date = shift
        .resolved_end_date()
        .ok_or_else(|| EngineError::InvalidShift {
            shift_id: shift.id,
            message: format!("no calendar day follows {}", shift.work_date),
        })?;

    Ok(ShiftInterval {
        start: shift.work_date.and_time(start_time),
        end: end_date.and_time(end_time),
    })
}

/// Computes the whole minutes between a shift's start and end instants.
///
/// Seconds are truncated toward zero, so a positive shift must last at
/// least one minute.
///
/// # Errors
///
/// - [`EngineError::InvalidTimeFormat`] when either time cannot be parsed
/// - [`EngineError::NegativeDuration`] when the shift ends at or before its
///   start (typically a same-day shift missing its overnight flag)
/// - [`EngineError::InvalidShift`] when the shift is positive but shorter
///   than one minute
pub fn compute_elapsed_minutes(shift: &Shift) -> EngineResult<i64> {
    let interval = resolve_interval(shift)?;
    let elapsed = interval.end - interval.start;

    if elapsed <= Duration::zero() {
        return Err(EngineError::NegativeDuration {
            shift_id: shift.id,
            minutes: elapsed.num_minutes(),
        });
    }

    let minutes = elapsed.num_minutes();
    if minutes == 0 {
        return Err(EngineError::InvalidShift {
            shift_id: shift.id,
            message: format!("lasts {} seconds, less than one minute", elapsed.num_seconds()),
        });
    }

    Ok(minutes)
}

/// Computes the hours worked on a shift at full precision.
///
/// # Examples
///
/// ```
/// use shift_pay_engine::calculation::compute_elapsed_hours;
/// use shift_pay_engine::models::Shift;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// // Friday 22:00 to Saturday 06:00
/// let shift = Shift {
///     id: 1,
///     employer_id: 1,
///     work_date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
///     start_time: "22:00".to_string(),
///     end_time: "06:00".to_string(),
///     is_overnight_shift: true,
///     end_date: None,
/// };
/// assert_eq!(compute_elapsed_hours(&shift).unwrap(), Decimal::new(8, 0));
/// ```
pub fn compute_elapsed_hours(shift: &Shift) -> EngineResult<Decimal> {
    compute_elapsed_minutes(shift).map(minutes_to_hours)
}

/// Checks that a shift can be priced: both times parse and the duration is
/// positive. Used to reject bad records when they are written.
pub fn validate_shift(shift: &Shift) -> EngineResult<()> {
    compute_elapsed_minutes(shift).map(|_| ())
}
