//! Wage rate selection.
//!
//! This module decides which of an employer's four rates applies to a
//! shift. One rate is chosen per shift, from the shift's work date and start
//! hour only; hours are never split across bands.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{Employer, RateBand, Shift};

use super::time_of_day::parse_time_of_day;

/// First start hour (inclusive) that counts as a weekday night shift.
pub const NIGHT_START_HOUR: u32 = 18;

/// First start hour (inclusive) that counts as a weekday day shift again.
pub const NIGHT_END_HOUR: u32 = 6;

/// The band and hourly rate chosen for a shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedRate {
    /// The selected band.
    pub band: RateBand,
    /// The employer's rate for that band.
    pub rate: Decimal,
}

/// Selects the rate band for a shift starting at `start_time` on `work_date`.
///
/// Precedence:
/// 1. Saturday work date → [`RateBand::Saturday`]
/// 2. Sunday work date → [`RateBand::Sunday`]
/// 3. Weekday starting at or after 18:00 or before 06:00 → [`RateBand::Night`]
/// 4. Otherwise → [`RateBand::Day`]
///
/// The end of the shift plays no part: a Saturday night shift running into
/// Sunday is a Saturday shift, and a weekday shift starting at 17:00 is a day
/// shift however late it runs.
///
/// # Examples
///
/// ```
/// use shift_pay_engine::calculation::select_rate_band;
/// use shift_pay_engine::models::RateBand;
/// use chrono::{NaiveDate, NaiveTime};
///
/// let tuesday = NaiveDate::from_ymd_opt(2024, 1, 9).unwrap();
/// let saturday = NaiveDate::from_ymd_opt(2024, 1, 6).unwrap();
///
/// assert_eq!(select_rate_band(tuesday, NaiveTime::from_hms_opt(17, 59, 0).unwrap()), RateBand::Day);
/// assert_eq!(select_rate_band(tuesday, NaiveTime::from_hms_opt(18, 0, 0).unwrap()), RateBand::Night);
/// assert_eq!(select_rate_band(saturday, NaiveTime::from_hms_opt(20, 0, 0).unwrap()), RateBand::Saturday);
/// ```
pub fn select_rate_band(work_date: NaiveDate, start_time: NaiveTime) -> RateBand {
    match work_date.weekday() {
        Weekday::Sat => RateBand::Saturday,
        Weekday::Sun => RateBand::Sunday,
        _ => {
            let start_hour = start_time.hour();
            if start_hour >= NIGHT_START_HOUR || start_hour < NIGHT_END_HOUR {
                RateBand::Night
            } else {
                RateBand::Day
            }
        }
    }
}

/// Selects the employer rate that applies to the whole of `shift`.
///
/// # Errors
///
/// [`crate::error::EngineError::InvalidTimeFormat`] when the shift's start
/// time cannot be parsed.
pub fn select_wage_rate(shift: &Shift, employer: &Employer) -> EngineResult<AppliedRate> {
    let start_time = parse_time_of_day(&shift.start_time)?;
    let band = select_rate_band(shift.work_date, start_time);

    Ok(AppliedRate {
        band,
        rate: employer.rate_for(band),
    })
}
