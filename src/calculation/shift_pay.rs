//! Per-shift pay calculation.
//!
//! [`compute_shift_pay`] is the single pricing function every caller goes
//! through: the bulk summary, the range listing and the fortnight view.

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{Employer, Shift, ShiftPay, minutes_to_hours};

use super::elapsed_hours::compute_elapsed_minutes;
use super::rate_selection::select_wage_rate;

/// Prices one shift against its employer's rates.
///
/// `estimated_pay = applied_rate * worked_minutes / 60`, kept at full
/// precision.
///
/// # Arguments
///
/// * `shift` - The shift to price
/// * `employer` - The employer whose rates apply
///
/// # Errors
///
/// - [`crate::error::EngineError::InvalidTimeFormat`] when a time cannot be parsed
/// - [`crate::error::EngineError::NegativeDuration`] when the shift ends at or
///   before its start
/// - [`crate::error::EngineError::AmountOverflow`] when rate times duration
///   does not fit in a `Decimal`
///
/// # Examples
///
/// ```
/// use shift_pay_engine::calculation::compute_shift_pay;
/// use shift_pay_engine::models::{Employer, RateBand, Shift};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let employer = Employer {
///     id: 1,
///     name: "Harbour Cafe".to_string(),
///     job_role: "Barista".to_string(),
///     joining_date: NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
///     day_rate: Decimal::from_str("25.00").unwrap(),
///     night_rate: Decimal::from_str("30.00").unwrap(),
///     saturday_rate: Decimal::from_str("32.50").unwrap(),
///     sunday_rate: Decimal::from_str("40.00").unwrap(),
/// };
///
/// // Monday 09:00 to 17:30
/// let shift = Shift {
///     id: 1,
///     employer_id: 1,
///     work_date: NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(),
///     start_time: "09:00".to_string(),
///     end_time: "17:30".to_string(),
///     is_overnight_shift: false,
///     end_date: None,
/// };
///
/// let pay = compute_shift_pay(&shift, &employer).unwrap();
/// assert_eq!(pay.rate_band, RateBand::Day);
/// // 8.5 hours * $25.00 = $212.50
/// assert_eq!(pay.estimated_pay, Decimal::from_str("212.50").unwrap());
/// ```
pub fn compute_shift_pay(shift: &Shift, employer: &Employer) -> EngineResult<ShiftPay> {
    let worked_minutes = compute_elapsed_minutes(shift)?;
    let applied = select_wage_rate(shift, employer)?;

    let estimated_pay = applied
        .rate
        .checked_mul(Decimal::from(worked_minutes))
        .and_then(|amount| amount.checked_div(Decimal::from(60)))
        .ok_or_else(|| EngineError::AmountOverflow {
            context: format!("pricing shift {}", shift.id),
        })?;

    debug!(
        shift_id = shift.id,
        employer_id = employer.id,
        band = %applied.band,
        worked_minutes,
        "Priced shift"
    );

    Ok(ShiftPay {
        shift_id: shift.id,
        employer_id: employer.id,
        work_date: shift.work_date,
        worked_minutes,
        hours_worked: minutes_to_hours(worked_minutes),
        rate_band: applied.band,
        applied_rate: applied.rate,
        estimated_pay,
    })
}
