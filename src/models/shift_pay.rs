//! Computed pay models.
//!
//! This module contains the [`ShiftPay`] type produced by the engine for
//! every priced shift, the [`ListedShift`] row used by range listings, and
//! the presentation rounding helpers shared by every caller.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::{RateBand, Shift};

/// Number of decimal places used when hours and money are shown to a user.
pub const DISPLAY_DECIMAL_PLACES: u32 = 2;

/// Rounds a full-precision value for presentation.
///
/// Only call this at an output boundary; sums must be taken over
/// unrounded values.
///
/// # Example
///
/// ```
/// use shift_pay_engine::models::round_for_display;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let hours = Decimal::from_str("8.3333333").unwrap();
/// assert_eq!(round_for_display(hours), Decimal::from_str("8.33").unwrap());
/// assert_eq!(round_for_display(Decimal::from_str("0.125").unwrap()), Decimal::from_str("0.13").unwrap());
/// ```
pub fn round_for_display(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(
        DISPLAY_DECIMAL_PLACES,
        RoundingStrategy::MidpointAwayFromZero,
    )
}

/// Converts whole minutes to hours at full precision.
pub fn minutes_to_hours(minutes: i64) -> Decimal {
    Decimal::from(minutes) / Decimal::from(60)
}

/// The engine's output for one shift.
///
/// Values are full precision; use [`round_for_display`] when rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftPay {
    /// The ID of the priced shift.
    pub shift_id: i64,
    /// The employer whose rates were applied.
    pub employer_id: i64,
    /// The work date of the shift (used for daily breakdowns).
    pub work_date: NaiveDate,
    /// Elapsed time between the start and end instants, in minutes.
    pub worked_minutes: i64,
    /// Elapsed time in hours (`worked_minutes / 60`).
    pub hours_worked: Decimal,
    /// The single band selected for the whole shift.
    pub rate_band: RateBand,
    /// The hourly rate of the selected band.
    pub applied_rate: Decimal,
    /// `applied_rate * worked_minutes / 60`.
    pub estimated_pay: Decimal,
}

/// A shift as shown by the range listing: the record, its employer's name
/// and the engine's pricing of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListedShift {
    /// The shift record.
    pub shift: Shift,
    /// Name of the employer the shift was worked for.
    pub company_name: String,
    /// The engine's pricing of the shift.
    pub pay: ShiftPay,
}
