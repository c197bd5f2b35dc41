//! Employer model and wage rate types.
//!
//! This module defines the [`Employer`] struct (a "company" in the user's
//! ledger) and the [`RateBand`] enum naming its four wage tiers.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// One of the four wage tiers an employer pays.
///
/// Exactly one band is selected for an entire shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateBand {
    /// Weekday shift starting between 06:00 and 17:59.
    Day,
    /// Weekday shift starting at or after 18:00 or before 06:00.
    Night,
    /// Any shift whose work date is a Saturday.
    Saturday,
    /// Any shift whose work date is a Sunday.
    Sunday,
}

impl std::fmt::Display for RateBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RateBand::Day => write!(f, "Day"),
            RateBand::Night => write!(f, "Night"),
            RateBand::Saturday => write!(f, "Saturday"),
            RateBand::Sunday => write!(f, "Sunday"),
        }
    }
}

/// A wage-paying entity with four hourly rate tiers.
///
/// Rates are fixed-point decimals; a rate omitted from input defaults to zero.
///
/// # Example
///
/// ```
/// use shift_pay_engine::models::{Employer, RateBand};
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
/// assert_eq!(employer.rate_for(RateBand::Saturday), Decimal::from_str("32.50").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employer {
    /// Identifier assigned by the record store.
    pub id: i64,
    /// Display name of the employer.
    pub name: String,
    /// The user's role at this employer.
    #[serde(default)]
    pub job_role: String,
    /// The date the user started with this employer.
    pub joining_date: NaiveDate,
    /// Hourly rate for weekday day shifts.
    #[serde(default)]
    pub day_rate: Decimal,
    /// Hourly rate for weekday night shifts.
    #[serde(default)]
    pub night_rate: Decimal,
    /// Hourly rate for Saturday shifts.
    #[serde(default)]
    pub saturday_rate: Decimal,
    /// Hourly rate for Sunday shifts.
    #[serde(default)]
    pub sunday_rate: Decimal,
}

impl Employer {
    /// Returns the hourly rate this employer pays for the given band.
    pub fn rate_for(&self, band: RateBand) -> Decimal {
        match band {
            RateBand::Day => self.day_rate,
            RateBand::Night => self.night_rate,
            RateBand::Saturday => self.saturday_rate,
            RateBand::Sunday => self.sunday_rate,
        }
    }

    /// Checks the record before it is written.
    ///
    /// The name must not be blank and no rate may be negative.
    pub fn validate(&self) -> EngineResult<()> {
        if self.name.trim().is_empty() {
            return Err(EngineError::InvalidEmployer {
                field: "name".to_string(),
                message: "must not be blank".to_string(),
            });
        }

        let rates = [
            ("day_rate", self.day_rate),
            ("night_rate", self.night_rate),
            ("saturday_rate", self.saturday_rate),
            ("sunday_rate", self.sunday_rate),
        ];
        if let Some((field, rate)) = rates.iter().find(|(_, rate)| rate.is_sign_negative()) {
            return Err(EngineError::InvalidEmployer {
                field: field.to_string(),
                message: format!("must not be negative (got {})", rate),
            });
        }

        Ok(())
    }
}
