//! Write-side record shapes.
//!
//! Drafts are the fields a caller supplies when creating or replacing a
//! record; the store assigns the ID.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Employer, Shift};

/// Fields of an employer as supplied by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployerDraft {
    /// Display name, unique per user.
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

impl EmployerDraft {
    pub(crate) fn into_employer(self, id: i64) -> Employer {
        Employer {
            id,
            name: self.name,
            job_role: self.job_role,
            joining_date: self.joining_date,
            day_rate: self.day_rate,
            night_rate: self.night_rate,
            saturday_rate: self.saturday_rate,
            sunday_rate: self.sunday_rate,
        }
    }
}

/// Fields of a shift as supplied by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftDraft {
    /// The employer the shift was worked for.
    pub employer_id: i64,
    /// The calendar date the shift begins.
    pub work_date: NaiveDate,
    /// Time of day the shift begins (`HH:MM:SS` or `HH:MM`).
    pub start_time: String,
    /// Time of day the shift ends.
    pub end_time: String,
    /// Whether the shift ends on a later day.
    #[serde(default)]
    pub is_overnight_shift: bool,
    /// Explicit end date for overnight shifts.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

impl ShiftDraft {
    pub(crate) fn into_shift(self, id: i64) -> Shift {
        Shift {
            id,
            employer_id: self.employer_id,
            work_date: self.work_date,
            start_time: self.start_time,
            end_time: self.end_time,
            is_overnight_shift: self.is_overnight_shift,
            end_date: self.end_date,
        }
    }
}
