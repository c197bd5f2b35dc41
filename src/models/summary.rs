//! Aggregated hours and earnings models.
//!
//! This module contains [`RangeSummary`], the running totals built by
//! summing [`ShiftPay`] values, and the fortnight view types built on it.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::{DateRange, ListedShift, ShiftPay, minutes_to_hours};

/// Hours and earnings for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTotal {
    /// The work date.
    pub date: NaiveDate,
    /// Minutes worked on shifts starting that day.
    pub minutes: i64,
    /// Estimated earnings from shifts starting that day (full precision).
    pub earnings: Decimal,
}

impl DailyTotal {
    /// Returns the hours worked that day at full precision.
    pub fn hours(&self) -> Decimal {
        minutes_to_hours(self.minutes)
    }
}

/// Totals over a set of priced shifts.
///
/// Totals are kept at full precision. Hours are derived from the summed
/// minute count, so splitting a set of shifts into disjoint batches and
/// merging the results gives exactly the same hours as summing them in
/// one batch.
///
/// # Example
///
/// ```
/// use shift_pay_engine::models::RangeSummary;
/// use rust_decimal::Decimal;
///
/// let summary = RangeSummary::default();
/// assert_eq!(summary.total_hours(), Decimal::ZERO);
/// assert!(summary.chart_series().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeSummary {
    /// Number of shifts summed.
    pub shift_count: usize,
    /// Total minutes worked.
    pub total_minutes: i64,
    /// Total estimated pay.
    pub total_pay: Decimal,
    /// Per-day breakdown keyed by work date.
    pub daily: BTreeMap<NaiveDate, DailyTotal>,
}

fn overflow(context: &str) -> EngineError {
    EngineError::AmountOverflow {
        context: context.to_string(),
    }
}

fn add_minutes(total: i64, minutes: i64) -> EngineResult<i64> {
    total
        .checked_add(minutes)
        .ok_or_else(|| overflow("summing minutes"))
}

fn add_pay(total: Decimal, pay: Decimal) -> EngineResult<Decimal> {
    total.checked_add(pay).ok_or_else(|| overflow("summing pay"))
}

impl RangeSummary {
    /// Adds one priced shift to the totals.
    ///
    /// On error the summary is left unchanged.
    ///
    /// # Errors
    ///
    /// [`EngineError::AmountOverflow`] when a total no longer fits.
    pub fn add(&mut self, pay: &ShiftPay) -> EngineResult<()> {
        self.add_day(pay.work_date, pay.worked_minutes, pay.estimated_pay, 1)
    }

    /// Combines two summaries over disjoint sets of shifts.
    ///
    /// # Errors
    ///
    /// [`EngineError::AmountOverflow`] when a total no longer fits.
    pub fn merge(mut self, other: RangeSummary) -> EngineResult<RangeSummary> {
        for (date, total) in other.daily {
            self.add_day(date, total.minutes, total.earnings, 0)?;
        }
        self.shift_count += other.shift_count;
        Ok(self)
    }

    fn add_day(
        &mut self,
        date: NaiveDate,
        minutes: i64,
        earnings: Decimal,
        shifts: usize,
    ) -> EngineResult<()> {
        let total_minutes = add_minutes(self.total_minutes, minutes)?;
        let total_pay = add_pay(self.total_pay, earnings)?;
        let (day_minutes, day_earnings) = match self.daily.get(&date) {
            Some(day) => (
                add_minutes(day.minutes, minutes)?,
                add_pay(day.earnings, earnings)?,
            ),
            None => (minutes, earnings),
        };

        self.shift_count += shifts;
        self.total_minutes = total_minutes;
        self.total_pay = total_pay;
        self.daily.insert(
            date,
            DailyTotal {
                date,
                minutes: day_minutes,
                earnings: day_earnings,
            },
        );
        Ok(())
    }

    /// Returns the total hours worked at full precision.
    pub fn total_hours(&self) -> Decimal {
        minutes_to_hours(self.total_minutes)
    }

    /// Returns the per-day breakdown sorted ascending by date.
    pub fn chart_series(&self) -> Vec<DailyTotal> {
        self.daily.values().cloned().collect()
    }
}

/// One window of the fortnight view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowTotals {
    /// The dates covered.
    pub range: DateRange,
    /// The priced shifts in the window, ordered by work date.
    pub shifts: Vec<ListedShift>,
    /// Totals over `shifts`.
    pub summary: RangeSummary,
}

/// The two-week view: the current week and the next one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FortnightSummary {
    /// The week containing the reference date.
    pub first_week: WindowTotals,
    /// The following week.
    pub second_week: WindowTotals,
}

impl FortnightSummary {
    /// Returns the combined totals of both weeks.
    pub fn combined(&self) -> EngineResult<RangeSummary> {
        self.first_week
            .summary
            .clone()
            .merge(self.second_week.summary.clone())
    }
}
