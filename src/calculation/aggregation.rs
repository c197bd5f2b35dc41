//! Aggregation of priced shifts.
//!
//! This module prices a batch of shifts against a mapping of employers and
//! sums the results into a [`RangeSummary`]. A shift whose employer is
//! missing aborts the whole batch rather than being skipped.

use std::collections::HashMap;

use tracing::warn;

use crate::error::{EngineError, EngineResult};
use crate::models::{Employer, RangeSummary, Shift, ShiftPay};

use super::shift_pay::compute_shift_pay;

/// Looks up the employer a shift was worked for.
pub(crate) fn lookup_employer<'a>(
    shift: &Shift,
    employers_by_id: &'a HashMap<i64, Employer>,
) -> EngineResult<&'a Employer> {
    employers_by_id.get(&shift.employer_id).ok_or_else(|| {
        warn!(
            shift_id = shift.id,
            employer_id = shift.employer_id,
            "Shift references unknown employer"
        );
        EngineError::UnknownEmployer {
            shift_id: shift.id,
            employer_id: shift.employer_id,
        }
    })
}

/// Prices every shift in `shifts`, in order.
///
/// # Errors
///
/// The first error met: [`EngineError::UnknownEmployer`] for a shift whose
/// employer is not in `employers_by_id`, or any error from
/// [`compute_shift_pay`].
pub fn price_shifts(
    shifts: &[Shift],
    employers_by_id: &HashMap<i64, Employer>,
) -> EngineResult<Vec<ShiftPay>> {
    shifts
        .iter()
        .map(|shift| {
            let employer = lookup_employer(shift, employers_by_id)?;
            compute_shift_pay(shift, employer)
        })
        .collect()
}

/// Prices and sums a set of shifts.
///
/// The result carries total minutes, total pay and a per-day breakdown
/// sorted ascending by work date. Totals are full precision; round them
/// only when presenting.
///
/// Summing disjoint subsets separately and merging them with
/// [`RangeSummary::merge`] gives the same totals as one call over the union.
///
/// # Examples
///
/// ```
/// use shift_pay_engine::calculation::aggregate_over_range;
/// use shift_pay_engine::models::{Employer, Shift};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::collections::HashMap;
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
/// let employers = HashMap::from([(employer.id, employer)]);
///
/// let shifts = vec![Shift {
///     id: 1,
///     employer_id: 1,
///     work_date: NaiveDate::from_ymd_opt(2024, 1, 6).unwrap(), // Saturday
///     start_time: "10:00".to_string(),
///     end_time: "14:00".to_string(),
///     is_overnight_shift: false,
///     end_date: None,
/// }];
///
/// let summary = aggregate_over_range(&shifts, &employers).unwrap();
/// assert_eq!(summary.total_hours(), Decimal::new(4, 0));
/// assert_eq!(summary.total_pay, Decimal::from_str("130.00").unwrap());
/// ```
pub fn aggregate_over_range(
    shifts: &[Shift],
    employers_by_id: &HashMap<i64, Employer>,
) -> EngineResult<RangeSummary> {
    let mut summary = RangeSummary::default();
    for pay in price_shifts(shifts, employers_by_id)? {
        summary.add(&pay)?;
    }
    Ok(summary)
}
