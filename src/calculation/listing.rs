//! Range listing of priced shifts.
//!
//! Lists the shifts whose work date falls in a half-open [`DateRange`],
//! ordered by work date, each priced with the same
//! [`compute_shift_pay`](super::compute_shift_pay) the bulk summary uses.

use std::collections::HashMap;

use crate::error::EngineResult;
use crate::models::{DateRange, Employer, ListedShift, RangeSummary, Shift};

use super::aggregation::lookup_employer;
use super::shift_pay::compute_shift_pay;

/// Lists and prices the shifts with `range.start <= work_date < range.end`.
///
/// Rows are ordered by work date, then by shift ID. Shifts outside the
/// range are ignored even when their employer is unknown.
///
/// # Errors
///
/// [`crate::error::EngineError::UnknownEmployer`] or any pricing error for
/// a shift inside the range.
pub fn list_range(
    shifts: &[Shift],
    employers_by_id: &HashMap<i64, Employer>,
    range: &DateRange,
) -> EngineResult<Vec<ListedShift>> {
    let mut in_range: Vec<&Shift> = shifts
        .iter()
        .filter(|shift| range.contains_date(shift.work_date))
        .collect();
    in_range.sort_by_key(|shift| (shift.work_date, shift.id));

    in_range
        .into_iter()
        .map(|shift| {
            let employer = lookup_employer(shift, employers_by_id)?;
            let pay = compute_shift_pay(shift, employer)?;
            Ok(ListedShift {
                shift: shift.clone(),
                company_name: employer.name.clone(),
                pay,
            })
        })
        .collect()
}

/// Sums the pricing of listed rows.
///
/// # Errors
///
/// [`crate::error::EngineError::AmountOverflow`] when a total no longer fits.
pub fn summarize_listing(rows: &[ListedShift]) -> EngineResult<RangeSummary> {
    let mut summary = RangeSummary::default();
    for row in rows {
        summary.add(&row.pay)?;
    }
    Ok(summary)
}
