//! The pay calculation engine.
//!
//! This module contains the pure functions that turn a shift and its
//! employer's wage rates into hours worked and estimated pay: time-of-day
//! parsing, elapsed time across midnight, single-band rate selection,
//! per-shift pricing, and the aggregations built on it (bulk summary, range
//! listing and fortnight view).

mod aggregation;
mod elapsed_hours;
mod fortnight;
mod listing;
mod rate_selection;
mod shift_pay;
mod time_of_day;

pub use aggregation::{aggregate_over_range, price_shifts};
pub use elapsed_hours::{
    ShiftInterval, compute_elapsed_hours, compute_elapsed_minutes, resolve_interval,
    validate_shift,
};
pub use fortnight::{WEEK_LENGTH_DAYS, fortnight_windows, summarize_fortnight};
pub use listing::{list_range, summarize_listing};
pub use rate_selection::{
    AppliedRate, NIGHT_END_HOUR, NIGHT_START_HOUR, select_rate_band, select_wage_rate,
};
pub use shift_pay::compute_shift_pay;
pub use time_of_day::parse_time_of_day;
