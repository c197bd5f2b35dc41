//! Core data models for the shift pay engine.
//!
//! This module contains the employer and shift records the engine reads and
//! the computed values it produces.

mod employer;
mod period;
mod shift;
mod shift_pay;
mod summary;

pub use employer::{Employer, RateBand};
pub use period::{DateRange, FortnightWindows};
pub use shift::Shift;
pub use shift_pay::{
    DISPLAY_DECIMAL_PLACES, ListedShift, ShiftPay, minutes_to_hours, round_for_display,
};
pub use summary::{DailyTotal, FortnightSummary, RangeSummary, WindowTotals};
