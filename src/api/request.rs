//! Request types for the shift pay API.
//!
//! Record bodies for `POST`/`PATCH` reuse [`crate::store::EmployerDraft`]
//! and [`crate::store::ShiftDraft`]; this module holds the query strings.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::DateRange;

/// Query string of `GET /hours`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RangeQuery {
    /// First date included in the listing.
    pub start_date: NaiveDate,
    /// First date after the listing.
    pub end_date: NaiveDate,
}

impl RangeQuery {
    /// Converts the query into a validated half-open range.
    pub fn to_range(&self) -> EngineResult<DateRange> {
        DateRange::new(self.start_date, self.end_date)
    }
}

/// Query string of `GET /hours/fortnight`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FortnightQuery {
    /// Overrides the server's current date.
    #[serde(default)]
    pub today: Option<NaiveDate>,
}
