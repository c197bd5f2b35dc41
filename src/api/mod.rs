//! HTTP API module for the shift pay service.
//!
//! This module provides the REST endpoints for managing companies and
//! logged hours and for reading the priced summary, range listing and
//! fortnight views.

mod auth;
mod handlers;
mod request;
mod response;
mod state;

pub use auth::UserId;
pub use handlers::create_router;
pub use request::{FortnightQuery, RangeQuery};
pub use response::{
    ApiError, ChartPoint, DataResponse, DeletedResponse, FortnightResponse, HoursRow,
    SummaryResponse, WeekResponse,
};
pub use state::AppState;
