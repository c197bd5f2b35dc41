//! Response types for the shift pay API.
//!
//! This module defines the JSON bodies returned by the handlers and the
//! mapping from [`EngineError`] to HTTP error responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{
    DISPLAY_DECIMAL_PLACES, DailyTotal, FortnightSummary, ListedShift, RangeSummary, RateBand,
    WindowTotals, round_for_display,
};

/// Formats a full-precision value as a fixed two-decimal string.
pub(crate) fn display_amount(value: Decimal) -> String {
    let mut rounded = round_for_display(value);
    rounded.rescale(DISPLAY_DECIMAL_PLACES);
    rounded.to_string()
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response with the given body.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }

    /// The 401 response for a request without a user ID.
    pub fn unauthorized() -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            error: ApiError::new("UNAUTHORIZED", "Unauthorized"),
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        let (status, error) = match error {
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            ),
            EngineError::InvalidTimeFormat { .. } => (
                StatusCode::BAD_REQUEST,
                ApiError::with_details(
                    "INVALID_TIME_FORMAT",
                    message,
                    "Times of day must be written as HH:MM or HH:MM:SS",
                ),
            ),
            EngineError::NegativeDuration { .. } => (
                StatusCode::BAD_REQUEST,
                ApiError::with_details(
                    "NEGATIVE_DURATION",
                    message,
                    "The shift ends at or before it starts; mark it as overnight if it ends the next day",
                ),
            ),
            EngineError::UnknownEmployer { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::new("UNKNOWN_EMPLOYER", message),
            ),
            EngineError::AmountOverflow { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ApiError::with_details(
                    "AMOUNT_OVERFLOW",
                    message,
                    "A company rate or shift length is too large to price",
                ),
            ),
            EngineError::InvalidDateRange { .. } => (
                StatusCode::BAD_REQUEST,
                ApiError::new("INVALID_DATE_RANGE", message),
            ),
            EngineError::InvalidEmployer { .. } => (
                StatusCode::BAD_REQUEST,
                ApiError::new("INVALID_EMPLOYER", message),
            ),
            EngineError::InvalidShift { .. } => (
                StatusCode::BAD_REQUEST,
                ApiError::new("INVALID_SHIFT", message),
            ),
            EngineError::RecordNotFound { .. } => {
                (StatusCode::NOT_FOUND, ApiError::new("NOT_FOUND", message))
            }
            EngineError::Conflict { message } => {
                (StatusCode::CONFLICT, ApiError::new("CONFLICT", message))
            }
        };
        ApiErrorResponse { status, error }
    }
}

/// Wrapper for single records and lists: `{"data": ...}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataResponse<T> {
    /// The payload.
    pub data: T,
}

/// Body returned when a company is deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletedResponse {
    /// ID of the deleted record.
    pub id: i64,
}

/// One point of the summary chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartPoint {
    /// The work date.
    pub date: NaiveDate,
    /// Hours worked, two decimals.
    pub hours: String,
    /// Estimated earnings, two decimals.
    pub earnings: String,
}

impl From<&DailyTotal> for ChartPoint {
    fn from(day: &DailyTotal) -> Self {
        Self {
            date: day.date,
            hours: display_amount(day.hours()),
            earnings: display_amount(day.earnings),
        }
    }
}

/// Body of `GET /summary`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResponse {
    /// Number of companies the user has.
    pub companies_count: usize,
    /// Hours over all logged shifts, two decimals.
    pub total_working_hours: String,
    /// Estimated earnings over all logged shifts, two decimals.
    pub total_earnings: String,
    /// Per-day hours and earnings, ascending by date.
    pub chart_data: Vec<ChartPoint>,
}

impl SummaryResponse {
    /// Builds the body from the engine's totals.
    pub fn new(companies_count: usize, summary: &RangeSummary) -> Self {
        Self {
            companies_count,
            total_working_hours: display_amount(summary.total_hours()),
            total_earnings: display_amount(summary.total_pay),
            chart_data: summary.chart_series().iter().map(ChartPoint::from).collect(),
        }
    }
}

/// One row of the range listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoursRow {
    /// Shift ID.
    pub id: i64,
    /// Employer ID.
    pub company_id: i64,
    /// Employer name.
    pub company_name: String,
    /// Date the shift begins.
    pub work_date: NaiveDate,
    /// Explicit end date, if one was logged.
    pub end_date: Option<NaiveDate>,
    /// Whether the shift ends on a later day.
    pub is_overnight_shift: bool,
    /// Start time as logged.
    pub start_time: String,
    /// End time as logged.
    pub end_time: String,
    /// Hours worked, two decimals.
    pub total_hours: String,
    /// The band the shift was billed at.
    pub rate_band: RateBand,
    /// The hourly rate of that band.
    pub applied_rate: String,
    /// Estimated pay, two decimals.
    pub estimated_pay: String,
}

impl From<&ListedShift> for HoursRow {
    fn from(row: &ListedShift) -> Self {
        Self {
            id: row.shift.id,
            company_id: row.shift.employer_id,
            company_name: row.company_name.clone(),
            work_date: row.shift.work_date,
            end_date: row.shift.end_date,
            is_overnight_shift: row.shift.is_overnight_shift,
            start_time: row.shift.start_time.clone(),
            end_time: row.shift.end_time.clone(),
            total_hours: display_amount(row.pay.hours_worked),
            rate_band: row.pay.rate_band,
            applied_rate: display_amount(row.pay.applied_rate),
            estimated_pay: display_amount(row.pay.estimated_pay),
        }
    }
}

/// One week of the fortnight view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekResponse {
    /// First date of the week.
    pub start: NaiveDate,
    /// First date after the week.
    pub end: NaiveDate,
    /// Hours worked in the week, two decimals.
    pub total_hours: String,
    /// Estimated pay for the week, two decimals.
    pub total_pay: String,
    /// The week's shifts, ordered by work date.
    pub shifts: Vec<HoursRow>,
}

impl From<&WindowTotals> for WeekResponse {
    fn from(window: &WindowTotals) -> Self {
        Self {
            start: window.range.start,
            end: window.range.end,
            total_hours: display_amount(window.summary.total_hours()),
            total_pay: display_amount(window.summary.total_pay),
            shifts: window.shifts.iter().map(HoursRow::from).collect(),
        }
    }
}

/// Body of `GET /hours/fortnight`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FortnightResponse {
    /// The current week.
    pub first_week: WeekResponse,
    /// The following week.
    pub second_week: WeekResponse,
    /// Hours over both weeks, two decimals.
    pub total_hours: String,
    /// Estimated pay over both weeks, two decimals.
    pub total_pay: String,
}

impl TryFrom<&FortnightSummary> for FortnightResponse {
    type Error = EngineError;

    fn try_from(fortnight: &FortnightSummary) -> Result<Self, Self::Error> {
        let combined = fortnight.combined()?;
        Ok(Self {
            first_week: WeekResponse::from(&fortnight.first_week),
            second_week: WeekResponse::from(&fortnight.second_week),
            total_hours: display_amount(combined.total_hours()),
            total_pay: display_amount(combined.total_pay),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_display_amount_pads_and_rounds() {
        assert_eq!(display_amount(dec("8.5")), "8.50");
        assert_eq!(display_amount(dec("8")), "8.00");
        assert_eq!(display_amount(dec("8.3333333333")), "8.33");
        assert_eq!(display_amount(Decimal::ZERO), "0.00");
    }

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_conflict_maps_to_409() {
        let api_error: ApiErrorResponse = EngineError::Conflict {
            message: "Hours already logged for this time period".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::CONFLICT);
        assert_eq!(api_error.error.code, "CONFLICT");
        assert_eq!(
            api_error.error.message,
            "Hours already logged for this time period"
        );
    }

    #[test]
    fn test_negative_duration_maps_to_400() {
        let api_error: ApiErrorResponse = EngineError::NegativeDuration {
            shift_id: 0,
            minutes: -840,
        }
        .into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "NEGATIVE_DURATION");
        assert!(api_error.error.details.is_some());
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let api_error: ApiErrorResponse = EngineError::RecordNotFound {
            resource: "Company".to_string(),
            id: 4,
        }
        .into();
        assert_eq!(api_error.status, StatusCode::NOT_FOUND);
        assert_eq!(api_error.error.message, "Company 4 not found");
    }

    #[test]
    fn test_unknown_employer_maps_to_422() {
        let api_error: ApiErrorResponse = EngineError::UnknownEmployer {
            shift_id: 1,
            employer_id: 2,
        }
        .into();
        assert_eq!(api_error.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(api_error.error.code, "UNKNOWN_EMPLOYER");
    }

    #[test]
    fn test_amount_overflow_maps_to_422() {
        let api_error: ApiErrorResponse = EngineError::AmountOverflow {
            context: "pricing shift 1".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(api_error.error.code, "AMOUNT_OVERFLOW");
    }

    #[test]
    fn test_empty_summary_response() {
        let body = SummaryResponse::new(0, &RangeSummary::default());
        assert_eq!(body.total_working_hours, "0.00");
        assert_eq!(body.total_earnings, "0.00");
        assert!(body.chart_data.is_empty());
    }
}
