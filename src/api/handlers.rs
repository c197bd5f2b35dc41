//! HTTP request handlers for the shift pay API.
//!
//! This module contains the handler functions for all API endpoints. Every
//! priced value they return comes from the calculation engine; the handlers
//! only load records, call the engine and shape the response.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{aggregate_over_range, fortnight_windows, list_range, summarize_fortnight};
use crate::error::EngineError;
use crate::models::{Employer, Shift};
use crate::store::{EmployerDraft, ShiftDraft};

use super::auth::UserId;
use super::request::{FortnightQuery, RangeQuery};
use super::response::{
    ApiError, ApiErrorResponse, DataResponse, DeletedResponse, FortnightResponse, HoursRow,
    SummaryResponse,
};
use super::state::AppState;

type ApiResult<T> = Result<T, ApiErrorResponse>;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/summary", get(summary_handler))
        .route("/hours", get(list_hours_handler).post(create_hours_handler))
        .route("/hours/fortnight", get(fortnight_handler))
        .route(
            "/hours/:id",
            get(get_hours_handler)
                .patch(update_hours_handler)
                .delete(delete_hours_handler),
        )
        .route(
            "/companies",
            get(list_companies_handler).post(create_company_handler),
        )
        .route(
            "/companies/:id",
            get(get_company_handler)
                .patch(update_company_handler)
                .delete(delete_company_handler),
        )
        .with_state(state)
}

/// Logs an engine error against the request and converts it to a response.
fn engine_failure(correlation_id: Uuid, err: EngineError) -> ApiErrorResponse {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request failed"
    );
    err.into()
}

fn json_body<T>(correlation_id: Uuid, payload: Result<Json<T>, JsonRejection>) -> ApiResult<T> {
    let rejection = match payload {
        Ok(Json(body)) => return Ok(body),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    Err(ApiErrorResponse::bad_request(error))
}

fn query_params<T>(correlation_id: Uuid, query: Result<Query<T>, QueryRejection>) -> ApiResult<T> {
    query.map(|Query(params)| params).map_err(|rejection| {
        let body_text = rejection.body_text();
        warn!(
            correlation_id = %correlation_id,
            error = %body_text,
            "Invalid query string"
        );
        ApiErrorResponse::bad_request(ApiError::validation_error(body_text))
    })
}

fn record_id(correlation_id: Uuid, path: Result<Path<i64>, PathRejection>) -> ApiResult<i64> {
    path.map(|Path(id)| id).map_err(|rejection| {
        warn!(
            correlation_id = %correlation_id,
            error = %rejection.body_text(),
            "Invalid record ID"
        );
        ApiErrorResponse::bad_request(ApiError::validation_error("Record ID must be an integer"))
    })
}

/// Handler for GET /summary.
///
/// Totals hours and estimated earnings over every shift the user has logged.
async fn summary_handler(
    State(state): State<AppState>,
    user: UserId,
) -> ApiResult<Json<SummaryResponse>> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, user_id = %user.as_str(), "Building summary");

    let start_time = Instant::now();
    let (shifts, employers) = state.store().snapshot(user.as_str()).await;
    let summary = aggregate_over_range(&shifts, &employers)
        .map_err(|err| engine_failure(correlation_id, err))?;

    info!(
        correlation_id = %correlation_id,
        shifts_count = summary.shift_count,
        total_pay = %summary.total_pay,
        duration_us = start_time.elapsed().as_micros(),
        "Summary completed"
    );
    Ok(Json(SummaryResponse::new(employers.len(), &summary)))
}

/// Handler for GET /hours.
///
/// Lists the shifts with `start_date <= work_date < end_date`, each priced.
async fn list_hours_handler(
    State(state): State<AppState>,
    user: UserId,
    query: Result<Query<RangeQuery>, QueryRejection>,
) -> ApiResult<Json<DataResponse<Vec<HoursRow>>>> {
    let correlation_id = Uuid::new_v4();
    let query = query_params(correlation_id, query)?;
    info!(
        correlation_id = %correlation_id,
        user_id = %user.as_str(),
        start_date = %query.start_date,
        end_date = %query.end_date,
        "Listing hours"
    );

    let range = query
        .to_range()
        .map_err(|err| engine_failure(correlation_id, err))?;
    let (shifts, employers) = state.store().snapshot(user.as_str()).await;
    let rows = list_range(&shifts, &employers, &range)
        .map_err(|err| engine_failure(correlation_id, err))?;

    Ok(Json(DataResponse {
        data: rows.iter().map(HoursRow::from).collect(),
    }))
}

/// Handler for GET /hours/fortnight.
///
/// Prices the current week and the following one. `today` defaults to the
/// current UTC date.
async fn fortnight_handler(
    State(state): State<AppState>,
    user: UserId,
    query: Result<Query<FortnightQuery>, QueryRejection>,
) -> ApiResult<Json<FortnightResponse>> {
    let correlation_id = Uuid::new_v4();
    let query = query_params(correlation_id, query)?;
    let today = query.today.unwrap_or_else(|| Utc::now().date_naive());
    info!(
        correlation_id = %correlation_id,
        user_id = %user.as_str(),
        today = %today,
        "Building fortnight view"
    );

    let windows = fortnight_windows(today, state.config().week_starts_on())
        .map_err(|err| engine_failure(correlation_id, err))?;
    let (shifts, employers) = state.store().snapshot(user.as_str()).await;
    let fortnight = summarize_fortnight(&shifts, &employers, &windows)
        .map_err(|err| engine_failure(correlation_id, err))?;

    let body = FortnightResponse::try_from(&fortnight)
        .map_err(|err| engine_failure(correlation_id, err))?;
    Ok(Json(body))
}

/// Handler for POST /hours.
async fn create_hours_handler(
    State(state): State<AppState>,
    user: UserId,
    payload: Result<Json<ShiftDraft>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, user_id = %user.as_str(), "Logging hours");

    let draft = json_body(correlation_id, payload)?;
    let shift = state
        .store()
        .create_shift(user.as_str(), draft)
        .await
        .map_err(|err| engine_failure(correlation_id, err))?;

    info!(correlation_id = %correlation_id, shift_id = shift.id, "Hours logged");
    Ok((StatusCode::CREATED, Json(DataResponse { data: shift })))
}

/// Handler for GET /hours/:id.
async fn get_hours_handler(
    State(state): State<AppState>,
    user: UserId,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<DataResponse<Shift>>> {
    let correlation_id = Uuid::new_v4();
    let id = record_id(correlation_id, path)?;
    info!(correlation_id = %correlation_id, user_id = %user.as_str(), shift_id = id, "Fetching hours");

    let shift = state
        .store()
        .get_shift(user.as_str(), id)
        .await
        .map_err(|err| engine_failure(correlation_id, err))?;
    Ok(Json(DataResponse { data: shift }))
}

/// Handler for PATCH /hours/:id.
///
/// Replaces every field of the shift; the uniqueness and duration checks
/// of `POST /hours` apply.
async fn update_hours_handler(
    State(state): State<AppState>,
    user: UserId,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<ShiftDraft>, JsonRejection>,
) -> ApiResult<Json<DataResponse<Shift>>> {
    let correlation_id = Uuid::new_v4();
    let id = record_id(correlation_id, path)?;
    info!(correlation_id = %correlation_id, user_id = %user.as_str(), shift_id = id, "Updating hours");

    let draft = json_body(correlation_id, payload)?;
    let shift = state
        .store()
        .update_shift(user.as_str(), id, draft)
        .await
        .map_err(|err| engine_failure(correlation_id, err))?;
    Ok(Json(DataResponse { data: shift }))
}

/// Handler for DELETE /hours/:id.
async fn delete_hours_handler(
    State(state): State<AppState>,
    user: UserId,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<DataResponse<Shift>>> {
    let correlation_id = Uuid::new_v4();
    let id = record_id(correlation_id, path)?;
    info!(correlation_id = %correlation_id, user_id = %user.as_str(), shift_id = id, "Deleting hours");

    let shift = state
        .store()
        .delete_shift(user.as_str(), id)
        .await
        .map_err(|err| engine_failure(correlation_id, err))?;
    Ok(Json(DataResponse { data: shift }))
}

/// Handler for GET /companies.
async fn list_companies_handler(
    State(state): State<AppState>,
    user: UserId,
) -> Json<DataResponse<Vec<Employer>>> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, user_id = %user.as_str(), "Listing companies");

    Json(DataResponse {
        data: state.store().list_employers(user.as_str()).await,
    })
}

/// Handler for POST /companies.
async fn create_company_handler(
    State(state): State<AppState>,
    user: UserId,
    payload: Result<Json<EmployerDraft>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, user_id = %user.as_str(), "Creating company");

    let draft = json_body(correlation_id, payload)?;
    let employer = state
        .store()
        .create_employer(user.as_str(), draft)
        .await
        .map_err(|err| engine_failure(correlation_id, err))?;

    info!(correlation_id = %correlation_id, employer_id = employer.id, "Company created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: employer })))
}

/// Handler for GET /companies/:id.
async fn get_company_handler(
    State(state): State<AppState>,
    user: UserId,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<DataResponse<Employer>>> {
    let correlation_id = Uuid::new_v4();
    let id = record_id(correlation_id, path)?;
    info!(correlation_id = %correlation_id, user_id = %user.as_str(), employer_id = id, "Fetching company");

    let employer = state
        .store()
        .get_employer(user.as_str(), id)
        .await
        .map_err(|err| engine_failure(correlation_id, err))?;
    Ok(Json(DataResponse { data: employer }))
}

/// Handler for PATCH /companies/:id.
///
/// Replaces every field of the company. Rate changes reprice the company's
/// shifts on the next read.
async fn update_company_handler(
    State(state): State<AppState>,
    user: UserId,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<EmployerDraft>, JsonRejection>,
) -> ApiResult<Json<DataResponse<Employer>>> {
    let correlation_id = Uuid::new_v4();
    let id = record_id(correlation_id, path)?;
    info!(correlation_id = %correlation_id, user_id = %user.as_str(), employer_id = id, "Updating company");

    let draft = json_body(correlation_id, payload)?;
    let employer = state
        .store()
        .update_employer(user.as_str(), id, draft)
        .await
        .map_err(|err| engine_failure(correlation_id, err))?;
    Ok(Json(DataResponse { data: employer }))
}

/// Handler for DELETE /companies/:id.
///
/// Also deletes every shift logged against the company.
async fn delete_company_handler(
    State(state): State<AppState>,
    user: UserId,
    path: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<DeletedResponse>> {
    let correlation_id = Uuid::new_v4();
    let id = record_id(correlation_id, path)?;
    info!(correlation_id = %correlation_id, user_id = %user.as_str(), employer_id = id, "Deleting company");

    let employer = state
        .store()
        .delete_employer(user.as_str(), id)
        .await
        .map_err(|err| engine_failure(correlation_id, err))?;
    Ok(Json(DeletedResponse { id: employer.id }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use crate::store::MemoryStore;
    use axum::{body::Body, http::Request};
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        AppState::new(ConfigLoader::default(), MemoryStore::new())
    }

    fn company_body() -> &'static str {
        r#"{
            "name": "Harbour Cafe",
            "job_role": "Barista",
            "joining_date": "2023-06-01",
            "day_rate": "25.00",
            "night_rate": "30.00",
            "saturday_rate": "32.50",
            "sunday_rate": "40.00"
        }"#
    }

    #[tokio::test]
    async fn test_request_without_user_header_returns_401() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/summary")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "UNAUTHORIZED");
    }

    #[tokio::test]
    async fn test_create_company_returns_201() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/companies")
                    .header("Content-Type", "application/json")
                    .header("x-user-id", "user_1")
                    .body(Body::from(company_body()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let created: DataResponse<Employer> = serde_json::from_slice(&body).unwrap();
        assert_eq!(created.data.name, "Harbour Cafe");
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/companies")
                    .header("Content-Type", "application/json")
                    .header("x-user-id", "user_1")
                    .body(Body::from("{invalid json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_missing_field_returns_validation_error() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/companies")
                    .header("Content-Type", "application/json")
                    .header("x-user-id", "user_1")
                    .body(Body::from(r#"{"job_role": "Barista"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.message.contains("missing field"));
    }

    #[tokio::test]
    async fn test_non_numeric_id_returns_400() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/companies/abc")
                    .header("x-user-id", "user_1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_reversed_range_returns_400() {
        let router = create_router(create_test_state());

        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/hours?start_date=2024-01-08&end_date=2024-01-01")
                    .header("x-user-id", "user_1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ApiError = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "INVALID_DATE_RANGE");
    }
}
