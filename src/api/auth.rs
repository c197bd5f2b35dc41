//! Caller identification.
//!
//! Authentication happens upstream; the user ID arrives in a request header
//! whose name is configured under `auth.user_header`.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use tracing::warn;

use super::response::ApiErrorResponse;
use super::state::AppState;

/// The ID of the user making the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserId(pub String);

impl UserId {
    /// The ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[async_trait]
impl FromRequestParts<AppState> for UserId {
    type Rejection = ApiErrorResponse;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = state.config().user_header();
        let user_id = parts
            .headers
            .get(header)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty());

        match user_id {
            Some(id) => Ok(UserId(id.to_string())),
            None => {
                warn!(header = %header, path = %parts.uri.path(), "Request without user ID");
                Err(ApiErrorResponse::unauthorized())
            }
        }
    }
}
