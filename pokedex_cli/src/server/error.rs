//! API error type and its JSON rendering.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use pokedex_lib::PokedexError;
use serde::Serialize;

/// Upstream faults are reported with this text only; the detail stays in
/// the server log.
const UPSTREAM_FAILURE_MESSAGE: &str = "Failed to fetch data from the upstream API";

#[derive(Debug)]
pub enum ApiError {
    /// 404 Not Found
    NotFound(String),
    /// 502 Bad Gateway
    BadGateway(String),
    /// 500 Internal Server Error
    Internal(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            ApiError::BadGateway(msg) => (StatusCode::BAD_GATEWAY, "bad_gateway", msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg),
        };

        if status.is_server_error() {
            tracing::error!(error = error_type, %message, "API error");
        } else {
            tracing::debug!(error = error_type, %message, "API client error");
        }

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message,
        });

        (status, body).into_response()
    }
}

impl From<PokedexError> for ApiError {
    fn from(err: PokedexError) -> Self {
        match err {
            PokedexError::FetchFailure => ApiError::BadGateway(UPSTREAM_FAILURE_MESSAGE.to_string()),
            PokedexError::InvalidInput(msg) => ApiError::Internal(msg),
        }
    }
}
