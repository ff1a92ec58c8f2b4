//! Handler-level error type and its HTTP mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::db::DbError;

/// JSON body returned with 5xx responses.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Database error: disk I/O error")]
    pub error: String,
}

/// Errors a handler can surface.
///
/// `NotFound` and `IdMismatch` respond with an empty body; only storage
/// failures carry a JSON error payload.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("employee not found")]
    NotFound,

    #[error("path id does not match body id")]
    IdMismatch,

    #[error(transparent)]
    Storage(#[from] DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
            ApiError::IdMismatch => StatusCode::BAD_REQUEST.into_response(),
            ApiError::Storage(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response(),
        }
    }
}
