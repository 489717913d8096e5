//! Route handlers

pub mod health;
pub mod task;

use axum::{http::StatusCode, Json};
use serde::Serialize;
use tasklist_core::Error;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);

/// Map a core error to its HTTP status and JSON body
pub fn api_error(err: Error) -> ApiError {
    let status = match err {
        Error::TaskNotFound(_) => StatusCode::NOT_FOUND,
        Error::Validation(_) => StatusCode::BAD_REQUEST,
    };
    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}
