//! Health check endpoint

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use super::{api_error, ApiError};
use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthResponse {
    status: String,
    version: String,
    task_count: usize,
}

async fn health_check(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    let tasks = state.task_service().get_all_tasks().await.map_err(api_error)?;

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        task_count: tasks.len(),
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
