//! Task API endpoints
//!
//! RESTful API over the task service.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use tasklist_core::task::{filter_by_query, Task, TaskId};

use super::{api_error, ApiError};
use crate::state::AppState;

// ============================================================================
// Request types
// ============================================================================

/// Missing fields are read as empty text so they fail the same validation
#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Full replacement of a task's fields
#[derive(Debug, Deserialize)]
pub struct UpdateTaskRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    #[default]
    All,
    Completed,
    Pending,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListTasksQuery {
    #[serde(default)]
    pub status: StatusFilter,
    #[serde(default)]
    pub q: Option<String>,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/tasks - List tasks, optionally by status and search query
async fn list_tasks(
    State(state): State<AppState>,
    Query(query): Query<ListTasksQuery>,
) -> Result<Json<Vec<Task>>, ApiError> {
    let service = state.task_service();
    let tasks = match query.status {
        StatusFilter::All => service.get_all_tasks().await,
        StatusFilter::Completed => service.get_completed_tasks().await,
        StatusFilter::Pending => service.get_pending_tasks().await,
    }
    .map_err(api_error)?;

    let tasks = match query.q {
        Some(q) => filter_by_query(&tasks, &q),
        None => tasks,
    };

    Ok(Json(tasks))
}

/// POST /api/tasks - Create a new task
async fn create_task(
    State(state): State<AppState>,
    Json(req): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let title = req.title.unwrap_or_default();
    let description = req.description.unwrap_or_default();

    let created = state
        .task_service()
        .create_task(&title, &description)
        .await
        .map_err(api_error)?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/tasks/{id} - Get a single task
async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<TaskId>,
) -> Result<Json<Task>, ApiError> {
    let task = state
        .task_service()
        .get_task_by_id(id)
        .await
        .map_err(api_error)?;

    Ok(Json(task))
}

/// PUT /api/tasks/{id} - Replace a task
async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<TaskId>,
    Json(req): Json<UpdateTaskRequest>,
) -> Result<Json<Task>, ApiError> {
    let task = Task {
        id,
        title: req.title.unwrap_or_default(),
        description: req.description.unwrap_or_default(),
        completed: req.completed,
    };

    let updated = state
        .task_service()
        .update_task(task)
        .await
        .map_err(api_error)?;

    Ok(Json(updated))
}

/// POST /api/tasks/{id}/toggle - Flip completion
async fn toggle_task(
    State(state): State<AppState>,
    Path(id): Path<TaskId>,
) -> Result<Json<Task>, ApiError> {
    let toggled = state
        .task_service()
        .toggle_task_completion(id)
        .await
        .map_err(api_error)?;

    Ok(Json(toggled))
}

/// DELETE /api/tasks/{id} - Delete a task
async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<TaskId>,
) -> Result<StatusCode, ApiError> {
    state
        .task_service()
        .delete_task(id)
        .await
        .map_err(api_error)?;

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Router
// ============================================================================

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/tasks", get(list_tasks).post(create_task))
        .route(
            "/api/tasks/{id}",
            get(get_task).put(update_task).delete(delete_task),
        )
        .route("/api/tasks/{id}/toggle", post(toggle_task))
}
