//! Task endpoints.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::Deserialize;

use super::AppState;
use crate::error::{ApiError, ApiResult};
use crate::types::Task;

/// Request body for creating a task.
#[derive(Debug, Deserialize)]
pub struct CreateTaskPayload {
    pub name: Option<String>,
    pub description: Option<String>,
    pub priority: Option<i64>,
    pub task_list_id: Option<i64>,
}

/// Request body for updating a task. Only supplied fields change.
#[derive(Debug, Deserialize)]
pub struct UpdateTaskPayload {
    pub name: Option<String>,
    pub description: Option<String>,
    pub priority: Option<i64>,
    pub task_list_id: Option<i64>,
}

/// Query parameters for the task list.
#[derive(Debug, Deserialize)]
pub struct TaskListParams {
    pub task_list_id: Option<i64>,
}

/// GET /tasks?task_list_id=
pub async fn list_tasks(
    State(state): State<AppState>,
    Query(params): Query<TaskListParams>,
) -> ApiResult<Json<Vec<Task>>> {
    Ok(Json(state.board.list_tasks(params.task_list_id)?))
}

/// GET /tasks/{id}
pub async fn get_task(
    State(state): State<AppState>,
    Path(task_id): Path<i64>,
) -> ApiResult<Json<Task>> {
    let task = state
        .board
        .get_task(task_id)?
        .ok_or_else(|| ApiError::task_not_found(task_id))?;

    Ok(Json(task))
}

/// POST /tasks
pub async fn create_task(
    State(state): State<AppState>,
    Json(payload): Json<CreateTaskPayload>,
) -> ApiResult<(StatusCode, Json<Task>)> {
    let name = payload
        .name
        .ok_or_else(|| ApiError::missing_field("name"))?;
    let priority = payload
        .priority
        .ok_or_else(|| ApiError::missing_field("priority"))?;
    let task_list_id = payload
        .task_list_id
        .ok_or_else(|| ApiError::missing_field("task_list_id"))?;

    let task = state.board.create_task(
        &name,
        payload.description.as_deref(),
        priority,
        task_list_id,
    )?;

    Ok((StatusCode::CREATED, Json(task)))
}

/// PUT /tasks/{id} — partial update, only supplied fields change.
pub async fn update_task(
    State(state): State<AppState>,
    Path(task_id): Path<i64>,
    Json(payload): Json<UpdateTaskPayload>,
) -> ApiResult<Json<Task>> {
    let task = state.board.update_task(
        task_id,
        payload.name.as_deref(),
        payload.description.as_deref(),
        payload.priority,
        payload.task_list_id,
    )?;

    Ok(Json(task))
}

/// DELETE /tasks/{id}
pub async fn delete_task(
    State(state): State<AppState>,
    Path(task_id): Path<i64>,
) -> ApiResult<StatusCode> {
    state.board.delete_task(task_id)?;
    Ok(StatusCode::NO_CONTENT)
}
