//! Task list endpoints.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Deserialize;

use super::AppState;
use crate::error::{ApiError, ApiResult};
use crate::types::TaskList;

/// Request body for creating a task list.
#[derive(Debug, Deserialize)]
pub struct CreateTaskListPayload {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Request body for updating a task list. Only supplied fields change.
#[derive(Debug, Deserialize)]
pub struct UpdateTaskListPayload {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// GET /task-lists
pub async fn list_task_lists(State(state): State<AppState>) -> ApiResult<Json<Vec<TaskList>>> {
    Ok(Json(state.board.list_task_lists()?))
}

/// GET /task-lists/{id}
pub async fn get_task_list(
    State(state): State<AppState>,
    Path(list_id): Path<i64>,
) -> ApiResult<Json<TaskList>> {
    let list = state
        .board
        .get_task_list(list_id)?
        .ok_or_else(|| ApiError::task_list_not_found(list_id))?;

    Ok(Json(list))
}

/// POST /task-lists
pub async fn create_task_list(
    State(state): State<AppState>,
    Json(payload): Json<CreateTaskListPayload>,
) -> ApiResult<(StatusCode, Json<TaskList>)> {
    let name = payload
        .name
        .ok_or_else(|| ApiError::missing_field("name"))?;
    let list = state
        .board
        .create_task_list(&name, payload.description.as_deref())?;

    Ok((StatusCode::CREATED, Json(list)))
}

/// PUT /task-lists/{id} — partial update, only supplied fields change.
pub async fn update_task_list(
    State(state): State<AppState>,
    Path(list_id): Path<i64>,
    Json(payload): Json<UpdateTaskListPayload>,
) -> ApiResult<Json<TaskList>> {
    let list = state.board.update_task_list(
        list_id,
        payload.name.as_deref(),
        payload.description.as_deref(),
    )?;

    Ok(Json(list))
}

/// DELETE /task-lists/{id} — cascades to the list's tasks.
pub async fn delete_task_list(
    State(state): State<AppState>,
    Path(list_id): Path<i64>,
) -> ApiResult<StatusCode> {
    state.board.delete_task_list(list_id)?;
    Ok(StatusCode::NO_CONTENT)
}
