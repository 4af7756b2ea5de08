//! Player endpoints.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::Deserialize;

use super::AppState;
use crate::error::{ApiError, ApiResult};
use crate::types::Player;

/// Request body for creating or replacing a player. Every field is
/// mandatory on create and on update alike.
#[derive(Debug, Deserialize)]
pub struct PlayerPayload {
    pub name: Option<String>,
    pub number: Option<i64>,
    pub position: Option<String>,
    pub team_id: Option<i64>,
}

impl PlayerPayload {
    fn into_fields(self) -> ApiResult<(String, i64, String, i64)> {
        let name = self.name.ok_or_else(|| ApiError::missing_field("name"))?;
        let number = self
            .number
            .ok_or_else(|| ApiError::missing_field("number"))?;
        let position = self
            .position
            .ok_or_else(|| ApiError::missing_field("position"))?;
        let team_id = self
            .team_id
            .ok_or_else(|| ApiError::missing_field("team_id"))?;
        Ok((name, number, position, team_id))
    }
}

/// Query parameters for the player list.
#[derive(Debug, Deserialize)]
pub struct PlayerListParams {
    pub team_id: Option<i64>,
}

/// GET /players?team_id=
pub async fn list_players(
    State(state): State<AppState>,
    Query(params): Query<PlayerListParams>,
) -> ApiResult<Json<Vec<Player>>> {
    Ok(Json(state.roster.list_players(params.team_id)?))
}

/// GET /players/{id}
pub async fn get_player(
    State(state): State<AppState>,
    Path(player_id): Path<i64>,
) -> ApiResult<Json<Player>> {
    let player = state
        .roster
        .get_player(player_id)?
        .ok_or_else(|| ApiError::player_not_found(player_id))?;

    Ok(Json(player))
}

/// POST /players
pub async fn create_player(
    State(state): State<AppState>,
    Json(payload): Json<PlayerPayload>,
) -> ApiResult<(StatusCode, Json<Player>)> {
    let (name, number, position, team_id) = payload.into_fields()?;
    let player = state
        .roster
        .create_player(&name, number, &position, team_id)?;

    Ok((StatusCode::CREATED, Json(player)))
}

/// PUT /players/{id} — full overwrite, all fields required.
pub async fn update_player(
    State(state): State<AppState>,
    Path(player_id): Path<i64>,
    Json(payload): Json<PlayerPayload>,
) -> ApiResult<Json<Player>> {
    let (name, number, position, team_id) = payload.into_fields()?;
    let player = state
        .roster
        .update_player(player_id, &name, number, &position, team_id)?;

    Ok(Json(player))
}

/// DELETE /players/{id}
pub async fn delete_player(
    State(state): State<AppState>,
    Path(player_id): Path<i64>,
) -> ApiResult<StatusCode> {
    state.roster.delete_player(player_id)?;
    Ok(StatusCode::NO_CONTENT)
}
