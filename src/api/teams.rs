//! Team endpoints.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Deserialize;

use super::AppState;
use crate::error::{ApiError, ApiResult};
use crate::types::Team;

/// Request body for creating or replacing a team. Every field is
/// mandatory; a missing one is rejected before any handler logic runs.
#[derive(Debug, Deserialize)]
pub struct TeamPayload {
    pub name: Option<String>,
    pub mascot: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl TeamPayload {
    fn into_fields(self) -> ApiResult<(String, String, f64, f64)> {
        let name = self.name.ok_or_else(|| ApiError::missing_field("name"))?;
        let mascot = self
            .mascot
            .ok_or_else(|| ApiError::missing_field("mascot"))?;
        let latitude = self
            .latitude
            .ok_or_else(|| ApiError::missing_field("latitude"))?;
        let longitude = self
            .longitude
            .ok_or_else(|| ApiError::missing_field("longitude"))?;
        Ok((name, mascot, latitude, longitude))
    }
}

/// GET /teams
pub async fn list_teams(State(state): State<AppState>) -> ApiResult<Json<Vec<Team>>> {
    Ok(Json(state.roster.list_teams()?))
}

/// GET /teams/{id}
pub async fn get_team(
    State(state): State<AppState>,
    Path(team_id): Path<i64>,
) -> ApiResult<Json<Team>> {
    let team = state
        .roster
        .get_team(team_id)?
        .ok_or_else(|| ApiError::team_not_found(team_id))?;

    Ok(Json(team))
}

/// POST /teams
pub async fn create_team(
    State(state): State<AppState>,
    Json(payload): Json<TeamPayload>,
) -> ApiResult<(StatusCode, Json<Team>)> {
    let (name, mascot, latitude, longitude) = payload.into_fields()?;
    let team = state
        .roster
        .create_team(&name, &mascot, latitude, longitude)?;

    Ok((StatusCode::CREATED, Json(team)))
}

/// PUT /teams/{id} — full overwrite, all fields required.
pub async fn update_team(
    State(state): State<AppState>,
    Path(team_id): Path<i64>,
    Json(payload): Json<TeamPayload>,
) -> ApiResult<Json<Team>> {
    let (name, mascot, latitude, longitude) = payload.into_fields()?;
    let team = state
        .roster
        .update_team(team_id, &name, &mascot, latitude, longitude)?;

    Ok(Json(team))
}

/// DELETE /teams/{id}
pub async fn delete_team(
    State(state): State<AppState>,
    Path(team_id): Path<i64>,
) -> ApiResult<StatusCode> {
    state.roster.delete_team(team_id)?;
    Ok(StatusCode::NO_CONTENT)
}
