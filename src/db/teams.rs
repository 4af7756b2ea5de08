//! Team CRUD operations.

use super::RosterDb;
use crate::error::{ApiError, ApiResult, is_unique_violation};
use crate::types::Team;
use rusqlite::{Connection, Row, params};

fn team_from_row(row: &Row) -> rusqlite::Result<Team> {
    Ok(Team {
        id: row.get("id")?,
        name: row.get("name")?,
        mascot: row.get("mascot")?,
        latitude: row.get("latitude")?,
        longitude: row.get("longitude")?,
    })
}

/// Fetch a team using an existing connection.
pub(super) fn get_team_internal(conn: &Connection, team_id: i64) -> ApiResult<Option<Team>> {
    let result = conn.query_row(
        "SELECT id, name, mascot, latitude, longitude FROM teams WHERE id = ?1",
        params![team_id],
        team_from_row,
    );

    match result {
        Ok(team) => Ok(Some(team)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(ApiError::database(e)),
    }
}

impl RosterDb {
    /// List every team.
    pub fn list_teams(&self) -> ApiResult<Vec<Team>> {
        self.with_conn(|conn| {
            let mut stmt = conn
                .prepare("SELECT id, name, mascot, latitude, longitude FROM teams ORDER BY id")
                .map_err(ApiError::database)?;

            let teams = stmt
                .query_map([], team_from_row)
                .map_err(ApiError::database)?
                .filter_map(|r| r.ok())
                .collect();

            Ok(teams)
        })
    }

    /// Get a team by id.
    pub fn get_team(&self, team_id: i64) -> ApiResult<Option<Team>> {
        self.with_conn(|conn| get_team_internal(conn, team_id))
    }

    /// Insert a new team and return the persisted row.
    pub fn create_team(
        &self,
        name: &str,
        mascot: &str,
        latitude: f64,
        longitude: f64,
    ) -> ApiResult<Team> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO teams (name, mascot, latitude, longitude) VALUES (?1, ?2, ?3, ?4)",
                params![name, mascot, latitude, longitude],
            )
            .map_err(|e| {
                if is_unique_violation(&e) {
                    ApiError::duplicate_team_name(name)
                } else {
                    ApiError::database(e)
                }
            })?;

            let id = conn.last_insert_rowid();
            get_team_internal(conn, id)?
                .ok_or_else(|| ApiError::database("inserted team row is missing"))
        })
    }

    /// Overwrite every field of an existing team.
    pub fn update_team(
        &self,
        team_id: i64,
        name: &str,
        mascot: &str,
        latitude: f64,
        longitude: f64,
    ) -> ApiResult<Team> {
        self.with_conn(|conn| {
            if get_team_internal(conn, team_id)?.is_none() {
                return Err(ApiError::team_not_found(team_id));
            }

            conn.execute(
                "UPDATE teams SET name = ?1, mascot = ?2, latitude = ?3, longitude = ?4
                 WHERE id = ?5",
                params![name, mascot, latitude, longitude, team_id],
            )
            .map_err(|e| {
                if is_unique_violation(&e) {
                    ApiError::duplicate_team_name(name)
                } else {
                    ApiError::database(e)
                }
            })?;

            get_team_internal(conn, team_id)?
                .ok_or_else(|| ApiError::database("updated team row is missing"))
        })
    }

    /// Delete a team. Refused while any player still references it.
    pub fn delete_team(&self, team_id: i64) -> ApiResult<()> {
        self.with_conn(|conn| {
            if get_team_internal(conn, team_id)?.is_none() {
                return Err(ApiError::team_not_found(team_id));
            }

            let players: i64 = conn
                .query_row(
                    "SELECT COUNT(*) FROM players WHERE team_id = ?1",
                    params![team_id],
                    |row| row.get(0),
                )
                .map_err(ApiError::database)?;

            if players > 0 {
                return Err(ApiError::team_has_players(team_id, players));
            }

            conn.execute("DELETE FROM teams WHERE id = ?1", params![team_id])
                .map_err(ApiError::database)?;

            Ok(())
        })
    }
}
