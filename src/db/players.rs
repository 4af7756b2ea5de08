//! Player CRUD operations.

use super::RosterDb;
use super::teams::get_team_internal;
use crate::error::{ApiError, ApiResult, is_unique_violation};
use crate::types::Player;
use rusqlite::{Connection, Row, params};

fn player_from_row(row: &Row) -> rusqlite::Result<Player> {
    Ok(Player {
        id: row.get("id")?,
        name: row.get("name")?,
        number: row.get("number")?,
        position: row.get("position")?,
        team_id: row.get("team_id")?,
    })
}

fn get_player_internal(conn: &Connection, player_id: i64) -> ApiResult<Option<Player>> {
    let result = conn.query_row(
        "SELECT id, name, number, position, team_id FROM players WHERE id = ?1",
        params![player_id],
        player_from_row,
    );

    match result {
        Ok(player) => Ok(Some(player)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(ApiError::database(e)),
    }
}

impl RosterDb {
    /// List players, optionally restricted to a single team.
    pub fn list_players(&self, team_id: Option<i64>) -> ApiResult<Vec<Player>> {
        self.with_conn(|conn| {
            let players = match team_id {
                Some(team_id) => {
                    let mut stmt = conn
                        .prepare(
                            "SELECT id, name, number, position, team_id FROM players
                             WHERE team_id = ?1 ORDER BY id",
                        )
                        .map_err(ApiError::database)?;
                    stmt.query_map(params![team_id], player_from_row)
                        .map_err(ApiError::database)?
                        .filter_map(|r| r.ok())
                        .collect()
                }
                None => {
                    let mut stmt = conn
                        .prepare(
                            "SELECT id, name, number, position, team_id FROM players ORDER BY id",
                        )
                        .map_err(ApiError::database)?;
                    stmt.query_map([], player_from_row)
                        .map_err(ApiError::database)?
                        .filter_map(|r| r.ok())
                        .collect()
                }
            };

            Ok(players)
        })
    }

    /// Get a player by id.
    pub fn get_player(&self, player_id: i64) -> ApiResult<Option<Player>> {
        self.with_conn(|conn| get_player_internal(conn, player_id))
    }

    /// Insert a new player and return the persisted row. The referenced
    /// team must exist before the insert is attempted.
    pub fn create_player(
        &self,
        name: &str,
        number: i64,
        position: &str,
        team_id: i64,
    ) -> ApiResult<Player> {
        self.with_conn(|conn| {
            if get_team_internal(conn, team_id)?.is_none() {
                return Err(ApiError::team_not_found(team_id));
            }

            conn.execute(
                "INSERT INTO players (name, number, position, team_id) VALUES (?1, ?2, ?3, ?4)",
                params![name, number, position, team_id],
            )
            .map_err(|e| {
                if is_unique_violation(&e) {
                    ApiError::duplicate_player_number(team_id, number)
                } else {
                    ApiError::database(e)
                }
            })?;

            let id = conn.last_insert_rowid();
            get_player_internal(conn, id)?
                .ok_or_else(|| ApiError::database("inserted player row is missing"))
        })
    }

    /// Overwrite every field of an existing player. The referenced team is
    /// validated on every call, matching the create contract.
    pub fn update_player(
        &self,
        player_id: i64,
        name: &str,
        number: i64,
        position: &str,
        team_id: i64,
    ) -> ApiResult<Player> {
        self.with_conn(|conn| {
            if get_player_internal(conn, player_id)?.is_none() {
                return Err(ApiError::player_not_found(player_id));
            }
            if get_team_internal(conn, team_id)?.is_none() {
                return Err(ApiError::team_not_found(team_id));
            }

            conn.execute(
                "UPDATE players SET name = ?1, number = ?2, position = ?3, team_id = ?4
                 WHERE id = ?5",
                params![name, number, position, team_id, player_id],
            )
            .map_err(|e| {
                if is_unique_violation(&e) {
                    ApiError::duplicate_player_number(team_id, number)
                } else {
                    ApiError::database(e)
                }
            })?;

            get_player_internal(conn, player_id)?
                .ok_or_else(|| ApiError::database("updated player row is missing"))
        })
    }

    /// Delete a player unconditionally.
    pub fn delete_player(&self, player_id: i64) -> ApiResult<()> {
        self.with_conn(|conn| {
            let deleted = conn
                .execute("DELETE FROM players WHERE id = ?1", params![player_id])
                .map_err(ApiError::database)?;

            if deleted == 0 {
                return Err(ApiError::player_not_found(player_id));
            }

            Ok(())
        })
    }
}
