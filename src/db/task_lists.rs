//! Task list CRUD operations.

use super::BoardDb;
use crate::error::{ApiError, ApiResult};
use crate::types::TaskList;
use rusqlite::{Connection, Row, params};

fn task_list_from_row(row: &Row) -> rusqlite::Result<TaskList> {
    Ok(TaskList {
        id: row.get("id")?,
        name: row.get("name")?,
        description: row.get("description")?,
    })
}

/// Fetch a task list using an existing connection.
pub(super) fn get_task_list_internal(conn: &Connection, list_id: i64) -> ApiResult<Option<TaskList>> {
    let result = conn.query_row(
        "SELECT id, name, description FROM task_lists WHERE id = ?1",
        params![list_id],
        task_list_from_row,
    );

    match result {
        Ok(list) => Ok(Some(list)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(ApiError::database(e)),
    }
}

impl BoardDb {
    /// List every task list.
    pub fn list_task_lists(&self) -> ApiResult<Vec<TaskList>> {
        self.with_conn(|conn| {
            let mut stmt = conn
                .prepare("SELECT id, name, description FROM task_lists ORDER BY id")
                .map_err(ApiError::database)?;

            let lists = stmt
                .query_map([], task_list_from_row)
                .map_err(ApiError::database)?
                .filter_map(|r| r.ok())
                .collect();

            Ok(lists)
        })
    }

    /// Get a task list by id.
    pub fn get_task_list(&self, list_id: i64) -> ApiResult<Option<TaskList>> {
        self.with_conn(|conn| get_task_list_internal(conn, list_id))
    }

    /// Insert a new task list and return the persisted row.
    pub fn create_task_list(&self, name: &str, description: Option<&str>) -> ApiResult<TaskList> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO task_lists (name, description) VALUES (?1, ?2)",
                params![name, description],
            )
            .map_err(ApiError::database)?;

            let id = conn.last_insert_rowid();
            get_task_list_internal(conn, id)?
                .ok_or_else(|| ApiError::database("inserted task list row is missing"))
        })
    }

    /// Update only the supplied fields of an existing task list.
    pub fn update_task_list(
        &self,
        list_id: i64,
        name: Option<&str>,
        description: Option<&str>,
    ) -> ApiResult<TaskList> {
        self.with_conn(|conn| {
            let existing = get_task_list_internal(conn, list_id)?
                .ok_or_else(|| ApiError::task_list_not_found(list_id))?;

            let new_name = name.unwrap_or(&existing.name);
            let new_description = description.or(existing.description.as_deref());

            conn.execute(
                "UPDATE task_lists SET name = ?1, description = ?2 WHERE id = ?3",
                params![new_name, new_description, list_id],
            )
            .map_err(ApiError::database)?;

            get_task_list_internal(conn, list_id)?
                .ok_or_else(|| ApiError::database("updated task list row is missing"))
        })
    }

    /// Delete a task list. The storage layer cascades the delete to every
    /// task that references it.
    pub fn delete_task_list(&self, list_id: i64) -> ApiResult<()> {
        self.with_conn(|conn| {
            let deleted = conn
                .execute("DELETE FROM task_lists WHERE id = ?1", params![list_id])
                .map_err(ApiError::database)?;

            if deleted == 0 {
                return Err(ApiError::task_list_not_found(list_id));
            }

            Ok(())
        })
    }
}
