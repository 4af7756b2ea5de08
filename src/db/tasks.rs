//! Task CRUD operations.

use super::BoardDb;
use super::task_lists::get_task_list_internal;
use crate::error::{ApiError, ApiResult};
use crate::types::{PRIORITY_MAX, PRIORITY_MIN, Task, priority_in_bounds};
use rusqlite::{Connection, Row, params};

fn task_from_row(row: &Row) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get("id")?,
        name: row.get("name")?,
        description: row.get("description")?,
        priority: row.get("priority")?,
        task_list_id: row.get("task_list_id")?,
    })
}

fn get_task_internal(conn: &Connection, task_id: i64) -> ApiResult<Option<Task>> {
    let result = conn.query_row(
        "SELECT id, name, description, priority, task_list_id FROM tasks WHERE id = ?1",
        params![task_id],
        task_from_row,
    );

    match result {
        Ok(task) => Ok(Some(task)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(ApiError::database(e)),
    }
}

fn check_priority(priority: i64) -> ApiResult<()> {
    if !priority_in_bounds(priority) {
        return Err(ApiError::invalid_value(
            "priority",
            format!(
                "priority must be between {} and {}, got {}",
                PRIORITY_MIN, PRIORITY_MAX, priority
            ),
        ));
    }
    Ok(())
}

impl BoardDb {
    /// List tasks, optionally restricted to a single task list.
    pub fn list_tasks(&self, task_list_id: Option<i64>) -> ApiResult<Vec<Task>> {
        self.with_conn(|conn| {
            let tasks = match task_list_id {
                Some(list_id) => {
                    let mut stmt = conn
                        .prepare(
                            "SELECT id, name, description, priority, task_list_id FROM tasks
                             WHERE task_list_id = ?1 ORDER BY id",
                        )
                        .map_err(ApiError::database)?;
                    stmt.query_map(params![list_id], task_from_row)
                        .map_err(ApiError::database)?
                        .filter_map(|r| r.ok())
                        .collect()
                }
                None => {
                    let mut stmt = conn
                        .prepare(
                            "SELECT id, name, description, priority, task_list_id FROM tasks
                             ORDER BY id",
                        )
                        .map_err(ApiError::database)?;
                    stmt.query_map([], task_from_row)
                        .map_err(ApiError::database)?
                        .filter_map(|r| r.ok())
                        .collect()
                }
            };

            Ok(tasks)
        })
    }

    /// Get a task by id.
    pub fn get_task(&self, task_id: i64) -> ApiResult<Option<Task>> {
        self.with_conn(|conn| get_task_internal(conn, task_id))
    }

    /// Insert a new task and return the persisted row. The priority is
    /// range-checked before any statement runs, and the referenced task
    /// list must exist.
    pub fn create_task(
        &self,
        name: &str,
        description: Option<&str>,
        priority: i64,
        task_list_id: i64,
    ) -> ApiResult<Task> {
        check_priority(priority)?;

        self.with_conn(|conn| {
            if get_task_list_internal(conn, task_list_id)?.is_none() {
                return Err(ApiError::task_list_not_found(task_list_id));
            }

            conn.execute(
                "INSERT INTO tasks (name, description, priority, task_list_id)
                 VALUES (?1, ?2, ?3, ?4)",
                params![name, description, priority, task_list_id],
            )
            .map_err(ApiError::database)?;

            let id = conn.last_insert_rowid();
            get_task_internal(conn, id)?
                .ok_or_else(|| ApiError::database("inserted task row is missing"))
        })
    }

    /// Update only the supplied fields of an existing task. A supplied
    /// priority is re-validated; a supplied task list must exist.
    pub fn update_task(
        &self,
        task_id: i64,
        name: Option<&str>,
        description: Option<&str>,
        priority: Option<i64>,
        task_list_id: Option<i64>,
    ) -> ApiResult<Task> {
        if let Some(priority) = priority {
            check_priority(priority)?;
        }

        self.with_conn(|conn| {
            let existing = get_task_internal(conn, task_id)?
                .ok_or_else(|| ApiError::task_not_found(task_id))?;

            if let Some(list_id) = task_list_id
                && list_id != existing.task_list_id
                && get_task_list_internal(conn, list_id)?.is_none()
            {
                return Err(ApiError::task_list_not_found(list_id));
            }

            let new_name = name.unwrap_or(&existing.name);
            let new_description = description.or(existing.description.as_deref());
            let new_priority = priority.unwrap_or(existing.priority);
            let new_list_id = task_list_id.unwrap_or(existing.task_list_id);

            conn.execute(
                "UPDATE tasks SET name = ?1, description = ?2, priority = ?3, task_list_id = ?4
                 WHERE id = ?5",
                params![new_name, new_description, new_priority, new_list_id, task_id],
            )
            .map_err(ApiError::database)?;

            get_task_internal(conn, task_id)?
                .ok_or_else(|| ApiError::database("updated task row is missing"))
        })
    }

    /// Delete a task unconditionally.
    pub fn delete_task(&self, task_id: i64) -> ApiResult<()> {
        self.with_conn(|conn| {
            let deleted = conn
                .execute("DELETE FROM tasks WHERE id = ?1", params![task_id])
                .map_err(ApiError::database)?;

            if deleted == 0 {
                return Err(ApiError::task_not_found(task_id));
            }

            Ok(())
        })
    }
}
