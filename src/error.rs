//! Structured error types for API responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::json;
use std::fmt;

/// Error codes for programmatic error handling.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Validation errors
    MissingRequiredField,
    InvalidFieldValue,

    // Not found errors
    TeamNotFound,
    PlayerNotFound,
    TaskListNotFound,
    TaskNotFound,

    // Conflict errors
    AlreadyExists,
    HasDependents,

    // Internal errors
    DatabaseError,
}

impl ErrorCode {
    /// HTTP status for this code. Conflict codes surface as 400; clients
    /// tell them apart from validation failures by the code itself.
    pub fn status(self) -> StatusCode {
        match self {
            ErrorCode::MissingRequiredField
            | ErrorCode::InvalidFieldValue
            | ErrorCode::AlreadyExists
            | ErrorCode::HasDependents => StatusCode::BAD_REQUEST,
            ErrorCode::TeamNotFound
            | ErrorCode::PlayerNotFound
            | ErrorCode::TaskListNotFound
            | ErrorCode::TaskNotFound => StatusCode::NOT_FOUND,
            ErrorCode::DatabaseError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Structured error returned by every failing endpoint.
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            field: None,
        }
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    // Convenience constructors

    pub fn missing_field(field: &str) -> Self {
        Self::new(
            ErrorCode::MissingRequiredField,
            format!("{} is required", field),
        )
        .with_field(field)
    }

    pub fn invalid_value(field: &str, reason: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidFieldValue, reason).with_field(field)
    }

    pub fn team_not_found(team_id: i64) -> Self {
        Self::new(
            ErrorCode::TeamNotFound,
            format!("Team not found: {}", team_id),
        )
    }

    pub fn player_not_found(player_id: i64) -> Self {
        Self::new(
            ErrorCode::PlayerNotFound,
            format!("Player not found: {}", player_id),
        )
    }

    pub fn task_list_not_found(list_id: i64) -> Self {
        Self::new(
            ErrorCode::TaskListNotFound,
            format!("Task list not found: {}", list_id),
        )
    }

    pub fn task_not_found(task_id: i64) -> Self {
        Self::new(
            ErrorCode::TaskNotFound,
            format!("Task not found: {}", task_id),
        )
    }

    pub fn duplicate_team_name(name: &str) -> Self {
        Self::new(
            ErrorCode::AlreadyExists,
            format!("A team named '{}' already exists", name),
        )
        .with_field("name")
    }

    pub fn duplicate_player_number(team_id: i64, number: i64) -> Self {
        Self::new(
            ErrorCode::AlreadyExists,
            format!("Number {} is already taken on team {}", number, team_id),
        )
        .with_field("number")
    }

    pub fn team_has_players(team_id: i64, count: i64) -> Self {
        Self::new(
            ErrorCode::HasDependents,
            format!(
                "Team {} still has {} player(s) and cannot be deleted",
                team_id, count
            ),
        )
    }

    pub fn database(err: impl fmt::Display) -> Self {
        Self::new(ErrorCode::DatabaseError, err.to_string())
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

/// True when the error is a SQLite UNIQUE (or primary key) constraint
/// violation. Uniqueness is never pre-checked; this is how a concurrent or
/// duplicate write is detected after the fact.
pub fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
                || e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY
    )
}

impl From<rusqlite::Error> for ApiError {
    fn from(err: rusqlite::Error) -> Self {
        if is_unique_violation(&err) {
            ApiError::new(ErrorCode::AlreadyExists, err.to_string())
        } else {
            ApiError::database(err)
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.code.status();
        let body = Json(json!({ "error": self }));
        (status, body).into_response()
    }
}

/// Result type for API and storage operations.
pub type ApiResult<T> = std::result::Result<T, ApiError>;
