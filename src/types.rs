//! Core entity types shared by the storage and API layers.

use serde::{Deserialize, Serialize};

/// Inclusive bounds for task priority.
pub const PRIORITY_MIN: i64 = 1;
pub const PRIORITY_MAX: i64 = 5;

/// Check a task priority against the allowed range.
pub fn priority_in_bounds(priority: i64) -> bool {
    (PRIORITY_MIN..=PRIORITY_MAX).contains(&priority)
}

/// A team in the roster store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: i64,
    pub name: String,
    pub mascot: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// A player belonging to a team. `number` is unique within the team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub number: i64,
    pub position: String,
    pub team_id: i64,
}

/// A task list in the board store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskList {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

/// A task owned by a task list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub priority: i64,
    pub task_list_id: i64,
}
