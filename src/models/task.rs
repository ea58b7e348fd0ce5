use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A task as stored in the database and returned by the API.
///
/// `user_id` is `None` for tasks created by unauthenticated callers; the
/// field is omitted from JSON in that case.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Task {
    pub id: i64,
    pub text: String,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub user_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input shape for creating or updating a task.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct TaskInput {
    // Missing field decodes as empty and fails validation with the
    // field-specific message rather than a generic payload error.
    #[serde(default)]
    #[validate(length(min = 1, message = "Task text is required"))]
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}
