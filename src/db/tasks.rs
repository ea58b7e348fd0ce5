use chrono::Utc;
use sqlx::SqlitePool;

use crate::models::Task;

const TASK_COLUMNS: &str = "id, text, completed, user_id, created_at, updated_at";

/// Database operations for tasks.
///
/// Every read/delete takes an `owner` filter: `Some(id)` scopes the statement
/// to rows owned by that user, `None` leaves it unscoped. The unscoped form
/// serves anonymous callers; see `TaskService` for the visibility rule.
#[derive(Clone)]
pub struct TaskRepository {
    pool: SqlitePool,
}

impl TaskRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, owner: Option<i64>) -> sqlx::Result<Vec<Task>> {
        match owner {
            Some(user_id) => {
                sqlx::query_as::<_, Task>(&format!(
                    "SELECT {} FROM tasks WHERE user_id = ? ORDER BY created_at DESC",
                    TASK_COLUMNS
                ))
                .bind(user_id)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, Task>(&format!(
                    "SELECT {} FROM tasks ORDER BY created_at DESC",
                    TASK_COLUMNS
                ))
                .fetch_all(&self.pool)
                .await
            }
        }
    }

    pub async fn find(&self, id: i64, owner: Option<i64>) -> sqlx::Result<Option<Task>> {
        match owner {
            Some(user_id) => {
                sqlx::query_as::<_, Task>(&format!(
                    "SELECT {} FROM tasks WHERE id = ? AND user_id = ?",
                    TASK_COLUMNS
                ))
                .bind(id)
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, Task>(&format!(
                    "SELECT {} FROM tasks WHERE id = ?",
                    TASK_COLUMNS
                ))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
            }
        }
    }

    pub async fn insert(
        &self,
        text: &str,
        completed: bool,
        owner: Option<i64>,
    ) -> sqlx::Result<Task> {
        let now = Utc::now();
        sqlx::query_as::<_, Task>(&format!(
            "INSERT INTO tasks (text, completed, user_id, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?)
             RETURNING {}",
            TASK_COLUMNS
        ))
        .bind(text)
        .bind(completed)
        .bind(owner)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
    }

    /// Overwrites text and completion state of an existing row and bumps
    /// `updated_at`.
    pub async fn update(&self, id: i64, text: &str, completed: bool) -> sqlx::Result<Task> {
        sqlx::query_as::<_, Task>(&format!(
            "UPDATE tasks SET text = ?, completed = ?, updated_at = ?
             WHERE id = ?
             RETURNING {}",
            TASK_COLUMNS
        ))
        .bind(text)
        .bind(completed)
        .bind(Utc::now())
        .bind(id)
        .fetch_one(&self.pool)
        .await
    }

    /// Deletes under the owner filter; returns the number of rows removed so
    /// the service can tell "deleted" from "no such task".
    pub async fn delete(&self, id: i64, owner: Option<i64>) -> sqlx::Result<u64> {
        let result = match owner {
            Some(user_id) => {
                sqlx::query("DELETE FROM tasks WHERE id = ? AND user_id = ?")
                    .bind(id)
                    .bind(user_id)
                    .execute(&self.pool)
                    .await?
            }
            None => {
                sqlx::query("DELETE FROM tasks WHERE id = ?")
                    .bind(id)
                    .execute(&self.pool)
                    .await?
            }
        };
        Ok(result.rows_affected())
    }
}
