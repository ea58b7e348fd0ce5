use chrono::Utc;
use sqlx::SqlitePool;

use crate::models::Contact;

/// Database operations for contact-form submissions.
#[derive(Clone)]
pub struct ContactRepository {
    pool: SqlitePool,
}

impl ContactRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, name: &str, email: &str, message: &str) -> sqlx::Result<Contact> {
        sqlx::query_as::<_, Contact>(
            "INSERT INTO contacts (name, email, message, created_at)
             VALUES (?, ?, ?, ?)
             RETURNING id, name, email, message, created_at",
        )
        .bind(name)
        .bind(email)
        .bind(message)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
    }
}
