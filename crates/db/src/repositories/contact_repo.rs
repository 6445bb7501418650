//! Repository for the `contacts` table. Append-only: no update or delete.

use onepartners_core::types::DbId;

use crate::models::contact::{Contact, CreateContact};
use crate::DbPool;

const COLUMNS: &str = "id, name, company, email, message, createdAt";

/// Provides create and list operations for contact messages.
pub struct ContactRepo;

impl ContactRepo {
    /// Insert a new contact message, returning the assigned id.
    pub async fn create(pool: &DbPool, input: &CreateContact) -> Result<DbId, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO contacts (name, company, email, message) VALUES (?, ?, ?, ?)",
        )
        .bind(&input.name)
        .bind(&input.company)
        .bind(&input.email)
        .bind(&input.message)
        .execute(pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    /// List all contact messages, newest first.
    pub async fn list(pool: &DbPool) -> Result<Vec<Contact>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contacts ORDER BY createdAt DESC, id DESC");
        sqlx::query_as::<_, Contact>(&query).fetch_all(pool).await
    }
}
