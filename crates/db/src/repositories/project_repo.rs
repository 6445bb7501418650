//! Repository for the `projects` table.

use onepartners_core::types::DbId;

use crate::models::project::{CreateProject, Project, ProjectOrder, UpdateProject};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, category, location, year, description, system, client, imageUrl, sortOrder, createdAt";

/// Provides CRUD and reorder operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the assigned id. `sortOrder` takes the
    /// column default of 0.
    pub async fn create(pool: &DbPool, input: &CreateProject) -> Result<DbId, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO projects (title, category, location, year, description, system, client, imageUrl)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&input.title)
        .bind(&input.category)
        .bind(&input.location)
        .bind(&input.year)
        .bind(&input.description)
        .bind(&input.system)
        .bind(&input.client)
        .bind(&input.image_url)
        .execute(pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    /// List all projects in display order: `sortOrder` ascending, ties broken
    /// by newest first.
    pub async fn list(pool: &DbPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects ORDER BY sortOrder ASC, createdAt DESC, id DESC"
        );
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// Replace all mutable fields of a project. `sortOrder` is only changed
    /// through [`ProjectRepo::reorder`].
    ///
    /// An unknown id is a no-op, indistinguishable from a successful update.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE projects
             SET title = ?, category = ?, location = ?, year = ?, description = ?,
                 system = ?, client = ?, imageUrl = ?
             WHERE id = ?",
        )
        .bind(&input.title)
        .bind(&input.category)
        .bind(&input.location)
        .bind(&input.year)
        .bind(&input.description)
        .bind(&input.system)
        .bind(&input.client)
        .bind(&input.image_url)
        .bind(id)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Delete a project by id. Idempotent: deleting an absent id succeeds.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Apply a batch of (id, sortOrder) pairs inside a single transaction.
    ///
    /// Returns `false` without committing when a pair names an id that matches
    /// no row, so a partial reorder is never observable: either every pair is
    /// applied or none are.
    pub async fn reorder(pool: &DbPool, orders: &[ProjectOrder]) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        for order in orders {
            let result = sqlx::query("UPDATE projects SET sortOrder = ? WHERE id = ?")
                .bind(order.sort_order)
                .bind(order.id)
                .execute(&mut *tx)
                .await?;
            if result.rows_affected() == 0 {
                // Dropping the transaction rolls back the pairs already applied.
                return Ok(false);
            }
        }

        tx.commit().await?;
        Ok(true)
    }
}
