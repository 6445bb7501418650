//! Repository for the `posts` table.

use onepartners_core::types::DbId;

use crate::models::post::{CreatePost, Post, UpdatePost};
use crate::DbPool;

const COLUMNS: &str = "id, title, content, category, author, fileUrl, fileName, createdAt";

/// Default author label applied when a post is created without one.
const DEFAULT_AUTHOR: &str = "관리자";

/// Provides CRUD operations for posts.
pub struct PostRepo;

impl PostRepo {
    /// Insert a new post, returning the assigned id.
    pub async fn create(pool: &DbPool, input: &CreatePost) -> Result<DbId, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO posts (title, content, category, author, fileUrl, fileName)
             VALUES (?, ?, ?, COALESCE(?, ?), ?, ?)",
        )
        .bind(&input.title)
        .bind(&input.content)
        .bind(&input.category)
        .bind(&input.author)
        .bind(DEFAULT_AUTHOR)
        .bind(&input.file_url)
        .bind(&input.file_name)
        .execute(pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    /// List all posts, newest first.
    pub async fn list(pool: &DbPool) -> Result<Vec<Post>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM posts ORDER BY createdAt DESC, id DESC");
        sqlx::query_as::<_, Post>(&query).fetch_all(pool).await
    }

    /// Replace all mutable fields of a post. Unknown id is a no-op.
    pub async fn update(pool: &DbPool, id: DbId, input: &UpdatePost) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE posts
             SET title = ?, content = ?, category = ?, author = ?, fileUrl = ?, fileName = ?
             WHERE id = ?",
        )
        .bind(&input.title)
        .bind(&input.content)
        .bind(&input.category)
        .bind(&input.author)
        .bind(&input.file_url)
        .bind(&input.file_name)
        .bind(id)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Delete a post by id. Idempotent. The attached file, if any, stays on
    /// disk: posts reference uploads by URL only.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM posts WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}
