//! Post entity model and DTOs.
//!
//! A post is a notice or technical-material entry, optionally carrying a
//! downloadable file attached by URL. The post does not own the file's
//! lifecycle; deleting a post leaves the file on disk.

use onepartners_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A post row from the `posts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct Post {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub category: String,
    pub author: Option<String>,
    pub file_url: Option<String>,
    pub file_name: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a new post. A missing author falls back to the
/// organizational label at insert time.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePost {
    pub title: String,
    pub content: String,
    pub category: String,
    pub author: Option<String>,
    pub file_url: Option<String>,
    pub file_name: Option<String>,
}

/// DTO for updating a post. Full replace; omitted optional fields become NULL.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePost {
    pub title: String,
    pub content: String,
    pub category: String,
    pub author: Option<String>,
    pub file_url: Option<String>,
    pub file_name: Option<String>,
}
