//! Project entity model and DTOs.
//!
//! A project is one portfolio entry describing a completed engagement.
//! Wire and column names are camelCase (`imageUrl`, `sortOrder`, `createdAt`)
//! to match the persisted schema and the frontend consumers.

use onepartners_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub category: String,
    pub location: Option<String>,
    pub year: Option<String>,
    pub description: Option<String>,
    pub system: Option<String>,
    pub client: Option<String>,
    pub image_url: Option<String>,
    /// Manual display order, ascending. Ties broken by newest first.
    pub sort_order: i64,
    pub created_at: Timestamp,
}

/// DTO for creating a new project. `sortOrder` starts at the column default.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    pub title: String,
    pub category: String,
    pub location: Option<String>,
    pub year: Option<String>,
    pub description: Option<String>,
    pub system: Option<String>,
    pub client: Option<String>,
    pub image_url: Option<String>,
}

/// DTO for updating a project. This is a full replace: optional fields the
/// caller omits are written as NULL, so callers submit the complete form
/// state every time.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    pub title: String,
    pub category: String,
    pub location: Option<String>,
    pub year: Option<String>,
    pub description: Option<String>,
    pub system: Option<String>,
    pub client: Option<String>,
    pub image_url: Option<String>,
}

/// One (id, sortOrder) pair in a bulk reorder request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectOrder {
    pub id: DbId,
    pub sort_order: i64,
}
