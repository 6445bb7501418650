//! Contact entity model and DTO.
//!
//! Contacts are inbound inquiries from site visitors. The collection is
//! append-only from the public side: only create and list exist.

use onepartners_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A contact row from the `contacts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct Contact {
    pub id: DbId,
    pub name: String,
    pub company: Option<String>,
    pub email: String,
    pub message: String,
    pub created_at: Timestamp,
}

/// DTO for creating a contact message.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateContact {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub company: Option<String>,
    #[validate(email(message = "invalid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "message must not be empty"))]
    pub message: String,
}
