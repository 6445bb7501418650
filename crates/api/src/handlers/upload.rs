//! Handler for `POST /api/upload`.
//!
//! Accepts exactly one file under the `file` multipart field, writes it to the
//! public upload directory under a collision-resistant generated name, and
//! returns the public URL plus the original filename. No content-type or size
//! policy is enforced here, and nothing ever deletes or overwrites an upload.

use axum::extract::{Multipart, State};
use axum::Json;
use rand::Rng;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Response body: where the file is now served from, and what it was called.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub url: String,
    pub name: String,
}

/// POST /api/upload
///
/// Associating the returned URL with a post is a separate, explicit client
/// action; this handler touches no database row.
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<UploadResponse>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let original = field.file_name().unwrap_or("file").to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        let generated = generate_filename(&original);
        let path = state.config.upload_dir.join(&generated);
        tokio::fs::write(&path, &data)
            .await
            .map_err(|e| AppError::InternalError(format!("Failed to write upload: {e}")))?;

        tracing::info!(name = %generated, bytes = data.len(), "Stored upload");
        return Ok(Json(UploadResponse {
            url: format!("/uploads/{generated}"),
            name: original,
        }));
    }

    Err(AppError::BadRequest("No file uploaded".to_string()))
}

/// Build a stored filename from a current-time component, a random component
/// and the original name, so concurrent uploads never need coordination to
/// avoid collisions. Any path portion of the client-supplied name is dropped.
fn generate_filename(original: &str) -> String {
    let basename = original
        .rsplit(['/', '\\'])
        .next()
        .filter(|s| !s.is_empty())
        .unwrap_or("file");
    let stamp = chrono::Utc::now().timestamp_millis();
    let random: u32 = rand::rng().random_range(0..1_000_000_000);
    format!("{stamp}-{random}-{basename}")
}
