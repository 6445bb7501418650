//! Handlers for the `/api/posts` resource.

use axum::extract::{Path, State};
use axum::Json;

use onepartners_core::types::DbId;
use onepartners_db::models::post::{CreatePost, Post, UpdatePost};
use onepartners_db::repositories::PostRepo;

use crate::error::AppResult;
use crate::handlers::{CreatedResponse, SuccessResponse};
use crate::state::AppState;

/// GET /api/posts
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Post>>> {
    let posts = PostRepo::list(&state.pool).await?;
    Ok(Json(posts))
}

/// POST /api/posts
///
/// File attachment happens by submitting a `fileUrl`/`fileName` previously
/// returned by the upload endpoint; this handler does not touch the disk.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreatePost>,
) -> AppResult<Json<CreatedResponse>> {
    let id = PostRepo::create(&state.pool, &input).await?;
    Ok(Json(CreatedResponse { id }))
}

/// PUT /api/posts/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePost>,
) -> AppResult<Json<SuccessResponse>> {
    PostRepo::update(&state.pool, id, &input).await?;
    Ok(Json(SuccessResponse::ok()))
}

/// DELETE /api/posts/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<SuccessResponse>> {
    PostRepo::delete(&state.pool, id).await?;
    Ok(Json(SuccessResponse::ok()))
}
