//! Handlers for the `/api/projects` resource.

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;

use onepartners_core::error::CoreError;
use onepartners_core::types::DbId;
use onepartners_db::models::project::{CreateProject, Project, ProjectOrder, UpdateProject};
use onepartners_db::repositories::ProjectRepo;

use crate::error::AppResult;
use crate::handlers::{CreatedResponse, SuccessResponse};
use crate::state::AppState;

/// Request body for `PUT /api/projects/reorder`.
#[derive(Debug, Deserialize)]
pub struct ReorderRequest {
    pub orders: Vec<ProjectOrder>,
}

/// GET /api/projects
///
/// All projects in display order: `sortOrder` ascending, ties newest first.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(projects))
}

/// POST /api/projects
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<Json<CreatedResponse>> {
    let id = ProjectRepo::create(&state.pool, &input).await?;
    Ok(Json(CreatedResponse { id }))
}

/// PUT /api/projects/{id}
///
/// Full replace of all mutable fields. A missing id is a silent no-op.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<SuccessResponse>> {
    ProjectRepo::update(&state.pool, id, &input).await?;
    Ok(Json(SuccessResponse::ok()))
}

/// DELETE /api/projects/{id}
///
/// Idempotent: deleting twice succeeds both times.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<SuccessResponse>> {
    ProjectRepo::delete(&state.pool, id).await?;
    Ok(Json(SuccessResponse::ok()))
}

/// PUT /api/projects/reorder
///
/// Applies the whole batch of (id, sortOrder) pairs or none of it. A pair
/// naming an unknown id fails the request and rolls everything back, so a
/// concurrent list sees either the fully-old or fully-new ordering.
pub async fn reorder(
    State(state): State<AppState>,
    Json(input): Json<ReorderRequest>,
) -> AppResult<Json<SuccessResponse>> {
    let applied = ProjectRepo::reorder(&state.pool, &input.orders).await?;
    if !applied {
        return Err(CoreError::Validation(
            "reorder batch references an unknown project id".to_string(),
        )
        .into());
    }
    Ok(Json(SuccessResponse::ok()))
}
