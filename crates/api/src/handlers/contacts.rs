//! Handlers for the `/api/contacts` resource. Create and list only; inbound
//! inquiries are never updated or deleted through the API.

use axum::extract::State;
use axum::Json;
use validator::Validate;

use onepartners_core::error::CoreError;
use onepartners_db::models::contact::{Contact, CreateContact};
use onepartners_db::repositories::ContactRepo;

use crate::error::AppResult;
use crate::handlers::CreatedResponse;
use crate::state::AppState;

/// GET /api/contacts
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Contact>>> {
    let contacts = ContactRepo::list(&state.pool).await?;
    Ok(Json(contacts))
}

/// POST /api/contacts
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateContact>,
) -> AppResult<Json<CreatedResponse>> {
    input
        .validate()
        .map_err(|e| CoreError::Validation(e.to_string()))?;
    let id = ContactRepo::create(&state.pool, &input).await?;
    Ok(Json(CreatedResponse { id }))
}
