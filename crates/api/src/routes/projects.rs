//! Route definitions for the `/projects` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::projects;
use crate::state::AppState;

/// Routes mounted at `/projects`. The static `/reorder` segment takes
/// precedence over the `/{id}` capture.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(projects::list).post(projects::create))
        .route("/reorder", put(projects::reorder))
        .route("/{id}", put(projects::update).delete(projects::delete))
}
