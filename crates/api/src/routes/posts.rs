//! Route definitions for the `/posts` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::posts;
use crate::state::AppState;

/// Routes mounted at `/posts`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(posts::list).post(posts::create))
        .route("/{id}", put(posts::update).delete(posts::delete))
}
