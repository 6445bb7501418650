//! Route definitions for the `/contacts` resource. Append-only.

use axum::routing::get;
use axum::Router;

use crate::handlers::contacts;
use crate::state::AppState;

/// Routes mounted at `/contacts`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(contacts::list).post(contacts::create))
}
