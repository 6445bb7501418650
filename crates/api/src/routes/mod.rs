pub mod contacts;
pub mod health;
pub mod posts;
pub mod projects;

use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// POST   /login                 credential check
/// POST   /upload                multipart file upload
///
/// GET    /projects              list (sortOrder ASC, createdAt DESC)
/// POST   /projects              create
/// PUT    /projects/reorder      atomic bulk reorder
/// PUT    /projects/{id}         full-replace update
/// DELETE /projects/{id}         delete
///
/// GET    /posts                 list (createdAt DESC)
/// POST   /posts                 create
/// PUT    /posts/{id}            full-replace update
/// DELETE /posts/{id}            delete
///
/// GET    /contacts              list (createdAt DESC)
/// POST   /contacts              create
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(handlers::auth::login))
        // Uploads carry no size policy, so the default 2 MB body cap must not
        // apply to this route.
        .route(
            "/upload",
            post(handlers::upload::upload).layer(DefaultBodyLimit::disable()),
        )
        .nest("/projects", projects::router())
        .nest("/posts", posts::router())
        .nest("/contacts", contacts::router())
}
