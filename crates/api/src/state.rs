use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// Handlers hold no other state between requests; the database is the only
/// shared mutable resource.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: onepartners_db::DbPool,
    /// Server configuration (upload dir, admin credentials).
    pub config: Arc<ServerConfig>,
}
