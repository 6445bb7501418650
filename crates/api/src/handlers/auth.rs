//! Handler for the admin login check.
//!
//! This is a placeholder, not a security boundary: on a credential match the
//! configured opaque token is returned, it never expires, and no other
//! endpoint validates it. A real deployment needs proper sessions and
//! per-endpoint authorization.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Request body for `POST /api/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub id: String,
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginSuccess {
    pub success: bool,
    pub token: String,
}

/// Failed login response (401).
#[derive(Debug, Serialize)]
pub struct LoginFailure {
    pub success: bool,
    pub message: String,
}

/// POST /api/login
///
/// Compares the supplied pair against the configured credentials. No lockout,
/// rate limiting, or attempt tracking.
pub async fn login(State(state): State<AppState>, Json(input): Json<LoginRequest>) -> Response {
    let admin = &state.config.admin;
    if admin.verify(&input.id, &input.password) {
        Json(LoginSuccess {
            success: true,
            token: admin.token.clone(),
        })
        .into_response()
    } else {
        tracing::warn!(id = %input.id, "Failed admin login attempt");
        (
            StatusCode::UNAUTHORIZED,
            Json(LoginFailure {
                success: false,
                message: "아이디 또는 비밀번호가 일치하지 않습니다.".to_string(),
            }),
        )
            .into_response()
    }
}
