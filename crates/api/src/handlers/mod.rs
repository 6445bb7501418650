pub mod auth;
pub mod contacts;
pub mod posts;
pub mod projects;
pub mod upload;

use onepartners_core::types::DbId;
use serde::Serialize;

/// Response body for create endpoints: the newly assigned identifier.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: DbId,
}

/// Acknowledgement body for update and delete endpoints.
///
/// Deliberately says nothing about whether the target id matched a row:
/// a no-op mutate on a missing id is indistinguishable from success.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}
