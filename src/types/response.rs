//! Response helpers shared by handlers.

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Identifier of a created or updated employee
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IdResponse {
    #[schema(example = 7)]
    pub id: i32,
}

impl IdResponse {
    pub fn new(id: i32) -> Self {
        Self { id }
    }
}

/// Created response helper: `201` with the body serialized as-is
pub struct Created<T: Serialize>(pub T);

impl<T: Serialize> IntoResponse for Created<T> {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::CREATED, Json(self.0)).into_response()
    }
}
