//! Content Routes
//!
//! - GET /api/v1/content - Placeholder

use axum::Json;

use crate::api::dto::StubResponse;

/// GET /api/v1/content
pub async fn list_content() -> Json<StubResponse> {
    Json(StubResponse::pending("Content routes"))
}
