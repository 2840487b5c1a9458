//! Analytics Routes
//!
//! - GET /api/v1/analytics - Placeholder

use axum::Json;

use crate::api::dto::StubResponse;

/// GET /api/v1/analytics
pub async fn get_analytics() -> Json<StubResponse> {
    Json(StubResponse::pending("Analytics routes"))
}
