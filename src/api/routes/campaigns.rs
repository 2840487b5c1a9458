//! Campaign Routes
//!
//! - GET /api/v1/campaigns - Placeholder listing
//! - POST /api/v1/campaigns - Placeholder, any body accepted

use axum::Json;

use crate::api::dto::{pending_message, CampaignListResponse, MessageResponse};

/// GET /api/v1/campaigns
pub async fn list_campaigns() -> Json<CampaignListResponse> {
    Json(CampaignListResponse {
        campaigns: Vec::new(),
        message: pending_message("Campaigns endpoint"),
    })
}

/// POST /api/v1/campaigns
pub async fn create_campaign() -> Json<MessageResponse> {
    tracing::debug!("Campaign create requested");
    Json(MessageResponse::ok(pending_message("Campaign creation")))
}
