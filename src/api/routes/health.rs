//! Health Routes
//!
//! - GET /health - Liveness and build info
//! - GET / - Service description

use axum::{extract::State, Json};
use chrono::{SecondsFormat, Utc};
use std::sync::Arc;

use crate::api::dto::{HealthResponse, ServiceInfoResponse};
use crate::api::state::AppState;

/// GET /health
///
/// Returns "healthy" whenever the process is serving requests.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: state.environment().to_string(),
    })
}

/// GET /
pub async fn service_info(State(state): State<Arc<AppState>>) -> Json<ServiceInfoResponse> {
    let endpoints = [
        "GET /health",
        "POST /api/v1/auth/login",
        "POST /api/v1/auth/register",
        "POST /api/v1/auth/forgot-password",
        "POST /api/v1/auth/reset-password",
        "GET /api/v1/auth/profile",
        "GET /api/v1/campaigns",
        "POST /api/v1/campaigns",
        "GET /api/v1/content",
        "GET /api/v1/analytics",
        "GET /api/v1/media",
        "POST /api/v1/media/upload",
    ];

    Json(ServiceInfoResponse {
        message: "🌊 Welcome to Aquareef API".to_string(),
        name: "Aquareef API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        documentation: "/docs".to_string(),
        health: "/health".to_string(),
        description: "Social media automation platform API".to_string(),
        environment: state.environment().to_string(),
        endpoints: endpoints.iter().map(|e| e.to_string()).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_reports_ok() {
        let state = Arc::new(AppState::default());
        let Json(body) = health(State(state)).await;
        assert_eq!(body.status, "healthy");
        assert_eq!(body.environment, "development");
    }

    #[tokio::test]
    async fn test_service_info_links() {
        let state = Arc::new(AppState::default());
        let Json(body) = service_info(State(state)).await;
        assert_eq!(body.message, "🌊 Welcome to Aquareef API");
        assert_eq!(body.documentation, "/docs");
        assert_eq!(body.health, "/health");
    }
}
