//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};

use crate::auth::UserProfile;
use crate::dashboard::Campaign;

// ============================================
// AUTH DTOs
// ============================================

/// Login request
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    /// Signed bearer token
    pub token: String,
    /// Token lifetime in seconds
    pub expires_in: u64,
    pub user: UserProfile,
}

/// Registration request
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    #[serde(default)]
    pub company: Option<String>,
}

/// User echoed back by registration; never stored
#[derive(Debug, Serialize)]
pub struct RegisteredUser {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub created_at: String,
}

/// Registration response
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub success: bool,
    pub message: String,
    pub user: RegisteredUser,
}

/// Forgot password request
#[derive(Debug, Clone, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

/// Reset password request
#[derive(Debug, Clone, Deserialize)]
pub struct ResetPasswordRequest {
    pub token: String,
    pub password: String,
}

/// Generic success envelope
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Profile response
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub success: bool,
    pub user: UserProfile,
}

// ============================================
// STUB DTOs
// ============================================

/// Placeholder body returned by unimplemented resources
#[derive(Debug, Serialize)]
pub struct StubResponse {
    pub message: String,
}

impl StubResponse {
    pub fn pending(what: &str) -> Self {
        Self {
            message: pending_message(what),
        }
    }
}

pub fn pending_message(what: &str) -> String {
    format!("{} - TODO: Implement in Phase 1", what)
}

/// Campaign listing placeholder; always empty
#[derive(Debug, Serialize)]
pub struct CampaignListResponse {
    pub campaigns: Vec<Campaign>,
    pub message: String,
}

/// Media upload placeholder
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub received_bytes: usize,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always "healthy" while the process serves requests
    pub status: String,
    pub timestamp: String,
    pub uptime_seconds: u64,
    pub version: String,
    pub environment: String,
}

/// Root service description
#[derive(Debug, Serialize)]
pub struct ServiceInfoResponse {
    pub message: String,
    pub name: String,
    pub version: String,
    /// Where API docs would be mounted
    pub documentation: String,
    pub health: String,
    pub description: String,
    pub environment: String,
    pub endpoints: Vec<String>,
}
