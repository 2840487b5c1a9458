//! Auth Routes
//!
//! - POST /api/v1/auth/login - Exchange the demo credentials for a token
//! - POST /api/v1/auth/register - Echo a new (unsaved) user
//! - POST /api/v1/auth/forgot-password - Acknowledge a reset request
//! - POST /api/v1/auth/reset-password - Acknowledge a new password
//! - GET /api/v1/auth/profile - Demo profile for a valid bearer token

use axum::{extract::State, http::StatusCode, Json};
use chrono::{SecondsFormat, Utc};
use std::sync::Arc;

use crate::api::dto::{
    ForgotPasswordRequest, LoginRequest, LoginResponse, MessageResponse, ProfileResponse,
    RegisterRequest, RegisterResponse, RegisteredUser, ResetPasswordRequest,
};
use crate::api::error::ApiResult;
use crate::api::extract::{AuthUser, ValidatedJson};
use crate::api::state::AppState;

/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let user = state
        .account
        .verify(&req.email, &req.password)
        .map_err(|e| {
            tracing::warn!(email = %req.email, "Login failed");
            e
        })?;

    let issued = state.tokens.issue(&user)?;

    tracing::info!(user_id = %user.id, "User logged in");

    Ok(Json(LoginResponse {
        success: true,
        token: issued.token,
        expires_in: issued.expires_in,
        user,
    }))
}

/// POST /api/v1/auth/register
///
/// Nothing is persisted; the user is echoed back with a fresh id.
pub async fn register(
    ValidatedJson(req): ValidatedJson<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<RegisterResponse>)> {
    let user = RegisteredUser {
        id: format!("user_{}", uuid::Uuid::new_v4().simple()),
        email: req.email,
        name: req.name.trim().to_string(),
        company: req.company.filter(|c| !c.trim().is_empty()),
        created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
    };

    tracing::info!(user_id = %user.id, "Registered user (not persisted)");

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            success: true,
            message: "User registered successfully".to_string(),
            user,
        }),
    ))
}

/// POST /api/v1/auth/forgot-password
///
/// Same answer whether or not the address is known.
pub async fn forgot_password(
    ValidatedJson(req): ValidatedJson<ForgotPasswordRequest>,
) -> ApiResult<Json<MessageResponse>> {
    tracing::info!(email = %req.email, "Password reset requested");

    Ok(Json(MessageResponse::ok("Password reset email sent")))
}

/// POST /api/v1/auth/reset-password
pub async fn reset_password(
    ValidatedJson(_req): ValidatedJson<ResetPasswordRequest>,
) -> ApiResult<Json<MessageResponse>> {
    Ok(Json(MessageResponse::ok("Password reset successfully")))
}

/// GET /api/v1/auth/profile
///
/// Any valid token gets the demo profile; the claims are only logged.
pub async fn profile(
    State(state): State<Arc<AppState>>,
    AuthUser(claims): AuthUser,
) -> ApiResult<Json<ProfileResponse>> {
    tracing::debug!(subject = %claims.sub, "Profile requested");

    Ok(Json(ProfileResponse {
        success: true,
        user: state
            .account
            .profile()
            .with_timestamps(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
    }))
}
