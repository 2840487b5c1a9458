//! Media Routes
//!
//! - GET /api/v1/media - Placeholder
//! - POST /api/v1/media/upload - Raw body, bounded by `uploads.max_file_size`

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::api::dto::{pending_message, StubResponse, UploadResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;

/// GET /api/v1/media
pub async fn list_media() -> Json<StubResponse> {
    Json(StubResponse::pending("Media routes"))
}

/// POST /api/v1/media/upload
///
/// The body limit is applied by the route layer; exceeding it surfaces here
/// as a 413 rejection and is reported as FILE_UPLOAD_ERROR.
pub async fn upload_media(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<Json<UploadResponse>> {
    let bytes = body.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::UploadTooLarge {
                limit: state.config.uploads.max_file_size,
            }
        } else {
            ApiError::client(rejection.status(), rejection.body_text())
        }
    })?;

    tracing::info!(bytes = bytes.len(), "Media upload received (discarded)");

    Ok(Json(UploadResponse {
        message: pending_message("Media upload"),
        received_bytes: bytes.len(),
    }))
}
