//! API Error Types
//!
//! Defines error types for the API layer and implements conversion
//! to HTTP responses with appropriate status codes.
//!
//! Every failure is rendered as the same envelope:
//!
//! ```json
//! {"error": {"message": "...", "code": "...", "details": [...], "timestamp": "...", "path": "..."}}
//! ```
//!
//! `IntoResponse` cannot see the request, so the rendered body carries an
//! empty `path`. The error envelope middleware fills it in and, in
//! development mode, puts the real message and error chain under `details`.

use axum::{
    extract::rejection::JsonRejection,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::auth::AuthError;

/// A single field-level validation failure
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// API error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request body failed schema or rule validation
    #[error("{message}")]
    Validation {
        message: String,
        details: Vec<FieldError>,
    },

    /// Login pair does not match
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Protected route without usable credentials
    #[error("{0}")]
    Unauthorized(String),

    /// Bearer token past its expiry
    #[error("Token has expired")]
    TokenExpired,

    /// Bearer token that fails verification
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// Global rate limiter tripped
    #[error("Too many requests, please try again later")]
    RateLimited { retry_after_secs: u64 },

    /// Upload body over the configured limit
    #[error("File upload failed - check file size and format")]
    UploadTooLarge { limit: usize },

    /// Any other client error, status passed through
    #[error("{message}")]
    Client {
        status: StatusCode,
        code: String,
        message: String,
    },

    /// No route matched
    #[error("Route {0} not found")]
    NotFound(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ApiError {
    /// Validation failure from a list of field errors
    pub fn validation(details: Vec<FieldError>) -> Self {
        ApiError::Validation {
            message: "Validation failed".to_string(),
            details,
        }
    }

    /// Client error with a code derived from the status
    pub fn client(status: StatusCode, message: impl Into<String>) -> Self {
        ApiError::Client {
            status,
            code: code_for_status(status),
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::InvalidCredentials
            | ApiError::Unauthorized(_)
            | ApiError::TokenExpired
            | ApiError::InvalidToken(_) => StatusCode::UNAUTHORIZED,
            ApiError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            ApiError::UploadTooLarge { .. } => StatusCode::BAD_REQUEST,
            ApiError::Client { status, .. } => *status,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) | ApiError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &str {
        match self {
            ApiError::Validation { .. } => "VALIDATION_ERROR",
            ApiError::InvalidCredentials => "INVALID_CREDENTIALS",
            ApiError::Unauthorized(_) | ApiError::TokenExpired | ApiError::InvalidToken(_) => {
                "AUTHENTICATION_ERROR"
            }
            ApiError::RateLimited { .. } => "RATE_LIMIT_EXCEEDED",
            ApiError::UploadTooLarge { .. } => "FILE_UPLOAD_ERROR",
            ApiError::Client { code, .. } => code.as_str(),
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::Internal(_) | ApiError::Io(_) => "INTERNAL_SERVER_ERROR",
        }
    }

    fn is_internal(&self) -> bool {
        matches!(self, ApiError::Internal(_) | ApiError::Io(_))
    }

    /// Message safe to show any client
    fn public_message(&self) -> String {
        match self {
            ApiError::Internal(_) | ApiError::Io(_) => "Internal server error".to_string(),
            // The specific reason only goes to the log
            ApiError::Unauthorized(_) | ApiError::TokenExpired | ApiError::InvalidToken(_) => {
                "Invalid or missing authentication token".to_string()
            }
            other => other.to_string(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            ApiError::Validation { details, .. } if !details.is_empty() => {
                serde_json::to_value(details).ok()
            }
            ApiError::RateLimited { retry_after_secs } => {
                Some(serde_json::json!({ "retry_after_secs": retry_after_secs }))
            }
            ApiError::UploadTooLarge { limit } => {
                Some(serde_json::json!({ "max_file_size": limit }))
            }
            _ => None,
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => ApiError::InvalidCredentials,
            AuthError::MissingToken => {
                ApiError::Unauthorized("Authorization token is missing".to_string())
            }
            AuthError::TokenExpired => ApiError::TokenExpired,
            AuthError::InvalidToken(reason) => ApiError::InvalidToken(reason),
            AuthError::Signing(reason) => {
                ApiError::Internal(anyhow::anyhow!("Token signing failed: {}", reason))
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(e) => ApiError::Validation {
                message: "Request body does not match the expected schema".to_string(),
                details: vec![FieldError::new("body", e.body_text())],
            },
            JsonRejection::JsonSyntaxError(e) => ApiError::Validation {
                message: "Request body is not valid JSON".to_string(),
                details: vec![FieldError::new("body", e.body_text())],
            },
            JsonRejection::MissingJsonContentType(e) => ApiError::Client {
                status: e.status(),
                code: "UNSUPPORTED_MEDIA_TYPE".to_string(),
                message: e.body_text(),
            },
            other => ApiError::client(other.status(), other.body_text()),
        }
    }
}

/// Derive an upper snake case code from a status, e.g. `METHOD_NOT_ALLOWED`
pub fn code_for_status(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(|reason| {
            reason
                .chars()
                .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_uppercase() } else { '_' })
                .collect()
        })
        .unwrap_or_else(|| format!("HTTP_{}", status.as_u16()))
}

/// Error response body
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

/// Error details
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub message: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    pub timestamp: String,
    pub path: String,
}

impl ErrorBody {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: code.into(),
            details: None,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            path: String::new(),
        }
    }
}

/// Attached to error responses so the envelope middleware can finish them
#[derive(Debug, Clone)]
pub struct ErrorReport {
    pub body: ErrorBody,
    /// Full message and debug chain of an internal error
    pub internal: Option<InternalDetail>,
}

#[derive(Debug, Clone)]
pub struct InternalDetail {
    pub message: String,
    pub stack: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let request_id = uuid::Uuid::new_v4().to_string();

        if self.is_internal() {
            tracing::error!(
                request_id = %request_id,
                error_code = %self.code(),
                error_message = %self,
                "API error occurred"
            );
        } else {
            tracing::debug!(
                request_id = %request_id,
                error_code = %self.code(),
                error_message = %self,
                "Request rejected"
            );
        }

        let mut body = ErrorBody::new(self.code(), self.public_message());
        body.details = self.details();

        let internal = self.is_internal().then(|| InternalDetail {
            message: self.to_string(),
            stack: match &self {
                ApiError::Internal(e) => format!("{:?}", e),
                other => format!("{:?}", other),
            },
        });

        let mut response = (
            status,
            Json(ErrorEnvelope {
                error: body.clone(),
            }),
        )
            .into_response();

        if let ApiError::RateLimited { retry_after_secs } = self {
            response
                .headers_mut()
                .insert(header::RETRY_AFTER, HeaderValue::from(retry_after_secs));
        }

        response
            .extensions_mut()
            .insert(ErrorReport { body, internal });

        response
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;
