//! Error Envelope Middleware
//!
//! Finishes every error response with the request path and wraps bare
//! framework errors (e.g. 405) in the standard envelope. In development mode
//! a 5xx keeps its generic message and carries the underlying error under
//! `details`.

use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, HeaderValue, StatusCode, Uri},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::api::error::{code_for_status, ApiError, ErrorBody, ErrorEnvelope, ErrorReport};
use crate::api::state::AppState;

/// Fallback for unmatched routes
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}

fn is_json(response: &Response) -> bool {
    response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.starts_with("application/json"))
        .unwrap_or(false)
}

/// Middleware rendering the final error envelope
pub async fn error_envelope(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Response {
    let path = req.uri().path().to_string();
    let mut response = next.run(req).await;
    let status = response.status();

    let body = match response.extensions_mut().remove::<ErrorReport>() {
        Some(report) => {
            let mut body = report.body;
            if state.environment().is_development() {
                if let Some(internal) = report.internal {
                    body.details = Some(serde_json::json!({
                        "message": internal.message,
                        "stack": internal.stack,
                        "code": body.code,
                    }));
                }
            }
            body
        }
        None if (status.is_client_error() || status.is_server_error()) && !is_json(&response) => {
            let message = status
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_string();
            ErrorBody::new(code_for_status(status), message)
        }
        None => return response,
    };

    render(response, status, body, path)
}

fn render(mut response: Response, status: StatusCode, mut body: ErrorBody, path: String) -> Response {
    tracing::debug!(status = %status, code = %body.code, path = %path, "Error response");
    body.path = path;

    let bytes = match serde_json::to_vec(&ErrorEnvelope { error: body }) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize error envelope");
            return (status, "Internal server error").into_response();
        }
    };

    let headers = response.headers_mut();
    headers.remove(header::CONTENT_LENGTH);
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    *response.body_mut() = Body::from(bytes);
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Environment};
    use axum::{middleware::from_fn_with_state, routing::get, Router};
    use tower::util::ServiceExt;

    async fn failing() -> Result<(), ApiError> {
        Err(ApiError::Internal(anyhow::anyhow!("database exploded")))
    }

    async fn call_failing(environment: Environment) -> serde_json::Value {
        let mut config = Config::default();
        config.server.environment = environment;
        let state = Arc::new(AppState::new(config));

        let app = Router::new()
            .route("/fail", get(failing))
            .layer(from_fn_with_state(Arc::clone(&state), error_envelope))
            .with_state(state);

        let request = axum::http::Request::builder()
            .uri("/fail")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_internal_error_detail_in_development() {
        let body = call_failing(Environment::Development).await;
        assert_eq!(body["error"]["code"], "INTERNAL_SERVER_ERROR");
        assert_eq!(body["error"]["path"], "/fail");
        assert_eq!(body["error"]["message"], "Internal server error");

        let details = &body["error"]["details"];
        assert!(details["message"]
            .as_str()
            .unwrap()
            .contains("database exploded"));
        assert!(details["stack"].is_string());
        assert_eq!(details["code"], "INTERNAL_SERVER_ERROR");
        assert!(body["error"].get("stack").is_none());
    }

    #[tokio::test]
    async fn test_internal_error_hidden_in_production() {
        let body = call_failing(Environment::Production).await;
        assert_eq!(body["error"]["message"], "Internal server error");
        assert_eq!(body["error"]["path"], "/fail");
        assert!(body["error"].get("stack").is_none());
    }
}
