//! Request Extractors
//!
//! - `ValidatedJson<T>`: JSON body that also passes `Validate`
//! - `AuthUser`: claims from a verified `Authorization: Bearer` token

use async_trait::async_trait;
use axum::{
    extract::{FromRequest, FromRequestParts, Request},
    http::{header::AUTHORIZATION, request::Parts},
    Json,
};
use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::api::error::ApiError;
use crate::api::state::AppState;
use crate::api::validation::Validate;
use crate::auth::{AuthError, Claims};

/// JSON body deserialized and checked against its validation rules
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;

        let errors = value.validate();
        if !errors.is_empty() {
            return Err(ApiError::validation(errors));
        }

        Ok(ValidatedJson(value))
    }
}

/// Authenticated caller
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

/// Pull the token out of an `Authorization` header value
fn bearer_token(value: &str) -> Option<&str> {
    let (scheme, token) = value.trim().split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

#[async_trait]
impl FromRequestParts<Arc<AppState>> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(bearer_token)
            .ok_or(AuthError::MissingToken)?;

        let claims = state.tokens.verify(token).map_err(|e| {
            tracing::warn!(error = %e, "Rejected bearer token");
            e
        })?;

        Ok(AuthUser(claims))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_token_parsing() {
        assert_eq!(bearer_token("Bearer abc.def.ghi"), Some("abc.def.ghi"));
        assert_eq!(bearer_token("bearer   abc"), Some("abc"));
        assert_eq!(bearer_token("Basic dXNlcjpwYXNz"), None);
        assert_eq!(bearer_token("Bearer "), None);
        assert_eq!(bearer_token("Bearer"), None);
    }
}
