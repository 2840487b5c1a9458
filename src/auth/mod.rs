//! Authentication
//!
//! The demo credential check and access token service backing the
//! `/api/v1/auth` routes.
//!
//! There is exactly one account: the configured demo pair. Tokens are
//! HS256 JWTs signed with the configured secret.

pub mod account;
pub mod token;

pub use account::{DemoAccount, UserProfile};
pub use token::{Claims, IssuedToken, TokenService};

use thiserror::Error;

/// Errors raised by the credential check and token service
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Email/password pair does not match the demo account
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// No bearer token on a protected request
    #[error("Authorization token is missing")]
    MissingToken,

    /// Token failed signature or format checks
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// Token signature is fine but `exp` has passed
    #[error("Token has expired")]
    TokenExpired,

    /// Token could not be produced
    #[error("Failed to sign token: {0}")]
    Signing(String),
}

/// Result type alias for auth operations
pub type AuthResult<T> = Result<T, AuthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "Invalid email or password"
        );
        assert_eq!(
            AuthError::InvalidToken("bad signature".into()).to_string(),
            "Invalid token: bad signature"
        );
    }
}
