//! Demo account
//!
//! A literal credential pair from configuration and the fixed profile
//! returned for it. Comparison is exact: no trimming, no case folding.

use serde::Serialize;

use super::{AuthError, AuthResult};
use crate::config::AuthConfig;

/// Fixed id of the demo user
pub const DEMO_USER_ID: &str = "1";

/// Role carried in every token issued for the demo account
pub const DEMO_ROLE: &str = "user";

/// Public view of a user
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl UserProfile {
    /// Stamp both record times; there is no store, so they are always `at`
    pub fn with_timestamps(mut self, at: impl Into<String>) -> Self {
        let at = at.into();
        self.created_at = Some(at.clone());
        self.updated_at = Some(at);
        self
    }
}

/// The single account accepted by login
#[derive(Debug, Clone)]
pub struct DemoAccount {
    email: String,
    password: String,
    name: String,
}

impl DemoAccount {
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            name: name.into(),
        }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(&config.demo_email, &config.demo_password, &config.demo_name)
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Check a submitted pair against the demo credentials
    pub fn verify(&self, email: &str, password: &str) -> AuthResult<UserProfile> {
        if email == self.email && password == self.password {
            Ok(self.profile())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }

    /// The hard-coded demo profile
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: DEMO_USER_ID.to_string(),
            email: self.email.clone(),
            name: self.name.clone(),
            company: Some("Aquareef Demo".to_string()),
            created_at: None,
            updated_at: None,
        }
    }
}

impl Default for DemoAccount {
    fn default() -> Self {
        Self::from_config(&AuthConfig::default())
    }
}
