//! # Aquareef
//!
//! API scaffold and mock dashboard for a social media automation platform.
//!
//! ## Features
//!
//! - **Auth**: Demo credential login with HS256 bearer tokens
//! - **Placeholder resources**: Campaigns, content, analytics and media routes
//! - **Uniform errors**: One envelope for validation, auth, rate-limit and upload failures
//! - **Dashboard state**: Mock datasets with search, filters and an in-memory inbox
//!
//! ## Modules
//!
//! - [`api`]: REST API server with Axum
//! - [`auth`]: Demo account and token service
//! - [`dashboard`]: Mock data and view-state
//! - [`config`]: TOML and environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use aquareef::{AppState, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     aquareef::serve(AppState::new(config)).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod dashboard;

// Re-export top-level types for convenience
pub use api::{build_router, serve, ApiError, ApiResult, AppState};

pub use auth::{AuthError, Claims, DemoAccount, TokenService, UserProfile};

pub use config::{
    generate_default_config, AuthConfig, Config, ConfigError, Environment, LoggingConfig,
    RateLimitConfig, ServerConfig, UploadConfig,
};

pub use dashboard::{
    CampaignBoard, ContentLibrary, NotificationCenter, NotificationFilter,
};
