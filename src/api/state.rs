//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::api::rate_limit::RateLimiter;
use crate::auth::{DemoAccount, TokenService};
use crate::config::{Config, Environment};

/// Shared application state for all handlers
pub struct AppState {
    /// Loaded configuration
    pub config: Arc<Config>,
    /// The one account accepted by login
    pub account: DemoAccount,
    /// Access token signer/verifier
    pub tokens: TokenService,
    /// Global per-client request limiter
    pub rate_limiter: RateLimiter,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let rate_limiter = RateLimiter::new(
            config.rate_limit.max_requests,
            Duration::from_secs(config.rate_limit.window_secs),
        );

        Self {
            account: DemoAccount::from_config(&config.auth),
            tokens: TokenService::from_config(&config.auth),
            rate_limiter,
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    pub fn environment(&self) -> Environment {
        self.config.server.environment
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
