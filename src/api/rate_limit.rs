//! Rate Limiting
//!
//! Global fixed-window limiter applied to every route, keyed by client
//! address. A window opens on a client's first request and resets on the
//! first request after it closes.

use axum::{
    extract::{ConnectInfo, Request, State},
    http::HeaderValue,
    middleware::Next,
    response::{IntoResponse, Response},
};
use dashmap::DashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::api::error::ApiError;
use crate::api::state::AppState;

/// Outcome of a limiter check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allowed { limit: u32, remaining: u32 },
    Limited { retry_after_secs: u64 },
}

#[derive(Debug, Clone, Copy)]
struct Window {
    started: Instant,
    count: u32,
}

/// Per-client request counters
#[derive(Debug)]
pub struct RateLimiter {
    max_requests: u32,
    window: Duration,
    buckets: DashMap<String, Window>,
}

impl RateLimiter {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            buckets: DashMap::new(),
        }
    }

    /// Count a request from `key`
    pub fn check(&self, key: &str) -> Decision {
        self.check_at(key, Instant::now())
    }

    fn check_at(&self, key: &str, now: Instant) -> Decision {
        let mut bucket = self.buckets.entry(key.to_string()).or_insert(Window {
            started: now,
            count: 0,
        });

        if now.duration_since(bucket.started) >= self.window {
            bucket.started = now;
            bucket.count = 0;
        }

        if bucket.count >= self.max_requests {
            let remaining = self.window.saturating_sub(now.duration_since(bucket.started));
            let retry_after_secs = remaining.as_millis().div_ceil(1000).max(1) as u64;
            return Decision::Limited { retry_after_secs };
        }

        bucket.count += 1;
        Decision::Allowed {
            limit: self.max_requests,
            remaining: self.max_requests - bucket.count,
        }
    }

    /// Drop counters whose window has closed
    pub fn prune(&self) {
        let now = Instant::now();
        self.buckets
            .retain(|_, w| now.duration_since(w.started) < self.window);
    }

    pub fn tracked_clients(&self) -> usize {
        self.buckets.len()
    }
}

/// Client identity: first `X-Forwarded-For` hop, else peer address
fn client_key(req: &Request) -> String {
    if let Some(forwarded) = req
        .headers()
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
    {
        return forwarded.to_string();
    }

    req.extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

/// Middleware enforcing the global limit
pub async fn enforce(State(state): State<Arc<AppState>>, req: Request, next: Next) -> Response {
    let key = client_key(&req);

    match state.rate_limiter.check(&key) {
        Decision::Limited { retry_after_secs } => {
            tracing::warn!(client = %key, retry_after_secs, "Rate limit exceeded");
            ApiError::RateLimited { retry_after_secs }.into_response()
        }
        Decision::Allowed { limit, remaining } => {
            let mut response = next.run(req).await;
            let headers = response.headers_mut();
            headers.insert("x-ratelimit-limit", HeaderValue::from(limit));
            headers.insert("x-ratelimit-remaining", HeaderValue::from(remaining));
            response
        }
    }
}
