//! Aquareef API Server
//!
//! Run with: cargo run --bin aquareef
//!
//! Configuration is read from `--config`, or else the first of
//! `~/.config/aquareef/config.toml`, `/etc/aquareef/config.toml` and
//! `./config.toml`. `AQUAREEF_*` environment variables override it and
//! `RUST_LOG` overrides the configured log level.

use clap::Parser;
use aquareef::config::{Config, LoggingConfig};
use aquareef::{serve, AppState};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "aquareef")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Aquareef API server")]
struct Args {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };

    init_tracing(&config.logging);

    tracing::info!("Starting Aquareef API server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.server.environment);
    tracing::info!(
        "Rate limit: {} requests per {}s",
        config.rate_limit.max_requests,
        config.rate_limit.window_secs
    );

    for warning in config.startup_warnings() {
        tracing::warn!("{}", warning);
    }

    serve(AppState::new(config)).await?;

    tracing::info!("Aquareef API server stopped");
    Ok(())
}

/// Initialize tracing from the logging config
fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("aquareef={},tower_http=debug", logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    if logging.format.eq_ignore_ascii_case("json") {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
