//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and `AQUAREEF_*` environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub rate_limit: RateLimitConfig,

    #[serde(default)]
    pub uploads: UploadConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
    Test,
}

impl Environment {
    /// Development mode exposes error stacks in 500 responses
    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
            Environment::Test => "test",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Some(Environment::Development),
            "production" | "prod" => Some(Environment::Production),
            "test" => Some(Environment::Test),
            _ => None,
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,

    #[serde(default)]
    pub environment: Environment,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3001
}

fn default_cors_origins() -> Vec<String> {
    vec!["http://localhost:3000".to_string()]
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: default_cors_origins(),
            environment: Environment::default(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Token signing and demo account configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,

    #[serde(default = "default_token_ttl")]
    pub token_ttl_secs: u64,

    #[serde(default = "default_demo_email")]
    pub demo_email: String,

    #[serde(default = "default_demo_password")]
    pub demo_password: String,

    #[serde(default = "default_demo_name")]
    pub demo_name: String,
}

fn default_jwt_secret() -> String {
    "aquareef-dev-secret-change-me".to_string()
}

fn default_token_ttl() -> u64 {
    24 * 60 * 60 // 24 hours
}

fn default_demo_email() -> String {
    "demo@aquareef.ai".to_string()
}

fn default_demo_password() -> String {
    "password123".to_string()
}

fn default_demo_name() -> String {
    "Demo User".to_string()
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            token_ttl_secs: default_token_ttl(),
            demo_email: default_demo_email(),
            demo_password: default_demo_password(),
            demo_name: default_demo_name(),
        }
    }
}

/// Global rate limiter configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_max_requests")]
    pub max_requests: u32,

    #[serde(default = "default_window_secs")]
    pub window_secs: u64,
}

fn default_max_requests() -> u32 {
    100
}

fn default_window_secs() -> u64 {
    60
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: default_max_requests(),
            window_secs: default_window_secs(),
        }
    }
}

/// Upload limits
#[derive(Debug, Clone, Deserialize)]
pub struct UploadConfig {
    #[serde(default = "default_max_file_size")]
    pub max_file_size: usize,
}

fn default_max_file_size() -> usize {
    50 * 1024 * 1024 // 50 MiB
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_file_size: default_max_file_size(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("aquareef").join("config.toml")),
            Some(PathBuf::from("/etc/aquareef/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Settings worth a warning at startup
    pub fn startup_warnings(&self) -> Vec<&'static str> {
        let mut warnings = Vec::new();
        if self.server.environment.is_development() {
            warnings.push(
                "Running in development mode; 500 responses include error details. \
                 Set AQUAREEF_ENV=production for deployments",
            );
        } else if self.auth.jwt_secret == AuthConfig::default().jwt_secret {
            warnings.push("Using the default JWT secret outside development; set AQUAREEF_JWT_SECRET");
        }
        warnings
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary key lookup. Numeric values that fail
    /// to parse leave the current setting untouched.
    pub(crate) fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        // Server overrides
        if let Some(host) = lookup("AQUAREEF_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("AQUAREEF_PORT").and_then(|p| p.parse().ok()) {
            self.server.port = port;
        }
        if let Some(env) = lookup("AQUAREEF_ENV").and_then(|e| Environment::parse(&e)) {
            self.server.environment = env;
        }

        // Auth overrides
        if let Some(secret) = lookup("AQUAREEF_JWT_SECRET") {
            self.auth.jwt_secret = secret;
        }
        if let Some(ttl) = lookup("AQUAREEF_TOKEN_TTL_SECS").and_then(|t| t.parse().ok()) {
            self.auth.token_ttl_secs = ttl;
        }

        // Rate limit overrides
        if let Some(max) = lookup("AQUAREEF_RATE_LIMIT_MAX").and_then(|m| m.parse().ok()) {
            self.rate_limit.max_requests = max;
        }
        if let Some(window) =
            lookup("AQUAREEF_RATE_LIMIT_WINDOW_SECS").and_then(|w| w.parse().ok())
        {
            self.rate_limit.window_secs = window;
        }

        // Upload overrides
        if let Some(size) = lookup("AQUAREEF_MAX_UPLOAD_BYTES").and_then(|s| s.parse().ok()) {
            self.uploads.max_file_size = size;
        }

        // Logging overrides
        if let Some(level) = lookup("AQUAREEF_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("AQUAREEF_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Aquareef Configuration
#
# Environment variables override these settings:
# - AQUAREEF_HOST, AQUAREEF_PORT, AQUAREEF_ENV
# - AQUAREEF_JWT_SECRET, AQUAREEF_TOKEN_TTL_SECS
# - AQUAREEF_RATE_LIMIT_MAX, AQUAREEF_RATE_LIMIT_WINDOW_SECS
# - AQUAREEF_MAX_UPLOAD_BYTES
# - AQUAREEF_LOG_LEVEL, AQUAREEF_LOG_FORMAT

[server]
host = "0.0.0.0"
port = 3001

# Allowed CORS origins ("*" allows any origin)
cors_origins = ["http://localhost:3000"]

# development, production or test. Development exposes error stacks.
environment = "development"

[auth]
# Secret used to sign access tokens. Change this in production.
jwt_secret = "aquareef-dev-secret-change-me"

# Token lifetime in seconds (24 hours)
token_ttl_secs = 86400

# Demo account accepted by the login endpoint
demo_email = "demo@aquareef.ai"
demo_password = "password123"
demo_name = "Demo User"

[rate_limit]
# Requests allowed per client per window
max_requests = 100
window_secs = 60

[uploads]
# Maximum media upload size in bytes (50 MiB)
max_file_size = 52428800

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.port, 3001);
        assert_eq!(config.server.environment, Environment::Development);
        assert_eq!(config.rate_limit.max_requests, 100);
        assert_eq!(config.rate_limit.window_secs, 60);
        assert_eq!(config.auth.token_ttl_secs, 86_400);
        assert_eq!(config.uploads.max_file_size, 50 * 1024 * 1024);
    }

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config = Config::parse(&generate_default_config()).unwrap();
        let defaults = Config::default();
        assert_eq!(config.server.port, defaults.server.port);
        assert_eq!(config.auth.demo_email, defaults.auth.demo_email);
        assert_eq!(config.rate_limit.max_requests, defaults.rate_limit.max_requests);
        assert_eq!(config.logging.format, defaults.logging.format);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nport = 9000\nenvironment = \"production\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.environment, Environment::Production);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.auth.demo_password, "password123");
    }

    #[test]
    fn test_startup_warnings() {
        let config = Config::default();
        let warnings = config.startup_warnings();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("development mode"));

        let mut config = Config::default();
        config.server.environment = Environment::Production;
        let warnings = config.startup_warnings();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("JWT secret"));

        config.auth.jwt_secret = "a-real-secret".into();
        assert!(config.startup_warnings().is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Path::new("/nonexistent/aquareef.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_load_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server\nport = ").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("AQUAREEF_PORT", "8080"),
            ("AQUAREEF_ENV", "prod"),
            ("AQUAREEF_RATE_LIMIT_MAX", "not-a-number"),
            ("AQUAREEF_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Production);
        assert_eq!(config.rate_limit.max_requests, 100);
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_environment_parse() {
        assert_eq!(Environment::parse("Development"), Some(Environment::Development));
        assert_eq!(Environment::parse("test"), Some(Environment::Test));
        assert_eq!(Environment::parse("staging"), None);
        assert!(!Environment::Production.is_development());
    }
}
