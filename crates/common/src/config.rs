//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config. A `.env` file is honoured
//! when present.

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

/// Default lifetime of an access token issued at login
const DEFAULT_ACCESS_TOKEN_DURATION: &str = "15m";

const DEFAULT_PORT: u16 = 8080;

const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Clone)]
pub struct Config {
    /// PostgreSQL connection URL
    pub database_url: String,

    /// Maximum number of pooled database connections
    pub database_max_connections: u32,

    /// Symmetric key used to sign and verify access tokens
    pub secret_key: String,

    /// Lifetime of access tokens issued at login
    pub access_token_duration: Duration,

    /// Runtime configuration
    pub port: u16,
    pub rust_log: String,
    pub log_json: bool,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"<redacted>")
            .field("database_max_connections", &self.database_max_connections)
            .field("secret_key", &"<redacted>")
            .field("access_token_duration", &self.access_token_duration)
            .field("port", &self.port)
            .field("rust_log", &self.rust_log)
            .field("log_json", &self.log_json)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| anyhow::anyhow!("{} is required", key))
        };

        let access_token_duration = lookup("ACCESS_TOKEN_DURATION")
            .unwrap_or_else(|| DEFAULT_ACCESS_TOKEN_DURATION.to_string());
        let access_token_duration = humantime::parse_duration(&access_token_duration)
            .with_context(|| {
                format!(
                    "ACCESS_TOKEN_DURATION is not a valid duration: {}",
                    access_token_duration
                )
            })?;

        let port = match lookup("PORT") {
            Some(port) => port
                .parse()
                .with_context(|| format!("PORT is not a valid port number: {}", port))?,
            None => DEFAULT_PORT,
        };

        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(max) => max
                .parse()
                .with_context(|| format!("DATABASE_MAX_CONNECTIONS is not a number: {}", max))?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let config = Self {
            database_url: required("DATABASE_URL")?,
            database_max_connections,
            secret_key: required("SECRET_KEY")?,
            access_token_duration,
            port,
            rust_log: lookup("RUST_LOG")
                .unwrap_or_else(|| "lifttrack=debug,tower_http=info".to_string()),
            log_json: lookup("LOG_FORMAT").is_some_and(|format| format.eq_ignore_ascii_case("json")),
        };

        Ok(config)
    }
}
