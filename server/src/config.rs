//! Configuration management for the Todo API server.
//!
//! Loads configuration from environment variables with sensible defaults.
//! A `.env` file in the working directory is honoured by the binary.

use std::env;
use std::time::Duration;
use thiserror::Error;
use todo_api_web::CorsConfig;
use todo_api_web::cors::InvalidOrigin;

/// Default tracing filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str =
    "info,todo_api=debug,todo_api_web=debug,todo_api_runtime=debug,tower_http=debug";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Application server configuration
    pub server: ServerConfig,
    /// Cross-origin policy for `/api/*`
    pub cors: CorsConfig,
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,
    /// Port to bind to
    pub port: u16,
    /// `tracing` filter directives (e.g. `info,tower_http=debug`)
    pub log_filter: String,
    /// Graceful shutdown timeout in seconds
    pub shutdown_timeout: u64,
}

impl ServerConfig {
    /// `host:port` to bind. IPv6 literals are bracketed (`[::1]:5000`).
    #[must_use]
    pub fn address(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }

    /// How long in-flight requests may run after a shutdown signal.
    #[must_use]
    pub const fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            shutdown_timeout: 10,
        }
    }
}

/// Configuration that could not be used
#[derive(Error, Debug)]
pub enum ConfigError {
    /// `CORS_ALLOWED_ORIGINS` holds an entry that is not a valid origin
    #[error("CORS_ALLOWED_ORIGINS: {0}")]
    Cors(#[from] InvalidOrigin),
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `HOST` | `127.0.0.1` |
    /// | `PORT` | `5000` |
    /// | `RUST_LOG` | [`DEFAULT_LOG_FILTER`] |
    /// | `SHUTDOWN_TIMEOUT` | `10` |
    /// | `CORS_ALLOWED_ORIGINS` | `*` |
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the CORS origins are invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Unparseable numbers fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the CORS origins are invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ServerConfig::default();

        let server = ServerConfig {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.port),
            log_filter: lookup("RUST_LOG").unwrap_or(defaults.log_filter),
            shutdown_timeout: lookup("SHUTDOWN_TIMEOUT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.shutdown_timeout),
        };

        let cors = match lookup("CORS_ALLOWED_ORIGINS") {
            Some(origins) => CorsConfig::from_origins(&origins)?,
            None => CorsConfig::permissive(),
        };

        Ok(Self { server, cors })
    }
}
