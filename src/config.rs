//! Configuration management for the contacts manager.
//!
//! This module handles loading and validating configuration from environment
//! variables, with an optional `.env` file.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::time::Duration;

/// Largest TTL whose length in seconds still fits in a `u64`.
pub const MAX_SESSION_TTL_MINUTES: u64 = u64::MAX / 60;

/// Configuration for the contacts manager.
#[derive(Debug, Clone)]
pub struct Config {
    /// Interface to listen on (default: "127.0.0.1")
    pub host: String,

    /// Port to listen on (default: 3000)
    pub port: u16,

    /// Idle time in minutes before a session and its contacts are discarded
    /// (default: 44640, i.e. 31 days)
    pub session_ttl_minutes: u64,

    /// Directory served under `/public` (default: "public")
    pub public_dir: String,

    /// Log filter used when `RUST_LOG` is not set (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACTS_HOST`: Interface to bind (default: 127.0.0.1)
    /// - `CONTACTS_PORT`: Port to bind (default: 3000)
    /// - `SESSION_TTL_MINUTES`: Session idle TTL in minutes (default: 44640)
    /// - `PUBLIC_DIR`: Static asset directory (default: public)
    /// - `LOG_LEVEL`: Logging filter (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let defaults = Config::default();

        let host = Self::parse_env_non_empty("CONTACTS_HOST", defaults.host)?;
        let port = Self::parse_env_u16("CONTACTS_PORT", defaults.port)?;
        let session_ttl_minutes =
            Self::parse_env_u64("SESSION_TTL_MINUTES", defaults.session_ttl_minutes)?;
        let public_dir = Self::parse_env_non_empty("PUBLIC_DIR", defaults.public_dir)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        if session_ttl_minutes == 0 {
            return Err(ConfigError::InvalidValue {
                var: "SESSION_TTL_MINUTES".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }
        if session_ttl_minutes > MAX_SESSION_TTL_MINUTES {
            return Err(ConfigError::InvalidValue {
                var: "SESSION_TTL_MINUTES".to_string(),
                reason: format!(
                    "Must be at most {}, got: {}",
                    MAX_SESSION_TTL_MINUTES, session_ttl_minutes
                ),
            });
        }

        Ok(Config {
            host,
            port,
            session_ttl_minutes,
            public_dir,
            log_level,
        })
    }

    /// Address to bind, as `host:port`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Session idle TTL as a `Duration`, saturating for out-of-range values.
    pub fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.session_ttl_minutes.saturating_mul(60))
    }

    /// Read a string environment variable that must not be blank.
    fn parse_env_non_empty(var_name: &str, default: String) -> ConfigResult<String> {
        match env::var(var_name) {
            Ok(val) if val.trim().is_empty() => Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "Cannot be empty".to_string(),
            }),
            Ok(val) => Ok(val),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as u16 with a default value.
    fn parse_env_u16(var_name: &str, default: u16) -> ConfigResult<u16> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a port number between 0-65535, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: "127.0.0.1".to_string(),
            port: 3000,
            session_ttl_minutes: 31 * 24 * 60,
            public_dir: "public".to_string(),
            log_level: "info".to_string(),
        }
    }
}
