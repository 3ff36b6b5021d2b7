// ABOUTME: Environment-based configuration loading for the activity log server
// ABOUTME: Parses HTTP, database, logging and API limit settings with validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Server configuration
//!
//! Configuration comes from environment variables only. Every setting has
//! a default; a variable that is set but cannot be parsed is a
//! configuration error rather than being silently replaced.

use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use tracing::info;

use crate::constants::{defaults, env_vars};
use crate::errors::{AppError, AppResult};

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Multi-line human readable output
    #[default]
    Pretty,
    /// Single-line human readable output
    Compact,
    /// Structured JSON, one object per line
    Json,
}

impl LogFormat {
    /// Format name as accepted by `LOG_FORMAT`
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pretty => "pretty",
            Self::Compact => "compact",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            other => Err(AppError::config(format!(
                "Invalid log format '{other}' (expected pretty, compact or json)"
            ))),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset
    pub level: String,
    /// Output format
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::LOG_LEVEL.to_owned(),
            format: LogFormat::default(),
        }
    }
}

/// Database configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// SQLite URL (`sqlite:./path.db` or `sqlite::memory:`)
    pub url: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: defaults::DATABASE_URL.to_owned(),
        }
    }
}

/// Request limits enforced by the HTTP layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiLimits {
    /// Maximum characters per activity text
    pub max_input_chars: usize,
    /// Maximum texts per batch request
    pub max_batch_size: usize,
    /// Request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for ApiLimits {
    fn default() -> Self {
        Self {
            max_input_chars: defaults::MAX_INPUT_CHARS,
            max_batch_size: defaults::MAX_BATCH_SIZE,
            request_timeout_secs: defaults::REQUEST_TIMEOUT_SECS,
        }
    }
}

impl ApiLimits {
    /// Request timeout as a `Duration`
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Complete server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Bind host
    pub http_host: String,
    /// Listen port
    pub http_port: u16,
    /// Database settings
    pub database: DatabaseConfig,
    /// Logging settings
    pub logging: LoggingConfig,
    /// API limits
    pub limits: ApiLimits,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_host: defaults::HTTP_HOST.to_owned(),
            http_port: defaults::HTTP_PORT,
            database: DatabaseConfig::default(),
            logging: LoggingConfig::default(),
            limits: ApiLimits::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if a variable is set to an unparseable or
    /// out-of-range value
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if a variable is set to an unparseable or
    /// out-of-range value
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            http_host: lookup(env_vars::HTTP_HOST)
                .unwrap_or_else(|| defaults::HTTP_HOST.to_owned()),
            http_port: parse_var(&lookup, env_vars::HTTP_PORT, defaults::HTTP_PORT)?,
            database: DatabaseConfig {
                url: lookup(env_vars::DATABASE_URL)
                    .unwrap_or_else(|| defaults::DATABASE_URL.to_owned()),
            },
            logging: LoggingConfig {
                level: lookup(env_vars::LOG_LEVEL)
                    .unwrap_or_else(|| defaults::LOG_LEVEL.to_owned()),
                format: parse_var(&lookup, env_vars::LOG_FORMAT, LogFormat::default())?,
            },
            limits: ApiLimits {
                max_input_chars: parse_var(
                    &lookup,
                    env_vars::MAX_INPUT_CHARS,
                    defaults::MAX_INPUT_CHARS,
                )?,
                max_batch_size: parse_var(
                    &lookup,
                    env_vars::MAX_BATCH_SIZE,
                    defaults::MAX_BATCH_SIZE,
                )?,
                request_timeout_secs: parse_var(
                    &lookup,
                    env_vars::REQUEST_TIMEOUT_SECS,
                    defaults::REQUEST_TIMEOUT_SECS,
                )?,
            },
        };
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges that parsing alone cannot enforce
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` naming the first invalid setting
    pub fn validate(&self) -> AppResult<()> {
        if self.database.url.trim().is_empty() {
            return Err(AppError::config(format!(
                "{} must not be empty",
                env_vars::DATABASE_URL
            )));
        }
        if self.limits.max_input_chars == 0 {
            return Err(AppError::config(format!(
                "{} must be greater than zero",
                env_vars::MAX_INPUT_CHARS
            )));
        }
        if self.limits.max_batch_size == 0 {
            return Err(AppError::config(format!(
                "{} must be greater than zero",
                env_vars::MAX_BATCH_SIZE
            )));
        }
        if self.limits.request_timeout_secs == 0 {
            return Err(AppError::config(format!(
                "{} must be greater than zero",
                env_vars::REQUEST_TIMEOUT_SECS
            )));
        }
        Ok(())
    }

    /// `host:port` to bind the listener to
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }

    /// Log the effective configuration (no secrets are held here)
    pub fn log_summary(&self) {
        info!(
            bind_address = %self.bind_address(),
            database_url = %self.database.url,
            log_level = %self.logging.level,
            log_format = %self.logging.format,
            max_input_chars = self.limits.max_input_chars,
            max_batch_size = self.limits.max_batch_size,
            request_timeout_secs = self.limits.request_timeout_secs,
            "Server configuration loaded"
        );
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> AppResult<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| AppError::config(format!("Invalid value '{raw}' for {key}: {e}"))),
    }
}
