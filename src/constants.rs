// ABOUTME: Application constants and default configuration values
// ABOUTME: Service identity, environment variable names and API limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Service identity reported by health checks
pub mod service {
    /// Service name
    pub const NAME: &str = "pierre-activity-log";
    /// Crate version
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
}

/// Environment variable names read by `ServerConfig::from_env`
pub mod env_vars {
    /// HTTP listen port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// HTTP bind host
    pub const HTTP_HOST: &str = "HTTP_HOST";
    /// SQLite database URL
    pub const DATABASE_URL: &str = "DATABASE_URL";
    /// Default log filter when `RUST_LOG` is unset
    pub const LOG_LEVEL: &str = "LOG_LEVEL";
    /// Log output format (`pretty`, `compact`, `json`)
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
    /// Maximum characters per activity text
    pub const MAX_INPUT_CHARS: &str = "PIERRE_MAX_INPUT_CHARS";
    /// Maximum entries per batch classification
    pub const MAX_BATCH_SIZE: &str = "PIERRE_MAX_BATCH_SIZE";
    /// Request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: &str = "PIERRE_REQUEST_TIMEOUT_SECS";
}

/// Defaults applied when an environment variable is unset
pub mod defaults {
    /// Default HTTP port
    pub const HTTP_PORT: u16 = 8081;
    /// Default bind host
    pub const HTTP_HOST: &str = "127.0.0.1";
    /// Default SQLite database
    pub const DATABASE_URL: &str = "sqlite:./data/activities.db";
    /// Default log level
    pub const LOG_LEVEL: &str = "info";
    /// Default per-text character limit
    pub const MAX_INPUT_CHARS: usize = 1000;
    /// Default batch size limit
    pub const MAX_BATCH_SIZE: usize = 100;
    /// Default request timeout
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
    /// Request body limit (1 MiB)
    pub const MAX_BODY_BYTES: usize = 1024 * 1024;
}

/// Activity log listing limits
pub mod pagination {
    /// Records returned when no limit is given
    pub const DEFAULT_LIMIT: u32 = 20;
    /// Upper bound on a single listing
    pub const MAX_LIMIT: u32 = 100;
}
