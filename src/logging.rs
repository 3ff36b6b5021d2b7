// ABOUTME: Tracing subscriber setup for the server and CLI binaries
// ABOUTME: Honors RUST_LOG first, then the configured level, in pretty, compact or JSON format
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::environment::{LogFormat, LoggingConfig};
use crate::errors::{AppError, AppResult};

/// Build the filter: `RUST_LOG` wins, otherwise the configured level
///
/// # Errors
///
/// Returns a `ConfigError` when the configured level is not a valid directive
pub fn build_filter(config: &LoggingConfig) -> AppResult<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| AppError::config(format!("Invalid log level '{}': {e}", config.level)))
}

/// Install the global tracing subscriber
///
/// # Errors
///
/// Returns an error if the level is invalid or a global subscriber is
/// already installed
pub fn init_logging(config: &LoggingConfig) -> AppResult<()> {
    let registry = tracing_subscriber::registry().with(build_filter(config)?);

    let installed = match config.format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(true).with_target(true))
            .try_init(),
        LogFormat::Compact => registry
            .with(fmt::layer().compact().with_target(false))
            .try_init(),
        LogFormat::Pretty => registry.with(fmt::layer().pretty()).try_init(),
    };

    installed.map_err(|e| AppError::internal(format!("Failed to install tracing subscriber: {e}")))
}
