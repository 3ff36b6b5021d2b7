// ABOUTME: Main library entry point for the Pierre activity log server
// ABOUTME: Wires configuration, logging, persistence and HTTP routes around the activity classifier
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Activity Log
//!
//! An HTTP service and CLI that turn free-text fitness entries ("ran 5k in
//! 25 minutes", "drank 64 oz water") into typed activity records and keep
//! them in a SQLite activity log.
//!
//! ## Architecture
//!
//! - **`pierre-intelligence`**: the pure, stateless activity classifier
//! - **`pierre-core`**: shared models and the unified error type
//! - **config**: environment-only configuration
//! - **database**: SQLite activity log persistence
//! - **routes**: axum REST endpoints
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use pierre_activity_server::config::environment::ServerConfig;
//! use pierre_activity_server::errors::AppResult;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Activity log configured on {}", config.bind_address());
//!     Ok(())
//! }
//! ```

/// Configuration management
pub mod config;

/// Application constants and default values
pub mod constants;

/// SQLite activity log persistence
pub mod database;

/// Production logging and structured output
pub mod logging;

/// Shared server resources handed to route handlers
pub mod resources;

/// `HTTP` routes for the activity log API
pub mod routes;

/// Unified error handling (re-exported from `pierre-core`)
pub use pierre_core::errors;

/// Activity data models (re-exported from `pierre-core`)
pub use pierre_core::models;
