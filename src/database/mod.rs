// ABOUTME: SQLite connection management and embedded migrations
// ABOUTME: Creates the shared pool used by the activity log manager
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Database
//!
//! `SQLite` persistence for the activity log. A single pool is created at
//! startup and shared through [`crate::resources::ServerResources`].

/// Activity log storage
pub mod activity_log;

pub use activity_log::{clamp_list_limit, ActivityLogManager};

use std::path::Path;

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::errors::{AppError, AppResult};

/// Connect to the `SQLite` database at `database_url`
///
/// File databases are created (with their parent directory) if missing.
/// In-memory databases get a single long-lived connection so every query
/// sees the same data.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the
/// connection fails
pub async fn create_pool(database_url: &str) -> AppResult<SqlitePool> {
    if is_memory_url(database_url) {
        debug!("Opening in-memory SQLite database");
        return SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect(database_url)
            .await
            .map_err(|e| AppError::database(format!("Failed to connect to database: {e}")));
    }

    if let Some(parent) = sqlite_file_path(database_url).and_then(Path::parent) {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                AppError::database(format!(
                    "Failed to create database directory {}: {e}",
                    parent.display()
                ))
            })?;
        }
    }

    // Ensure SQLite creates the database file if it doesn't exist
    let connection_options = if database_url.contains("mode=") {
        database_url.to_owned()
    } else if database_url.contains('?') {
        format!("{database_url}&mode=rwc")
    } else {
        format!("{database_url}?mode=rwc")
    };

    let pool = SqlitePool::connect(&connection_options)
        .await
        .map_err(|e| AppError::database(format!("Failed to connect to database: {e}")))?;

    info!(database_url, "Connected to SQLite database");
    Ok(pool)
}

/// Run all embedded migrations
///
/// # Errors
///
/// Returns an error if any migration fails
pub async fn migrate(pool: &SqlitePool) -> AppResult<()> {
    info!("Running database migrations...");

    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| AppError::database(format!("Migration failed: {e}")))?;

    info!("Database migrations completed successfully");
    Ok(())
}

/// Round-trip a trivial query to confirm the pool is usable
///
/// # Errors
///
/// Returns an error if the query fails
pub async fn ping(pool: &SqlitePool) -> AppResult<()> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .map_err(|e| AppError::database(format!("Database ping failed: {e}")))?;
    Ok(())
}

fn is_memory_url(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

fn sqlite_file_path(database_url: &str) -> Option<&Path> {
    let rest = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or(rest);
    (!path.is_empty()).then(|| Path::new(path))
}
