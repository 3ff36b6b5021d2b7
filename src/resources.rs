// ABOUTME: Shared resources handed to every route handler
// ABOUTME: Holds configuration, the activity log manager and the classifier handle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use pierre_intelligence::ActivityClassifier;
use sqlx::SqlitePool;

use crate::config::environment::ServerConfig;
use crate::database::{self, ActivityLogManager};
use crate::errors::AppResult;

/// Server-wide state shared through `Arc<ServerResources>`
///
/// Built once at startup; handlers only read from it.
#[derive(Clone)]
pub struct ServerResources {
    /// Effective configuration
    pub config: Arc<ServerConfig>,
    /// Persisted activity log
    pub activity_log: ActivityLogManager,
    /// Stateless classifier handle
    pub classifier: ActivityClassifier,
}

impl ServerResources {
    /// Assemble resources around an existing pool
    #[must_use]
    pub fn new(config: ServerConfig, pool: SqlitePool) -> Self {
        Self {
            config: Arc::new(config),
            activity_log: ActivityLogManager::new(pool),
            classifier: ActivityClassifier::new(),
        }
    }

    /// Connect to the configured database, run migrations and assemble resources
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or a migration fails
    pub async fn connect(config: ServerConfig) -> AppResult<Self> {
        let pool = database::create_pool(&config.database.url).await?;
        let resources = Self::new(config, pool);
        resources.activity_log.migrate().await?;
        Ok(resources)
    }
}
