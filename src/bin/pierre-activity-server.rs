// ABOUTME: HTTP server entry point for the Pierre activity log
// ABOUTME: Loads configuration, connects SQLite, serves the axum router until Ctrl-C
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # pierre-activity-server
//!
//! ```bash
//! # Defaults: 127.0.0.1:8081, sqlite:./data/activities.db
//! cargo run --bin pierre-activity-server
//!
//! # JSON logs on another port with an in-memory database
//! HTTP_PORT=9000 LOG_FORMAT=json DATABASE_URL=sqlite::memory: cargo run --bin pierre-activity-server
//! ```

use std::sync::Arc;

use anyhow::Result;
use tokio::net::TcpListener;
use tracing::{info, warn};

use pierre_activity_server::config::environment::ServerConfig;
use pierre_activity_server::constants::service;
use pierre_activity_server::errors::AppError;
use pierre_activity_server::logging;
use pierre_activity_server::resources::ServerResources;
use pierre_activity_server::routes;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::from_env()?;
    logging::init_logging(&config.logging)?;

    info!("=== {} v{} ===", service::NAME, service::VERSION);
    config.log_summary();

    let bind_address = config.bind_address();
    let resources = Arc::new(ServerResources::connect(config).await?);
    let app = routes::router(resources);

    let listener = TcpListener::bind(&bind_address)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {bind_address}: {e}")))?;
    info!("HTTP server listening on http://{}", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Transport error: {e}")))?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received, draining connections"),
        Err(e) => {
            // Without a signal handler the server runs until killed
            warn!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
