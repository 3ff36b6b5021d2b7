// ABOUTME: Shared test helpers for the activity log integration tests
// ABOUTME: Provides quiet logging, in-memory resources and response body helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(
    missing_docs,
    dead_code,
    clippy::unwrap_used,
    clippy::missing_panics_doc
)]

use std::env;
use std::sync::{Arc, Once};

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request};
use axum::response::Response;
use pierre_activity_server::config::environment::{ApiLimits, ServerConfig};
use pierre_activity_server::database::{self, ActivityLogManager};
use pierre_activity_server::resources::ServerResources;
use serde_json::Value;

static INIT_LOGGER: Once = Once::new();

/// In-memory database URL used by every test
pub const MEMORY_DATABASE_URL: &str = "sqlite::memory:";

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN, // Default to WARN for quiet tests
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Activity log manager over a fresh, migrated in-memory database
pub async fn create_test_activity_log() -> ActivityLogManager {
    init_test_logging();
    let pool = database::create_pool(MEMORY_DATABASE_URL).await.unwrap();
    let manager = ActivityLogManager::new(pool);
    manager.migrate().await.unwrap();
    manager
}

/// Server resources backed by a fresh in-memory database
pub async fn create_test_resources() -> Arc<ServerResources> {
    create_test_resources_with_limits(ApiLimits::default()).await
}

/// Server resources with custom API limits
pub async fn create_test_resources_with_limits(limits: ApiLimits) -> Arc<ServerResources> {
    init_test_logging();
    let mut config = ServerConfig::default();
    config.database.url = MEMORY_DATABASE_URL.to_owned();
    config.limits = limits;
    Arc::new(ServerResources::connect(config).await.unwrap())
}

/// Build a JSON request
pub fn json_request(method: Method, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Build a request without a body
pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Read a response body as JSON
pub async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
