// ABOUTME: Health check route for load balancers and operators
// ABOUTME: Reports service identity and whether the activity log database answers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::constants::service;
use crate::database;
use crate::resources::ServerResources;

/// Health check response body
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `ok` or `degraded`
    pub status: String,
    /// Service name
    pub service: String,
    /// Service version
    pub version: String,
    /// `ok` or `unavailable`
    pub database: String,
}

/// Health routes
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create the health route
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/health", get(Self::handle_health))
            .with_state(resources)
    }

    async fn handle_health(State(resources): State<Arc<ServerResources>>) -> Response {
        let database_ok = match database::ping(resources.activity_log.pool()).await {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "Health check database ping failed");
                false
            }
        };

        let (status, label, database) = if database_ok {
            (StatusCode::OK, "ok", "ok")
        } else {
            (StatusCode::SERVICE_UNAVAILABLE, "degraded", "unavailable")
        };

        let body = HealthResponse {
            status: label.to_owned(),
            service: service::NAME.to_owned(),
            version: service::VERSION.to_owned(),
            database: database.to_owned(),
        };

        (status, Json(body)).into_response()
    }
}
