// ABOUTME: Route module organization for the activity log HTTP endpoints
// ABOUTME: Merges domain routers and applies tracing, request-id, CORS, timeout and body-limit layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the activity log server
//!
//! Each domain module exposes a `*Routes` struct whose `routes` function
//! returns a state-applied `Router`; this module merges them and wraps the
//! result in the shared middleware stack.

/// Activity classification and activity log routes
pub mod activities;

/// Health check route
pub mod health;

pub use activities::ActivityRoutes;
pub use health::HealthRoutes;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{HeaderMap, Method, Request};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tower_http::LatencyUnit;
use tracing::Level;

use crate::constants::defaults::MAX_BODY_BYTES;
use crate::errors::AppError;
use crate::resources::ServerResources;

/// Header carrying the per-request correlation ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Build the complete application router
pub fn router(resources: Arc<ServerResources>) -> Router {
    let timeout = resources.config.limits.request_timeout();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers(Any);

    // Layers apply bottom-up: the request ID is assigned before tracing sees the request
    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(&resources)))
        .merge(ActivityRoutes::routes(resources))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(TimeoutLayer::new(timeout))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = request
                        .headers()
                        .get(REQUEST_ID_HEADER)
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or("-");
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = %request_id,
                    )
                })
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Millis),
                ),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

/// Request ID assigned by the request-id layer, if any
#[must_use]
pub fn request_id(headers: &HeaderMap) -> Option<&str> {
    headers.get(REQUEST_ID_HEADER).and_then(|v| v.to_str().ok())
}

/// Error mapper that stamps the current request ID onto an `AppError`
pub fn attach_request_id(headers: &HeaderMap) -> impl Fn(AppError) -> AppError + '_ {
    move |error| match request_id(headers) {
        Some(id) => error.with_request_id(id),
        None => error,
    }
}
