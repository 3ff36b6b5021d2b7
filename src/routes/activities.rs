// ABOUTME: Activity route handlers for classifying and logging free-text entries
// ABOUTME: Exposes classify, batch classify and CRUD endpoints over the activity log
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Activity routes
//!
//! Classification is synchronous and side-effect free; only
//! `POST /api/activities` persists a record. Input size limits come from
//! [`crate::config::environment::ApiLimits`].

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::attach_request_id;
use crate::config::environment::ApiLimits;
use crate::database::clamp_list_limit;
use crate::errors::AppError;
use crate::models::{ActivityClassification, ActivityLogRecord, ActivityType};
use crate::resources::ServerResources;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request to classify (or log) a single entry
#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    /// Free-text activity entry
    pub text: Option<String>,
}

/// Request to classify several entries
#[derive(Debug, Deserialize)]
pub struct BatchClassifyRequest {
    /// Free-text activity entries
    pub texts: Option<Vec<String>>,
}

/// Batch classification response
#[derive(Debug, Serialize)]
pub struct BatchClassifyResponse {
    /// One classification per input, in input order
    pub results: Vec<ActivityClassification>,
    /// Number of results
    pub total_count: usize,
}

/// Query parameters for listing the activity log
#[derive(Debug, Deserialize, Default)]
pub struct ListActivitiesQuery {
    /// Maximum records to return (clamped to `1..=100`)
    pub limit: Option<u32>,
    /// Only return records of this type
    #[serde(rename = "type")]
    pub activity_type: Option<String>,
}

/// Activity log listing response
#[derive(Debug, Serialize, Deserialize)]
pub struct ActivityListResponse {
    /// Records, newest first
    pub activities: Vec<ActivityLogRecord>,
    /// Number of records returned
    pub count: usize,
    /// Total records stored
    pub total: i64,
}

// ============================================================================
// Activity Routes
// ============================================================================

/// Activity routes
pub struct ActivityRoutes;

impl ActivityRoutes {
    /// Create all activity routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/activities/classify", post(Self::classify))
            .route("/api/activities/classify/batch", post(Self::classify_batch))
            .route(
                "/api/activities",
                post(Self::log_activity).get(Self::list_activities),
            )
            .route(
                "/api/activities/:id",
                get(Self::get_activity).delete(Self::delete_activity),
            )
            .with_state(resources)
    }

    // ========================================================================
    // Validation
    // ========================================================================

    fn require_text(request: ClassifyRequest, limits: &ApiLimits) -> Result<String, AppError> {
        let text = request.text.ok_or_else(|| AppError::missing_field("text"))?;
        Self::check_length(&text, limits)?;
        Ok(text)
    }

    fn check_length(text: &str, limits: &ApiLimits) -> Result<(), AppError> {
        let chars = text.chars().count();
        if chars > limits.max_input_chars {
            return Err(AppError::invalid_input(format!(
                "text is {chars} characters, maximum is {}",
                limits.max_input_chars
            )));
        }
        Ok(())
    }

    fn parse_type_filter(raw: Option<&str>) -> Result<Option<ActivityType>, AppError> {
        raw.filter(|value| !value.trim().is_empty())
            .map(str::parse::<ActivityType>)
            .transpose()
    }

    // ========================================================================
    // Handlers
    // ========================================================================

    /// Classify one entry without persisting it
    async fn classify(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        payload: Result<Json<ClassifyRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let to_error = attach_request_id(&headers);
        let Json(request) = payload.map_err(|r| to_error(AppError::invalid_input(r.body_text())))?;
        let text = Self::require_text(request, &resources.config.limits).map_err(&to_error)?;

        let classification = resources.classifier.classify(&text);

        Ok((StatusCode::OK, Json(classification)).into_response())
    }

    /// Classify several entries independently, preserving order
    async fn classify_batch(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        payload: Result<Json<BatchClassifyRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let to_error = attach_request_id(&headers);
        let Json(request) = payload.map_err(|r| to_error(AppError::invalid_input(r.body_text())))?;
        let texts = request
            .texts
            .ok_or_else(|| to_error(AppError::missing_field("texts")))?;

        let limits = &resources.config.limits;
        if texts.len() > limits.max_batch_size {
            return Err(to_error(AppError::invalid_input(format!(
                "batch has {} entries, maximum is {}",
                texts.len(),
                limits.max_batch_size
            ))));
        }
        for text in &texts {
            Self::check_length(text, limits).map_err(&to_error)?;
        }

        let results = resources.classifier.classify_batch(&texts);
        let response = BatchClassifyResponse {
            total_count: results.len(),
            results,
        };

        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Classify an entry and store it in the activity log
    async fn log_activity(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        payload: Result<Json<ClassifyRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let to_error = attach_request_id(&headers);
        let Json(request) = payload.map_err(|r| to_error(AppError::invalid_input(r.body_text())))?;
        let text = Self::require_text(request, &resources.config.limits).map_err(&to_error)?;

        let classification = resources.classifier.classify(&text);
        let record = resources
            .activity_log
            .insert(&classification)
            .await
            .map_err(&to_error)?;

        info!(
            id = %record.id,
            activity_type = %record.activity_type,
            confidence = record.confidence,
            "Activity logged"
        );

        Ok((StatusCode::CREATED, Json(record)).into_response())
    }

    /// List the most recent activity log records
    async fn list_activities(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        query: Result<Query<ListActivitiesQuery>, QueryRejection>,
    ) -> Result<Response, AppError> {
        let to_error = attach_request_id(&headers);
        let Query(query) = query.map_err(|r| to_error(AppError::invalid_input(r.body_text())))?;
        let type_filter =
            Self::parse_type_filter(query.activity_type.as_deref()).map_err(&to_error)?;
        let limit = clamp_list_limit(query.limit);

        let activities = resources
            .activity_log
            .list_recent(limit, type_filter)
            .await
            .map_err(&to_error)?;
        let total = resources.activity_log.count().await.map_err(&to_error)?;

        let response = ActivityListResponse {
            count: activities.len(),
            activities,
            total,
        };

        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Fetch one activity log record
    async fn get_activity(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let to_error = attach_request_id(&headers);
        let record = resources
            .activity_log
            .get(&id)
            .await
            .map_err(&to_error)?
            .ok_or_else(|| to_error(AppError::not_found(format!("Activity {id}"))))?;

        Ok((StatusCode::OK, Json(record)).into_response())
    }

    /// Delete one activity log record
    async fn delete_activity(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let to_error = attach_request_id(&headers);
        let deleted = resources
            .activity_log
            .delete(&id)
            .await
            .map_err(&to_error)?;

        if !deleted {
            return Err(to_error(AppError::not_found(format!("Activity {id}"))));
        }

        Ok((StatusCode::NO_CONTENT, ()).into_response())
    }
}
