// ABOUTME: Database operations for the persisted activity log
// ABOUTME: Stores classifications and lists, fetches and deletes log records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{SecondsFormat, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::debug;
use uuid::Uuid;

use crate::constants::pagination;
use crate::errors::{AppError, AppResult};
use crate::models::{ActivityClassification, ActivityLogRecord, ActivityType};

/// Clamp a requested listing size to `1..=MAX_LIMIT`, defaulting when absent
#[must_use]
pub fn clamp_list_limit(requested: Option<u32>) -> u32 {
    requested
        .unwrap_or(pagination::DEFAULT_LIMIT)
        .clamp(1, pagination::MAX_LIMIT)
}

// ============================================================================
// Activity Log Manager
// ============================================================================

/// Activity log database operations manager
#[derive(Clone)]
pub struct ActivityLogManager {
    pool: SqlitePool,
}

impl ActivityLogManager {
    /// Create a new activity log manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Underlying pool
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Apply the embedded schema migrations
    ///
    /// # Errors
    ///
    /// Returns an error if a migration fails
    pub async fn migrate(&self) -> AppResult<()> {
        super::migrate(&self.pool).await
    }

    /// Persist a classification as a new log record
    ///
    /// # Errors
    ///
    /// Returns an error if the extraction cannot be serialized or the insert fails
    pub async fn insert(
        &self,
        classification: &ActivityClassification,
    ) -> AppResult<ActivityLogRecord> {
        let id = Uuid::new_v4().to_string();
        let logged_at = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);
        let extracted = serde_json::to_value(classification.extracted())?;
        let extracted_json = extracted.to_string();

        sqlx::query(
            r"
            INSERT INTO activity_logs (id, raw_text, activity_type, confidence, extracted, logged_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(&id)
        .bind(classification.raw_text())
        .bind(classification.activity_type().as_str())
        .bind(classification.confidence())
        .bind(&extracted_json)
        .bind(&logged_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to insert activity log: {e}")))?;

        debug!(
            id = %id,
            activity_type = %classification.activity_type(),
            "Stored activity log record"
        );

        Ok(ActivityLogRecord {
            id,
            raw_text: classification.raw_text().to_owned(),
            activity_type: classification.activity_type(),
            confidence: classification.confidence(),
            extracted,
            logged_at,
        })
    }

    /// Fetch one record by ID
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the stored row is malformed
    pub async fn get(&self, id: &str) -> AppResult<Option<ActivityLogRecord>> {
        let row = sqlx::query(
            r"
            SELECT id, raw_text, activity_type, confidence, extracted, logged_at
            FROM activity_logs
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get activity log: {e}")))?;

        row.as_ref().map(row_to_record).transpose()
    }

    /// List the most recent records, newest first, optionally of one type
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row is malformed
    pub async fn list_recent(
        &self,
        limit: u32,
        type_filter: Option<ActivityType>,
    ) -> AppResult<Vec<ActivityLogRecord>> {
        let rows = match type_filter {
            Some(activity_type) => {
                sqlx::query(
                    r"
                    SELECT id, raw_text, activity_type, confidence, extracted, logged_at
                    FROM activity_logs
                    WHERE activity_type = $1
                    ORDER BY logged_at DESC, rowid DESC
                    LIMIT $2
                    ",
                )
                .bind(activity_type.as_str())
                .bind(i64::from(limit))
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query(
                    r"
                    SELECT id, raw_text, activity_type, confidence, extracted, logged_at
                    FROM activity_logs
                    ORDER BY logged_at DESC, rowid DESC
                    LIMIT $1
                    ",
                )
                .bind(i64::from(limit))
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(|e| AppError::database(format!("Failed to list activity logs: {e}")))?;

        rows.iter().map(row_to_record).collect()
    }

    /// Delete a record, returning whether it existed
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails
    pub async fn delete(&self, id: &str) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM activity_logs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete activity log: {e}")))?;

        Ok(result.rows_affected() > 0)
    }

    /// Total number of stored records
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails
    pub async fn count(&self) -> AppResult<i64> {
        let row = sqlx::query("SELECT COUNT(*) as count FROM activity_logs")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to count activity logs: {e}")))?;

        Ok(row.get("count"))
    }
}

fn row_to_record(row: &SqliteRow) -> AppResult<ActivityLogRecord> {
    let column_error =
        |e: sqlx::Error| AppError::database(format!("Malformed activity log row: {e}"));

    let activity_type: String = row.try_get("activity_type").map_err(column_error)?;
    let extracted: String = row.try_get("extracted").map_err(column_error)?;

    Ok(ActivityLogRecord {
        id: row.try_get("id").map_err(column_error)?,
        raw_text: row.try_get("raw_text").map_err(column_error)?,
        activity_type: activity_type.parse()?,
        confidence: row.try_get("confidence").map_err(column_error)?,
        extracted: serde_json::from_str(&extracted)?,
        logged_at: row.try_get("logged_at").map_err(column_error)?,
    })
}
