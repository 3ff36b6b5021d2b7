// ABOUTME: Persisted activity log record DTO
// ABOUTME: Stored form of a classification as returned by the activity log API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ActivityType;

/// A classified activity entry as stored in the activity log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityLogRecord {
    /// Unique record ID (UUID string)
    pub id: String,
    /// Original user input
    pub raw_text: String,
    /// Assigned category
    pub activity_type: ActivityType,
    /// Confidence of the rule that produced the category
    pub confidence: f64,
    /// Extracted fields as stored (JSON object)
    pub extracted: Value,
    /// When the entry was logged (RFC 3339)
    pub logged_at: String,
}
