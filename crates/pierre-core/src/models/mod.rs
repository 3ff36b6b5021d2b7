// ABOUTME: Data model module root for activity classification types
// ABOUTME: Re-exports classification DTOs and the persisted activity log record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

mod activity;
mod activity_log;

pub use activity::{
    ActivityClassification, ActivityExtraction, ActivityType, MealType, VolumeUnit, WeightUnit,
};
pub use activity_log::ActivityLogRecord;
