// ABOUTME: Integration tests for the SQLite activity log manager
// ABOUTME: Covers insert, get, list ordering and filtering, delete, count and file-backed pools
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(missing_docs, clippy::unwrap_used, clippy::float_cmp)]

mod common;

use pierre_activity_server::database::{self, clamp_list_limit, ActivityLogManager};
use pierre_activity_server::models::ActivityType;
use pierre_intelligence::classify;
use serde_json::json;

#[tokio::test]
async fn test_insert_and_get_round_trip() {
    let log = common::create_test_activity_log().await;

    let record = log.insert(&classify("ran 5k in 25 minutes")).await.unwrap();
    assert_eq!(record.activity_type, ActivityType::Exercise);
    assert_eq!(record.confidence, 0.85);
    assert_eq!(
        record.extracted,
        json!({ "distanceValue": 5.0, "distanceUnit": "k", "durationMinutes": 25.0 })
    );
    assert!(uuid::Uuid::parse_str(&record.id).is_ok());
    assert!(chrono::DateTime::parse_from_rfc3339(&record.logged_at).is_ok());

    let fetched = log.get(&record.id).await.unwrap().unwrap();
    assert_eq!(fetched, record);
}

#[tokio::test]
async fn test_raw_text_is_stored_untouched() {
    let log = common::create_test_activity_log().await;

    let record = log.insert(&classify("  Slept 8 Hours ")).await.unwrap();
    let fetched = log.get(&record.id).await.unwrap().unwrap();
    assert_eq!(fetched.raw_text, "  Slept 8 Hours ");
    assert_eq!(fetched.activity_type, ActivityType::Sleep);
}

#[tokio::test]
async fn test_unknown_entries_store_empty_extraction() {
    let log = common::create_test_activity_log().await;

    let record = log.insert(&classify("asdkjashdkjh")).await.unwrap();
    let fetched = log.get(&record.id).await.unwrap().unwrap();
    assert_eq!(fetched.activity_type, ActivityType::Unknown);
    assert_eq!(fetched.confidence, 0.1);
    assert_eq!(fetched.extracted, json!({}));
}

#[tokio::test]
async fn test_get_missing_returns_none() {
    let log = common::create_test_activity_log().await;
    assert!(log.get("does-not-exist").await.unwrap().is_none());
}

#[tokio::test]
async fn test_list_recent_is_newest_first() {
    let log = common::create_test_activity_log().await;

    let first = log.insert(&classify("weight 175")).await.unwrap();
    let second = log.insert(&classify("drank 64 oz water")).await.unwrap();
    let third = log.insert(&classify("slept 8 hours")).await.unwrap();

    let records = log.list_recent(10, None).await.unwrap();
    let ids: Vec<_> = records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec![third.id.as_str(), second.id.as_str(), first.id.as_str()]);

    let limited = log.list_recent(2, None).await.unwrap();
    assert_eq!(limited.len(), 2);
    assert_eq!(limited[0].id, third.id);
}

#[tokio::test]
async fn test_list_recent_filters_by_type() {
    let log = common::create_test_activity_log().await;

    log.insert(&classify("slept 7 hours")).await.unwrap();
    log.insert(&classify("weight 180")).await.unwrap();
    log.insert(&classify("bad sleep")).await.unwrap();

    let sleep = log.list_recent(10, Some(ActivityType::Sleep)).await.unwrap();
    assert_eq!(sleep.len(), 2);
    assert!(sleep.iter().all(|r| r.activity_type == ActivityType::Sleep));

    let mood = log.list_recent(10, Some(ActivityType::Mood)).await.unwrap();
    assert!(mood.is_empty());
}

#[tokio::test]
async fn test_delete_and_count() {
    let log = common::create_test_activity_log().await;

    let record = log.insert(&classify("had eggs for breakfast")).await.unwrap();
    log.insert(&classify("feeling happy")).await.unwrap();
    assert_eq!(log.count().await.unwrap(), 2);

    assert!(log.delete(&record.id).await.unwrap());
    assert!(!log.delete(&record.id).await.unwrap());
    assert!(log.get(&record.id).await.unwrap().is_none());
    assert_eq!(log.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_migrate_is_idempotent() {
    let log = common::create_test_activity_log().await;
    log.insert(&classify("energy 8/10")).await.unwrap();

    log.migrate().await.unwrap();
    assert_eq!(log.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_file_database_created_with_parent_directory() {
    common::init_test_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("activities.db");
    let url = format!("sqlite:{}", path.display());

    let pool = database::create_pool(&url).await.unwrap();
    let log = ActivityLogManager::new(pool);
    log.migrate().await.unwrap();
    let record = log.insert(&classify("walked 3 miles")).await.unwrap();
    assert!(path.exists());

    // A second pool over the same file sees the stored record
    let reopened = ActivityLogManager::new(database::create_pool(&url).await.unwrap());
    let fetched = reopened.get(&record.id).await.unwrap().unwrap();
    assert_eq!(fetched.activity_type, ActivityType::Exercise);
}

#[tokio::test]
async fn test_ping_succeeds_on_open_pool() {
    let log = common::create_test_activity_log().await;
    database::ping(log.pool()).await.unwrap();
}

#[test]
fn test_list_limit_clamping() {
    assert_eq!(clamp_list_limit(None), 20);
    assert_eq!(clamp_list_limit(Some(0)), 1);
    assert_eq!(clamp_list_limit(Some(7)), 7);
    assert_eq!(clamp_list_limit(Some(5000)), 100);
}
