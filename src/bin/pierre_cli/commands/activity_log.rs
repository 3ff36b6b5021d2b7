// ABOUTME: Activity log commands for pierre-cli
// ABOUTME: Stores a classified entry and lists recent entries from the SQLite log
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_activity_server::database::{self, clamp_list_limit, ActivityLogManager};
use pierre_activity_server::errors::AppResult;
use pierre_activity_server::models::{ActivityLogRecord, ActivityType};
use pierre_intelligence::classify;
use tracing::info;

async fn open(database_url: &str) -> AppResult<ActivityLogManager> {
    info!("Connecting to database: {}", database_url);
    let manager = ActivityLogManager::new(database::create_pool(database_url).await?);
    manager.migrate().await?;
    Ok(manager)
}

/// Classify `text`, store it and print the stored record
pub async fn log(database_url: &str, text: &str, pretty: bool) -> AppResult<()> {
    let manager = open(database_url).await?;
    let record = manager.insert(&classify(text)).await?;

    info!(
        "Logged {} entry {} (confidence {:.2})",
        record.activity_type, record.id, record.confidence
    );
    println!("{}", to_json(&record, pretty)?);
    Ok(())
}

/// Print the most recent records, newest first
pub async fn list(
    database_url: &str,
    limit: Option<u32>,
    activity_type: Option<&str>,
    pretty: bool,
) -> AppResult<()> {
    let type_filter = activity_type.map(str::parse::<ActivityType>).transpose()?;
    let manager = open(database_url).await?;

    let records = manager
        .list_recent(clamp_list_limit(limit), type_filter)
        .await?;
    info!("Found {} activity log records", records.len());

    for record in &records {
        println!("{}", to_json(record, pretty)?);
    }
    Ok(())
}

fn to_json(record: &ActivityLogRecord, pretty: bool) -> AppResult<String> {
    Ok(if pretty {
        serde_json::to_string_pretty(record)?
    } else {
        serde_json::to_string(record)?
    })
}
