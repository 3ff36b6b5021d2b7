// ABOUTME: Classify command for pierre-cli
// ABOUTME: Classifies arguments or stdin lines and prints JSON or one-line summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::io::{self, BufRead};

use pierre_activity_server::errors::{AppError, AppResult};
use pierre_activity_server::models::ActivityClassification;
use pierre_intelligence::ActivityClassifier;
use tracing::debug;

/// How classifications are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// One compact JSON object per line
    Json,
    /// Indented JSON
    Pretty,
    /// `type  confidence  text  fields`
    Summary,
}

/// Classify each text and print the results in input order
pub fn run(texts: Vec<String>, from_stdin: bool, mode: OutputMode) -> AppResult<()> {
    let texts = if from_stdin {
        read_stdin_lines()?
    } else {
        texts
    };

    if texts.is_empty() {
        return Err(AppError::invalid_input(
            "No text given: pass TEXT arguments or use --stdin",
        ));
    }

    debug!(count = texts.len(), "Classifying entries");
    for classification in ActivityClassifier::new().classify_batch(&texts) {
        println!("{}", render(&classification, mode)?);
    }

    Ok(())
}

/// Format one classification for the chosen output mode
pub fn render(classification: &ActivityClassification, mode: OutputMode) -> AppResult<String> {
    Ok(match mode {
        OutputMode::Json => serde_json::to_string(classification)?,
        OutputMode::Pretty => serde_json::to_string_pretty(classification)?,
        OutputMode::Summary => {
            let fields = if classification.extracted().is_empty() {
                String::new()
            } else {
                serde_json::to_string(classification.extracted())?
            };
            format!(
                "{:<9} {:.2}  {}  {fields}",
                classification.activity_type().as_str(),
                classification.confidence(),
                classification.raw_text().trim(),
            )
            .trim_end()
            .to_owned()
        }
    })
}

fn read_stdin_lines() -> AppResult<Vec<String>> {
    io::stdin()
        .lock()
        .lines()
        .filter(|line| !matches!(line, Ok(l) if l.trim().is_empty()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| AppError::internal(format!("Failed to read stdin: {e}")))
}
