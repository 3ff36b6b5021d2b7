// ABOUTME: Natural-language activity classifier for the activity logger
// ABOUTME: Evaluates a fixed priority list of pattern rules, first match wins
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Activity Text Classifier
//!
//! Classifies a free-text entry into one of the [`ActivityType`] categories
//! and extracts the structured fields of that category.
//!
//! ## Rule order
//!
//! Rules are checked in a fixed order and the first match wins:
//!
//! 1. Weight (0.95 with a `weight` label, 0.85 for a bare number)
//! 2. Water (0.9)
//! 3. Exercise (0.85)
//! 4. Food (0.85)
//! 5. Sleep (0.9)
//! 6. Energy (0.9)
//! 7. Mood (0.8)
//!
//! Anything else is `Unknown` at 0.1. Scores are never combined across
//! categories: "protein shake after run" is Exercise because the Exercise
//! rule is checked before Food.

mod rules;

use pierre_core::models::{ActivityClassification, ActivityType};
use tracing::debug;

use rules::RULES;

/// Confidence assigned by each rule
pub mod confidence {
    use pierre_core::models::ActivityClassification;

    /// Weight entry with an explicit `weight` label
    pub const WEIGHT_LABELED: f64 = 0.95;
    /// Weight entry recognized from a number and unit, or a bare number
    pub const WEIGHT_BARE: f64 = 0.85;
    /// Water intake
    pub const WATER: f64 = 0.9;
    /// Exercise
    pub const EXERCISE: f64 = 0.85;
    /// Food
    pub const FOOD: f64 = 0.85;
    /// Sleep
    pub const SLEEP: f64 = 0.9;
    /// Energy
    pub const ENERGY: f64 = 0.9;
    /// Mood
    pub const MOOD: f64 = 0.8;
    /// No rule matched
    pub const UNKNOWN: f64 = ActivityClassification::UNKNOWN_CONFIDENCE;
}

/// Classify a free-text activity entry
///
/// Never fails: empty, whitespace-only or unrecognized input yields an
/// `Unknown` classification at confidence 0.1. The returned record keeps
/// `text` exactly as given; matching runs on a trimmed, lower-cased copy
/// with internal whitespace collapsed.
#[must_use]
pub fn classify(text: &str) -> ActivityClassification {
    let normalized = normalize(text);
    if normalized.is_empty() {
        debug!(input_len = text.len(), "Empty activity text, classified as unknown");
        return ActivityClassification::unknown(text);
    }

    for rule in &RULES {
        if let Some(matched) = (rule.matcher)(&normalized) {
            debug_assert_eq!(matched.extraction.activity_type(), rule.activity_type);
            debug!(
                activity_type = %rule.activity_type,
                confidence = matched.confidence,
                input_len = text.len(),
                "Classified activity text"
            );
            return ActivityClassification::new(text, matched.confidence, matched.extraction);
        }
    }

    debug!(
        activity_type = %ActivityType::Unknown,
        input_len = text.len(),
        "No activity rule matched"
    );
    ActivityClassification::unknown(text)
}

/// Trim, lower-case and collapse runs of whitespace to a single space
fn normalize(text: &str) -> String {
    text.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Injectable handle around [`classify`]
///
/// Zero-sized and stateless; cloning or sharing it across tasks is free.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActivityClassifier;

impl ActivityClassifier {
    /// Create a classifier handle
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Classify one entry
    #[must_use]
    pub fn classify(&self, text: &str) -> ActivityClassification {
        classify(text)
    }

    /// Classify each entry independently, preserving input order
    #[must_use]
    pub fn classify_batch<I, S>(&self, texts: I) -> Vec<ActivityClassification>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        texts.into_iter().map(|t| classify(t.as_ref())).collect()
    }

    /// Categories this classifier can assign, in priority order
    #[must_use]
    pub fn supported_types(&self) -> Vec<ActivityType> {
        RULES
            .iter()
            .map(|rule| rule.activity_type)
            .chain(std::iter::once(ActivityType::Unknown))
            .collect()
    }
}
