// ABOUTME: Activity intelligence crate entry point
// ABOUTME: Exposes the natural-language activity classifier
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Intelligence
//!
//! Turns free-text activity entries ("ran 5k in 25 minutes", "weight 175",
//! "drank 64 oz water") into typed [`ActivityClassification`] records.
//!
//! ```rust
//! use pierre_intelligence::classify;
//! use pierre_core::models::ActivityType;
//!
//! let result = classify("slept 8 hours");
//! assert_eq!(result.activity_type(), ActivityType::Sleep);
//! ```
//!
//! The classifier is pure: no I/O, no shared mutable state, safe to call
//! from any number of tasks at once.

/// Ordered rule-based classifier for free-text activity entries
pub mod activity_classifier;

pub use activity_classifier::{classify, ActivityClassifier};
pub use pierre_core::models::{ActivityClassification, ActivityExtraction, ActivityType};
