// ABOUTME: Activity classification DTOs produced by the natural-language activity logger
// ABOUTME: ActivityType, unit enums, per-type extraction variants and the classification record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Category assigned to a free-text activity entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    /// Body weight measurement
    Weight,
    /// Meal or food item
    Food,
    /// Workout, run, walk, ride or swim
    Exercise,
    /// Sleep duration
    Sleep,
    /// Emotional state
    Mood,
    /// Water intake
    Water,
    /// Self-reported energy level
    Energy,
    /// Nothing matched
    Unknown,
}

impl ActivityType {
    /// Every activity type, in classification priority order, `Unknown` last
    pub const ALL: [Self; 8] = [
        Self::Weight,
        Self::Water,
        Self::Exercise,
        Self::Food,
        Self::Sleep,
        Self::Energy,
        Self::Mood,
        Self::Unknown,
    ];

    /// Lowercase identifier, as stored and serialized
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Weight => "weight",
            Self::Food => "food",
            Self::Exercise => "exercise",
            Self::Sleep => "sleep",
            Self::Mood => "mood",
            Self::Water => "water",
            Self::Energy => "energy",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == lowered)
            .ok_or_else(|| AppError::invalid_input(format!("Unknown activity type: {s}")))
    }
}

/// Unit attached to a weight measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    /// Pounds (`lb`, `lbs`, `pound`, `pounds`)
    Lbs,
    /// Kilograms
    Kg,
}

impl WeightUnit {
    /// Normalize a matched unit token
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "lb" | "lbs" | "pound" | "pounds" => Some(Self::Lbs),
            "kg" => Some(Self::Kg),
            _ => None,
        }
    }

    /// Canonical unit label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Lbs => "lbs",
            Self::Kg => "kg",
        }
    }
}

/// Unit attached to a water intake amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolumeUnit {
    /// Fluid ounces
    Oz,
    /// Millilitres
    Ml,
    /// Cups (`cup`, `cups`)
    Cups,
    /// Litres (`l`, `liter(s)`, `litre(s)`)
    Liters,
}

impl VolumeUnit {
    /// Normalize a matched unit token
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "oz" => Some(Self::Oz),
            "ml" => Some(Self::Ml),
            "cup" | "cups" => Some(Self::Cups),
            "l" | "liter" | "liters" | "litre" | "litres" => Some(Self::Liters),
            _ => None,
        }
    }

    /// Canonical unit label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Oz => "oz",
            Self::Ml => "ml",
            Self::Cups => "cups",
            Self::Liters => "liters",
        }
    }
}

/// Meal slot named in a food entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    /// Morning meal
    Breakfast,
    /// Midday meal
    Lunch,
    /// Evening meal
    Dinner,
    /// Anything between meals
    Snack,
}

impl MealType {
    /// Normalize a matched meal noun
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "breakfast" => Some(Self::Breakfast),
            "lunch" => Some(Self::Lunch),
            "dinner" => Some(Self::Dinner),
            "snack" | "snacks" => Some(Self::Snack),
            _ => None,
        }
    }
}

/// Structured fields pulled out of the text once a category is assigned
///
/// One variant per [`ActivityType`]; the variant determines the type, so a
/// classification can never carry fields that disagree with its category.
/// Serializes as a flat JSON object with camelCase keys; absent optional
/// fields are omitted and `Unknown` serializes as `{}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ActivityExtraction {
    /// Body weight
    Weight {
        /// Measured value
        value: f64,
        /// Unit, when one was written
        #[serde(skip_serializing_if = "Option::is_none")]
        unit: Option<WeightUnit>,
    },
    /// Water intake
    Water {
        /// Amount in `unit`
        amount: f64,
        /// Volume unit
        unit: VolumeUnit,
    },
    /// Workout details
    #[serde(rename_all = "camelCase")]
    Exercise {
        /// Distance covered
        #[serde(skip_serializing_if = "Option::is_none")]
        distance_value: Option<f64>,
        /// Distance unit token as written (`k`, `km`, `mi`, `miles`, `m`, ...)
        #[serde(skip_serializing_if = "Option::is_none")]
        distance_unit: Option<String>,
        /// Duration, hours converted to minutes
        #[serde(skip_serializing_if = "Option::is_none")]
        duration_minutes: Option<f64>,
    },
    /// Meal details
    Food {
        /// Meal slot
        #[serde(skip_serializing_if = "Option::is_none")]
        meal: Option<MealType>,
        /// Recognized food keywords in order of appearance
        #[serde(skip_serializing_if = "Vec::is_empty")]
        items: Vec<String>,
    },
    /// Sleep details
    Sleep {
        /// Hours slept
        #[serde(skip_serializing_if = "Option::is_none")]
        hours: Option<f64>,
    },
    /// Energy level
    Energy {
        /// Rating out of 10
        #[serde(skip_serializing_if = "Option::is_none")]
        rating: Option<f64>,
    },
    /// Mood details
    Mood {
        /// Emotion word
        #[serde(skip_serializing_if = "Option::is_none")]
        mood: Option<String>,
        /// Rating out of 10
        #[serde(skip_serializing_if = "Option::is_none")]
        rating: Option<f64>,
    },
    /// No extraction
    Unknown {},
}

impl ActivityExtraction {
    /// Activity type implied by this extraction
    #[must_use]
    pub const fn activity_type(&self) -> ActivityType {
        match self {
            Self::Weight { .. } => ActivityType::Weight,
            Self::Water { .. } => ActivityType::Water,
            Self::Exercise { .. } => ActivityType::Exercise,
            Self::Food { .. } => ActivityType::Food,
            Self::Sleep { .. } => ActivityType::Sleep,
            Self::Energy { .. } => ActivityType::Energy,
            Self::Mood { .. } => ActivityType::Mood,
            Self::Unknown {} => ActivityType::Unknown,
        }
    }

    /// Whether no structured field was extracted
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Weight { .. } | Self::Water { .. } => false,
            Self::Exercise {
                distance_value,
                distance_unit,
                duration_minutes,
            } => distance_value.is_none() && distance_unit.is_none() && duration_minutes.is_none(),
            Self::Food { meal, items } => meal.is_none() && items.is_empty(),
            Self::Sleep { hours } => hours.is_none(),
            Self::Energy { rating } => rating.is_none(),
            Self::Mood { mood, rating } => mood.is_none() && rating.is_none(),
            Self::Unknown {} => true,
        }
    }
}

/// Result of classifying one free-text activity entry
///
/// Built once per input and never mutated. The category is derived from the
/// extraction variant, so type, confidence and fields always come from the
/// same rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityClassification {
    raw_text: String,
    #[serde(rename = "type")]
    activity_type: ActivityType,
    confidence: f64,
    extracted: ActivityExtraction,
}

impl ActivityClassification {
    /// Confidence assigned when nothing matched
    pub const UNKNOWN_CONFIDENCE: f64 = 0.1;

    /// Build a classification from a matched rule's output
    ///
    /// `confidence` is clamped to `[0.0, 1.0]`.
    #[must_use]
    pub fn new(raw_text: impl Into<String>, confidence: f64, extracted: ActivityExtraction) -> Self {
        Self {
            raw_text: raw_text.into(),
            activity_type: extracted.activity_type(),
            confidence: confidence.clamp(0.0, 1.0),
            extracted,
        }
    }

    /// Fallback classification when no rule matched
    #[must_use]
    pub fn unknown(raw_text: impl Into<String>) -> Self {
        Self::new(
            raw_text,
            Self::UNKNOWN_CONFIDENCE,
            ActivityExtraction::Unknown {},
        )
    }

    /// Original user input, untouched
    #[must_use]
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    /// Assigned category
    #[must_use]
    pub const fn activity_type(&self) -> ActivityType {
        self.activity_type
    }

    /// Heuristic match strength in `[0.0, 1.0]`
    #[must_use]
    pub const fn confidence(&self) -> f64 {
        self.confidence
    }

    /// Extracted structured fields
    #[must_use]
    pub const fn extracted(&self) -> &ActivityExtraction {
        &self.extracted
    }

    /// Whether no rule matched
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.activity_type == ActivityType::Unknown
    }
}
