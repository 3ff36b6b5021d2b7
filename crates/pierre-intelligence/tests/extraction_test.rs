// ABOUTME: Field extraction tests for each activity rule
// ABOUTME: Checks units, numbers, meals, ratings and moods pulled out of free text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(missing_docs, clippy::float_cmp)]

use pierre_core::models::{
    ActivityExtraction, ActivityType, MealType, VolumeUnit, WeightUnit,
};
use pierre_intelligence::activity_classifier::confidence;
use pierre_intelligence::{classify, ActivityClassifier};

// ============================================================================
// Normalization and ordering
// ============================================================================

#[test]
fn test_whitespace_and_case_do_not_change_result() {
    let messy = classify("  Ran\t5K \n in  25 Minutes  ");
    let clean = classify("ran 5k in 25 minutes");
    assert_eq!(messy.extracted(), clean.extracted());
    assert_eq!(messy.confidence(), clean.confidence());
    assert_eq!(messy.raw_text(), "  Ran\t5K \n in  25 Minutes  ");
}

#[test]
fn test_supported_types_follow_priority_order() {
    assert_eq!(
        ActivityClassifier::new().supported_types(),
        ActivityType::ALL.to_vec()
    );
}

#[test]
fn test_batch_preserves_order() {
    let types: Vec<_> = ActivityClassifier::new()
        .classify_batch(["slept 7 hours", "", "weight 80kg"])
        .iter()
        .map(|c| c.activity_type())
        .collect();
    assert_eq!(
        types,
        vec![ActivityType::Sleep, ActivityType::Unknown, ActivityType::Weight]
    );
}

#[test]
fn test_water_beats_exercise_when_both_match() {
    assert_eq!(
        classify("drank 500 ml after my run").activity_type(),
        ActivityType::Water
    );
}

#[test]
fn test_exercise_beats_food_when_both_match() {
    let result = classify("protein shake after run");
    assert_eq!(result.activity_type(), ActivityType::Exercise);
    assert_eq!(result.confidence(), confidence::EXERCISE);
}

// ============================================================================
// Weight
// ============================================================================

#[test]
fn test_weight_label_variants() {
    for text in ["weight 175", "weight: 175", "my weight is 175", "weighed in at 175"] {
        let result = classify(text);
        assert_eq!(result.confidence(), confidence::WEIGHT_LABELED, "{text}");
        assert_eq!(
            result.extracted(),
            &ActivityExtraction::Weight {
                value: 175.0,
                unit: None
            },
            "{text}"
        );
    }
}

#[test]
fn test_weight_units_normalize() {
    assert_eq!(
        classify("weight 80.5kg").extracted(),
        &ActivityExtraction::Weight {
            value: 80.5,
            unit: Some(WeightUnit::Kg)
        }
    );
    assert_eq!(
        classify("weight 180 lb").extracted(),
        &ActivityExtraction::Weight {
            value: 180.0,
            unit: Some(WeightUnit::Lbs)
        }
    );
}

#[test]
fn test_bare_weight_has_lower_confidence() {
    for text in ["182 lbs this morning", "175"] {
        let result = classify(text);
        assert_eq!(result.activity_type(), ActivityType::Weight, "{text}");
        assert_eq!(result.confidence(), confidence::WEIGHT_BARE, "{text}");
    }
}

#[test]
fn test_numbers_without_weight_units_are_not_weight() {
    for text in ["ran 5k", "weight training today", "175 and counting"] {
        assert_ne!(classify(text).activity_type(), ActivityType::Weight, "{text}");
    }
}

// ============================================================================
// Water
// ============================================================================

#[test]
fn test_water_units() {
    assert_eq!(
        classify("had 1.5l").extracted(),
        &ActivityExtraction::Water {
            amount: 1.5,
            unit: VolumeUnit::Liters
        }
    );
    assert_eq!(
        classify("2 cup of water").extracted(),
        &ActivityExtraction::Water {
            amount: 2.0,
            unit: VolumeUnit::Cups
        }
    );
    assert_eq!(classify("swam 20 laps").activity_type(), ActivityType::Exercise);
}

// ============================================================================
// Exercise
// ============================================================================

#[test]
fn test_exercise_hours_convert_to_minutes() {
    assert_eq!(
        classify("cycled 20 miles for 1.5 hours").extracted(),
        &ActivityExtraction::Exercise {
            distance_value: Some(20.0),
            distance_unit: Some("miles".to_owned()),
            duration_minutes: Some(90.0),
        }
    );
}

#[test]
fn test_exercise_distance_without_verb() {
    assert_eq!(
        classify("10km this morning").extracted(),
        &ActivityExtraction::Exercise {
            distance_value: Some(10.0),
            distance_unit: Some("km".to_owned()),
            duration_minutes: None,
        }
    );
}

#[test]
fn test_hours_and_minutes_are_summed() {
    assert_eq!(
        classify("ran for 1 hour 30 minutes").extracted(),
        &ActivityExtraction::Exercise {
            distance_value: None,
            distance_unit: None,
            duration_minutes: Some(90.0),
        }
    );
    assert_eq!(
        classify("hiked 2 hrs and 15 mins").extracted(),
        &ActivityExtraction::Exercise {
            distance_value: None,
            distance_unit: None,
            duration_minutes: Some(135.0),
        }
    );
}

#[test]
fn test_compact_hour_suffix() {
    assert_eq!(
        classify("swam for 1h").extracted(),
        &ActivityExtraction::Exercise {
            distance_value: None,
            distance_unit: None,
            duration_minutes: Some(60.0),
        }
    );
    // A trailing `m` is a distance in meters, not minutes
    assert_eq!(
        classify("ran 5k in 25m").extracted(),
        &ActivityExtraction::Exercise {
            distance_value: Some(5.0),
            distance_unit: Some("k".to_owned()),
            duration_minutes: None,
        }
    );
}

#[test]
fn test_non_ascii_digits_are_not_numbers() {
    let water = classify("drank \u{665} oz then 64 oz water");
    assert_eq!(water.activity_type(), ActivityType::Water);
    assert_eq!(
        water.extracted(),
        &ActivityExtraction::Water {
            amount: 64.0,
            unit: VolumeUnit::Oz,
        }
    );

    assert_eq!(
        classify("ran \u{665}k").extracted(),
        &ActivityExtraction::Exercise {
            distance_value: None,
            distance_unit: None,
            duration_minutes: None,
        }
    );
    assert_eq!(
        classify("\u{661}\u{667}\u{665}").activity_type(),
        ActivityType::Unknown
    );
}

#[test]
fn test_duration_alone_is_not_exercise() {
    assert_eq!(classify("slept 8 hours").activity_type(), ActivityType::Sleep);
    assert_eq!(
        classify("30 minutes of reading").activity_type(),
        ActivityType::Unknown
    );
}

#[test]
fn test_minutes_are_not_meters() {
    assert_eq!(
        classify("walked for 30 min").extracted(),
        &ActivityExtraction::Exercise {
            distance_value: None,
            distance_unit: None,
            duration_minutes: Some(30.0),
        }
    );
}

// ============================================================================
// Food, sleep, energy, mood
// ============================================================================

#[test]
fn test_food_meal_and_items_deduplicated() {
    assert_eq!(
        classify("had eggs and coffee for breakfast, more eggs").extracted(),
        &ActivityExtraction::Food {
            meal: Some(MealType::Breakfast),
            items: vec!["eggs".to_owned(), "coffee".to_owned()],
        }
    );
    assert_eq!(classify("eggplant parmesan").activity_type(), ActivityType::Unknown);
}

#[test]
fn test_sleep_hours_optional() {
    assert_eq!(
        classify("slept 7.5 hrs").extracted(),
        &ActivityExtraction::Sleep { hours: Some(7.5) }
    );
    assert_eq!(
        classify("bad sleep").extracted(),
        &ActivityExtraction::Sleep { hours: None }
    );
    assert_eq!(
        classify("slept 8h").extracted(),
        &ActivityExtraction::Sleep { hours: Some(8.0) }
    );
    assert_ne!(classify("asleep at the wheel").activity_type(), ActivityType::Sleep);
}

#[test]
fn test_energy_rating_bounds() {
    assert_eq!(
        classify("energy 12/10").extracted(),
        &ActivityExtraction::Energy { rating: None }
    );
    assert_ne!(classify("energetic").activity_type(), ActivityType::Energy);
}

#[test]
fn test_mood_words() {
    assert_eq!(
        classify("feeling stressed about work").extracted(),
        &ActivityExtraction::Mood {
            mood: Some("stressed".to_owned()),
            rating: None,
        }
    );
    assert_eq!(
        classify("feeling really great").extracted(),
        &ActivityExtraction::Mood {
            mood: Some("great".to_owned()),
            rating: None,
        }
    );
    assert_eq!(
        classify("mood 6/10").extracted(),
        &ActivityExtraction::Mood {
            mood: None,
            rating: Some(6.0),
        }
    );
}
