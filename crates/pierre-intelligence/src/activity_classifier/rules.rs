// ABOUTME: Pattern rules for the activity classifier, one matcher per activity category
// ABOUTME: Each matcher returns the confidence and extracted fields of its category on a match
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::OnceLock;

use pierre_core::models::{ActivityExtraction, ActivityType, MealType, VolumeUnit, WeightUnit};
use regex::{Captures, Regex};

use super::confidence;

const MINUTES_PER_HOUR: f64 = 60.0;
const MAX_RATING: f64 = 10.0;

/// Output of a matching rule
pub(super) struct RuleMatch {
    pub(super) confidence: f64,
    pub(super) extraction: ActivityExtraction,
}

impl RuleMatch {
    const fn new(confidence: f64, extraction: ActivityExtraction) -> Self {
        Self {
            confidence,
            extraction,
        }
    }
}

/// A category paired with its matcher. Matchers receive normalized text.
pub(super) struct Rule {
    pub(super) activity_type: ActivityType,
    pub(super) matcher: fn(&str) -> Option<RuleMatch>,
}

/// Classification rules in priority order
pub(super) const RULES: [Rule; 7] = [
    Rule {
        activity_type: ActivityType::Weight,
        matcher: match_weight,
    },
    Rule {
        activity_type: ActivityType::Water,
        matcher: match_water,
    },
    Rule {
        activity_type: ActivityType::Exercise,
        matcher: match_exercise,
    },
    Rule {
        activity_type: ActivityType::Food,
        matcher: match_food,
    },
    Rule {
        activity_type: ActivityType::Sleep,
        matcher: match_sleep,
    },
    Rule {
        activity_type: ActivityType::Energy,
        matcher: match_energy,
    },
    Rule {
        activity_type: ActivityType::Mood,
        matcher: match_mood,
    },
];

// ============================================================================
// Patterns
// ============================================================================

/// Compile a pattern once. A pattern that fails to compile never matches.
fn compiled(cell: &'static OnceLock<Option<Regex>>, source: &str) -> Option<&'static Regex> {
    cell.get_or_init(|| Regex::new(source).ok()).as_ref()
}

fn weight_label_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    compiled(
        &PATTERN,
        r"\bweigh(?:t|ed|s|ing)?\b(?:\s*(?:is|was|in|at|of|:))*\s*([0-9]+(?:\.[0-9]+)?)\s*(lbs?|kg|pounds?)?\b",
    )
}

fn weight_unit_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    compiled(&PATTERN, r"\b([0-9]+(?:\.[0-9]+)?)\s*(lbs?|kg|pounds?)\b")
}

fn bare_number_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    compiled(&PATTERN, r"^([0-9]+(?:\.[0-9]+)?)$")
}

// Leading verbs (`drank`, `had`) and a trailing `water` are allowed but
// not required, so only the amount and unit are part of the pattern.
fn water_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    compiled(
        &PATTERN,
        r"\b([0-9]+(?:\.[0-9]+)?)\s*(oz|ml|cups?|liters?|litres?|l)\b",
    )
}

fn exercise_verb_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    compiled(
        &PATTERN,
        r"\b(?:ran|runs?|running|walk|walked|walking|jog|jogged|jogging|swim|swam|swimming|cycled|cycling|hike|hiked|hiking|workout|worked out)\b",
    )
}

fn distance_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    compiled(&PATTERN, r"\b([0-9]+(?:\.[0-9]+)?)\s*(km|k|miles?|mi|meters?|m)\b")
}

// Hours with optional trailing minutes ("1 hour 30 minutes"), or minutes
// alone. A bare `m` is meters, never minutes.
fn duration_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    compiled(
        &PATTERN,
        r"\b(?:([0-9]+(?:\.[0-9]+)?)\s*(?:hours?|hrs?|h)\b(?:\s*(?:and\s+)?([0-9]+(?:\.[0-9]+)?)\s*(?:minutes?|mins?)\b)?|([0-9]+(?:\.[0-9]+)?)\s*(?:minutes?|mins?)\b)",
    )
}

fn food_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    compiled(
        &PATTERN,
        r"\b(?:breakfast|lunch|dinner|snacks?|ate|eaten|eggs|chicken|salad|steak|coffee|meal)\b",
    )
}

fn meal_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    compiled(&PATTERN, r"\b(breakfast|lunch|dinner|snacks?)\b")
}

fn food_item_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    compiled(&PATTERN, r"\b(eggs|chicken|salad|steak|coffee)\b")
}

fn sleep_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    compiled(&PATTERN, r"\b(?:slept|sleep|sleeping)\b")
}

fn hours_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    compiled(&PATTERN, r"\b([0-9]+(?:\.[0-9]+)?)\s*(?:hours?|hrs?|h)\b")
}

fn energy_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    compiled(&PATTERN, r"\benergy\b")
}

fn rating_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    compiled(&PATTERN, r"\b([0-9]+(?:\.[0-9]+)?)\s*/\s*10\b")
}

fn mood_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    compiled(
        &PATTERN,
        r"\b(?:feeling|feel|mood|happy|sad|stressed|anxious)\b",
    )
}

fn emotion_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    compiled(&PATTERN, r"\b(happy|sad|stressed|anxious)\b")
}

fn feeling_word_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    compiled(
        &PATTERN,
        r"\bfeel(?:ing)?\s+(?:(?:very|so|really|pretty|quite|super|kind of|a bit)\s+)?([a-z]+)\b",
    )
}

// ============================================================================
// Helpers
// ============================================================================

fn captures<'t>(pattern: Option<&'static Regex>, text: &'t str) -> Option<Captures<'t>> {
    pattern.and_then(|p| p.captures(text))
}

fn is_match(pattern: Option<&'static Regex>, text: &str) -> bool {
    pattern.is_some_and(|p| p.is_match(text))
}

/// Parse a numeric capture. Values too large for `f64` saturate at
/// `f64::MAX` so they stay serializable.
fn capture_number(caps: &Captures<'_>, group: usize) -> Option<f64> {
    caps.get(group)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .map(|n| if n.is_finite() { n } else { f64::MAX })
}

fn capture_str<'t>(caps: &Captures<'t>, group: usize) -> Option<&'t str> {
    caps.get(group).map(|m| m.as_str())
}

/// `X/10` rating, only when `0 <= X <= 10`
fn extract_rating(text: &str) -> Option<f64> {
    captures(rating_pattern(), text)
        .and_then(|caps| capture_number(&caps, 1))
        .filter(|rating| *rating <= MAX_RATING)
}

// ============================================================================
// Matchers
// ============================================================================

fn match_weight(text: &str) -> Option<RuleMatch> {
    if let Some(caps) = captures(weight_label_pattern(), text) {
        if let Some(value) = capture_number(&caps, 1) {
            let unit = capture_str(&caps, 2).and_then(WeightUnit::from_token);
            return Some(RuleMatch::new(
                confidence::WEIGHT_LABELED,
                ActivityExtraction::Weight { value, unit },
            ));
        }
    }

    let caps = captures(weight_unit_pattern(), text)
        .or_else(|| captures(bare_number_pattern(), text))?;
    let value = capture_number(&caps, 1)?;
    let unit = capture_str(&caps, 2).and_then(WeightUnit::from_token);
    Some(RuleMatch::new(
        confidence::WEIGHT_BARE,
        ActivityExtraction::Weight { value, unit },
    ))
}

fn match_water(text: &str) -> Option<RuleMatch> {
    let caps = captures(water_pattern(), text)?;
    let amount = capture_number(&caps, 1)?;
    let unit = capture_str(&caps, 2).and_then(VolumeUnit::from_token)?;
    Some(RuleMatch::new(
        confidence::WATER,
        ActivityExtraction::Water { amount, unit },
    ))
}

/// A verb, or a distance on its own, claims the entry. A duration is only
/// extracted alongside one of those: "8 hours" alone is not exercise.
fn match_exercise(text: &str) -> Option<RuleMatch> {
    let has_verb = is_match(exercise_verb_pattern(), text);
    let distance = captures(distance_pattern(), text);
    if !has_verb && distance.is_none() {
        return None;
    }

    // The unit is only kept alongside a value
    let (distance_value, distance_unit) = distance
        .and_then(|caps| {
            let value = capture_number(&caps, 1)?;
            Some((value, capture_str(&caps, 2)?.to_owned()))
        })
        .unzip();

    let duration_minutes = captures(duration_pattern(), text).and_then(|caps| {
        capture_number(&caps, 1).map_or_else(
            || capture_number(&caps, 3),
            |hours| {
                let minutes = capture_number(&caps, 2).unwrap_or(0.0);
                Some(hours.mul_add(MINUTES_PER_HOUR, minutes).min(f64::MAX))
            },
        )
    });

    Some(RuleMatch::new(
        confidence::EXERCISE,
        ActivityExtraction::Exercise {
            distance_value,
            distance_unit,
            duration_minutes,
        },
    ))
}

fn match_food(text: &str) -> Option<RuleMatch> {
    if !is_match(food_pattern(), text) {
        return None;
    }

    let meal = captures(meal_pattern(), text)
        .and_then(|caps| capture_str(&caps, 1).and_then(MealType::from_token));

    let mut items: Vec<String> = Vec::new();
    if let Some(pattern) = food_item_pattern() {
        for m in pattern.find_iter(text) {
            if !items.iter().any(|item| item == m.as_str()) {
                items.push(m.as_str().to_owned());
            }
        }
    }

    Some(RuleMatch::new(
        confidence::FOOD,
        ActivityExtraction::Food { meal, items },
    ))
}

fn match_sleep(text: &str) -> Option<RuleMatch> {
    if !is_match(sleep_pattern(), text) {
        return None;
    }
    let hours = captures(hours_pattern(), text).and_then(|caps| capture_number(&caps, 1));
    Some(RuleMatch::new(
        confidence::SLEEP,
        ActivityExtraction::Sleep { hours },
    ))
}

fn match_energy(text: &str) -> Option<RuleMatch> {
    if !is_match(energy_pattern(), text) {
        return None;
    }
    Some(RuleMatch::new(
        confidence::ENERGY,
        ActivityExtraction::Energy {
            rating: extract_rating(text),
        },
    ))
}

fn match_mood(text: &str) -> Option<RuleMatch> {
    if !is_match(mood_pattern(), text) {
        return None;
    }

    let mood = captures(emotion_pattern(), text)
        .or_else(|| captures(feeling_word_pattern(), text))
        .and_then(|caps| capture_str(&caps, 1).map(ToOwned::to_owned));

    Some(RuleMatch::new(
        confidence::MOOD,
        ActivityExtraction::Mood {
            mood,
            rating: extract_rating(text),
        },
    ))
}
