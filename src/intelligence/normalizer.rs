// ABOUTME: Menu item normalization from scraped records into canonical items
// ABOUTME: Coerces nutrient values and derives vegetarian and vegetable flags from names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Item Normalizer
//!
//! Menu sources are unreliable about both numbers and dietary labels, so every
//! raw record goes through two correction layers:
//!
//! 1. Nutrient values are coerced to non-negative finite numbers. Anything that
//!    cannot be read as a number (absent, `null`, "less than 1g") becomes `0`.
//! 2. The vegetarian flag is overridden by name keywords. Additional vegetarian
//!    keywords win over meat keywords, so "Veggie Bacon Strips" is vegetarian.
//!
//! The vegetable flag is independent of the vegetarian flag: "Chicken Salad"
//! is a vegetable item and not vegetarian.

use mealmaker_core::constants::keywords::{
    contains_any, ADDITIONAL_VEG_KEYWORDS, MEAT_KEYWORDS, VEG_ITEM_KEYWORDS,
};
use mealmaker_core::models::{Macros, MenuItem, RawMenuItem};
use serde_json::Value;
use tracing::trace;

/// Convert one raw menu record into a canonical item
///
/// Never fails: malformed numeric fields default to zero.
#[must_use]
pub fn normalize(raw: &RawMenuItem) -> MenuItem {
    let macros = Macros::new(
        coerce_nutrient(raw.calories.as_ref()),
        coerce_nutrient(raw.protein.as_ref()),
        coerce_nutrient(raw.carbs.as_ref()),
        coerce_nutrient(raw.fats.as_ref()),
    );

    let lowercase_name = raw.name.to_lowercase();
    let vegetarian = detect_vegetarian(&lowercase_name, raw.veg.as_ref().is_some_and(truthy));
    let has_veg_item = contains_any(&lowercase_name, VEG_ITEM_KEYWORDS);

    trace!(
        item.name = %raw.name,
        item.calories = macros.calories,
        item.vegetarian = vegetarian,
        item.has_veg_item = has_veg_item,
        "Normalized menu item"
    );

    MenuItem::from_parts(raw.name.clone(), macros, vegetarian, has_veg_item)
}

/// Normalize every record of a menu source, preserving order
#[must_use]
pub fn normalize_all(raw_items: &[RawMenuItem]) -> Vec<MenuItem> {
    raw_items.iter().map(normalize).collect()
}

/// Apply keyword overrides to the source-reported vegetarian flag
///
/// `lowercase_name` must already be lower-cased.
#[must_use]
pub fn detect_vegetarian(lowercase_name: &str, reported: bool) -> bool {
    if contains_any(lowercase_name, ADDITIONAL_VEG_KEYWORDS) {
        true
    } else if contains_any(lowercase_name, MEAT_KEYWORDS) {
        false
    } else {
        reported
    }
}

/// Read a raw nutrient value as a non-negative finite number, defaulting to zero
#[must_use]
pub fn coerce_nutrient(value: Option<&Value>) -> f64 {
    let parsed = match value {
        Some(Value::Number(number)) => number.as_f64().unwrap_or(0.0),
        Some(Value::String(text)) => text.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };

    if parsed.is_finite() && parsed > 0.0 {
        parsed
    } else {
        0.0
    }
}

// Mirrors how loosely typed menu files express booleans.
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(values) => !values.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coerce_nutrient_handles_mixed_inputs() {
        assert!((coerce_nutrient(Some(&json!(12.5))) - 12.5).abs() < f64::EPSILON);
        assert!((coerce_nutrient(Some(&json!(" 250 "))) - 250.0).abs() < f64::EPSILON);
        assert!(coerce_nutrient(Some(&json!("less than 1g"))).abs() < f64::EPSILON);
        assert!(coerce_nutrient(Some(&json!(null))).abs() < f64::EPSILON);
        assert!(coerce_nutrient(Some(&json!(true))).abs() < f64::EPSILON);
        assert!(coerce_nutrient(None).abs() < f64::EPSILON);
    }

    #[test]
    fn test_coerce_nutrient_clamps_negative_and_non_finite() {
        assert!(coerce_nutrient(Some(&json!(-40))).abs() < f64::EPSILON);
        assert!(coerce_nutrient(Some(&json!("NaN"))).abs() < f64::EPSILON);
        assert!(coerce_nutrient(Some(&json!("inf"))).abs() < f64::EPSILON);
    }

    #[test]
    fn test_detect_vegetarian_precedence() {
        assert!(detect_vegetarian("veggie bacon strips", false));
        assert!(!detect_vegetarian("bacon cheeseburger", true));
        assert!(detect_vegetarian("cheese pizza", true));
        assert!(!detect_vegetarian("cheese pizza", false));
    }

    #[test]
    fn test_truthy_follows_loose_boolean_rules() {
        assert!(truthy(&json!(1)));
        assert!(!truthy(&json!(0)));
        assert!(truthy(&json!("no")));
        assert!(!truthy(&json!("")));
        assert!(!truthy(&json!([])));
    }
}
