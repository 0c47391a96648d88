// ABOUTME: Integration tests for menu item normalization
// ABOUTME: Covers nutrient coercion, vegetarian keyword overrides, and vegetable detection
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Tests for the item normalizer including:
//! - Coercion of strings, nulls, and junk into nutrient numbers
//! - Keyword precedence for the vegetarian flag
//! - The independent vegetable-item flag

use mealmaker::intelligence::normalizer::{coerce_nutrient, detect_vegetarian};
use mealmaker::intelligence::{normalize, normalize_all};
use mealmaker::models::RawMenuItem;
use serde_json::json;

fn parse(value: serde_json::Value) -> RawMenuItem {
    serde_json::from_value(value).unwrap()
}

// ============================================================================
// Vegetarian Flag Tests
// ============================================================================

#[test]
fn test_additional_veg_keyword_beats_meat_keyword() {
    let item = normalize(&RawMenuItem::new("Veggie Bacon Strips").with_calories(90.0));
    assert!(item.is_vegetarian());
}

#[test]
fn test_meat_keyword_overrides_reported_flag() {
    let item = normalize(&RawMenuItem::new("Pepperoni Pizza").with_veg(true));
    assert!(!item.is_vegetarian());

    let item = normalize(&RawMenuItem::new("Chicken Caesar Wrap").with_veg(true));
    assert!(!item.is_vegetarian());
}

#[test]
fn test_reported_flag_used_without_keywords() {
    assert!(normalize(&RawMenuItem::new("Mac and Cheese").with_veg(true)).is_vegetarian());
    assert!(!normalize(&RawMenuItem::new("Mac and Cheese").with_veg(false)).is_vegetarian());
    assert!(!normalize(&RawMenuItem::new("Mac and Cheese")).is_vegetarian());
}

#[test]
fn test_keyword_matching_is_case_insensitive_substring() {
    assert!(detect_vegetarian("meatless burger", false));
    assert!(!detect_vegetarian("beefsteak tomato", true));
    assert!(!detect_vegetarian("graham crackers", true));
    assert!(normalize(&RawMenuItem::new("VEGGIE Burger")).is_vegetarian());
}

#[test]
fn test_loose_veg_flag_values() {
    let item = normalize(&parse(json!({"name": "Mac and Cheese", "veg": "yes"})));
    assert!(item.is_vegetarian());
    let item = normalize(&parse(json!({"name": "Mac and Cheese", "veg": 0})));
    assert!(!item.is_vegetarian());
    let item = normalize(&parse(json!({"name": "Mac and Cheese", "veg": null})));
    assert!(!item.is_vegetarian());
}

// ============================================================================
// Vegetable Flag Tests
// ============================================================================

#[test]
fn test_vegetable_flag_is_independent_of_vegetarian() {
    let item = normalize(&RawMenuItem::new("Chicken Salad"));
    assert!(item.has_veg_item());
    assert!(!item.is_vegetarian());

    let item = normalize(&RawMenuItem::new("Cheese Pizza").with_veg(true));
    assert!(!item.has_veg_item());
    assert!(item.is_vegetarian());
}

#[test]
fn test_vegetable_keywords() {
    for name in ["Roasted Broccoli", "Garden Salad", "Sauteed Spinach", "Steamed Green Beans"] {
        assert!(normalize(&RawMenuItem::new(name)).has_veg_item(), "{name}");
    }
}

// ============================================================================
// Nutrient Coercion Tests
// ============================================================================

#[test]
fn test_nutrient_coercion() {
    let item = normalize(&parse(json!({
        "name": "Lentil Soup",
        "calories": "210",
        "protein": "less than 1g",
        "carbs": null,
        "fats": -4
    })));

    let macros = item.macros();
    assert!((macros.calories - 210.0).abs() < f64::EPSILON);
    assert!(macros.protein.abs() < f64::EPSILON);
    assert!(macros.carbs.abs() < f64::EPSILON);
    assert!(macros.fat.abs() < f64::EPSILON);
}

#[test]
fn test_coerce_nutrient_rejects_non_numeric_shapes() {
    assert!(coerce_nutrient(None).abs() < f64::EPSILON);
    assert!(coerce_nutrient(Some(&json!(true))).abs() < f64::EPSILON);
    assert!(coerce_nutrient(Some(&json!([12]))).abs() < f64::EPSILON);
    assert!(coerce_nutrient(Some(&json!("NaN"))).abs() < f64::EPSILON);
    assert!((coerce_nutrient(Some(&json!("7.5"))) - 7.5).abs() < f64::EPSILON);
}

#[test]
fn test_missing_name_becomes_empty() {
    let item = normalize(&parse(json!({"calories": 100})));
    assert_eq!(item.name(), "");
    assert!(!item.is_vegetarian());
}

#[test]
fn test_normalize_all_preserves_order() {
    let raw = vec![
        RawMenuItem::new("Brown Rice"),
        RawMenuItem::new("Grilled Chicken"),
        RawMenuItem::new("Side Salad"),
    ];
    let names: Vec<String> = normalize_all(&raw)
        .iter()
        .map(|item| item.name().to_owned())
        .collect();
    assert_eq!(names, ["Brown Rice", "Grilled Chicken", "Side Salad"]);
}
