// ABOUTME: Keyword tables used to derive dietary flags from menu item names
// ABOUTME: Matching is plain substring search over the lower-cased item name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Keyword tables for name-based dietary detection.
//!
//! Matching is substring based with no word boundaries or negation handling,
//! so "graham cracker" contains "ham" and "vegetable oil" counts as a
//! vegetable item. Callers rely on this exact behavior.

/// Names containing any of these are forced non-vegetarian
pub const MEAT_KEYWORDS: &[&str] = &[
    "pork", "beef", "chicken", "sausage", "bacon", "ham", "turkey", "fish", "shrimp",
];

/// Names containing any of these are forced vegetarian; checked before meat keywords
pub const ADDITIONAL_VEG_KEYWORDS: &[&str] = &["meatless", "vegetarian", "veggie"];

/// Names containing any of these count as a produce or legume item
pub const VEG_ITEM_KEYWORDS: &[&str] = &[
    "spinach",
    "broccoli",
    "kale",
    "salad",
    "vegetable",
    "bean",
    "peas",
    "pepper",
    "onion",
    "carrot",
    "tomato",
    "cucumber",
];

/// Returns true when `lowercase_name` contains any keyword from `keywords`
#[must_use]
pub fn contains_any(lowercase_name: &str, keywords: &[&str]) -> bool {
    keywords
        .iter()
        .any(|keyword| lowercase_name.contains(keyword))
}
