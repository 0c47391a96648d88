// ABOUTME: Benchmark test fixtures for generating realistic dining hall menus
// ABOUTME: Provides deterministic menu generation for reproducible performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark test fixtures for generating realistic menu data.
//!
//! Every generator is a pure function of its index so runs are comparable.

use mealmaker::models::{Macros, MenuItem, RawMenuItem};

/// Predefined menu sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum MenuSize {
    /// One station (8 items)
    Small,
    /// A typical lunch period (20 items)
    Medium,
    /// Every station of a busy dining hall (40 items)
    Large,
}

impl MenuSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 8,
            Self::Medium => 20,
            Self::Large => 40,
        }
    }
}

const DISHES: [(&str, bool); 8] = [
    ("Grilled Chicken", false),
    ("Brown Rice", true),
    ("Steamed Broccoli", true),
    ("Beef Taco", false),
    ("Tofu Stir Fry", true),
    ("Garden Salad", true),
    ("Turkey Sandwich", false),
    ("Black Bean Soup", true),
];

#[allow(clippy::cast_precision_loss)]
fn item_macros(index: usize) -> Macros {
    let calories = 80.0 + ((index * 137) % 420) as f64;
    let protein = 2.0 + ((index * 53) % 38) as f64;
    let carbs = ((index * 71) % 60) as f64;
    let fat = 1.0 + ((index * 29) % 22) as f64;
    Macros::new(calories, protein, carbs, fat)
}

/// Generate `count` canonical menu items
#[must_use]
pub fn generate_menu_items(count: usize) -> Vec<MenuItem> {
    (0..count)
        .map(|index| {
            let (dish, vegetarian) = DISHES[index % DISHES.len()];
            let has_veg_item = dish.contains("Broccoli") || dish.contains("Salad");
            MenuItem::from_parts(
                format!("{dish} #{index}"),
                item_macros(index),
                vegetarian,
                has_veg_item,
            )
        })
        .collect()
}

/// Generate `count` raw menu records as they appear in a scraped menu file
#[must_use]
pub fn generate_raw_menu(count: usize) -> Vec<RawMenuItem> {
    (0..count)
        .map(|index| {
            let (dish, vegetarian) = DISHES[index % DISHES.len()];
            let macros = item_macros(index);
            RawMenuItem::new(format!("{dish} #{index}"))
                .with_calories(macros.calories)
                .with_protein(macros.protein)
                .with_carbs(macros.carbs)
                .with_fats(macros.fat)
                .with_veg(vegetarian)
        })
        .collect()
}
