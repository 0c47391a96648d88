// ABOUTME: Macro totals and combo models produced by the combo search engine
// ABOUTME: ComboCandidate carries internal flags; Combo is the caller-facing output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign};

/// Calories and macronutrients for one serving or an aggregated combo
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Macros {
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (grams)
    pub protein: f64,
    /// Carbohydrates (grams)
    pub carbs: f64,
    /// Fat (grams)
    pub fat: f64,
}

impl Macros {
    /// Create a macro profile
    #[must_use]
    pub const fn new(calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
        }
    }
}

impl Add for Macros {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            calories: self.calories + rhs.calories,
            protein: self.protein + rhs.protein,
            carbs: self.carbs + rhs.carbs,
            fat: self.fat + rhs.fat,
        }
    }
}

impl AddAssign for Macros {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// A combo that passed every nutrient check, before final cleanup
///
/// `has_veg_item` only feeds the vegetable preference and is dropped when the
/// candidate is turned into a [`Combo`].
#[derive(Debug, Clone, PartialEq)]
pub struct ComboCandidate {
    /// Item names, one per serving, in enumeration order
    pub items: Vec<String>,
    /// Aggregated totals over all servings
    pub totals: Macros,
    /// True when at least one serving is a vegetable item
    pub has_veg_item: bool,
}

/// Meal combo returned to callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Combo {
    /// Item names, one per serving
    pub items: Vec<String>,
    /// Total calories (kcal)
    pub total_calories: f64,
    /// Total protein (grams)
    pub total_protein: f64,
    /// Total carbohydrates (grams)
    pub total_carbs: f64,
    /// Total fat (grams)
    pub total_fats: f64,
}

impl Combo {
    /// Number of servings in the combo
    #[must_use]
    pub fn servings(&self) -> usize {
        self.items.len()
    }
}

impl From<ComboCandidate> for Combo {
    fn from(candidate: ComboCandidate) -> Self {
        Self {
            items: candidate.items,
            total_calories: candidate.totals.calories,
            total_protein: candidate.totals.protein,
            total_carbs: candidate.totals.carbs,
            total_fats: candidate.totals.fat,
        }
    }
}
