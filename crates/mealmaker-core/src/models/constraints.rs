// ABOUTME: Nutrient ranges and the constraint set for one combo search
// ABOUTME: Validation rejects contradictory constraint sets before any enumeration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::combo::Macros;
use crate::constants::defaults::DEFAULT_MAX_SERVINGS;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Inclusive range with a mandatory lower bound and an optional upper bound
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientRange {
    /// Inclusive lower bound
    pub min: f64,
    /// Inclusive upper bound, unbounded when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl NutrientRange {
    /// Range bounded on both sides
    #[must_use]
    pub const fn between(min: f64, max: f64) -> Self {
        Self {
            min,
            max: Some(max),
        }
    }

    /// Range with only a lower bound
    #[must_use]
    pub const fn at_least(min: f64) -> Self {
        Self { min, max: None }
    }

    /// Whether `value` lies inside the range
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && self.max.map_or(true, |max| value <= max)
    }

    fn validate(&self, nutrient: &str) -> AppResult<()> {
        if !self.min.is_finite() || self.min < 0.0 {
            return Err(AppError::config_invalid(format!(
                "minimum {nutrient} must be a non-negative number, got {}",
                self.min
            )));
        }
        if let Some(max) = self.max {
            if !max.is_finite() || max < 0.0 {
                return Err(AppError::config_invalid(format!(
                    "maximum {nutrient} must be a non-negative number, got {max}"
                )));
            }
            if self.min > max {
                return Err(AppError::config_invalid(format!(
                    "minimum {nutrient} ({}) exceeds maximum {nutrient} ({max})",
                    self.min
                )));
            }
        }
        Ok(())
    }
}

/// Calorie range; unlike the macro ranges both bounds are required
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalorieRange {
    /// Inclusive lower bound (kcal)
    pub min: f64,
    /// Inclusive upper bound (kcal)
    pub max: f64,
}

impl CalorieRange {
    /// Create a calorie range
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Whether `calories` lies inside the range
    #[must_use]
    pub fn contains(&self, calories: f64) -> bool {
        (self.min..=self.max).contains(&calories)
    }
}

/// Constraint specification for one combo search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComboConstraints {
    /// Total calorie window
    pub calories: CalorieRange,
    /// Total protein window (grams)
    pub protein: NutrientRange,
    /// Total carbohydrate window (grams)
    pub carbs: NutrientRange,
    /// Total fat window (grams)
    pub fat: NutrientRange,
    /// Only consider items flagged vegetarian
    pub vegetarian_only: bool,
    /// Prefer combos containing a vegetable item, falling back when none do
    pub require_vegetable: bool,
    /// Largest number of servings in one combo
    pub max_servings: u32,
}

impl ComboConstraints {
    /// Constraints with a calorie window and no macro requirements
    #[must_use]
    pub const fn new(min_calories: f64, max_calories: f64) -> Self {
        Self {
            calories: CalorieRange::new(min_calories, max_calories),
            protein: NutrientRange::at_least(0.0),
            carbs: NutrientRange::at_least(0.0),
            fat: NutrientRange::at_least(0.0),
            vegetarian_only: false,
            require_vegetable: false,
            max_servings: DEFAULT_MAX_SERVINGS,
        }
    }

    /// Set the protein window
    #[must_use]
    pub fn with_protein(mut self, min: f64, max: Option<f64>) -> Self {
        self.protein = NutrientRange { min, max };
        self
    }

    /// Set the carbohydrate window
    #[must_use]
    pub fn with_carbs(mut self, min: f64, max: Option<f64>) -> Self {
        self.carbs = NutrientRange { min, max };
        self
    }

    /// Set the fat window
    #[must_use]
    pub fn with_fat(mut self, min: f64, max: Option<f64>) -> Self {
        self.fat = NutrientRange { min, max };
        self
    }

    /// Restrict the pool to vegetarian items
    #[must_use]
    pub fn with_vegetarian_only(mut self, vegetarian_only: bool) -> Self {
        self.vegetarian_only = vegetarian_only;
        self
    }

    /// Prefer combos with a vegetable item
    #[must_use]
    pub fn with_require_vegetable(mut self, require_vegetable: bool) -> Self {
        self.require_vegetable = require_vegetable;
        self
    }

    /// Set the maximum servings per combo
    #[must_use]
    pub fn with_max_servings(mut self, max_servings: u32) -> Self {
        self.max_servings = max_servings;
        self
    }

    /// Whether aggregated totals satisfy every nutrient window
    #[must_use]
    pub fn accepts(&self, totals: &Macros) -> bool {
        self.calories.contains(totals.calories)
            && self.protein.contains(totals.protein)
            && self.carbs.contains(totals.carbs)
            && self.fat.contains(totals.fat)
    }

    /// Reject constraint sets under which no search can ever succeed
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ConfigInvalid` when `max_servings` is zero, a bound
    /// is negative or not finite, or a minimum exceeds its maximum.
    pub fn validate(&self) -> AppResult<()> {
        if self.max_servings < 1 {
            return Err(AppError::config_invalid("max_servings must be at least 1"));
        }
        NutrientRange::between(self.calories.min, self.calories.max).validate("calories")?;
        self.protein.validate("protein")?;
        self.carbs.validate("carbs")?;
        self.fat.validate("fat")?;
        Ok(())
    }
}
