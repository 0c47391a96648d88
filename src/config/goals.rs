// ABOUTME: Daily calorie goal model used to derive default meal constraints
// ABOUTME: Splits a daily budget into a per-meal target and macro windows by diet status
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Daily Goal Configuration
//!
//! Derives the default constraint set for one meal:
//!
//! - Meal target `t` = daily calories / meals per day, capped by the calories
//!   remaining for the day when known.
//! - Calorie window by diet status: cutting `[0.7t, t]`, maintenance
//!   `[0.8t, 1.2t]`, bulking `[t, 1.3t]`.
//! - Macro windows from calorie shares: lower bounds use the window minimum,
//!   upper bounds the window maximum, converted at 4 kcal/g for protein and
//!   carbohydrate and 9 kcal/g for fat.

use super::{apply_env_var, ConfigError};
use clap::ValueEnum;
use mealmaker_core::constants::defaults::{
    DEFAULT_DAILY_CALORIES, DEFAULT_MEALS_PER_DAY, KCAL_PER_GRAM_FAT,
    KCAL_PER_GRAM_PROTEIN_CARBS,
};
use mealmaker_core::models::ComboConstraints;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;

/// Where the eater is relative to maintenance calories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum DietStatus {
    /// Caloric deficit
    Cutting,
    /// Caloric balance
    Maintenance,
    /// Caloric surplus
    #[default]
    Bulking,
}

impl DietStatus {
    /// Calorie window multipliers `(min, max)` applied to the meal target
    #[must_use]
    pub const fn calorie_multipliers(self) -> (f64, f64) {
        match self {
            Self::Cutting => (0.7, 1.0),
            Self::Maintenance => (0.8, 1.2),
            Self::Bulking => (1.0, 1.3),
        }
    }
}

impl fmt::Display for DietStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Cutting => "cutting",
            Self::Maintenance => "maintenance",
            Self::Bulking => "bulking",
        };
        f.write_str(label)
    }
}

impl FromStr for DietStatus {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cutting" | "cut" => Ok(Self::Cutting),
            "maintenance" | "maintain" => Ok(Self::Maintenance),
            "bulking" | "bulk" => Ok(Self::Bulking),
            other => Err(ConfigError::Parse(format!("unknown diet status '{other}'"))),
        }
    }
}

/// Shares of meal calories assigned to each macro window bound
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroShares {
    /// Protein share of the minimum meal calories
    pub protein_min: f64,
    /// Protein share of the maximum meal calories
    pub protein_max: f64,
    /// Carbohydrate share of the minimum meal calories
    pub carbs_min: f64,
    /// Carbohydrate share of the maximum meal calories
    pub carbs_max: f64,
    /// Fat share of the minimum meal calories
    pub fat_min: f64,
    /// Fat share of the maximum meal calories
    pub fat_max: f64,
}

impl Default for MacroShares {
    fn default() -> Self {
        Self {
            protein_min: 0.30,
            protein_max: 0.60,
            carbs_min: 0.40,
            carbs_max: 0.50,
            fat_min: 0.15,
            fat_max: 0.30,
        }
    }
}

impl MacroShares {
    fn validate(&self) -> Result<(), ConfigError> {
        let shares = [
            ("protein_min", self.protein_min),
            ("protein_max", self.protein_max),
            ("carbs_min", self.carbs_min),
            ("carbs_max", self.carbs_max),
            ("fat_min", self.fat_min),
            ("fat_max", self.fat_max),
        ];

        for (name, value) in shares {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ValueOutOfRange(format!(
                    "{name} share must be between 0.0 and 1.0, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Daily calorie goal model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalConfig {
    /// Daily calorie budget (kcal)
    pub daily_calories: f64,
    /// Meals the budget is split across
    pub meals_per_day: u32,
    /// Calories left for today; caps the meal target when lower
    pub calories_remaining: Option<f64>,
    /// Diet status selecting the calorie window
    pub status: DietStatus,
    /// Macro shares for the macro windows
    pub macro_shares: MacroShares,
}

impl Default for GoalConfig {
    fn default() -> Self {
        Self {
            daily_calories: DEFAULT_DAILY_CALORIES,
            meals_per_day: DEFAULT_MEALS_PER_DAY,
            calories_remaining: None,
            status: DietStatus::default(),
            macro_shares: MacroShares::default(),
        }
    }
}

impl GoalConfig {
    /// Load configuration from environment variables
    ///
    /// Recognized variables: `MEALMAKER_DAILY_CALORIES`,
    /// `MEALMAKER_MEALS_PER_DAY`, `MEALMAKER_CALORIES_REMAINING`,
    /// `MEALMAKER_DIET_STATUS`.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable cannot be parsed or validation fails
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        apply_env_var("MEALMAKER_DAILY_CALORIES", &mut config.daily_calories)?;
        apply_env_var("MEALMAKER_MEALS_PER_DAY", &mut config.meals_per_day)?;
        apply_env_var("MEALMAKER_DIET_STATUS", &mut config.status)?;
        if env::var("MEALMAKER_CALORIES_REMAINING").is_ok() {
            let mut remaining = 0.0;
            apply_env_var("MEALMAKER_CALORIES_REMAINING", &mut remaining)?;
            config.calories_remaining = Some(remaining);
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error for a non-positive budget, zero meals, negative
    /// remaining calories, or a macro share outside `0.0..=1.0`
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.daily_calories.is_finite() || self.daily_calories <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(format!(
                "daily_calories must be positive, got {}",
                self.daily_calories
            )));
        }
        if self.meals_per_day == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "meals_per_day must be at least 1".to_owned(),
            ));
        }
        if let Some(remaining) = self.calories_remaining {
            if !remaining.is_finite() || remaining < 0.0 {
                return Err(ConfigError::ValueOutOfRange(format!(
                    "calories_remaining must not be negative, got {remaining}"
                )));
            }
        }
        self.macro_shares.validate()
    }

    /// Calorie target for one meal
    #[must_use]
    pub fn meal_calorie_target(&self) -> f64 {
        let per_meal = self.daily_calories / f64::from(self.meals_per_day);
        self.calories_remaining
            .map_or(per_meal, |remaining| per_meal.min(remaining))
    }

    /// Calorie window `(min, max)` for one meal
    #[must_use]
    pub fn calorie_window(&self) -> (f64, f64) {
        let target = self.meal_calorie_target();
        let (min_factor, max_factor) = self.status.calorie_multipliers();
        (target * min_factor, target * max_factor)
    }

    /// Default constraint set for one meal
    #[must_use]
    pub fn default_constraints(&self, max_servings: u32) -> ComboConstraints {
        let (min_calories, max_calories) = self.calorie_window();
        let shares = &self.macro_shares;

        ComboConstraints::new(min_calories, max_calories)
            .with_protein(
                min_calories * shares.protein_min / KCAL_PER_GRAM_PROTEIN_CARBS,
                Some(max_calories * shares.protein_max / KCAL_PER_GRAM_PROTEIN_CARBS),
            )
            .with_carbs(
                min_calories * shares.carbs_min / KCAL_PER_GRAM_PROTEIN_CARBS,
                Some(max_calories * shares.carbs_max / KCAL_PER_GRAM_PROTEIN_CARBS),
            )
            .with_fat(
                min_calories * shares.fat_min / KCAL_PER_GRAM_FAT,
                Some(max_calories * shares.fat_max / KCAL_PER_GRAM_FAT),
            )
            .with_max_servings(max_servings)
    }
}
