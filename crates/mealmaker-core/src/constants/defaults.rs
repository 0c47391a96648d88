// ABOUTME: Default values for planner limits, menu lookup, and the daily goal model
// ABOUTME: Referenced by configuration loaders and the CLI when a value is not supplied
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Menu file read when none is configured
pub const DEFAULT_MENU_FILE: &str = "current_menu.json";

/// Menu source label used when none is configured
pub const DEFAULT_SOURCE: &str = "Lunch";

/// Maximum servings per combo when none is configured
pub const DEFAULT_MAX_SERVINGS: u32 = 5;

/// Candidate evaluations allowed per search before it is aborted
pub const DEFAULT_MAX_EVALUATIONS: u64 = 5_000_000;

/// Daily calorie budget used to derive default meal bounds
pub const DEFAULT_DAILY_CALORIES: f64 = 2400.0;

/// Meals the daily budget is split across
pub const DEFAULT_MEALS_PER_DAY: u32 = 3;

/// Energy density of protein and carbohydrate (kcal per gram)
pub const KCAL_PER_GRAM_PROTEIN_CARBS: f64 = 4.0;

/// Energy density of fat (kcal per gram)
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Service name reported in structured logs
pub const SERVICE_NAME: &str = "mealmaker";
