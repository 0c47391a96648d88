// ABOUTME: Main library entry point for the meal maker combo engine
// ABOUTME: Finds menu item combos that meet calorie and macronutrient windows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Meal Maker
//!
//! Builds meals out of a dining-hall style menu. Given menu items annotated
//! with calories, protein, carbohydrates and fat, the planner finds every
//! combination of servings (repeats allowed) whose totals fall inside the
//! requested windows, ranks them by protein then calories, and lets the caller
//! pick one.
//!
//! ## Architecture
//!
//! - **Intelligence**: normalization, combo search, ranking, selection
//! - **Menu**: menu file loading and source lookup
//! - **Config**: planner settings and the daily goal model
//! - **Logging**: structured `tracing` setup
//!
//! ## Example Usage
//!
//! ```rust
//! use mealmaker::intelligence::{selection_rng, MealPlanner};
//! use mealmaker_core::models::{ComboConstraints, RawMenuItem};
//!
//! let menu = vec![
//!     RawMenuItem::new("Grilled Chicken")
//!         .with_calories(200.0)
//!         .with_protein(30.0)
//!         .with_fats(8.0),
//!     RawMenuItem::new("Brown Rice")
//!         .with_calories(150.0)
//!         .with_protein(3.0)
//!         .with_carbs(30.0)
//!         .with_fats(1.0),
//! ];
//! let constraints = ComboConstraints::new(300.0, 400.0)
//!     .with_protein(20.0, None)
//!     .with_max_servings(2);
//!
//! let plan = MealPlanner::default().generate_from_raw(&menu, &constraints)?;
//! // Two chicken servings (400 kcal, 60 g protein) outrank chicken with rice
//! assert_eq!(plan.combos[0].items, vec!["Grilled Chicken", "Grilled Chicken"]);
//! assert_eq!(plan.combos[1].items, vec!["Grilled Chicken", "Brown Rice"]);
//!
//! let mut rng = selection_rng(Some(7));
//! assert!(plan.select(&mut rng).is_some());
//! # Ok::<(), mealmaker_core::errors::AppError>(())
//! ```

/// Planner and goal configuration
pub mod config;

/// Normalization, combo search, ranking, and selection
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Menu file loading and source lookup
pub mod menu;

pub use mealmaker_core::{constants, errors, models};
