// ABOUTME: Meal intelligence module: normalization, combo search, ranking, and selection
// ABOUTME: Pure in-memory computations with no I/O and no shared state between calls
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Turns raw menu records into ranked meal combos that satisfy calorie and
//! macronutrient windows. Every call is synchronous and side-effect free apart
//! from tracing output.

/// Raw menu record to canonical item conversion
pub mod normalizer;

/// Candidate pool, size bound, enumeration, and constraint filtering
pub mod combo_search;

/// Ranking and vegetable-preference resolution
pub mod ranking;

/// Random and top-k selection over ranked combos
pub mod selection;

/// Facade running the full planning pipeline
pub mod meal_planner;

pub use combo_search::{build_pool, candidate_space_size, search, CandidatePool, SearchLimits};
pub use meal_planner::{MealPlan, MealPlanner};
pub use normalizer::{normalize, normalize_all};
pub use ranking::{apply_vegetable_preference, finalize, rank, VegetablePreference};
pub use selection::{select, selection_rng, top_k};
