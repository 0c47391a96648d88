// ABOUTME: Meal planner facade composing normalization, search, ranking, and preference
// ABOUTME: Single entry point turning menu items and constraints into a ranked combo list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Meal Planner
//!
//! Pipeline for one request:
//!
//! 1. Validate the constraint set (contradictions are fatal)
//! 2. Build the candidate pool and combo size bound
//! 3. Enumerate and filter combos
//! 4. Rank by protein (descending) then calories (ascending)
//! 5. Apply the vegetable preference with fallback
//! 6. Strip internal fields
//!
//! Empty pools, a zero size bound, and zero surviving combos all produce an
//! empty plan rather than an error. Picking the final combo is left to the
//! caller (see [`MealPlan::select`]).

use super::combo_search::{build_pool, search, SearchLimits};
use super::normalizer::normalize_all;
use super::ranking::{apply_vegetable_preference, finalize, rank, VegetablePreference};
use super::selection::{select, top_k};
use mealmaker_core::errors::AppResult;
use mealmaker_core::models::{Combo, ComboConstraints, MenuItem, RawMenuItem};
use rand::Rng;
use serde::Serialize;
use tracing::info;

/// Ranked result of one planning request
#[derive(Debug, Clone, Serialize)]
pub struct MealPlan {
    /// Valid combos, best-ranked first
    pub combos: Vec<Combo>,
    /// How the vegetable preference was resolved
    pub vegetable_preference: VegetablePreference,
    /// Number of items eligible for enumeration
    pub pool_size: usize,
    /// Largest combo size enumerated
    pub max_combo_size: usize,
}

impl MealPlan {
    /// Whether no combo satisfied the constraints
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.combos.is_empty()
    }

    /// Uniform random pick over all ranked combos
    pub fn select<R>(&self, rng: &mut R) -> Option<&Combo>
    where
        R: Rng + ?Sized,
    {
        select(&self.combos, rng)
    }

    /// The `k` best-ranked combos
    #[must_use]
    pub fn top(&self, k: usize) -> &[Combo] {
        top_k(&self.combos, k)
    }
}

/// Stateless planner; holds only the per-search resource limits
#[derive(Debug, Clone, Copy, Default)]
pub struct MealPlanner {
    limits: SearchLimits,
}

impl MealPlanner {
    /// Create a planner with the given search limits
    #[must_use]
    pub const fn new(limits: SearchLimits) -> Self {
        Self { limits }
    }

    /// Search limits applied to every request
    #[must_use]
    pub const fn limits(&self) -> &SearchLimits {
        &self.limits
    }

    /// Produce the ranked combo list for canonical items
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ConfigInvalid` for contradictory constraints and
    /// `ErrorCode::ResourceLimitExceeded` when the search exceeds its limits.
    pub fn generate(
        &self,
        items: &[MenuItem],
        constraints: &ComboConstraints,
    ) -> AppResult<MealPlan> {
        constraints.validate()?;

        let pool = build_pool(
            items,
            constraints.calories.max,
            constraints.vegetarian_only,
            constraints.max_servings,
        );
        let candidates = search(&pool, constraints, &self.limits)?;
        let valid = candidates.len();

        let (kept, vegetable_preference) =
            apply_vegetable_preference(rank(candidates), constraints.require_vegetable);
        let combos = finalize(kept);

        info!(
            pool.size = pool.len(),
            pool.max_combo_size = pool.max_combo_size(),
            combos.valid = valid,
            combos.returned = combos.len(),
            vegetable_preference = ?vegetable_preference,
            "Meal plan generated"
        );

        Ok(MealPlan {
            combos,
            vegetable_preference,
            pool_size: pool.len(),
            max_combo_size: pool.max_combo_size(),
        })
    }

    /// Normalize raw menu records, then [`generate`](Self::generate)
    ///
    /// # Errors
    ///
    /// Same as [`generate`](Self::generate).
    pub fn generate_from_raw(
        &self,
        raw_items: &[RawMenuItem],
        constraints: &ComboConstraints,
    ) -> AppResult<MealPlan> {
        let items = normalize_all(raw_items);
        self.generate(&items, constraints)
    }
}
