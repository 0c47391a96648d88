// ABOUTME: Combo search engine enumerating bounded multisets of menu items
// ABOUTME: Builds the candidate pool, bounds combo size, and filters by nutrient constraints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Combo Search Engine
//!
//! Enumerates every multiset (combination with replacement) of pool items for
//! each size `r` in `1..=max_combo_size`, in lexicographic order of
//! non-decreasing index sequences over the pool. For a pool of `n` items the
//! full space holds `Σ C(n + r - 1, r)` candidates, which grows combinatorially
//! with both `n` and the size bound; [`candidate_space_size`] reports it.
//!
//! Two mechanisms keep the cost in check:
//!
//! - The size bound: no combo can hold more servings than
//!   `floor(max_calories / cheapest_item_calories)` without exceeding the
//!   calorie ceiling, so larger sizes are never visited.
//! - Branch pruning: every pool item has positive calories, so once a prefix
//!   exceeds the calorie ceiling none of its extensions can pass. Pruned
//!   branches are skipped without changing the set or order of results.
//!
//! An optional evaluation ceiling ([`SearchLimits`]) aborts runaway searches.

use mealmaker_core::constants::defaults::DEFAULT_MAX_EVALUATIONS;
use mealmaker_core::errors::{AppError, AppResult};
use mealmaker_core::models::{ComboCandidate, ComboConstraints, Macros, MenuItem};
use tracing::{debug, warn};

/// Resource limits applied to a single search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Maximum number of fully evaluated candidates, unlimited when `None`
    pub max_evaluations: Option<u64>,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_evaluations: Some(DEFAULT_MAX_EVALUATIONS),
        }
    }
}

impl SearchLimits {
    /// Limits that never abort a search
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            max_evaluations: None,
        }
    }

    /// Limits aborting after `max_evaluations` evaluated candidates
    #[must_use]
    pub const fn with_max_evaluations(max_evaluations: u64) -> Self {
        Self {
            max_evaluations: Some(max_evaluations),
        }
    }
}

/// Items eligible for enumeration together with the combo size bound
#[derive(Debug, Clone)]
pub struct CandidatePool<'a> {
    items: Vec<&'a MenuItem>,
    max_combo_size: usize,
}

impl<'a> CandidatePool<'a> {
    /// Eligible items in input order
    #[must_use]
    pub fn items(&self) -> &[&'a MenuItem] {
        &self.items
    }

    /// Number of eligible items
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no item is eligible
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Largest combo size worth enumerating
    #[must_use]
    pub const fn max_combo_size(&self) -> usize {
        self.max_combo_size
    }
}

/// Select the items eligible for enumeration and bound the combo size
///
/// Items without calories are dropped because they cannot count against a
/// calorie budget; non-vegetarian items are dropped when `vegetarian_only`.
#[must_use]
pub fn build_pool(
    items: &[MenuItem],
    max_calories: f64,
    vegetarian_only: bool,
    max_servings: u32,
) -> CandidatePool<'_> {
    let eligible: Vec<&MenuItem> = items
        .iter()
        .filter(|item| item.calories() > 0.0)
        .filter(|item| !vegetarian_only || item.is_vegetarian())
        .collect();

    let max_combo_size = max_combo_size(&eligible, max_calories, max_servings);

    debug!(
        items.total = items.len(),
        pool.size = eligible.len(),
        pool.max_combo_size = max_combo_size,
        vegetarian_only,
        "Built candidate pool"
    );

    CandidatePool {
        items: eligible,
        max_combo_size,
    }
}

/// Combo size bound: `min(max_servings, floor(max_calories / cheapest calories))`
///
/// Returns `0` for an empty pool. Falls back to `max_servings` when the
/// cheapest item has no positive calorie value.
#[must_use]
pub fn max_combo_size(pool: &[&MenuItem], max_calories: f64, max_servings: u32) -> usize {
    let Some(min_item_calories) = pool
        .iter()
        .map(|item| item.calories())
        .min_by(f64::total_cmp)
    else {
        return 0;
    };

    let requested = max_servings as usize;
    if min_item_calories <= 0.0 {
        return requested;
    }

    // Float-to-int casts saturate, so negative or NaN ratios become 0
    let affordable = (max_calories / min_item_calories).floor() as usize;
    requested.min(affordable)
}

/// Number of multisets of size `1..=max_combo_size` over `pool_size` items
///
/// Saturates at `u64::MAX`.
#[must_use]
pub fn candidate_space_size(pool_size: usize, max_combo_size: usize) -> u64 {
    if pool_size == 0 {
        return 0;
    }

    let n = pool_size as u128;
    let mut per_size: u128 = 1;
    let mut total: u128 = 0;
    for r in 1..=max_combo_size as u128 {
        // C(n + r - 1, r) = C(n + r - 2, r - 1) * (n + r - 1) / r, exact at every step
        let Some(next) = per_size.checked_mul(n + r - 1) else {
            return u64::MAX;
        };
        per_size = next / r;
        total = total.saturating_add(per_size);
        if total > u128::from(u64::MAX) {
            return u64::MAX;
        }
    }
    u64::try_from(total).unwrap_or(u64::MAX)
}

/// Enumerate the pool and keep every combo satisfying `constraints`
///
/// Results are in enumeration order: by size, then lexicographically by pool
/// index. Identical pools and constraints always yield identical output.
///
/// # Errors
///
/// Returns `ErrorCode::ResourceLimitExceeded` when the number of evaluated
/// candidates exceeds `limits.max_evaluations`.
pub fn search(
    pool: &CandidatePool<'_>,
    constraints: &ComboConstraints,
    limits: &SearchLimits,
) -> AppResult<Vec<ComboCandidate>> {
    if pool.is_empty() || pool.max_combo_size() == 0 {
        return Ok(Vec::new());
    }

    debug!(
        pool.size = pool.len(),
        pool.max_combo_size = pool.max_combo_size(),
        search.space = candidate_space_size(pool.len(), pool.max_combo_size()),
        "Starting combo enumeration"
    );

    let mut enumeration = Enumeration {
        pool: pool.items(),
        constraints,
        max_evaluations: limits.max_evaluations,
        evaluations: 0,
        indices: Vec::new(),
        prefix: Vec::new(),
        valid: Vec::new(),
    };

    for size in 1..=pool.max_combo_size() {
        enumeration.walk(size)?;
    }

    debug!(
        search.evaluations = enumeration.evaluations,
        search.valid = enumeration.valid.len(),
        "Finished combo enumeration"
    );

    Ok(enumeration.valid)
}

/// Iterative walk over non-decreasing index sequences, one size at a time
///
/// `indices[k]` is the pool index of serving `k` and `prefix[k]` the totals of
/// servings `0..=k`. Every stored prefix fits under the calorie maximum. The
/// leading run of first-item servings survives between sizes, so a long run
/// of one cheap item costs one step per size instead of one per serving.
struct Enumeration<'p, 'a> {
    pool: &'p [&'a MenuItem],
    constraints: &'p ComboConstraints,
    max_evaluations: Option<u64>,
    evaluations: u64,
    indices: Vec<usize>,
    prefix: Vec<Macros>,
    valid: Vec<ComboCandidate>,
}

impl Enumeration<'_, '_> {
    /// Visit every sequence of `size` servings in lexicographic order
    fn walk(&mut self, size: usize) -> AppResult<()> {
        let reusable = self.indices.partition_point(|&index| index == 0).min(size);
        self.truncate(reusable);

        let mut from = 0;
        loop {
            if self.indices.len() == size {
                let totals = self.prefix.last().copied().unwrap_or_default();
                self.evaluate(totals)?;
                let Some(next) = self.backtrack() else {
                    return Ok(());
                };
                from = next;
                continue;
            }

            if let Some((index, totals)) = self.first_fit(from) {
                self.indices.push(index);
                self.prefix.push(totals);
                from = index;
            } else {
                let Some(next) = self.backtrack() else {
                    return Ok(());
                };
                from = next;
            }
        }
    }

    /// Smallest pool index at or after `from` that keeps the prefix under the maximum
    fn first_fit(&self, from: usize) -> Option<(usize, Macros)> {
        let parent = self.prefix.last().copied().unwrap_or_default();
        self.pool
            .iter()
            .enumerate()
            .skip(from)
            .map(|(index, item)| (index, parent + *item.macros()))
            .find(|(_, totals)| totals.calories <= self.constraints.calories.max)
    }

    /// Drop the deepest serving that can still move to a later item
    ///
    /// Returns the first pool index to try in its place, or `None` when every
    /// stored serving is already the last pool item. The stack is left intact
    /// in that case so the next size can reuse its leading run.
    fn backtrack(&mut self) -> Option<usize> {
        let last = self.pool.len().saturating_sub(1);
        let movable = self.indices.partition_point(|&index| index < last);
        if movable == 0 {
            return None;
        }
        let index = self.indices[movable - 1];
        self.truncate(movable - 1);
        Some(index + 1)
    }

    fn truncate(&mut self, len: usize) {
        self.indices.truncate(len);
        self.prefix.truncate(len);
    }

    fn evaluate(&mut self, totals: Macros) -> AppResult<()> {
        self.evaluations += 1;
        if let Some(limit) = self.max_evaluations {
            if self.evaluations > limit {
                warn!(
                    search.limit = limit,
                    search.valid = self.valid.len(),
                    "Combo search aborted after reaching the evaluation limit"
                );
                return Err(AppError::resource_limit_exceeded("combo evaluation", limit));
            }
        }

        if !self.constraints.accepts(&totals) {
            return Ok(());
        }

        let chosen = self.indices.iter().filter_map(|&index| self.pool.get(index));
        let mut items = Vec::with_capacity(self.indices.len());
        let mut has_veg_item = false;
        for item in chosen {
            items.push(item.name().to_owned());
            has_veg_item |= item.has_veg_item();
        }

        self.valid.push(ComboCandidate {
            items,
            totals,
            has_veg_item,
        });
        Ok(())
    }
}
