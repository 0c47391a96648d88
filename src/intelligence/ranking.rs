// ABOUTME: Ranking and vegetable-preference resolution for valid combos
// ABOUTME: Orders by protein then calories and falls back when no combo has a vegetable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use mealmaker_core::models::{Combo, ComboCandidate};
use serde::Serialize;
use std::cmp::Ordering;
use tracing::warn;

/// How the vegetable preference affected the ranked list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VegetablePreference {
    /// The caller did not ask for a vegetable item
    NotRequested,
    /// Only combos containing a vegetable item were kept
    Applied,
    /// No combo contained a vegetable item; the unfiltered list was kept
    FellBack,
}

/// Rank ordering: higher total protein first, then lower total calories
///
/// Ties on both keys compare equal so a stable sort keeps enumeration order.
#[must_use]
pub fn compare_rank(a: &ComboCandidate, b: &ComboCandidate) -> Ordering {
    b.totals
        .protein
        .total_cmp(&a.totals.protein)
        .then_with(|| a.totals.calories.total_cmp(&b.totals.calories))
}

/// Sort candidates by [`compare_rank`], keeping enumeration order for ties
#[must_use]
pub fn rank(mut candidates: Vec<ComboCandidate>) -> Vec<ComboCandidate> {
    candidates.sort_by(compare_rank);
    candidates
}

/// Keep only vegetable-containing combos when requested, unless none exist
///
/// The fallback is advisory: it is logged as a warning and reported through
/// the returned [`VegetablePreference`], never as an error.
#[must_use]
pub fn apply_vegetable_preference(
    ranked: Vec<ComboCandidate>,
    require_vegetable: bool,
) -> (Vec<ComboCandidate>, VegetablePreference) {
    if !require_vegetable {
        return (ranked, VegetablePreference::NotRequested);
    }

    if ranked.iter().any(|candidate| candidate.has_veg_item) {
        let filtered = ranked
            .into_iter()
            .filter(|candidate| candidate.has_veg_item)
            .collect();
        return (filtered, VegetablePreference::Applied);
    }

    warn!(
        combos = ranked.len(),
        "No combo included a vegetable item; falling back to the unfiltered set"
    );
    (ranked, VegetablePreference::FellBack)
}

/// Drop internal-only fields, producing the caller-facing combos
#[must_use]
pub fn finalize(candidates: Vec<ComboCandidate>) -> Vec<Combo> {
    candidates.into_iter().map(Combo::from).collect()
}
