// ABOUTME: Final combo selection strategies over a ranked combo list
// ABOUTME: Uniform random draw with a request-scoped seedable RNG, plus top-k access
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use mealmaker_core::models::Combo;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Pick one combo uniformly at random, ignoring rank
///
/// Returns `None` for an empty list.
pub fn select<'a, R>(combos: &'a [Combo], rng: &mut R) -> Option<&'a Combo>
where
    R: Rng + ?Sized,
{
    combos.choose(rng)
}

/// The `k` best-ranked combos (fewer when the list is shorter)
#[must_use]
pub fn top_k(combos: &[Combo], k: usize) -> &[Combo] {
    combos.get(..k.min(combos.len())).unwrap_or_default()
}

/// Random source for one request: deterministic when seeded, entropy-backed otherwise
#[must_use]
pub fn selection_rng(seed: Option<u64>) -> ChaCha8Rng {
    seed.map_or_else(ChaCha8Rng::from_entropy, ChaCha8Rng::seed_from_u64)
}
