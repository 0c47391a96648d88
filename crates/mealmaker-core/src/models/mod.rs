// ABOUTME: Core data models for menu items, search constraints, and combos
// ABOUTME: Shared by the normalizer, the combo search engine, and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Raw and canonical menu items plus the per-source menu map
pub mod menu;

/// Nutrient ranges and the per-search constraint set
pub mod constraints;

/// Macro totals, internal combo candidates, and public combos
pub mod combo;

pub use combo::{Combo, ComboCandidate, Macros};
pub use constraints::{CalorieRange, ComboConstraints, NutrientRange};
pub use menu::{Menu, MenuItem, RawMenuItem};
