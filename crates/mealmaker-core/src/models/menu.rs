// ABOUTME: Menu item models as scraped (raw) and as used by the search engine (canonical)
// ABOUTME: Raw items accept arbitrary JSON values; canonical items are immutable and clean
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::combo::Macros;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Menu keyed by source or period label ("Lunch", "Panda Express", ...)
pub type Menu = BTreeMap<String, Vec<RawMenuItem>>;

/// Menu item exactly as it appears in the scraped menu file
///
/// Nutrient values are kept as raw JSON because the scraper emits numbers,
/// numeric strings, and free text ("less than 1g") interchangeably.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawMenuItem {
    /// Display name
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    /// Calories per serving
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<Value>,
    /// Protein per serving (grams)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein: Option<Value>,
    /// Fat per serving (grams)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fats: Option<Value>,
    /// Carbohydrates per serving (grams)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbs: Option<Value>,
    /// Vegetarian flag reported by the menu source
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub veg: Option<Value>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl RawMenuItem {
    /// Create a raw item with only a name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set calories per serving
    #[must_use]
    pub fn with_calories(mut self, calories: f64) -> Self {
        self.calories = Some(Value::from(calories));
        self
    }

    /// Set protein per serving (grams)
    #[must_use]
    pub fn with_protein(mut self, protein: f64) -> Self {
        self.protein = Some(Value::from(protein));
        self
    }

    /// Set carbohydrates per serving (grams)
    #[must_use]
    pub fn with_carbs(mut self, carbs: f64) -> Self {
        self.carbs = Some(Value::from(carbs));
        self
    }

    /// Set fat per serving (grams)
    #[must_use]
    pub fn with_fats(mut self, fats: f64) -> Self {
        self.fats = Some(Value::from(fats));
        self
    }

    /// Set the source-reported vegetarian flag
    #[must_use]
    pub fn with_veg(mut self, veg: bool) -> Self {
        self.veg = Some(Value::Bool(veg));
        self
    }
}

/// Canonical menu item consumed by the combo search engine
///
/// Immutable once built; the dietary flags are derived from the name and the
/// source flag at normalization time and never change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuItem {
    name: String,
    macros: Macros,
    vegetarian: bool,
    has_veg_item: bool,
}

impl MenuItem {
    /// Build a canonical item from already-cleaned parts
    #[must_use]
    pub fn from_parts(
        name: impl Into<String>,
        macros: Macros,
        vegetarian: bool,
        has_veg_item: bool,
    ) -> Self {
        Self {
            name: name.into(),
            macros,
            vegetarian,
            has_veg_item,
        }
    }

    /// Display name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Per-serving macro values
    #[must_use]
    pub const fn macros(&self) -> &Macros {
        &self.macros
    }

    /// Calories per serving
    #[must_use]
    pub const fn calories(&self) -> f64 {
        self.macros.calories
    }

    /// Whether the item is considered vegetarian
    #[must_use]
    pub const fn is_vegetarian(&self) -> bool {
        self.vegetarian
    }

    /// Whether the item is produce or legume forward
    #[must_use]
    pub const fn has_veg_item(&self) -> bool {
        self.has_veg_item
    }
}
