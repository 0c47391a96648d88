// ABOUTME: Planner configuration: menu file, menu source, serving cap, and search limits
// ABOUTME: Loaded from MEALMAKER_* environment variables on top of defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{apply_env_var, ConfigError};
use crate::intelligence::SearchLimits;
use mealmaker_core::constants::defaults::{
    DEFAULT_MAX_EVALUATIONS, DEFAULT_MAX_SERVINGS, DEFAULT_MENU_FILE, DEFAULT_SOURCE,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Planner configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Menu JSON file with every source and its items
    pub menu_file: PathBuf,
    /// Menu source label to plan from
    pub source: String,
    /// Maximum servings per combo
    pub max_servings: u32,
    /// Evaluated-candidate ceiling per search; `0` disables the ceiling
    pub max_evaluations: u64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            menu_file: PathBuf::from(DEFAULT_MENU_FILE),
            source: DEFAULT_SOURCE.to_owned(),
            max_servings: DEFAULT_MAX_SERVINGS,
            max_evaluations: DEFAULT_MAX_EVALUATIONS,
        }
    }
}

impl PlannerConfig {
    /// Load configuration from environment variables
    ///
    /// Recognized variables: `MEALMAKER_MENU_FILE`, `MEALMAKER_SOURCE`,
    /// `MEALMAKER_MAX_SERVINGS`, `MEALMAKER_MAX_EVALUATIONS`.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable cannot be parsed or validation fails
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        apply_env_var("MEALMAKER_MENU_FILE", &mut config.menu_file)?;
        apply_env_var("MEALMAKER_SOURCE", &mut config.source)?;
        apply_env_var("MEALMAKER_MAX_SERVINGS", &mut config.max_servings)?;
        apply_env_var("MEALMAKER_MAX_EVALUATIONS", &mut config.max_evaluations)?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error for a zero serving cap or an empty source label
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_servings == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "max_servings must be at least 1".to_owned(),
            ));
        }
        if self.source.trim().is_empty() {
            return Err(ConfigError::InvalidRange(
                "source must not be empty".to_owned(),
            ));
        }
        Ok(())
    }

    /// Search limits derived from this configuration
    #[must_use]
    pub const fn search_limits(&self) -> SearchLimits {
        if self.max_evaluations == 0 {
            SearchLimits::unlimited()
        } else {
            SearchLimits::with_max_evaluations(self.max_evaluations)
        }
    }
}
