// ABOUTME: Configuration management for the planner and the daily goal model
// ABOUTME: Environment-only configuration with defaults, overrides, and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! - **planner**: Menu location and search limits
//! - **goals**: Daily calorie goal model deriving default meal constraints
//!
//! Every configuration type follows the same lifecycle: `Default`, then
//! environment overrides, then `validate()`.

use std::env;
use std::str::FromStr;

/// Configuration error types
pub mod error;
/// Daily calorie goal model and default constraint derivation
pub mod goals;
/// Menu location and search limit configuration
pub mod planner;

pub use error::ConfigError;
pub use goals::{DietStatus, GoalConfig, MacroShares};
pub use planner::PlannerConfig;

/// Overwrite `target` with the parsed value of `env_var_name` when it is set
fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
    if let Ok(val) = env::var(env_var_name) {
        *target = val
            .trim()
            .parse()
            .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}: {val}")))?;
    }
    Ok(())
}
