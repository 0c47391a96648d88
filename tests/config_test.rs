// ABOUTME: Integration tests for environment-driven planner and goal configuration
// ABOUTME: Serialized because every test mutates process environment variables
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use mealmaker::config::{ConfigError, DietStatus, GoalConfig, PlannerConfig};
use mealmaker::errors::{AppError, ErrorCode};
use mealmaker::intelligence::SearchLimits;
use serial_test::serial;
use std::env;
use std::path::PathBuf;

const PLANNER_VARS: [&str; 4] = [
    "MEALMAKER_MENU_FILE",
    "MEALMAKER_SOURCE",
    "MEALMAKER_MAX_SERVINGS",
    "MEALMAKER_MAX_EVALUATIONS",
];

const GOAL_VARS: [&str; 4] = [
    "MEALMAKER_DAILY_CALORIES",
    "MEALMAKER_MEALS_PER_DAY",
    "MEALMAKER_CALORIES_REMAINING",
    "MEALMAKER_DIET_STATUS",
];

fn clear_env() {
    for var in PLANNER_VARS.iter().chain(GOAL_VARS.iter()) {
        env::remove_var(var);
    }
}

// ============================================================================
// Planner Configuration
// ============================================================================

#[test]
#[serial]
fn test_planner_defaults_without_env() {
    clear_env();
    let config = PlannerConfig::from_env().unwrap();
    assert_eq!(config, PlannerConfig::default());
    assert_eq!(config.menu_file, PathBuf::from("current_menu.json"));
    assert_eq!(config.search_limits(), SearchLimits::default());
}

#[test]
#[serial]
fn test_planner_env_overrides() {
    clear_env();
    env::set_var("MEALMAKER_MENU_FILE", "/tmp/menus/today.json");
    env::set_var("MEALMAKER_SOURCE", "Panda Express");
    env::set_var("MEALMAKER_MAX_SERVINGS", "3");
    env::set_var("MEALMAKER_MAX_EVALUATIONS", "0");

    let config = PlannerConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.menu_file, PathBuf::from("/tmp/menus/today.json"));
    assert_eq!(config.source, "Panda Express");
    assert_eq!(config.max_servings, 3);
    assert_eq!(config.search_limits(), SearchLimits::unlimited());
}

#[test]
#[serial]
fn test_planner_rejects_unparsable_value() {
    clear_env();
    env::set_var("MEALMAKER_MAX_SERVINGS", "plenty");
    let result = PlannerConfig::from_env();
    clear_env();

    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
#[serial]
fn test_planner_rejects_zero_servings() {
    clear_env();
    env::set_var("MEALMAKER_MAX_SERVINGS", "0");
    let result = PlannerConfig::from_env();
    clear_env();

    let error: AppError = result.unwrap_err().into();
    assert_eq!(error.code, ErrorCode::ConfigError);
    assert_eq!(error.code.exit_code(), 2);
}

// ============================================================================
// Goal Configuration
// ============================================================================

#[test]
#[serial]
fn test_goal_env_overrides() {
    clear_env();
    env::set_var("MEALMAKER_DAILY_CALORIES", "1800");
    env::set_var("MEALMAKER_MEALS_PER_DAY", "2");
    env::set_var("MEALMAKER_DIET_STATUS", "cutting");
    env::set_var("MEALMAKER_CALORIES_REMAINING", "700");

    let config = GoalConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.status, DietStatus::Cutting);
    assert_eq!(config.calories_remaining, Some(700.0));
    // min(1800 / 2, 700)
    assert!((config.meal_calorie_target() - 700.0).abs() < 1e-9);
    let (min, max) = config.calorie_window();
    assert!((min - 490.0).abs() < 1e-9);
    assert!((max - 700.0).abs() < 1e-9);
}

#[test]
#[serial]
fn test_goal_rejects_unknown_status() {
    clear_env();
    env::set_var("MEALMAKER_DIET_STATUS", "feasting");
    let result = GoalConfig::from_env();
    clear_env();

    assert!(result.is_err());
}

#[test]
#[serial]
fn test_goal_default_constraints() {
    clear_env();
    let config = GoalConfig::from_env().unwrap();
    let constraints = config.default_constraints(5);

    // Bulking at 2400 kcal over three meals: window [800, 1040]
    assert!((constraints.calories.min - 800.0).abs() < 1e-9);
    assert!((constraints.calories.max - 1_040.0).abs() < 1e-9);
    // Protein [800 * 0.3 / 4, 1040 * 0.6 / 4]
    assert!((constraints.protein.min - 60.0).abs() < 1e-9);
    assert!((constraints.protein.max.unwrap() - 156.0).abs() < 1e-9);
    // Carbs [800 * 0.4 / 4, 1040 * 0.5 / 4]
    assert!((constraints.carbs.min - 80.0).abs() < 1e-9);
    assert!((constraints.carbs.max.unwrap() - 130.0).abs() < 1e-9);
    // Fat [800 * 0.15 / 9, 1040 * 0.3 / 9]
    assert!((constraints.fat.min - 800.0 * 0.15 / 9.0).abs() < 1e-9);
    assert!((constraints.fat.max.unwrap() - 1_040.0 * 0.3 / 9.0).abs() < 1e-9);
    assert_eq!(constraints.max_servings, 5);
    assert!(constraints.validate().is_ok());
}
