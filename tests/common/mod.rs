// ABOUTME: Shared test utilities and menu fixtures for integration tests
// ABOUTME: Provides quiet logging setup and small hand-checked menus
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `mealmaker`

use mealmaker::models::{Macros, MenuItem, RawMenuItem};
use std::env;
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Grilled chicken: 200 kcal, 30 g protein, 0 g carbs, 8 g fat
pub fn grilled_chicken() -> RawMenuItem {
    RawMenuItem::new("Grilled Chicken")
        .with_calories(200.0)
        .with_protein(30.0)
        .with_carbs(0.0)
        .with_fats(8.0)
        .with_veg(false)
}

/// Brown rice: 150 kcal, 3 g protein, 30 g carbs, 1 g fat
pub fn brown_rice() -> RawMenuItem {
    RawMenuItem::new("Brown Rice")
        .with_calories(150.0)
        .with_protein(3.0)
        .with_carbs(30.0)
        .with_fats(1.0)
        .with_veg(true)
}

/// The two-item menu used by the chicken and rice scenarios
pub fn chicken_and_rice() -> Vec<RawMenuItem> {
    vec![grilled_chicken(), brown_rice()]
}

/// A canonical item built directly, bypassing the normalizer
pub fn menu_item(
    name: &str,
    calories: f64,
    protein: f64,
    vegetarian: bool,
    has_veg_item: bool,
) -> MenuItem {
    MenuItem::from_parts(
        name,
        Macros::new(calories, protein, 0.0, 0.0),
        vegetarian,
        has_veg_item,
    )
}
