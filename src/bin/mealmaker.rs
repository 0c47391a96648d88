// ABOUTME: Meal maker CLI - picks a meal combo from today's combined menu
// ABOUTME: Derives default bounds from the daily goal model and prints the combo as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Random combo from the lunch menu using goal-derived bounds
//! mealmaker --menu-file current_menu.json --source Lunch
//!
//! # Explicit calorie and protein windows, vegetarian only
//! mealmaker --min-calories 500 --max-calories 700 --min-protein 30 --vegetarian
//!
//! # Reproducible pick, preferring combos with a vegetable item
//! mealmaker --require-vegetable --seed 42
//!
//! # Show the five best-ranked combos instead of a random pick
//! mealmaker --top 5
//! ```

use clap::Parser;
use mealmaker::config::{DietStatus, GoalConfig, PlannerConfig};
use mealmaker::intelligence::{selection_rng, MealPlanner};
use mealmaker::logging::LoggingConfig;
use mealmaker::menu::{load_menu, select_source};
use mealmaker_core::errors::{AppError, AppResult};
use mealmaker_core::models::{ComboConstraints, NutrientRange};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};

#[derive(Parser)]
#[command(
    name = "mealmaker",
    about = "Generate a meal from today's combined menu",
    long_about = "Finds every combo of menu items (repeats allowed) whose calories and macros fall inside the requested windows, ranks them by protein then calories, and prints one at random."
)]
struct Cli {
    /// Path to the JSON with all periods and restaurants
    #[arg(long)]
    menu_file: Option<PathBuf>,

    /// Key in the menu JSON to pull items from (e.g. Lunch, Panda Express)
    #[arg(long)]
    source: Option<String>,

    /// Minimum total calories
    #[arg(long)]
    min_calories: Option<f64>,

    /// Maximum total calories
    #[arg(long)]
    max_calories: Option<f64>,

    /// Minimum total protein (g)
    #[arg(long)]
    min_protein: Option<f64>,

    /// Maximum total protein (g)
    #[arg(long)]
    max_protein: Option<f64>,

    /// Minimum total carbs (g)
    #[arg(long)]
    min_carbs: Option<f64>,

    /// Maximum total carbs (g)
    #[arg(long)]
    max_carbs: Option<f64>,

    /// Minimum total fats (g)
    #[arg(long)]
    min_fats: Option<f64>,

    /// Maximum total fats (g)
    #[arg(long)]
    max_fats: Option<f64>,

    /// Only include vegetarian items
    #[arg(long)]
    vegetarian: bool,

    /// Prefer combos with at least one green/veg item
    #[arg(long)]
    require_vegetable: bool,

    /// Maximum servings in one combo
    #[arg(long)]
    max_servings: Option<u32>,

    /// Evaluated-combo ceiling per search (0 disables it)
    #[arg(long)]
    max_evaluations: Option<u64>,

    /// Daily calorie budget used to derive default bounds
    #[arg(long)]
    daily_calories: Option<f64>,

    /// Calories left for today; caps the per-meal target
    #[arg(long)]
    calories_remaining: Option<f64>,

    /// Diet status used to derive the default calorie window
    #[arg(long, value_enum)]
    status: Option<DietStatus>,

    /// Seed for a reproducible random pick
    #[arg(long)]
    seed: Option<u64>,

    /// Print the N best-ranked combos instead of a random pick
    #[arg(long)]
    top: Option<usize>,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

impl Cli {
    fn planner_config(&self) -> AppResult<PlannerConfig> {
        let mut config = PlannerConfig::from_env()?;
        if let Some(menu_file) = &self.menu_file {
            config.menu_file.clone_from(menu_file);
        }
        if let Some(source) = &self.source {
            config.source.clone_from(source);
        }
        if let Some(max_servings) = self.max_servings {
            config.max_servings = max_servings;
        }
        if let Some(max_evaluations) = self.max_evaluations {
            config.max_evaluations = max_evaluations;
        }
        config.validate()?;
        Ok(config)
    }

    fn goal_config(&self) -> AppResult<GoalConfig> {
        let mut config = GoalConfig::from_env()?;
        if let Some(daily_calories) = self.daily_calories {
            config.daily_calories = daily_calories;
        }
        if self.calories_remaining.is_some() {
            config.calories_remaining = self.calories_remaining;
        }
        if let Some(status) = self.status {
            config.status = status;
        }
        config.validate()?;
        Ok(config)
    }

    /// Goal-derived defaults with every explicit flag applied on top
    fn constraints(&self, goals: &GoalConfig, max_servings: u32) -> ComboConstraints {
        let mut constraints = goals.default_constraints(max_servings);

        constraints.calories.min = self.min_calories.unwrap_or(constraints.calories.min);
        constraints.calories.max = self.max_calories.unwrap_or(constraints.calories.max);
        override_range(&mut constraints.protein, self.min_protein, self.max_protein);
        override_range(&mut constraints.carbs, self.min_carbs, self.max_carbs);
        override_range(&mut constraints.fat, self.min_fats, self.max_fats);

        constraints
            .with_vegetarian_only(self.vegetarian)
            .with_require_vegetable(self.require_vegetable)
    }
}

fn override_range(range: &mut NutrientRange, min: Option<f64>, max: Option<f64>) {
    if let Some(min) = min {
        range.min = min;
    }
    if max.is_some() {
        range.max = max;
    }
}

fn run(cli: &Cli) -> AppResult<()> {
    let planner_config = cli.planner_config()?;
    let goals = cli.goal_config()?;
    let constraints = cli.constraints(&goals, planner_config.max_servings);
    debug!(?constraints, "Resolved combo constraints");

    let menu = load_menu(&planner_config.menu_file)?;
    let raw_items = select_source(&menu, &planner_config.source)?;
    info!(
        menu.source = %planner_config.source,
        menu.items = raw_items.len(),
        "Planning meal"
    );

    let planner = MealPlanner::new(planner_config.search_limits());
    let plan = planner.generate_from_raw(raw_items, &constraints)?;

    if plan.is_empty() {
        println!("No valid combos with those constraints.");
        return Ok(());
    }

    let output = if let Some(count) = cli.top {
        serde_json::to_string_pretty(plan.top(count))?
    } else {
        let mut rng = selection_rng(cli.seed);
        let choice = plan
            .select(&mut rng)
            .ok_or_else(|| AppError::internal("non-empty plan yielded no selection"))?;
        serde_json::to_string_pretty(choice)?
    };
    println!("{output}");
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    if let Err(e) = logging.init() {
        eprintln!("Failed to initialize logging: {e}");
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            if let Some(available) = e.context.details.get("available") {
                eprintln!("Available keys: {available}");
            }
            ExitCode::from(e.code.exit_code())
        }
    }
}
