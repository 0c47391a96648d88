// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Keyword tables for dietary detection and planner defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by domain. All values are process-wide immutable data.

/// Name keywords driving vegetarian and vegetable detection
pub mod keywords;

/// Default values for planner limits, menu lookup, and the daily goal model
pub mod defaults;
