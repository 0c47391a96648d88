// ABOUTME: Core types and constants for the meal maker combo engine
// ABOUTME: Foundation crate with error handling, keyword tables, and data models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Meal Maker Core
//!
//! Foundation crate providing shared types and constants for the meal maker.
//! This crate is designed to change infrequently, enabling incremental
//! compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Keyword tables and default values
//! - **models**: Raw and canonical menu items, constraints, and combos

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (menu items, constraints, combos)
pub mod models;
