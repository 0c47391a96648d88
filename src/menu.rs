// ABOUTME: Menu file loading and source lookup for the scraped menu JSON
// ABOUTME: Maps file and parse failures onto AppError codes with useful context
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use mealmaker_core::errors::{AppError, AppResult, ErrorCode};
use mealmaker_core::models::{Menu, RawMenuItem};
use serde_json::json;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Read and parse a menu file
///
/// # Errors
///
/// Returns `ErrorCode::ResourceNotFound` when the file does not exist,
/// `ErrorCode::StorageError` when it cannot be read, and
/// `ErrorCode::SerializationError` when it is not a menu JSON object.
pub fn load_menu(path: &Path) -> AppResult<Menu> {
    let contents = fs::read_to_string(path).map_err(|e| {
        let message = format!("menu file {}: {e}", path.display());
        let error = if e.kind() == io::ErrorKind::NotFound {
            AppError::new(ErrorCode::ResourceNotFound, message)
        } else {
            AppError::storage(message)
        };
        error.with_resource(path.display().to_string()).with_source(e)
    })?;

    let menu = parse_menu(&contents)
        .map_err(|e| e.with_resource(path.display().to_string()))?;
    debug!(
        menu.path = %path.display(),
        menu.sources = menu.len(),
        "Loaded menu file"
    );
    Ok(menu)
}

/// Parse menu JSON: an object mapping source labels to arrays of items
///
/// # Errors
///
/// Returns `ErrorCode::SerializationError` for malformed JSON or a wrong shape.
pub fn parse_menu(contents: &str) -> AppResult<Menu> {
    Ok(serde_json::from_str(contents)?)
}

/// Items listed under `source`
///
/// # Errors
///
/// Returns `ErrorCode::ResourceNotFound` listing the available sources when
/// `source` is not a key of the menu.
pub fn select_source<'a>(menu: &'a Menu, source: &str) -> AppResult<&'a [RawMenuItem]> {
    menu.get(source).map(Vec::as_slice).ok_or_else(|| {
        let available: Vec<&str> = menu.keys().map(String::as_str).collect();
        AppError::not_found(format!("menu source '{source}'")).with_details(json!({
            "source": source,
            "available": available,
        }))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const MENU: &str = r#"{
        "Lunch": [
            {"name": "Grilled Chicken", "calories": 200, "protein": 30, "carbs": 0, "fats": 8, "veg": false},
            {"name": "Brown Rice", "calories": "150", "protein": 3, "carbs": 30, "fats": 1, "veg": true}
        ],
        "Dinner": []
    }"#;

    #[test]
    fn test_parse_and_select_source() {
        let menu = parse_menu(MENU).unwrap();
        let lunch = select_source(&menu, "Lunch").unwrap();
        assert_eq!(lunch.len(), 2);
        assert!(select_source(&menu, "Dinner").unwrap().is_empty());
    }

    #[test]
    fn test_unknown_source_lists_available() {
        let menu = parse_menu(MENU).unwrap();
        let error = select_source(&menu, "Brunch").unwrap_err();
        assert_eq!(error.code, ErrorCode::ResourceNotFound);
        assert_eq!(error.context.details["available"], json!(["Dinner", "Lunch"]));
    }

    #[test]
    fn test_parse_rejects_wrong_shape() {
        let error = parse_menu(r#"["Lunch"]"#).unwrap_err();
        assert_eq!(error.code, ErrorCode::SerializationError);
    }
}
