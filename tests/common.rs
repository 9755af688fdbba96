// ABOUTME: Shared fixtures and setup helpers for integration tests
// ABOUTME: Provides recipe, catalog, and pantry builders plus quiet test logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Grocermator
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `grocermator`

use std::env;
use std::sync::Once;

use chrono::{DateTime, TimeZone, Utc};
use grocermator::models::{
    IngredientCategory, IngredientEntity, IngredientReference, PantryItem, Recipe,
};
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

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Midday UTC on the given date
pub fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
}

/// Ingredient line without a catalog link
pub fn line(name: &str, quantity: f64, unit: &str) -> IngredientReference {
    IngredientReference::new(name, quantity, unit)
}

/// Recipe with a stable id equal to its name
pub fn recipe(name: &str, servings: u32, lines: Vec<IngredientReference>) -> Recipe {
    Recipe::new(name, servings)
        .with_id(name.to_lowercase().replace(' ', "-"))
        .with_ingredients(lines)
}

/// Small recipe catalog covering perishable, shelf-stable, and seasonal dishes
pub fn sample_catalog() -> Vec<Recipe> {
    vec![
        recipe(
            "Chicken Stir Fry",
            2,
            vec![
                line("chicken", 400.0, "g"),
                line("bell pepper", 2.0, "whole"),
                line("soy sauce", 30.0, "ml"),
            ],
        ),
        recipe(
            "Salmon Rice Bowl",
            2,
            vec![line("salmon", 300.0, "g"), line("rice", 150.0, "g")],
        ),
        recipe(
            "Lentil Soup",
            4,
            vec![
                line("lentils", 250.0, "g"),
                line("carrot", 2.0, "whole"),
                line("onion", 1.0, "whole"),
            ],
        ),
        recipe(
            "Pasta Pomodoro",
            2,
            vec![
                line("pasta", 200.0, "g"),
                line("canned tomatoes", 1.0, "can"),
                line("basil", 1.0, "bunch"),
            ],
        ),
        recipe(
            "Fried Rice",
            2,
            vec![
                line("rice", 200.0, "g"),
                line("eggs", 2.0, "whole"),
                line("soy sauce", 15.0, "ml"),
            ],
        ),
    ]
}

/// Ingredient catalog matching `sample_catalog` where it matters
pub fn sample_ingredients() -> Vec<IngredientEntity> {
    vec![
        IngredientEntity::new("Chicken", IngredientCategory::Meat, 2, 500.0, "g").with_id("chicken"),
        IngredientEntity::new("Rice", IngredientCategory::Pantry, 365, 1000.0, "g").with_id("rice"),
        IngredientEntity::new("Eggs", IngredientCategory::Dairy, 21, 12.0, "whole").with_id("eggs"),
        IngredientEntity::new("Soy Sauce", IngredientCategory::Pantry, 365, 250.0, "ml")
            .with_id("soy-sauce"),
    ]
}

/// Pantry stock for a single catalog ingredient
pub fn stock(ingredient_id: &str, quantity: f64, unit: &str) -> PantryItem {
    PantryItem::new(ingredient_id, quantity, unit)
}
