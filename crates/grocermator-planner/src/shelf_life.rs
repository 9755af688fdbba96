// ABOUTME: Static shelf-life table for common grocery ingredients
// ABOUTME: Maps ingredient names to category, shelf life, common unit, and package size
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Grocermator

//! Shelf-life lookup.
//!
//! Matching is a case-insensitive exact comparison against the table; there
//! is no fuzzy or partial matching. Ingredients missing from the table fall
//! back to a default shelf life (7 days unless configured otherwise).

use std::collections::HashMap;
use std::sync::LazyLock;

use grocermator_core::models::IngredientCategory;

use crate::config::PlannerConfig;

/// Shelf-life facts for one ingredient
#[derive(Debug, Clone, PartialEq)]
pub struct ShelfLifeEntry {
    /// Canonical lowercase name
    pub name: &'static str,
    /// Grocery category
    pub category: IngredientCategory,
    /// Days the ingredient keeps once bought
    pub shelf_life_days: u32,
    /// Unit the ingredient is usually measured in
    pub unit: &'static str,
    /// Typical retail pack size in `unit`, when packs are standard
    pub package_size: Option<f64>,
}

const fn entry(
    name: &'static str,
    category: IngredientCategory,
    shelf_life_days: u32,
    unit: &'static str,
    package_size: Option<f64>,
) -> ShelfLifeEntry {
    ShelfLifeEntry {
        name,
        category,
        shelf_life_days,
        unit,
        package_size,
    }
}

/// Shelf-life table, grouped by category
static SHELF_LIFE_TABLE: &[ShelfLifeEntry] = &[
    entry("lettuce", IngredientCategory::Produce, 7, "whole", None),
    entry("salad leaves", IngredientCategory::Produce, 7, "bag", None),
    entry("spinach", IngredientCategory::Produce, 7, "bunch", None),
    entry("arugula", IngredientCategory::Produce, 5, "bunch", None),
    entry("tomato", IngredientCategory::Produce, 7, "whole", None),
    entry("cucumber", IngredientCategory::Produce, 7, "whole", None),
    entry("bell pepper", IngredientCategory::Produce, 10, "whole", None),
    entry("mushrooms", IngredientCategory::Produce, 7, "g", Some(250.0)),
    entry("avocado", IngredientCategory::Produce, 5, "whole", None),
    entry("banana", IngredientCategory::Produce, 5, "whole", None),
    entry("berries", IngredientCategory::Produce, 5, "g", Some(250.0)),
    entry("strawberries", IngredientCategory::Produce, 5, "g", Some(250.0)),
    entry("blueberries", IngredientCategory::Produce, 7, "g", Some(125.0)),
    entry("grapes", IngredientCategory::Produce, 7, "g", Some(500.0)),
    entry("herbs", IngredientCategory::Produce, 7, "bunch", None),
    entry("basil", IngredientCategory::Produce, 7, "bunch", None),
    entry("parsley", IngredientCategory::Produce, 7, "bunch", None),
    entry("cilantro", IngredientCategory::Produce, 7, "bunch", None),
    entry("carrot", IngredientCategory::Produce, 14, "whole", None),
    entry("celery", IngredientCategory::Produce, 14, "bunch", None),
    entry("broccoli", IngredientCategory::Produce, 10, "whole", None),
    entry("cauliflower", IngredientCategory::Produce, 10, "whole", None),
    entry("cabbage", IngredientCategory::Produce, 21, "whole", None),
    entry("apple", IngredientCategory::Produce, 21, "whole", None),
    entry("orange", IngredientCategory::Produce, 14, "whole", None),
    entry("lemon", IngredientCategory::Produce, 21, "whole", None),
    entry("lime", IngredientCategory::Produce, 21, "whole", None),
    entry("onion", IngredientCategory::Produce, 30, "whole", None),
    entry("garlic", IngredientCategory::Produce, 30, "clove", None),
    entry("potato", IngredientCategory::Produce, 30, "whole", None),
    entry("sweet potato", IngredientCategory::Produce, 21, "whole", None),
    entry("ginger", IngredientCategory::Produce, 21, "g", Some(100.0)),
    entry("milk", IngredientCategory::Dairy, 7, "ml", Some(1000.0)),
    entry("cream", IngredientCategory::Dairy, 7, "ml", Some(300.0)),
    entry("yogurt", IngredientCategory::Dairy, 14, "g", Some(500.0)),
    entry("cheese", IngredientCategory::Dairy, 21, "g", Some(200.0)),
    entry("parmesan", IngredientCategory::Dairy, 30, "g", Some(100.0)),
    entry("mozzarella", IngredientCategory::Dairy, 14, "g", Some(250.0)),
    entry("cheddar", IngredientCategory::Dairy, 21, "g", Some(200.0)),
    entry("butter", IngredientCategory::Dairy, 30, "g", Some(250.0)),
    entry("eggs", IngredientCategory::Dairy, 21, "whole", Some(12.0)),
    entry("chicken", IngredientCategory::Meat, 2, "g", Some(500.0)),
    entry("beef", IngredientCategory::Meat, 3, "g", Some(500.0)),
    entry("pork", IngredientCategory::Meat, 3, "g", Some(500.0)),
    entry("fish", IngredientCategory::Meat, 2, "g", Some(400.0)),
    entry("salmon", IngredientCategory::Meat, 2, "g", Some(400.0)),
    entry("shrimp", IngredientCategory::Meat, 2, "g", Some(300.0)),
    entry("bacon", IngredientCategory::Meat, 7, "g", Some(200.0)),
    entry("sausage", IngredientCategory::Meat, 7, "g", Some(400.0)),
    entry("rice", IngredientCategory::Pantry, 365, "g", Some(1000.0)),
    entry("pasta", IngredientCategory::Pantry, 365, "g", Some(500.0)),
    entry("flour", IngredientCategory::Pantry, 180, "g", Some(1000.0)),
    entry("sugar", IngredientCategory::Pantry, 365, "g", Some(1000.0)),
    entry("salt", IngredientCategory::Pantry, 365, "g", Some(500.0)),
    entry("olive oil", IngredientCategory::Pantry, 180, "ml", Some(500.0)),
    entry("vegetable oil", IngredientCategory::Pantry, 180, "ml", Some(1000.0)),
    entry("soy sauce", IngredientCategory::Pantry, 365, "ml", Some(250.0)),
    entry("vinegar", IngredientCategory::Pantry, 365, "ml", Some(500.0)),
    entry("canned tomatoes", IngredientCategory::Pantry, 365, "can", Some(400.0)),
    entry("beans", IngredientCategory::Pantry, 365, "can", Some(400.0)),
    entry("lentils", IngredientCategory::Pantry, 365, "g", Some(500.0)),
    entry("chickpeas", IngredientCategory::Pantry, 365, "can", Some(400.0)),
    entry("bread", IngredientCategory::Pantry, 5, "slice", Some(20.0)),
    entry("tortilla", IngredientCategory::Pantry, 14, "pc", Some(8.0)),
    entry("frozen vegetables", IngredientCategory::Frozen, 90, "g", Some(500.0)),
    entry("frozen peas", IngredientCategory::Frozen, 90, "g", Some(500.0)),
    entry("frozen corn", IngredientCategory::Frozen, 90, "g", Some(500.0)),
    entry("ice cream", IngredientCategory::Frozen, 60, "ml", Some(500.0)),
];

/// Lowercase name index over `SHELF_LIFE_TABLE`
static SHELF_LIFE_INDEX: LazyLock<HashMap<&'static str, &'static ShelfLifeEntry>> =
    LazyLock::new(|| {
        SHELF_LIFE_TABLE
            .iter()
            .map(|entry| (entry.name, entry))
            .collect()
    });

/// Look up an ingredient by name (case-insensitive exact match)
#[must_use]
pub fn lookup(name: &str) -> Option<&'static ShelfLifeEntry> {
    SHELF_LIFE_INDEX.get(name.to_lowercase().as_str()).copied()
}

/// Shelf life in days, or `default_days` when the ingredient is not in the table
#[must_use]
pub fn shelf_life_days_or(name: &str, default_days: u32) -> u32 {
    lookup(name).map_or(default_days, |entry| entry.shelf_life_days)
}

/// Shelf life in days, falling back to the configured default
#[must_use]
pub fn shelf_life_days(name: &str) -> u32 {
    shelf_life_days_or(name, PlannerConfig::global().shelf_life.default_days)
}

/// Grocery category, or `Other` when the ingredient is not in the table
#[must_use]
pub fn category(name: &str) -> IngredientCategory {
    lookup(name).map_or(IngredientCategory::Other, |entry| entry.category)
}

/// Every ingredient name in the table, sorted alphabetically
#[must_use]
pub fn all_ingredient_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = SHELF_LIFE_TABLE.iter().map(|entry| entry.name).collect();
    names.sort_unstable();
    names
}
