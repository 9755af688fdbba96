// ABOUTME: Ingredient catalog records owned by catalog management
// ABOUTME: Defines IngredientEntity and IngredientCategory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Grocermator

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Grocery aisle an ingredient belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IngredientCategory {
    /// Fresh fruit, vegetables and herbs
    Produce,
    /// Milk, cheese, eggs and similar
    Dairy,
    /// Meat and seafood
    Meat,
    /// Dry goods and long-life staples
    Pantry,
    /// Frozen goods
    Frozen,
    /// Anything else, including unrecognised categories
    #[default]
    #[serde(other)]
    Other,
}

impl IngredientCategory {
    /// Lowercase name used on the wire
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Produce => "produce",
            Self::Dairy => "dairy",
            Self::Meat => "meat",
            Self::Pantry => "pantry",
            Self::Frozen => "frozen",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for IngredientCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ingredient catalog entry
///
/// Read-only from the planner's point of view: looked up by id, or by
/// case-insensitive name when a line carries no id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientEntity {
    /// Unique catalog identifier
    pub id: String,
    /// Ingredient name
    pub name: String,
    /// Grocery category
    #[serde(default)]
    pub category: IngredientCategory,
    /// Days the ingredient keeps once bought
    #[serde(default, rename = "shelfLife", alias = "shelfLifeDays")]
    pub shelf_life_days: u32,
    /// Quantity in one retail pack, in `unit`
    #[serde(default)]
    pub package_size: f64,
    /// Unit the package size is expressed in
    pub unit: String,
}

impl IngredientEntity {
    /// Create a catalog entry with a fresh identifier
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        category: IngredientCategory,
        shelf_life_days: u32,
        package_size: f64,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            category,
            shelf_life_days,
            package_size,
            unit: unit.into(),
        }
    }

    /// Replace the generated identifier
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}
