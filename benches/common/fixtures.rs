// ABOUTME: Benchmark fixtures for generating synthetic recipe catalogs
// ABOUTME: Provides deterministic data generation for reproducible performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Grocermator

//! Benchmark fixtures for generating synthetic recipe catalogs.
//!
//! Ingredient names are drawn from the shelf-life table so waste scoring
//! exercises real lookups, with a few unknown names mixed in.

use grocermator::models::{IngredientCategory, IngredientEntity, IngredientReference, Recipe};
use grocermator::planner::shelf_life::all_ingredient_names;

/// Predefined catalog sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum CatalogSize {
    /// Small catalog (20 recipes) - new user
    Small,
    /// Medium catalog (200 recipes) - typical user
    Medium,
    /// Large catalog (2000 recipes) - heavy importer
    Large,
}

impl CatalogSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 20,
            Self::Medium => 200,
            Self::Large => 2_000,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Small => "20",
            Self::Medium => "200",
            Self::Large => "2000",
        }
    }
}

const UNITS: [&str; 4] = ["g", "ml", "whole", "tbsp"];

fn ingredient_name(pool: &[&'static str], index: usize) -> String {
    // Every seventh pick falls outside the table
    if index % 7 == 6 {
        format!("mystery spice {}", index % 13)
    } else {
        pool[index % pool.len()].to_owned()
    }
}

/// Generate a deterministic recipe catalog
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn generate_catalog(size: CatalogSize) -> Vec<Recipe> {
    let pool = all_ingredient_names();

    (0..size.count())
        .map(|index| {
            let lines = (0..3 + index % 5)
                .map(|slot| {
                    let pick = index * 5 + slot * 11;
                    IngredientReference::new(
                        ingredient_name(&pool, pick),
                        (50 + pick % 400) as f64,
                        UNITS[pick % UNITS.len()],
                    )
                })
                .collect::<Vec<_>>();

            Recipe::new(format!("Recipe {index}"), 2 + (index % 4) as u32)
                .with_id(format!("recipe-{index}"))
                .with_ingredients(lines)
        })
        .collect()
}

/// Catalog entities with package sizes for every table ingredient
#[must_use]
pub fn generate_ingredients() -> Vec<IngredientEntity> {
    all_ingredient_names()
        .into_iter()
        .map(|name| {
            IngredientEntity::new(name, IngredientCategory::Other, 7, 250.0, "g").with_id(name)
        })
        .collect()
}
