// ABOUTME: Core data models for recipes, meal plans, pantry and shopping lists
// ABOUTME: Re-exports every model type for convenience
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Grocermator

//! # Data Models
//!
//! Records exchanged between the planning engine and its collaborators.
//! All models serialize with camelCase keys, matching the exported document
//! format.

mod ingredient;
mod meal_plan;
mod pantry;
mod recipe;
mod shopping;

pub use ingredient::{IngredientCategory, IngredientEntity};
pub use meal_plan::MealPlan;
pub use pantry::PantryItem;
pub use recipe::{IngredientReference, Recipe, Season, SeasonalInfo};
pub use shopping::ShoppingListItem;
