// ABOUTME: Planning engine for Grocermator meal plans and shopping lists
// ABOUTME: Shelf-life lookup, seasonality, recipe scaling, plan generation, list aggregation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Grocermator

#![deny(unsafe_code)]

//! # Grocermator Planner
//!
//! Pure, synchronous computation over caller-supplied collections. Nothing in
//! this crate performs I/O or holds shared mutable state; the only source of
//! non-determinism is the injectable [`random::RandomSource`] used by random
//! plan generation.
//!
//! ## Modules
//!
//! - **`shelf_life`**: Static ingredient table with shelf life, category and pack size
//! - **seasonality**: Season and month gates for recipes
//! - **scaling**: Recipe scaling with readability rounding
//! - **`meal_plan`**: Random and waste-optimized plan generation
//! - **`shopping_list`**: Aggregation, pantry netting and pack counts
//! - **config**: Tunable weights and thresholds with environment overrides

/// Planner configuration with environment overrides
pub mod config;

/// Static shelf-life table
pub mod shelf_life;

/// Seasonal availability of recipes
pub mod seasonality;

/// Recipe scaling with readability rounding
pub mod scaling;

/// Injectable random sources
pub mod random;

/// Meal plan generation
pub mod meal_plan;

/// Shopping list aggregation and enrichment
pub mod shopping_list;

pub use config::PlannerConfig;
pub use meal_plan::{generate_meal_plan, GenerationOptions, MealPlanGenerator};
pub use random::{FixedSequence, RandomSource, SeededRandom, SystemRandom};
pub use scaling::{scale_recipe, RecipeScaler};
pub use seasonality::is_in_season;
pub use shopping_list::{aggregate, build_shopping_list, enrich};
