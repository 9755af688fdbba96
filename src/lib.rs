// ABOUTME: Main library entry point for the Grocermator meal planner
// ABOUTME: Re-exports the planning engine and adds logging, document transfer, and storage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Grocermator

#![deny(unsafe_code)]

//! # Grocermator
//!
//! Meal planning and grocery list engine for a personal recipe application.
//!
//! ## Features
//!
//! - **Meal plan generation**: random or waste-optimized selection with
//!   seasonal and recency filters
//! - **Shopping lists**: merged demand, pantry netting and retail pack counts
//! - **Recipe scaling**: linear scaling with readable kitchen fractions
//! - **Document transfer**: JSON import/export with conflict-aware previews
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use grocermator::planner::{build_shopping_list, GenerationOptions, MealPlanGenerator, SeededRandom};
//! use grocermator::models::{IngredientReference, Recipe};
//!
//! # fn main() -> Result<(), grocermator::errors::AppError> {
//! let catalog = vec![
//!     Recipe::new("Omelette", 2).with_ingredient(IngredientReference::new("eggs", 3.0, "whole")),
//! ];
//! let mut generator = MealPlanGenerator::new(SeededRandom::seeded(7));
//! let plan = generator.generate(&catalog, &GenerationOptions::new(3))?;
//! let list = build_shopping_list(&plan, &[], &[]);
//! println!("{} items to buy", list.len());
//! # Ok(())
//! # }
//! ```

pub use grocermator_core::{constants, errors, models};
pub use grocermator_planner as planner;

/// Structured logging setup
pub mod logging;

/// Document import/export and import previews
pub mod services;

/// Key-value persistence boundary
pub mod storage;
