// ABOUTME: Core types and constants for the Grocermator meal planner
// ABOUTME: Foundation crate with error handling, data models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Grocermator

#![deny(unsafe_code)]

//! # Grocermator Core
//!
//! Foundation crate providing the shared data model for recipes, meal plans,
//! pantry stock and shopping lists. The planning engine and the application
//! facade both build on these types.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and domain-specific errors
//! - **models**: Recipes, ingredients, meal plans, pantry items, shopping list items
//! - **constants**: Storage keys and the standard unit vocabulary

/// Unified error handling system with standard error codes
pub mod errors;

/// Storage keys and unit vocabulary
pub mod constants;

/// Core data models (Recipe, MealPlan, `PantryItem`, etc.)
pub mod models;
