// ABOUTME: Linear recipe scaling with readability rounding of ingredient quantities
// ABOUTME: Snaps fractional parts to common kitchen fractions (1/8, 1/4, 1/3, 1/2, 2/3, 3/4)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Grocermator

//! Recipe scaler.
//!
//! Quantities are multiplied by `target / source` servings and then rounded
//! for readability:
//!
//! - fractional part below 0.05 → drop it
//! - fractional part above 0.95 → round up to the next whole number
//! - otherwise snap to the nearest of `READABLE_FRACTIONS`, first match winning ties
//!
//! Every snapped value rounds to itself, so re-scaling a recipe to the
//! serving count it already has leaves every quantity unchanged.

use grocermator_core::errors::ConfigurationError;
use grocermator_core::models::{IngredientReference, MealPlan, Recipe};
use tracing::debug;

use crate::config::{PlannerConfig, ScalingConfig};

/// Fractions quantities snap to, in tie-breaking order
pub const READABLE_FRACTIONS: [f64; 6] = [0.125, 0.25, 0.33, 0.5, 0.67, 0.75];

/// Scales recipes using a fixed set of rounding thresholds
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeScaler {
    config: ScalingConfig,
}

impl Default for RecipeScaler {
    fn default() -> Self {
        Self::new(PlannerConfig::global().scaling.clone())
    }
}

impl RecipeScaler {
    /// Create a scaler with explicit thresholds
    #[must_use]
    pub const fn new(config: ScalingConfig) -> Self {
        Self { config }
    }

    /// Round a quantity to a readable value
    #[must_use]
    pub fn round(&self, value: f64) -> f64 {
        let whole = value.floor();
        let fraction = value - whole;

        if fraction < self.config.round_down_below {
            return whole;
        }
        if fraction > self.config.round_up_above {
            return whole + 1.0;
        }

        let mut closest = fraction;
        let mut min_diff = 1.0;
        for candidate in READABLE_FRACTIONS {
            let diff = (fraction - candidate).abs();
            if diff < min_diff {
                min_diff = diff;
                closest = candidate;
            }
        }

        whole + closest
    }

    /// Multiply one ingredient line by `factor` and round the result
    #[must_use]
    pub fn scale_ingredient(&self, ingredient: &IngredientReference, factor: f64) -> IngredientReference {
        IngredientReference {
            quantity: self.round(ingredient.quantity * factor),
            ..ingredient.clone()
        }
    }

    /// Rescale a recipe to `target_servings`, returning a new recipe
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::ZeroServings` when the source recipe has no
    /// serving count and `ConfigurationError::ZeroTargetServings` when the
    /// target is zero.
    pub fn scale(&self, recipe: &Recipe, target_servings: u32) -> Result<Recipe, ConfigurationError> {
        if recipe.servings == 0 {
            return Err(ConfigurationError::ZeroServings {
                recipe_id: recipe.id.clone(),
            });
        }
        if target_servings == 0 {
            return Err(ConfigurationError::ZeroTargetServings);
        }

        let factor = f64::from(target_servings) / f64::from(recipe.servings);
        debug!(
            recipe_id = %recipe.id,
            from = recipe.servings,
            to = target_servings,
            factor,
            "Scaling recipe"
        );

        Ok(Recipe {
            servings: target_servings,
            ingredients: recipe
                .ingredients
                .iter()
                .map(|ingredient| self.scale_ingredient(ingredient, factor))
                .collect(),
            ..recipe.clone()
        })
    }

    /// Replace one meal plan slot with a rescaled snapshot
    ///
    /// The catalog recipe the slot was copied from is not affected.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::SlotOutOfRange` for a bad index, or any
    /// error from [`RecipeScaler::scale`].
    pub fn rescale_slot(
        &self,
        plan: &mut MealPlan,
        index: usize,
        target_servings: u32,
    ) -> Result<(), ConfigurationError> {
        let len = plan.recipes.len();
        let slot = plan
            .recipes
            .get_mut(index)
            .ok_or(ConfigurationError::SlotOutOfRange { index, len })?;
        *slot = self.scale(slot, target_servings)?;
        Ok(())
    }
}

/// Rescale a recipe using the global configuration
///
/// # Errors
///
/// See [`RecipeScaler::scale`].
pub fn scale_recipe(recipe: &Recipe, target_servings: u32) -> Result<Recipe, ConfigurationError> {
    RecipeScaler::default().scale(recipe, target_servings)
}

/// Scale one ingredient line using the global configuration
#[must_use]
pub fn scale_ingredient(ingredient: &IngredientReference, factor: f64) -> IngredientReference {
    RecipeScaler::default().scale_ingredient(ingredient, factor)
}

/// Round a quantity for readability using the global configuration
#[must_use]
pub fn round_to_readable_fraction(value: f64) -> f64 {
    RecipeScaler::default().round(value)
}
