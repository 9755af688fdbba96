// ABOUTME: Meal plan generator selecting recipes randomly or by a greedy waste heuristic
// ABOUTME: Applies seasonal and recency filters before filling the requested days
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Grocermator

//! Meal Plan Generator
//!
//! Generation is a single synchronous pass:
//!
//! 1. Build the candidate pool, optionally keeping only in-season recipes.
//! 2. Drop recently cooked recipes, but only while the pool stays larger than
//!    `days + recent_recipes.len()`.
//! 3. Fill slots either uniformly at random or greedily by waste score.
//!
//! The waste score for slot `i` of `days` is
//! `(ceiling - perishability) * (days - i) / days + bonus * overlap`, where
//! perishability is the shortest shelf life among the recipe's ingredients and
//! overlap counts ingredient names already bought for earlier slots.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use grocermator_core::errors::ConfigurationError;
use grocermator_core::models::{MealPlan, Recipe};
use tracing::{debug, info};

use crate::config::PlannerConfig;
use crate::random::{RandomSource, SystemRandom};
use crate::seasonality::is_in_season;
use crate::shelf_life::shelf_life_days_or;

/// Options controlling a single generation pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOptions {
    /// Number of meal slots to fill (at least 1)
    pub days: u32,
    /// First day of the plan; defaults to the generation time
    pub start_date: Option<DateTime<Utc>>,
    /// Use the greedy waste heuristic instead of random selection
    pub optimize_waste: bool,
    /// Allow the same recipe in several slots
    pub allow_repeats: bool,
    /// Only consider recipes in season on the start date
    pub seasonal_only: bool,
    /// Recipe ids to avoid when the pool has enough slack
    pub recent_recipes: HashSet<String>,
}

impl GenerationOptions {
    /// Random selection without repeats over `days` slots
    #[must_use]
    pub fn new(days: u32) -> Self {
        Self {
            days,
            start_date: None,
            optimize_waste: false,
            allow_repeats: false,
            seasonal_only: false,
            recent_recipes: HashSet::new(),
        }
    }

    /// Set the first day of the plan
    #[must_use]
    pub fn with_start_date(mut self, start_date: DateTime<Utc>) -> Self {
        self.start_date = Some(start_date);
        self
    }

    /// Toggle waste-optimized selection
    #[must_use]
    pub fn with_optimize_waste(mut self, optimize_waste: bool) -> Self {
        self.optimize_waste = optimize_waste;
        self
    }

    /// Toggle repeated recipes
    #[must_use]
    pub fn with_allow_repeats(mut self, allow_repeats: bool) -> Self {
        self.allow_repeats = allow_repeats;
        self
    }

    /// Toggle the in-season filter
    #[must_use]
    pub fn with_seasonal_only(mut self, seasonal_only: bool) -> Self {
        self.seasonal_only = seasonal_only;
        self
    }

    /// Recipe ids cooked recently
    #[must_use]
    pub fn with_recent_recipes(mut self, ids: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.recent_recipes = ids.into_iter().map(Into::into).collect();
        self
    }
}

/// Generates meal plans from a recipe catalog
#[derive(Debug)]
pub struct MealPlanGenerator<R: RandomSource> {
    config: PlannerConfig,
    random: R,
}

impl MealPlanGenerator<SystemRandom> {
    /// Generator using the global configuration and OS entropy
    #[must_use]
    pub fn system() -> Self {
        Self::new(SystemRandom::from_entropy())
    }
}

impl<R: RandomSource> MealPlanGenerator<R> {
    /// Generator using the global configuration and the given random source
    #[must_use]
    pub fn new(random: R) -> Self {
        Self::with_config(PlannerConfig::global().clone(), random)
    }

    /// Generator with explicit configuration
    #[must_use]
    pub const fn with_config(config: PlannerConfig, random: R) -> Self {
        Self { config, random }
    }

    /// Generate a plan from the catalog
    ///
    /// An empty candidate pool yields a plan with no recipes.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::ZeroDays` when `options.days` is zero.
    pub fn generate(
        &mut self,
        catalog: &[Recipe],
        options: &GenerationOptions,
    ) -> Result<MealPlan, ConfigurationError> {
        if options.days == 0 {
            return Err(ConfigurationError::ZeroDays);
        }

        let start_date = options.start_date.unwrap_or_else(Utc::now);
        let pool = candidate_pool(catalog, options, start_date);

        let recipes = if pool.is_empty() {
            Vec::new()
        } else if options.optimize_waste {
            self.select_by_waste(&pool, options)
        } else {
            self.select_randomly(pool, options)
        };

        info!(
            days = options.days,
            selected = recipes.len(),
            optimize_waste = options.optimize_waste,
            allow_repeats = options.allow_repeats,
            "Generated meal plan"
        );

        Ok(MealPlan::new(recipes, options.days, Some(start_date)))
    }

    /// Shortest shelf life among a recipe's ingredients
    #[must_use]
    pub fn perishability(&self, recipe: &Recipe) -> u32 {
        let default_days = self.config.shelf_life.default_days;
        recipe
            .ingredients
            .iter()
            .map(|ingredient| shelf_life_days_or(&ingredient.name, default_days))
            .min()
            .unwrap_or(self.config.waste.empty_recipe_perishability)
    }

    fn select_randomly(&mut self, mut pool: Vec<Recipe>, options: &GenerationOptions) -> Vec<Recipe> {
        let mut selected = Vec::with_capacity(options.days as usize);

        for slot in 0..options.days {
            let Some(index) = self.random.pick_index(pool.len()) else {
                debug!(slot, "Candidate pool exhausted");
                break;
            };
            let recipe = if options.allow_repeats {
                pool[index].clone()
            } else {
                pool.remove(index)
            };
            debug!(slot, recipe_id = %recipe.id, "Selected recipe");
            selected.push(recipe);
        }

        selected
    }

    fn select_by_waste(&self, pool: &[Recipe], options: &GenerationOptions) -> Vec<Recipe> {
        let days = f64::from(options.days);
        let waste = &self.config.waste;
        let perishability: Vec<f64> = pool
            .iter()
            .map(|recipe| f64::from(self.perishability(recipe)))
            .collect();

        let mut used = vec![false; pool.len()];
        let mut bought: HashSet<String> = HashSet::new();
        let mut selected = Vec::with_capacity(options.days as usize);

        for slot in 0..options.days {
            let weight = (days - f64::from(slot)) / days;
            let mut best: Option<(usize, f64)> = None;

            for (index, recipe) in pool.iter().enumerate() {
                if used[index] && !options.allow_repeats {
                    continue;
                }
                let overlap = recipe
                    .ingredients
                    .iter()
                    .filter(|ingredient| bought.contains(&ingredient.name.to_lowercase()))
                    .count();
                let score = (waste.perishability_ceiling - perishability[index]) * weight
                    + waste.overlap_bonus * overlap as f64;
                if best.is_none_or(|(_, best_score)| score > best_score) {
                    best = Some((index, score));
                }
            }

            let Some((index, score)) = best else {
                debug!(slot, "Candidate pool exhausted");
                break;
            };

            let recipe = &pool[index];
            debug!(slot, recipe_id = %recipe.id, score, "Selected recipe");
            used[index] = true;
            bought.extend(
                recipe
                    .ingredients
                    .iter()
                    .map(|ingredient| ingredient.name.to_lowercase()),
            );
            selected.push(recipe.clone());
        }

        selected
    }
}

/// Generate a plan with the global configuration and OS entropy
///
/// # Errors
///
/// See [`MealPlanGenerator::generate`].
pub fn generate_meal_plan(
    catalog: &[Recipe],
    options: &GenerationOptions,
) -> Result<MealPlan, ConfigurationError> {
    MealPlanGenerator::system().generate(catalog, options)
}

fn candidate_pool(
    catalog: &[Recipe],
    options: &GenerationOptions,
    start_date: DateTime<Utc>,
) -> Vec<Recipe> {
    let mut pool: Vec<Recipe> = catalog
        .iter()
        .filter(|recipe| !options.seasonal_only || is_in_season(recipe, start_date))
        .cloned()
        .collect();

    let slack = options.days as usize + options.recent_recipes.len();
    if pool.len() > slack {
        pool.retain(|recipe| !options.recent_recipes.contains(&recipe.id));
    } else if !options.recent_recipes.is_empty() {
        debug!(
            pool = pool.len(),
            recent = options.recent_recipes.len(),
            "Not enough candidates to avoid recent recipes"
        );
    }

    pool
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::FixedSequence;
    use grocermator_core::models::IngredientReference;

    fn recipe(id: &str, ingredients: &[&str]) -> Recipe {
        Recipe::new(id, 2).with_id(id).with_ingredients(
            ingredients
                .iter()
                .map(|name| IngredientReference::new(*name, 100.0, "g")),
        )
    }

    fn generator(values: &[f64]) -> MealPlanGenerator<FixedSequence> {
        MealPlanGenerator::with_config(
            PlannerConfig::default(),
            FixedSequence::new(values.iter().copied()),
        )
    }

    fn ids(plan: &MealPlan) -> Vec<&str> {
        plan.recipes.iter().map(|recipe| recipe.id.as_str()).collect()
    }

    #[test]
    fn test_zero_days_rejected() {
        let catalog = vec![recipe("a", &[])];
        let result = generator(&[0.0]).generate(&catalog, &GenerationOptions::new(0));
        assert_eq!(result, Err(ConfigurationError::ZeroDays));
    }

    #[test]
    fn test_empty_catalog_yields_empty_plan() {
        let plan = generator(&[0.0])
            .generate(&[], &GenerationOptions::new(3))
            .unwrap();
        assert!(plan.recipes.is_empty());
        assert_eq!(plan.days, 3);
    }

    #[test]
    fn test_random_without_repeats_removes_picks() {
        let catalog = vec![recipe("a", &[]), recipe("b", &[]), recipe("c", &[])];
        let plan = generator(&[0.99, 0.0, 0.0, 0.0])
            .generate(&catalog, &GenerationOptions::new(5))
            .unwrap();
        assert_eq!(ids(&plan), vec!["c", "a", "b"]);
        assert!(plan.is_short());
    }

    #[test]
    fn test_random_with_repeats_fills_every_slot() {
        let catalog = vec![recipe("a", &[]), recipe("b", &[])];
        let options = GenerationOptions::new(4).with_allow_repeats(true);
        let plan = generator(&[0.6]).generate(&catalog, &options).unwrap();
        assert_eq!(ids(&plan), vec!["b", "b", "b", "b"]);
    }

    #[test]
    fn test_recent_recipes_avoided_only_with_slack() {
        let catalog = vec![recipe("a", &[]), recipe("b", &[]), recipe("c", &[])];

        let options = GenerationOptions::new(1).with_recent_recipes(["a"]);
        let plan = generator(&[0.0]).generate(&catalog, &options).unwrap();
        assert_eq!(ids(&plan), vec!["b"]);

        let options = GenerationOptions::new(2).with_recent_recipes(["a"]);
        let plan = generator(&[0.0]).generate(&catalog, &options).unwrap();
        assert_eq!(ids(&plan), vec!["a", "b"]);
    }

    #[test]
    fn test_waste_mode_front_loads_perishables() {
        let catalog = vec![
            recipe("rice-bowl", &["rice"]),
            recipe("roast-chicken", &["chicken"]),
            recipe("plain", &[]),
        ];
        let options = GenerationOptions::new(3).with_optimize_waste(true);
        let plan = generator(&[]).generate(&catalog, &options).unwrap();
        assert_eq!(ids(&plan), vec!["roast-chicken", "plain", "rice-bowl"]);
    }

    #[test]
    fn test_waste_mode_rewards_overlap() {
        let catalog = vec![
            recipe("chicken", &["chicken"]),
            recipe("milk", &["milk"]),
            recipe("chicken-rice", &["Chicken", "rice"]),
        ];
        let options = GenerationOptions::new(2).with_optimize_waste(true);
        let plan = generator(&[]).generate(&catalog, &options).unwrap();
        assert_eq!(ids(&plan), vec!["chicken", "chicken-rice"]);
    }

    #[test]
    fn test_perishability_defaults() {
        let generator = generator(&[]);
        assert_eq!(generator.perishability(&recipe("x", &[])), 100);
        assert_eq!(generator.perishability(&recipe("y", &["dragonfruit"])), 7);
        assert_eq!(generator.perishability(&recipe("z", &["rice", "salmon"])), 2);
    }
}
