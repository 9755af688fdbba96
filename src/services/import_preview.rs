// ABOUTME: Import preview detecting recipe name conflicts and ingredient catalog matches
// ABOUTME: Lets the caller choose per-row actions before the imported data is merged
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Grocermator

//! Import preview
//!
//! Matching is by case-insensitive name only. Recipes that collide with an
//! existing recipe default to [`RecipeAction::Skip`]; ingredients that match an
//! existing catalog entry default to [`IngredientAction::Map`].

use grocermator_core::errors::{AppError, AppResult};
use grocermator_core::models::{IngredientEntity, IngredientReference, MealPlan, Recipe};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::data_transfer::AppData;

/// What to do with one imported recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecipeAction {
    /// Import alongside existing recipes
    Add,
    /// Keep the existing recipe and drop the imported one
    Skip,
    /// Import and remove the existing recipe with the same name
    Replace,
}

/// What to do with one imported ingredient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum IngredientAction {
    /// Add the imported ingredient to the catalog
    Create,
    /// Reuse an existing catalog entry
    Map {
        /// Catalog entry the imported ingredient maps to
        #[serde(rename = "mapToId")]
        target_id: String,
    },
    /// Ignore the imported ingredient
    Skip,
}

/// An imported recipe and the existing recipe it collides with
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeConflict {
    /// Recipe from the imported document
    pub imported: Recipe,
    /// Id of an existing recipe with the same name
    pub existing_id: Option<String>,
    /// Chosen action
    pub action: RecipeAction,
}

impl RecipeConflict {
    /// Whether an existing recipe has the same name
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        self.existing_id.is_some()
    }
}

/// An imported ingredient and the catalog entry it may map to
#[derive(Debug, Clone, PartialEq)]
pub struct IngredientMapping {
    /// Ingredient from the imported document
    pub imported: IngredientEntity,
    /// Id of an existing entry with the same name
    pub existing_id: Option<String>,
    /// Chosen action
    pub action: IngredientAction,
}

/// Pending import with per-row decisions
#[derive(Debug, Clone)]
pub struct ImportPreview<'a> {
    recipes: Vec<RecipeConflict>,
    ingredients: Vec<IngredientMapping>,
    meal_plans: Vec<MealPlan>,
    existing_ingredients: &'a [IngredientEntity],
}

impl<'a> ImportPreview<'a> {
    /// Compare an imported document against the current catalogs
    #[must_use]
    pub fn new(
        imported: AppData,
        existing_recipes: &[Recipe],
        existing_ingredients: &'a [IngredientEntity],
    ) -> Self {
        let recipes = imported
            .recipes
            .into_iter()
            .map(|recipe| {
                let name = recipe.name.to_lowercase();
                let existing_id = existing_recipes
                    .iter()
                    .find(|existing| existing.name.to_lowercase() == name)
                    .map(|existing| existing.id.clone());
                let action = if existing_id.is_some() {
                    RecipeAction::Skip
                } else {
                    RecipeAction::Add
                };
                RecipeConflict {
                    imported: recipe,
                    existing_id,
                    action,
                }
            })
            .collect();

        let ingredients = imported
            .ingredients
            .into_iter()
            .map(|ingredient| {
                let existing_id = find_by_name(existing_ingredients, &ingredient.name)
                    .map(|existing| existing.id.clone());
                let action = existing_id
                    .clone()
                    .map_or(IngredientAction::Create, |target_id| IngredientAction::Map {
                        target_id,
                    });
                IngredientMapping {
                    imported: ingredient,
                    existing_id,
                    action,
                }
            })
            .collect();

        Self {
            recipes,
            ingredients,
            meal_plans: imported.meal_plans,
            existing_ingredients,
        }
    }

    /// Recipe rows in document order
    #[must_use]
    pub fn recipes(&self) -> &[RecipeConflict] {
        &self.recipes
    }

    /// Ingredient rows in document order
    #[must_use]
    pub fn ingredients(&self) -> &[IngredientMapping] {
        &self.ingredients
    }

    /// Change the action for one recipe row
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error if `index` is out of range
    pub fn set_recipe_action(&mut self, index: usize, action: RecipeAction) -> AppResult<()> {
        let row = self
            .recipes
            .get_mut(index)
            .ok_or_else(|| AppError::invalid_input(format!("No imported recipe at row {index}")))?;
        row.action = action;
        Ok(())
    }

    /// Change the action for one ingredient row
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error if `index` is out of range, or a
    /// not-found error if a `Map` target is not in the catalog
    pub fn set_ingredient_action(
        &mut self,
        index: usize,
        action: IngredientAction,
    ) -> AppResult<()> {
        if let IngredientAction::Map { target_id } = &action {
            if !self
                .existing_ingredients
                .iter()
                .any(|entity| &entity.id == target_id)
            {
                return Err(AppError::not_found(format!("Ingredient {target_id}"))
                    .with_resource_id(target_id.clone()));
            }
        }
        let row = self.ingredients.get_mut(index).ok_or_else(|| {
            AppError::invalid_input(format!("No imported ingredient at row {index}"))
        })?;
        row.action = action;
        Ok(())
    }

    /// Number of imported recipes whose name already exists
    #[must_use]
    pub fn conflict_count(&self) -> usize {
        self.recipes.iter().filter(|row| row.is_conflict()).count()
    }

    /// Number of imported ingredients that will be created
    #[must_use]
    pub fn new_ingredient_count(&self) -> usize {
        self.ingredients
            .iter()
            .filter(|row| row.action == IngredientAction::Create)
            .count()
    }

    /// Ids of existing recipes that the import replaces
    #[must_use]
    pub fn replaced_recipe_ids(&self) -> Vec<&str> {
        self.recipes
            .iter()
            .filter(|row| row.action == RecipeAction::Replace)
            .filter_map(|row| row.existing_id.as_deref())
            .collect()
    }

    /// Build the data to merge from the chosen actions
    ///
    /// Added and replacing recipes have ingredient lines for mapped
    /// ingredients renamed and relinked to the existing catalog entry. Only
    /// created ingredients are included. Meal plans pass through unchanged.
    #[must_use]
    pub fn resolve(&self) -> AppData {
        let recipes: Vec<Recipe> = self
            .recipes
            .iter()
            .filter(|row| matches!(row.action, RecipeAction::Add | RecipeAction::Replace))
            .map(|row| Recipe {
                ingredients: row
                    .imported
                    .ingredients
                    .iter()
                    .map(|line| self.remap_line(line))
                    .collect(),
                ..row.imported.clone()
            })
            .collect();

        let ingredients: Vec<IngredientEntity> = self
            .ingredients
            .iter()
            .filter(|row| row.action == IngredientAction::Create)
            .map(|row| row.imported.clone())
            .collect();

        debug!(
            recipes = recipes.len(),
            ingredients = ingredients.len(),
            meal_plans = self.meal_plans.len(),
            "Resolved import preview"
        );

        AppData {
            recipes,
            meal_plans: self.meal_plans.clone(),
            ingredients,
        }
    }

    fn remap_line(&self, line: &IngredientReference) -> IngredientReference {
        let name = line.name.to_lowercase();
        let target = self
            .ingredients
            .iter()
            .find(|row| row.imported.name.to_lowercase() == name)
            .and_then(|row| match &row.action {
                IngredientAction::Map { target_id } => self
                    .existing_ingredients
                    .iter()
                    .find(|entity| &entity.id == target_id),
                IngredientAction::Create | IngredientAction::Skip => None,
            });

        target.map_or_else(
            || line.clone(),
            |entity| IngredientReference {
                name: entity.name.clone(),
                ingredient_id: Some(entity.id.clone()),
                ..line.clone()
            },
        )
    }
}

fn find_by_name<'e>(catalog: &'e [IngredientEntity], name: &str) -> Option<&'e IngredientEntity> {
    let name = name.to_lowercase();
    catalog
        .iter()
        .find(|entity| entity.name.to_lowercase() == name)
}
