// ABOUTME: Meal plan data model holding one recipe snapshot per planned slot
// ABOUTME: Plans are created once by the generator and only rescaled or favourited later
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Grocermator

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::recipe::{IngredientReference, Recipe};

/// A generated sequence of meals
///
/// `recipes.len() <= days`; the plan is short when repeats were disallowed
/// and the candidate pool ran out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlan {
    /// Unique plan identifier
    pub id: String,
    /// Recipe snapshot per meal slot, in slot order
    #[serde(default)]
    pub recipes: Vec<Recipe>,
    /// Requested planning horizon
    pub days: u32,
    /// When the plan was generated
    pub created_at: DateTime<Utc>,
    /// First day the plan covers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    /// Marked as a favourite by the user
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_favorite: bool,
}

impl MealPlan {
    /// Create a plan from already selected recipe snapshots
    #[must_use]
    pub fn new(recipes: Vec<Recipe>, days: u32, start_date: Option<DateTime<Utc>>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            recipes,
            days,
            created_at: Utc::now(),
            start_date,
            is_favorite: false,
        }
    }

    /// Whether generation filled fewer slots than requested days
    #[must_use]
    pub fn is_short(&self) -> bool {
        self.recipes.len() < self.days as usize
    }

    /// Flip the favourite flag, returning the new value
    pub fn toggle_favorite(&mut self) -> bool {
        self.is_favorite = !self.is_favorite;
        self.is_favorite
    }

    /// Every ingredient line of every planned meal, in slot order
    pub fn ingredient_lines(&self) -> impl Iterator<Item = &IngredientReference> {
        self.recipes.iter().flat_map(|recipe| recipe.ingredients.iter())
    }
}
