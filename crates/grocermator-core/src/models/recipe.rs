// ABOUTME: Recipe and ingredient-line data models with seasonal availability rules
// ABOUTME: Defines Recipe, IngredientReference, Season, and SeasonalInfo
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Grocermator

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// One line item in a recipe or shopping list
///
/// Units are free text. Two lines only ever combine when their normalized
/// names and units match exactly; no unit conversion is attempted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientReference {
    /// Display name of the ingredient
    pub name: String,
    /// Amount in `unit` (non-negative)
    pub quantity: f64,
    /// Free-text unit ("g", "whole", "cup", ...)
    pub unit: String,
    /// Link to an ingredient catalog entry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredient_id: Option<String>,
    /// Days until spoilage noted on the line itself
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shelf_life: Option<u32>,
    /// Grocery package size noted on the line itself
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_size: Option<f64>,
}

impl IngredientReference {
    /// Create an ingredient line without a catalog link
    #[must_use]
    pub fn new(name: impl Into<String>, quantity: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit: unit.into(),
            ingredient_id: None,
            shelf_life: None,
            package_size: None,
        }
    }

    /// Link this line to a catalog entry
    #[must_use]
    pub fn with_ingredient_id(mut self, ingredient_id: impl Into<String>) -> Self {
        self.ingredient_id = Some(ingredient_id.into());
        self
    }
}

/// Northern-Hemisphere meteorological season
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    /// March to May
    Spring,
    /// June to August
    Summer,
    /// September to November
    Fall,
    /// December to February
    Winter,
}

impl Season {
    /// Season containing the given calendar month (1-12)
    #[must_use]
    pub const fn for_month(month: u32) -> Self {
        match month {
            3..=5 => Self::Spring,
            6..=8 => Self::Summer,
            9..=11 => Self::Fall,
            _ => Self::Winter,
        }
    }

    /// Lowercase name used on the wire and in badges
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Spring => "spring",
            Self::Summer => "summer",
            Self::Fall => "fall",
            Self::Winter => "winter",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Seasonal gate restricting when a recipe is eligible for planning
///
/// Serialized with a `type` tag: `{"type": "season", "seasons": [...]}` or
/// `{"type": "months", "includeMonths": [...]}`. An include list takes
/// precedence over an exclude list when both are present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SeasonalInfo {
    /// Eligible during the listed seasons (empty means always)
    Season {
        /// Seasons in which the recipe is eligible
        #[serde(default)]
        seasons: Vec<Season>,
    },
    /// Eligible by calendar month
    #[serde(rename_all = "camelCase")]
    Months {
        /// Months (1-12) in which the recipe is eligible
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        include_months: Vec<u32>,
        /// Months (1-12) in which the recipe is not eligible
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        exclude_months: Vec<u32>,
    },
}

impl SeasonalInfo {
    /// Gate on a set of seasons
    #[must_use]
    pub fn seasons(seasons: impl IntoIterator<Item = Season>) -> Self {
        Self::Season {
            seasons: seasons.into_iter().collect(),
        }
    }

    /// Gate that only admits the listed months
    #[must_use]
    pub fn include_months(months: impl IntoIterator<Item = u32>) -> Self {
        Self::Months {
            include_months: months.into_iter().collect(),
            exclude_months: Vec::new(),
        }
    }

    /// Gate that admits every month except the listed ones
    #[must_use]
    pub fn exclude_months(months: impl IntoIterator<Item = u32>) -> Self {
        Self::Months {
            include_months: Vec::new(),
            exclude_months: months.into_iter().collect(),
        }
    }
}

/// A recipe from the user's catalog
///
/// Meal plans hold owned snapshots of recipes, never references into the
/// catalog, so rescaling a planned meal leaves the catalog untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Unique recipe identifier
    pub id: String,
    /// Recipe name
    pub name: String,
    /// Ordered ingredient lines
    #[serde(default)]
    pub ingredients: Vec<IngredientReference>,
    /// Number of servings the ingredient quantities produce
    #[serde(default)]
    pub servings: u32,
    /// Free-text cooking instructions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    /// Optional picture
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Seasonal gate (absent means always in season)
    #[serde(
        default,
        rename = "seasonal",
        alias = "seasonalInfo",
        skip_serializing_if = "Option::is_none"
    )]
    pub seasonal_info: Option<SeasonalInfo>,
}

impl Recipe {
    /// Create a recipe with a fresh identifier and no ingredients
    #[must_use]
    pub fn new(name: impl Into<String>, servings: u32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            ingredients: Vec::new(),
            servings,
            instructions: None,
            image_url: None,
            seasonal_info: None,
        }
    }

    /// Replace the generated identifier
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Add an ingredient line
    #[must_use]
    pub fn with_ingredient(mut self, ingredient: IngredientReference) -> Self {
        self.ingredients.push(ingredient);
        self
    }

    /// Add multiple ingredient lines
    #[must_use]
    pub fn with_ingredients(
        mut self,
        ingredients: impl IntoIterator<Item = IngredientReference>,
    ) -> Self {
        self.ingredients.extend(ingredients);
        self
    }

    /// Set cooking instructions
    #[must_use]
    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    /// Restrict the recipe to a season or month window
    #[must_use]
    pub fn with_seasonal_info(mut self, seasonal_info: SeasonalInfo) -> Self {
        self.seasonal_info = Some(seasonal_info);
        self
    }
}
