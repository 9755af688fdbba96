// ABOUTME: Application document shape with JSON import, export, and backup naming
// ABOUTME: Import validates the top-level layout and rejects the whole document on any error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Grocermator

use chrono::NaiveDate;
use grocermator_core::constants::storage::{BACKUP_FILE_EXTENSION, BACKUP_FILE_PREFIX};
use grocermator_core::errors::{AppResult, FormatError};
use grocermator_core::models::{IngredientEntity, MealPlan, Recipe};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use crate::logging::AppLogger;

/// Everything the application persists or exchanges as one document
///
/// `ingredients` may be absent on read and is always written.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppData {
    /// Recipe catalog
    pub recipes: Vec<Recipe>,
    /// Saved meal plans, newest first
    pub meal_plans: Vec<MealPlan>,
    /// Ingredient catalog
    #[serde(default)]
    pub ingredients: Vec<IngredientEntity>,
}

impl AppData {
    /// Whether the document holds no records at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty() && self.meal_plans.is_empty() && self.ingredients.is_empty()
    }

    /// Save a plan ahead of older ones
    pub fn add_meal_plan(&mut self, plan: MealPlan) {
        self.meal_plans.insert(0, plan);
    }

    /// Delete a saved plan, returning it if it existed
    pub fn remove_meal_plan(&mut self, id: &str) -> Option<MealPlan> {
        let position = self.meal_plans.iter().position(|plan| plan.id == id)?;
        Some(self.meal_plans.remove(position))
    }

    /// Mutable access to a saved plan for rescaling or favouriting
    pub fn meal_plan_mut(&mut self, id: &str) -> Option<&mut MealPlan> {
        self.meal_plans.iter_mut().find(|plan| plan.id == id)
    }
}

/// Parse an exported document
///
/// # Errors
///
/// Returns `FormatError` when the text is not JSON, the root is not an
/// object, `recipes` or `mealPlans` is missing or not an array, `ingredients`
/// is present but not an array, or any record has the wrong shape. Nothing is
/// returned for a partially valid document.
pub fn import_document(text: &str) -> Result<AppData, FormatError> {
    let result = parse_document(text);
    match &result {
        Ok(data) => AppLogger::log_import(
            data.recipes.len(),
            data.meal_plans.len(),
            data.ingredients.len(),
            true,
        ),
        Err(error) => {
            warn!(error = %error, "Rejected import document");
            AppLogger::log_import(0, 0, 0, false);
        }
    }
    result
}

fn parse_document(text: &str) -> Result<AppData, FormatError> {
    let value: Value = serde_json::from_str(text)?;
    let Value::Object(root) = &value else {
        return Err(FormatError::NotAnObject);
    };

    require_array(root, "recipes")?;
    require_array(root, "mealPlans")?;
    if root.get("ingredients").is_some_and(|field| !field.is_array()) {
        return Err(FormatError::NotAnArray {
            field: "ingredients",
        });
    }

    Ok(serde_json::from_value(value)?)
}

fn require_array(root: &Map<String, Value>, field: &'static str) -> Result<(), FormatError> {
    match root.get(field) {
        None => Err(FormatError::MissingField { field }),
        Some(value) if !value.is_array() => Err(FormatError::NotAnArray { field }),
        Some(_) => Ok(()),
    }
}

/// Serialize a document as pretty-printed JSON
///
/// # Errors
///
/// Returns a serialization error if any record cannot be encoded
pub fn export_document(data: &AppData) -> AppResult<String> {
    let text = serde_json::to_string_pretty(data)?;
    Ok(text)
}

/// File name for a backup taken on `date`, e.g. `grocermator-backup-2025-03-14.json`
#[must_use]
pub fn backup_file_name(date: NaiveDate) -> String {
    format!(
        "{BACKUP_FILE_PREFIX}{}.{BACKUP_FILE_EXTENSION}",
        date.format("%Y-%m-%d")
    )
}

/// Export a document together with its backup file name
///
/// # Errors
///
/// See [`export_document`].
pub fn export_backup(data: &AppData, date: NaiveDate) -> AppResult<(String, String)> {
    let file_name = backup_file_name(date);
    let text = export_document(data)?;
    AppLogger::log_export(&file_name, text.len());
    Ok((file_name, text))
}
