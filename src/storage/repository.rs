// ABOUTME: Loads and saves the application document through a key-value store
// ABOUTME: Applies resolved import previews to the stored catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Grocermator

use grocermator_core::constants::storage::DATA_KEY;
use grocermator_core::errors::AppResult;

use super::KeyValueStore;
use crate::logging::AppLogger;
use crate::services::data_transfer::{import_document, AppData};
use crate::services::import_preview::ImportPreview;

/// Typed access to the stored [`AppData`] document
#[derive(Debug, Clone)]
pub struct DataRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> DataRepository<S> {
    /// Wrap a store
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Underlying store
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Load the stored document, or an empty one when nothing is stored
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backend fails, or an invalid-format error
    /// if the stored value is not a valid document
    pub fn load(&self) -> AppResult<AppData> {
        let stored = self.store.get(DATA_KEY).inspect_err(|_| {
            AppLogger::log_storage_operation("get", DATA_KEY, false);
        })?;

        match stored {
            Some(text) => Ok(import_document(&text)?),
            None => Ok(AppData::default()),
        }
    }

    /// Replace the stored document
    ///
    /// # Errors
    ///
    /// Returns a serialization or storage error
    pub fn save(&mut self, data: &AppData) -> AppResult<()> {
        let text = serde_json::to_string(data)?;
        let result = self.store.set(DATA_KEY, &text);
        AppLogger::log_storage_operation("set", DATA_KEY, result.is_ok());
        Ok(result?)
    }

    /// Delete the stored document
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backend fails
    pub fn clear(&mut self) -> AppResult<()> {
        let result = self.store.remove(DATA_KEY);
        AppLogger::log_storage_operation("remove", DATA_KEY, result.is_ok());
        Ok(result?)
    }

    /// Merge an import preview into the stored document and save it
    ///
    /// Replaced recipes are removed before the imported recipes are appended.
    /// Imported meal plans are placed ahead of existing ones.
    ///
    /// # Errors
    ///
    /// Returns any error from [`DataRepository::load`] or [`DataRepository::save`]
    pub fn apply_import(&mut self, preview: &ImportPreview<'_>) -> AppResult<AppData> {
        let mut data = self.load()?;
        let replaced = preview.replaced_recipe_ids();
        let resolved = preview.resolve();

        data.recipes
            .retain(|recipe| !replaced.contains(&recipe.id.as_str()));
        data.recipes.extend(resolved.recipes);
        data.ingredients.extend(resolved.ingredients);

        let mut meal_plans = resolved.meal_plans;
        meal_plans.append(&mut data.meal_plans);
        data.meal_plans = meal_plans;

        self.save(&data)?;
        Ok(data)
    }
}
