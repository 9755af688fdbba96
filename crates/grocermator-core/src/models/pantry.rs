// ABOUTME: Pantry stock records netted against shopping demand
// ABOUTME: Defines PantryItem, keyed by ingredient catalog id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Grocermator

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// On-hand stock of one catalog ingredient
///
/// A pantry holds at most one entry per `ingredient_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PantryItem {
    /// Catalog entry this stock belongs to
    pub ingredient_id: String,
    /// Amount on hand, in `unit`
    pub quantity: f64,
    /// Unit of `quantity`
    pub unit: String,
    /// When the stock was recorded
    pub added_date: DateTime<Utc>,
}

impl PantryItem {
    /// Record stock added now
    #[must_use]
    pub fn new(ingredient_id: impl Into<String>, quantity: f64, unit: impl Into<String>) -> Self {
        Self {
            ingredient_id: ingredient_id.into(),
            quantity,
            unit: unit.into(),
            added_date: Utc::now(),
        }
    }
}
