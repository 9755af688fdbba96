// ABOUTME: Derived shopping list line produced by the aggregator
// ABOUTME: Rendered by the presentation layer, never persisted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Grocermator

use serde::{Deserialize, Serialize};

/// One purchase line after pantry netting and pack rounding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingListItem {
    /// Display name (trimmed, first spelling encountered)
    pub name: String,
    /// Total demand across the plan
    pub quantity: f64,
    /// Unit shared by every merged line
    pub unit: String,
    /// Catalog link carried from the merged lines
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredient_id: Option<String>,
    /// Demand left after subtracting pantry stock
    pub adjusted_quantity: f64,
    /// Amount covered by the pantry
    pub in_pantry: f64,
    /// Retail packs to buy; `None` when no catalog package size applies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packs_needed: Option<u32>,
}

impl ShoppingListItem {
    /// Whether anything still has to be bought
    #[must_use]
    pub fn needs_purchase(&self) -> bool {
        self.adjusted_quantity > 0.0
    }
}
