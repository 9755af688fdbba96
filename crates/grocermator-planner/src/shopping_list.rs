// ABOUTME: Shopping list aggregation across a meal plan with pantry netting and pack counts
// ABOUTME: Merges lines by normalized name and unit, then enriches them from the catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Grocermator

//! Shopping List Aggregator
//!
//! Lines merge only when both the trimmed, lowercased name and unit match.
//! No unit conversion is performed; `"200 g"` and `"1 cup"` of flour stay on
//! separate lines.

use std::collections::HashMap;

use grocermator_core::models::{
    IngredientEntity, IngredientReference, MealPlan, PantryItem, ShoppingListItem,
};
use tracing::{debug, info};

/// Normalized `(name, unit)` grouping key
#[must_use]
pub fn aggregation_key(name: &str, unit: &str) -> (String, String) {
    (name.trim().to_lowercase(), unit.trim().to_lowercase())
}

/// Sum a plan's ingredient lines per normalized name and unit
///
/// Output order follows the first occurrence of each key. Names and units keep
/// the trimmed spelling of the first line in each group. The first ingredient
/// id found in a group is kept.
#[must_use]
pub fn aggregate(plan: &MealPlan) -> Vec<IngredientReference> {
    aggregate_lines(plan.ingredient_lines())
}

/// Sum arbitrary ingredient lines per normalized name and unit
pub fn aggregate_lines<'a>(
    lines: impl IntoIterator<Item = &'a IngredientReference>,
) -> Vec<IngredientReference> {
    let mut positions: HashMap<(String, String), usize> = HashMap::new();
    let mut merged: Vec<IngredientReference> = Vec::new();

    for line in lines {
        let key = aggregation_key(&line.name, &line.unit);
        if let Some(&position) = positions.get(&key) {
            let existing = &mut merged[position];
            existing.quantity += line.quantity;
            match (&existing.ingredient_id, &line.ingredient_id) {
                (None, Some(id)) => existing.ingredient_id = Some(id.clone()),
                (Some(kept), Some(other)) if kept != other => {
                    debug!(
                        name = %existing.name,
                        kept = %kept,
                        ignored = %other,
                        "Conflicting ingredient ids merged into one line"
                    );
                }
                _ => {}
            }
        } else {
            positions.insert(key, merged.len());
            merged.push(IngredientReference {
                name: line.name.trim().to_owned(),
                quantity: line.quantity,
                unit: line.unit.trim().to_owned(),
                ingredient_id: line.ingredient_id.clone(),
                shelf_life: line.shelf_life,
                package_size: line.package_size,
            });
        }
    }

    merged
}

/// Find the catalog entity for a line: by id first, then case-insensitive name
#[must_use]
pub fn resolve_entity<'a>(
    item: &IngredientReference,
    catalog: &'a [IngredientEntity],
) -> Option<&'a IngredientEntity> {
    item.ingredient_id
        .as_deref()
        .and_then(|id| catalog.iter().find(|entity| entity.id == id))
        .or_else(|| {
            let name = item.name.to_lowercase();
            catalog
                .iter()
                .find(|entity| entity.name.to_lowercase() == name)
        })
}

/// Net aggregated lines against the pantry and compute pack counts
///
/// Pantry stock only applies when its unit equals the line's unit exactly.
/// Lines without a catalog match get no pack count. The result is sorted by
/// name, case-sensitively.
#[must_use]
pub fn enrich(
    items: &[IngredientReference],
    catalog: &[IngredientEntity],
    pantry: &[PantryItem],
) -> Vec<ShoppingListItem> {
    let mut enriched: Vec<ShoppingListItem> = items
        .iter()
        .map(|item| enrich_item(item, catalog, pantry))
        .collect();
    enriched.sort_by(|a, b| a.name.cmp(&b.name));

    info!(
        lines = enriched.len(),
        to_buy = enriched.iter().filter(|item| item.needs_purchase()).count(),
        "Built shopping list"
    );

    enriched
}

/// Aggregate a plan and enrich the result in one step
#[must_use]
pub fn build_shopping_list(
    plan: &MealPlan,
    catalog: &[IngredientEntity],
    pantry: &[PantryItem],
) -> Vec<ShoppingListItem> {
    enrich(&aggregate(plan), catalog, pantry)
}

fn enrich_item(
    item: &IngredientReference,
    catalog: &[IngredientEntity],
    pantry: &[PantryItem],
) -> ShoppingListItem {
    let entity = resolve_entity(item, catalog);
    let stock = entity.and_then(|entity| {
        pantry
            .iter()
            .find(|stock| stock.ingredient_id == entity.id)
    });

    let (adjusted_quantity, in_pantry) = match stock {
        Some(stock) if stock.unit == item.unit => {
            ((item.quantity - stock.quantity).max(0.0), stock.quantity)
        }
        _ => (item.quantity, 0.0),
    };

    let packs_needed = entity
        .filter(|entity| entity.package_size > 0.0)
        .map(|entity| {
            if adjusted_quantity > 0.0 {
                (adjusted_quantity / entity.package_size).ceil() as u32
            } else {
                0
            }
        });

    ShoppingListItem {
        name: item.name.clone(),
        quantity: item.quantity,
        unit: item.unit.clone(),
        ingredient_id: item.ingredient_id.clone(),
        adjusted_quantity,
        in_pantry,
        packs_needed,
    }
}
