// ABOUTME: Standard unit vocabulary offered when editing recipes and pantry items
// ABOUTME: Informational only: the planner never converts between units
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Grocermator

/// Volume units
pub const VOLUME_UNITS: &[&str] = &["tsp", "tbsp", "cup", "ml", "l", "fl oz"];

/// Weight units
pub const WEIGHT_UNITS: &[&str] = &["g", "kg", "oz", "lb"];

/// Count units
pub const COUNT_UNITS: &[&str] = &["pc", "whole", "clove", "slice"];

/// Packaging units
pub const OTHER_UNITS: &[&str] = &["bunch", "can", "package", "box", "bag"];

/// Grouping of the standard units for pickers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitCategory {
    /// Liquid and spoon measures
    Volume,
    /// Mass measures
    Weight,
    /// Whole items
    Count,
    /// Retail packaging
    Other,
}

impl UnitCategory {
    /// All categories in display order
    pub const ALL: [Self; 4] = [Self::Volume, Self::Weight, Self::Count, Self::Other];

    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Volume => "Volume",
            Self::Weight => "Weight",
            Self::Count => "Count",
            Self::Other => "Other",
        }
    }

    /// Units in this category
    #[must_use]
    pub const fn units(&self) -> &'static [&'static str] {
        match self {
            Self::Volume => VOLUME_UNITS,
            Self::Weight => WEIGHT_UNITS,
            Self::Count => COUNT_UNITS,
            Self::Other => OTHER_UNITS,
        }
    }
}

/// Whether `unit` is one of the standard units (exact match)
#[must_use]
pub fn is_standard_unit(unit: &str) -> bool {
    UnitCategory::ALL
        .iter()
        .any(|category| category.units().contains(&unit))
}

/// Keyword groups used to suggest units from an ingredient name
const SUGGESTIONS: &[(&[&str], &[&str])] = &[
    (
        &["milk", "water", "oil", "sauce", "cream"],
        &["ml", "cup", "tbsp", "l"],
    ),
    (
        &["flour", "sugar", "rice", "pasta", "meat", "chicken", "beef"],
        &["g", "kg", "cup", "lb"],
    ),
    (&["onion", "apple", "banana", "egg", "carrot"], &["whole", "pc"]),
];

/// Suggest likely units for an ingredient name (substring heuristic)
///
/// Returns an empty slice when nothing matches.
#[must_use]
pub fn suggested_units(ingredient_name: &str) -> &'static [&'static str] {
    let lower = ingredient_name.to_lowercase();
    for (keywords, units) in SUGGESTIONS {
        if keywords.iter().any(|keyword| lower.contains(keyword)) {
            return units;
        }
    }
    &[]
}
