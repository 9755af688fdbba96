// ABOUTME: Seasonal availability checks for recipes
// ABOUTME: Evaluates season and month gates against a calendar date
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Grocermator

//! Seasonality evaluator.
//!
//! Seasons use fixed Northern-Hemisphere month ranges. Evaluation is pure and
//! deterministic for a given recipe and date.

use chrono::{DateTime, Datelike, Utc};
use grocermator_core::models::{Recipe, Season, SeasonalInfo};

/// English month names, January first
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Season containing the given date
#[must_use]
pub fn season_for(date: DateTime<Utc>) -> Season {
    Season::for_month(date.month())
}

/// Whether a seasonal gate admits the given calendar month (1-12)
#[must_use]
pub fn gate_admits_month(info: &SeasonalInfo, month: u32) -> bool {
    match info {
        SeasonalInfo::Season { seasons } => {
            seasons.is_empty() || seasons.contains(&Season::for_month(month))
        }
        SeasonalInfo::Months {
            include_months,
            exclude_months,
        } => {
            if !include_months.is_empty() {
                include_months.contains(&month)
            } else if !exclude_months.is_empty() {
                !exclude_months.contains(&month)
            } else {
                true
            }
        }
    }
}

/// Whether a recipe is in season on `as_of`
///
/// Recipes without a seasonal gate are always in season.
#[must_use]
pub fn is_in_season(recipe: &Recipe, as_of: DateTime<Utc>) -> bool {
    recipe
        .seasonal_info
        .as_ref()
        .is_none_or(|info| gate_admits_month(info, as_of.month()))
}

/// Recipes that are in season on `as_of`, preserving catalog order
#[must_use]
pub fn filter_in_season(recipes: &[Recipe], as_of: DateTime<Utc>) -> Vec<Recipe> {
    recipes
        .iter()
        .filter(|recipe| is_in_season(recipe, as_of))
        .cloned()
        .collect()
}

/// Short display text describing a seasonal gate
///
/// Returns `None` when the gate imposes no restriction worth showing.
#[must_use]
pub fn seasonal_badge(info: Option<&SeasonalInfo>) -> Option<String> {
    match info? {
        SeasonalInfo::Season { seasons } if !seasons.is_empty() => Some(
            seasons
                .iter()
                .map(Season::as_str)
                .collect::<Vec<_>>()
                .join(", "),
        ),
        SeasonalInfo::Months {
            include_months,
            exclude_months,
        } => {
            if !include_months.is_empty() {
                Some(format!("Months: {}", join_months(include_months)))
            } else if !exclude_months.is_empty() {
                Some(format!("Except: {}", join_months(exclude_months)))
            } else {
                None
            }
        }
        SeasonalInfo::Season { .. } => None,
    }
}

/// English name of a month (1-12)
#[must_use]
pub fn month_name(month: u32) -> Option<&'static str> {
    let index = usize::try_from(month).ok()?.checked_sub(1)?;
    MONTH_NAMES.get(index).copied()
}

fn join_months(months: &[u32]) -> String {
    months
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
