// ABOUTME: Error type for invalid caller-supplied planning parameters
// ABOUTME: Covers zero servings, zero-day plans, and out-of-range meal plan slots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Grocermator

use thiserror::Error;

/// Rejected planning or scaling parameters
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// The source recipe declares zero servings, so no scale factor exists
    #[error("Recipe '{recipe_id}' has no valid serving count")]
    ZeroServings {
        /// Recipe whose serving count is zero
        recipe_id: String,
    },

    /// Scaling target must be at least one serving
    #[error("Target servings must be at least 1")]
    ZeroTargetServings,

    /// A meal plan needs at least one day
    #[error("A meal plan must cover at least 1 day")]
    ZeroDays,

    /// Meal plan slot index does not exist
    #[error("Meal plan slot {index} is out of range (plan has {len} slots)")]
    SlotOutOfRange {
        /// Requested slot index
        index: usize,
        /// Number of slots in the plan
        len: usize,
    },
}

impl ConfigurationError {
    /// Recipe identifier associated with this error, if any
    #[must_use]
    pub fn recipe_id(&self) -> Option<&str> {
        match self {
            Self::ZeroServings { recipe_id } => Some(recipe_id),
            Self::ZeroTargetServings | Self::ZeroDays | Self::SlotOutOfRange { .. } => None,
        }
    }
}
