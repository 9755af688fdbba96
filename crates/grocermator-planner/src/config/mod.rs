// ABOUTME: Planner configuration for waste scoring, shelf-life defaults, and scaling rounding
// ABOUTME: Provides a validated global instance with environment variable overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Grocermator

//! Planner Configuration
//!
//! Tunables for the planning engine. Defaults reproduce the reference
//! behaviour exactly; environment variables can override individual values
//! for experimentation.
//!
//! | Variable | Field |
//! |---|---|
//! | `GROCERMATOR_WASTE_PERISHABILITY_CEILING` | `waste.perishability_ceiling` |
//! | `GROCERMATOR_WASTE_OVERLAP_BONUS` | `waste.overlap_bonus` |
//! | `GROCERMATOR_WASTE_EMPTY_RECIPE_SCORE` | `waste.empty_recipe_perishability` |
//! | `GROCERMATOR_DEFAULT_SHELF_LIFE_DAYS` | `shelf_life.default_days` |
//! | `GROCERMATOR_SCALING_ROUND_DOWN_BELOW` | `scaling.round_down_below` |
//! | `GROCERMATOR_SCALING_ROUND_UP_ABOVE` | `scaling.round_up_above` |

/// Configuration error types
pub mod error;

pub use error::ConfigError;

use crate::scaling::READABLE_FRACTIONS;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static PLANNER_CONFIG: OnceLock<PlannerConfig> = OnceLock::new();

/// Main planner configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Waste-optimized selection weights
    pub waste: WasteScoringConfig,
    /// Shelf-life lookup fallback
    pub shelf_life: ShelfLifeConfig,
    /// Readability rounding thresholds for recipe scaling
    pub scaling: ScalingConfig,
}

/// Weights for the greedy waste-minimizing selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WasteScoringConfig {
    /// Perishability is scored as `ceiling - min shelf life`
    pub perishability_ceiling: f64,
    /// Bonus per ingredient shared with earlier slots
    pub overlap_bonus: f64,
    /// Perishability assigned to a recipe with no ingredients
    pub empty_recipe_perishability: u32,
}

impl Default for WasteScoringConfig {
    fn default() -> Self {
        Self {
            perishability_ceiling: 100.0,
            overlap_bonus: 20.0,
            empty_recipe_perishability: 100,
        }
    }
}

/// Shelf-life lookup configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShelfLifeConfig {
    /// Shelf life assumed for ingredients missing from the table
    pub default_days: u32,
}

impl Default for ShelfLifeConfig {
    fn default() -> Self {
        Self { default_days: 7 }
    }
}

/// Readability rounding thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalingConfig {
    /// Fractions below this collapse to the whole number
    pub round_down_below: f64,
    /// Fractions above this round up to the next whole number
    pub round_up_above: f64,
}

impl Default for ScalingConfig {
    fn default() -> Self {
        Self {
            round_down_below: 0.05,
            round_up_above: 0.95,
        }
    }
}

impl PlannerConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        PLANNER_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load planner config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any value is outside its accepted range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.waste.perishability_ceiling <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "perishability_ceiling must be positive",
            ));
        }
        if self.waste.overlap_bonus < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "overlap_bonus must not be negative",
            ));
        }

        let scaling = &self.scaling;
        if scaling.round_down_below <= 0.0 || scaling.round_up_above >= 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "scaling thresholds must lie strictly between 0 and 1",
            ));
        }
        if scaling.round_down_below >= scaling.round_up_above {
            return Err(ConfigError::InvalidRange(
                "round_down_below must be < round_up_above",
            ));
        }
        // Snapped fractions must survive a second rounding pass
        if scaling.round_down_below > READABLE_FRACTIONS[0] {
            return Err(ConfigError::ValueOutOfRange(
                "round_down_below must not exceed the smallest readable fraction",
            ));
        }
        if scaling.round_up_above < READABLE_FRACTIONS[READABLE_FRACTIONS.len() - 1] {
            return Err(ConfigError::ValueOutOfRange(
                "round_up_above must not be below the largest readable fraction",
            ));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            "GROCERMATOR_WASTE_PERISHABILITY_CEILING",
            &mut self.waste.perishability_ceiling,
        )?;
        Self::apply_env_var(
            "GROCERMATOR_WASTE_OVERLAP_BONUS",
            &mut self.waste.overlap_bonus,
        )?;
        Self::apply_env_var(
            "GROCERMATOR_WASTE_EMPTY_RECIPE_SCORE",
            &mut self.waste.empty_recipe_perishability,
        )?;
        Self::apply_env_var(
            "GROCERMATOR_DEFAULT_SHELF_LIFE_DAYS",
            &mut self.shelf_life.default_days,
        )?;
        Self::apply_env_var(
            "GROCERMATOR_SCALING_ROUND_DOWN_BELOW",
            &mut self.scaling.round_down_below,
        )?;
        Self::apply_env_var(
            "GROCERMATOR_SCALING_ROUND_UP_ABOVE",
            &mut self.scaling.round_up_above,
        )?;

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(PlannerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_inverted_scaling_thresholds_rejected() {
        let mut config = PlannerConfig::default();
        config.scaling.round_down_below = 0.6;
        config.scaling.round_up_above = 0.4;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_thresholds_inside_fraction_range_rejected() {
        let mut config = PlannerConfig::default();
        config.scaling.round_down_below = 0.34;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));

        let mut config = PlannerConfig::default();
        config.scaling.round_up_above = 0.7;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));

        let mut config = PlannerConfig::default();
        config.scaling.round_down_below = 0.125;
        config.scaling.round_up_above = 0.75;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_negative_overlap_bonus_rejected() {
        let mut config = PlannerConfig::default();
        config.waste.overlap_bonus = -1.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));
    }
}
