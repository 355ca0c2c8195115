// ABOUTME: Engine configuration for feeding calculations and product recommendations
// ABOUTME: Orchestrates domain-specific configs and provides unified validation and loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Engine Configuration Module
//!
//! Configuration is organized into domain-specific modules:
//! - `nutrition` - RER/DER coefficients, meal split, Atwater factors
//! - `pricing` - Price position label thresholds
//! - `targets` - Weight-bracket nutrition targets
//! - `recommendation` - Reason rules, limits, and message templates
//! - `age` - Pet-to-human age conversion
//!
//! There is no process-wide instance: callers build an [`EngineConfig`]
//! once and pass it by reference.

pub mod age;
pub mod error;
pub mod nutrition;
pub mod pricing;
pub mod recommendation;
pub mod targets;

pub use age::AgeConfig;
pub use error::ConfigError;
pub use nutrition::{AtwaterConfig, EnergyConfig, NutritionConfig};
pub use pricing::PricingConfig;
pub use recommendation::{RecommendationConfig, RecommendationMessages};
pub use targets::{TargetConfig, WeightBracket};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use tracing::warn;

/// Main engine configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Energy requirement and calorie estimation
    pub nutrition: NutritionConfig,
    /// Price positioning
    pub pricing: PricingConfig,
    /// Weight-bracket nutrition targets
    pub targets: TargetConfig,
    /// Product recommendation scoring
    pub recommendation: RecommendationConfig,
    /// Age conversion
    pub age: AgeConfig,
}

impl EngineConfig {
    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration, falling back to defaults on any error
    #[must_use]
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            warn!("Failed to load engine config: {e}, using defaults");
            Self::default()
        })
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first validation failure found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.nutrition.validate()?;
        self.pricing.validate()?;
        self.targets.validate()?;
        self.recommendation.validate()?;
        self.age.validate()?;
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Energy overrides
        let energy = &mut self.nutrition.energy;
        Self::apply_env_var("PAWPLAN_RER_COEFFICIENT", &mut energy.rer_coefficient)?;
        Self::apply_env_var("PAWPLAN_RER_EXPONENT", &mut energy.rer_exponent)?;
        Self::apply_env_var(
            "PAWPLAN_NEUTERED_BASE_FACTOR",
            &mut energy.neutered_base_factor,
        )?;
        Self::apply_env_var("PAWPLAN_INTACT_BASE_FACTOR", &mut energy.intact_base_factor)?;
        Self::apply_env_var("PAWPLAN_MEALS_PER_DAY", &mut energy.meals_per_day)?;

        // Pricing overrides
        let pricing = &mut self.pricing;
        Self::apply_env_var("PAWPLAN_PRICE_LOW_MAX", &mut pricing.low_max)?;
        Self::apply_env_var("PAWPLAN_PRICE_LOW_MID_MAX", &mut pricing.low_mid_max)?;
        Self::apply_env_var("PAWPLAN_PRICE_MID_MAX", &mut pricing.mid_max)?;
        Self::apply_env_var("PAWPLAN_PRICE_MID_HIGH_MAX", &mut pricing.mid_high_max)?;
        Self::apply_env_var(
            "PAWPLAN_PRICE_MIN_HISTORY_POINTS",
            &mut pricing.min_history_points,
        )?;

        // Recommendation overrides
        let recommendation = &mut self.recommendation;
        Self::apply_env_var(
            "PAWPLAN_NEAR_TARGET_TOLERANCE",
            &mut recommendation.near_target_tolerance,
        )?;
        Self::apply_env_var(
            "PAWPLAN_FIBER_DIGESTIVE_MIN",
            &mut recommendation.fiber_digestive_min,
        )?;
        Self::apply_env_var(
            "PAWPLAN_FIBER_DIGESTIVE_MAX",
            &mut recommendation.fiber_digestive_max,
        )?;
        Self::apply_env_var("PAWPLAN_MAX_REASONS", &mut recommendation.max_reasons)?;
        Self::apply_env_var("PAWPLAN_FALLBACK_LIMIT", &mut recommendation.fallback_limit)?;

        Ok(self)
    }
}
