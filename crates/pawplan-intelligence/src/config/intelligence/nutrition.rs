// ABOUTME: Nutrition configuration for energy requirement and calorie estimation
// ABOUTME: Configures RER coefficients, activity multipliers, meal split, and Atwater factors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Configuration
//!
//! # Scientific References
//!
//! - RER: Kleiber, M. (1947). Body size and metabolic rate. *Physiological Reviews*, 27(4), 511-541.
//! - Energy requirements: NRC (2006). Nutrient Requirements of Dogs and Cats.
//! - Modified Atwater factors: AAFCO Official Publication

use crate::config::intelligence::error::ConfigError;
use pawplan_core::constants::{atwater, energy};
use serde::{Deserialize, Serialize};

/// Nutrition Configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Energy requirement settings (RER/DER)
    pub energy: EnergyConfig,
    /// Calorie estimation from guaranteed analysis
    pub atwater: AtwaterConfig,
}

/// Energy requirement configuration
///
/// `RER = rer_coefficient x weight_kg ^ rer_exponent`,
/// `DER = RER x base_factor x level_multipliers[level - 1]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnergyConfig {
    /// RER coefficient (70)
    pub rer_coefficient: f64,
    /// Metabolic weight exponent (0.75)
    pub rer_exponent: f64,
    /// Base multiplier for neutered animals (1.2)
    pub neutered_base_factor: f64,
    /// Base multiplier for intact animals (1.4)
    pub intact_base_factor: f64,
    /// Multipliers for activity levels 1-5
    pub level_multipliers: [f64; 5],
    /// Meals the daily ration is split into
    pub meals_per_day: u8,
}

/// Modified Atwater factors (kcal/g)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtwaterConfig {
    /// Protein (3.5)
    pub protein_kcal_per_g: f64,
    /// Fat (8.5)
    pub fat_kcal_per_g: f64,
    /// Nitrogen-free extract (3.5)
    pub nfe_kcal_per_g: f64,
}

impl Default for EnergyConfig {
    fn default() -> Self {
        Self {
            rer_coefficient: energy::RER_COEFFICIENT,
            rer_exponent: energy::RER_EXPONENT,
            neutered_base_factor: energy::NEUTERED_BASE_FACTOR,
            intact_base_factor: energy::INTACT_BASE_FACTOR,
            level_multipliers: energy::ACTIVITY_LEVEL_MULTIPLIERS,
            meals_per_day: energy::DEFAULT_MEALS_PER_DAY,
        }
    }
}

impl Default for AtwaterConfig {
    fn default() -> Self {
        Self {
            protein_kcal_per_g: atwater::PROTEIN_KCAL_PER_G,
            fat_kcal_per_g: atwater::FAT_KCAL_PER_G,
            nfe_kcal_per_g: atwater::NFE_KCAL_PER_G,
        }
    }
}

impl NutritionConfig {
    /// Validate energy and Atwater settings
    ///
    /// # Errors
    ///
    /// Returns an error if a coefficient is not positive, neutered animals
    /// would not need less energy than intact ones, or the level
    /// multipliers decrease
    pub fn validate(&self) -> Result<(), ConfigError> {
        let energy = &self.energy;
        if energy.rer_coefficient <= 0.0 || energy.rer_exponent <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "RER coefficient and exponent must be positive",
            ));
        }
        if energy.neutered_base_factor <= 0.0 || energy.intact_base_factor <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Activity base factors must be positive",
            ));
        }
        if energy.neutered_base_factor >= energy.intact_base_factor {
            return Err(ConfigError::InvalidRange(
                "neutered_base_factor must be < intact_base_factor",
            ));
        }
        if energy.level_multipliers.iter().any(|m| *m <= 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "Activity level multipliers must be positive",
            ));
        }
        if energy.level_multipliers.windows(2).any(|w| w[0] > w[1]) {
            return Err(ConfigError::InvalidRange(
                "Activity level multipliers must be in ascending order",
            ));
        }
        if energy.meals_per_day == 0 {
            return Err(ConfigError::ValueOutOfRange("Meals per day must be at least 1"));
        }

        let atwater = &self.atwater;
        if atwater.protein_kcal_per_g <= 0.0
            || atwater.fat_kcal_per_g <= 0.0
            || atwater.nfe_kcal_per_g <= 0.0
        {
            return Err(ConfigError::ValueOutOfRange("Atwater factors must be positive"));
        }

        Ok(())
    }
}
