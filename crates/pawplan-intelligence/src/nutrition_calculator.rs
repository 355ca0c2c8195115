// ABOUTME: Feeding calculation algorithms using standard veterinary energy formulas
// ABOUTME: RER, activity-adjusted DER, daily grams, Atwater calorie estimation, and mixed feeding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Calculator Module
//!
//! Energy and ration calculations for dogs and cats. Every function here is
//! total: out-of-range input degrades to zero or a clamped value instead of
//! an error, so a UI always has a number to show. Input validation belongs
//! to the caller (see `PetProfile::validate`).
//!
//! # Scientific References
//!
//! - Kleiber, M. (1947). Body size and metabolic rate.
//!   *Physiological Reviews*, 27(4), 511-541.
//! - National Research Council (2006). *Nutrient Requirements of Dogs and Cats*.
//!   National Academies Press. <https://doi.org/10.17226/10668>
//! - AAFCO Official Publication: calorie content by modified Atwater factors.

use crate::config::intelligence::{AtwaterConfig, EnergyConfig};
use pawplan_core::constants::{atwater, energy};
use pawplan_core::models::{PetProfile, Product};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Calorie split between two foods fed together
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MixPlan {
    /// Calories from food A (kcal/day)
    pub kcal_a: f64,
    /// Calories from food B (kcal/day)
    pub kcal_b: f64,
    /// Grams of food A per day
    pub grams_a: f64,
    /// Grams of food B per day
    pub grams_b: f64,
}

/// Complete daily feeding calculation result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedingPlan {
    /// Resting Energy Requirement (kcal/day)
    pub rer: f64,
    /// Multiplier applied to RER
    pub activity_factor: f64,
    /// Daily Energy Requirement (kcal/day)
    pub der: f64,
    /// Energy density of the selected food (kcal/kg)
    pub kcal_per_kg: f64,
    /// Grams of food per day
    pub daily_grams: f64,
    /// Meals the ration is split into
    pub meals_per_day: u8,
    /// Grams per meal
    pub grams_per_meal: f64,
    /// Calculation method used
    pub method: String,
}

/// Nitrogen-free extract: what remains of a guaranteed analysis
///
/// `100 - (protein + fat + fiber + ash + moisture)`, never below 0.
#[must_use]
pub fn calculate_nfe(protein: f64, fat: f64, fiber: f64, ash: f64, moisture: f64) -> f64 {
    (100.0 - (protein + fat + fiber + ash + moisture)).max(0.0)
}

/// Estimate energy density from a guaranteed analysis
///
/// Formula: kcal/100g = 3.5 x protein + 8.5 x fat + 3.5 x NFE, reported as
/// kcal/kg rounded to the nearest integer. Macros summing past 100 make
/// NFE 0 rather than negative.
#[must_use]
pub fn estimate_kcal_per_kg(
    protein: f64,
    fat: f64,
    fiber: f64,
    ash: f64,
    moisture: f64,
    config: &AtwaterConfig,
) -> i64 {
    let nfe = calculate_nfe(protein, fat, fiber, ash, moisture);
    let kcal_per_100g = config.nfe_kcal_per_g.mul_add(
        nfe,
        config
            .protein_kcal_per_g
            .mul_add(protein, config.fat_kcal_per_g * fat),
    );
    (kcal_per_100g * atwater::KCAL_PER_100G_TO_KG).round() as i64
}

/// Calculate Resting Energy Requirement
///
/// Formula: RER = 70 x `weight_kg` ^ 0.75
///
/// A weight of 0 yields 0. Negative or NaN weights also yield 0 instead of NaN.
#[must_use]
pub fn calculate_rer(weight_kg: f64, config: &EnergyConfig) -> f64 {
    if weight_kg.is_nan() || weight_kg <= 0.0 {
        return 0.0;
    }
    config.rer_coefficient * weight_kg.powf(config.rer_exponent)
}

/// Activity multiplier applied to RER
///
/// `level` is clamped to 1-5. The base is 1.2 for neutered and 1.4 for
/// intact animals, scaled by the per-level multiplier
/// `[0.9, 1.0, 1.15, 1.3, 1.5]`.
#[must_use]
pub fn activity_factor(level: i32, is_neutered: bool, config: &EnergyConfig) -> f64 {
    let clamped = level.clamp(energy::MIN_ACTIVITY_LEVEL, energy::MAX_ACTIVITY_LEVEL);
    let index = (clamped - energy::MIN_ACTIVITY_LEVEL) as usize;
    let base = if is_neutered {
        config.neutered_base_factor
    } else {
        config.intact_base_factor
    };
    base * config.level_multipliers[index]
}

/// Calculate Daily Energy Requirement (kcal/day)
///
/// Formula: DER = RER x activity factor
#[must_use]
pub fn calculate_der(weight_kg: f64, level: i32, is_neutered: bool, config: &EnergyConfig) -> f64 {
    calculate_rer(weight_kg, config) * activity_factor(level, is_neutered, config)
}

/// Grams of food per day delivering `der_kcal`
///
/// Returns 0 when the energy density is 0 or NaN.
#[must_use]
pub fn calculate_daily_grams(der_kcal: f64, kcal_per_kg: f64) -> f64 {
    if kcal_per_kg.is_nan() || kcal_per_kg.abs() < f64::EPSILON {
        return 0.0;
    }
    (der_kcal / kcal_per_kg) * energy::GRAMS_PER_KG
}

/// Split the daily energy between two foods
///
/// `ratio_a` is the share of calories from food A, clamped to 0-1 (NaN
/// counts as 0). Grams differ even at a 50/50 split because each food has
/// its own energy density.
#[must_use]
pub fn mix_plan(der_kcal: f64, product_a: &Product, product_b: &Product, ratio_a: f64) -> MixPlan {
    mix_plan_by_density(der_kcal, product_a.kcal_per_kg, product_b.kcal_per_kg, ratio_a)
}

/// [`mix_plan`] for callers holding only the two energy densities
#[must_use]
pub fn mix_plan_by_density(
    der_kcal: f64,
    kcal_per_kg_a: f64,
    kcal_per_kg_b: f64,
    ratio_a: f64,
) -> MixPlan {
    let ratio = if ratio_a.is_nan() {
        0.0
    } else {
        ratio_a.clamp(0.0, 1.0)
    };
    let kcal_a = der_kcal * ratio;
    let kcal_b = der_kcal - kcal_a;

    MixPlan {
        kcal_a,
        kcal_b,
        grams_a: calculate_daily_grams(kcal_a, kcal_per_kg_a),
        grams_b: calculate_daily_grams(kcal_b, kcal_per_kg_b),
    }
}

/// Calculate the complete daily feeding plan for one food
///
/// Main entry point for the calculator screen: RER, DER, and the grams to
/// feed per day and per meal.
#[must_use]
pub fn calculate_feeding_plan(
    profile: &PetProfile,
    kcal_per_kg: f64,
    config: &EnergyConfig,
) -> FeedingPlan {
    let rer = calculate_rer(profile.weight_kg, config);
    let factor = activity_factor(profile.activity_level, profile.is_neutered, config);
    let der = rer * factor;
    let daily_grams = calculate_daily_grams(der, kcal_per_kg);
    let meals_per_day = config.meals_per_day.max(1);

    debug!(
        species = %profile.species,
        weight_kg = profile.weight_kg,
        rer,
        der,
        daily_grams,
        "Calculated feeding plan"
    );

    FeedingPlan {
        rer,
        activity_factor: factor,
        der,
        kcal_per_kg,
        daily_grams,
        meals_per_day,
        grams_per_meal: daily_grams / f64::from(meals_per_day),
        method: "RER (70 x kg^0.75) x activity factor".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nfe_clamps_at_zero() {
        assert!((calculate_nfe(26.0, 14.0, 3.0, 7.0, 10.0) - 40.0).abs() < 1e-9);
        assert!(calculate_nfe(60.0, 30.0, 5.0, 10.0, 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_estimate_kcal_per_kg() {
        let config = AtwaterConfig::default();
        // 3.5*26 + 8.5*14 + 3.5*40 = 91 + 119 + 140 = 350 kcal/100g
        assert_eq!(estimate_kcal_per_kg(26.0, 14.0, 3.0, 7.0, 10.0, &config), 3500);
        // Over-100 analysis: NFE floors at 0, 3.5*60 + 8.5*30 = 465
        assert_eq!(estimate_kcal_per_kg(60.0, 30.0, 5.0, 10.0, 10.0, &config), 4650);
    }

    #[test]
    fn test_rer_degenerate_weights() {
        let config = EnergyConfig::default();
        assert!(calculate_rer(0.0, &config).abs() < f64::EPSILON);
        assert!(calculate_rer(-2.0, &config).abs() < f64::EPSILON);
        assert!(calculate_rer(f64::NAN, &config).abs() < f64::EPSILON);
    }

    #[test]
    fn test_activity_factor_clamps_level() {
        let config = EnergyConfig::default();
        assert!((activity_factor(0, true, &config) - 1.2 * 0.9).abs() < 1e-9);
        assert!((activity_factor(9, false, &config) - 1.4 * 1.5).abs() < 1e-9);
        assert!((activity_factor(3, true, &config) - 1.38).abs() < 1e-9);
    }

    #[test]
    fn test_daily_grams_zero_density() {
        assert!(calculate_daily_grams(300.0, 0.0).abs() < f64::EPSILON);
        assert!(calculate_daily_grams(300.0, f64::NAN).abs() < f64::EPSILON);
        assert!((calculate_daily_grams(350.0, 3500.0) - 100.0).abs() < 1e-9);
    }
}
