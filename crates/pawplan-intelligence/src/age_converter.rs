// ABOUTME: Pet age to human-equivalent age conversion
// ABOUTME: Piecewise-linear first two years then species and size specific yearly increments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::intelligence::AgeConfig;
use pawplan_core::models::Species;
use serde::{Deserialize, Serialize};

/// Dog size class for ageing rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PetSize {
    /// Under 10 kg
    Small,
    /// 10 kg to under 25 kg
    Medium,
    /// 25 kg and heavier
    Large,
}

impl PetSize {
    /// Size class for a body weight; NaN and negative weights count as small
    #[must_use]
    pub fn from_weight_kg(weight_kg: f64, config: &AgeConfig) -> Self {
        if weight_kg >= config.medium_dog_max_kg {
            Self::Large
        } else if weight_kg >= config.small_dog_max_kg {
            Self::Medium
        } else {
            Self::Small
        }
    }
}

/// Human-equivalent age in years
///
/// Year one maps linearly onto `first_year_human_years`, year two onto
/// `second_year_human_years`. Each later year adds a fixed increment: the
/// cat increment for cats, the size increment for dogs. Negative or NaN ages
/// give 0.
#[must_use]
pub fn convert_to_human_years(
    species: Species,
    age_years: f64,
    size: PetSize,
    config: &AgeConfig,
) -> f64 {
    if age_years.is_nan() || age_years <= 0.0 {
        return 0.0;
    }
    if age_years <= 1.0 {
        return age_years * config.first_year_human_years;
    }

    let second_year_span = config.second_year_human_years - config.first_year_human_years;
    if age_years <= 2.0 {
        return second_year_span.mul_add(age_years - 1.0, config.first_year_human_years);
    }

    let increment = match (species, size) {
        (Species::Cat, _) => config.cat_yearly_increment,
        (Species::Dog, PetSize::Small) => config.small_dog_yearly_increment,
        (Species::Dog, PetSize::Medium) => config.medium_dog_yearly_increment,
        (Species::Dog, PetSize::Large) => config.large_dog_yearly_increment,
    };
    increment.mul_add(age_years - 2.0, config.second_year_human_years)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_from_weight() {
        let config = AgeConfig::default();
        assert_eq!(PetSize::from_weight_kg(4.0, &config), PetSize::Small);
        assert_eq!(PetSize::from_weight_kg(10.0, &config), PetSize::Medium);
        assert_eq!(PetSize::from_weight_kg(24.9, &config), PetSize::Medium);
        assert_eq!(PetSize::from_weight_kg(25.0, &config), PetSize::Large);
    }

    #[test]
    fn test_first_two_years_are_species_independent() {
        let config = AgeConfig::default();
        let dog = convert_to_human_years(Species::Dog, 1.0, PetSize::Large, &config);
        let cat = convert_to_human_years(Species::Cat, 1.0, PetSize::Small, &config);
        assert!((dog - 15.0).abs() < 1e-9);
        assert!((cat - 15.0).abs() < 1e-9);
        let half = convert_to_human_years(Species::Dog, 1.5, PetSize::Small, &config);
        assert!((half - 19.5).abs() < 1e-9);
    }

    #[test]
    fn test_later_years_use_size_increment() {
        let config = AgeConfig::default();
        let small = convert_to_human_years(Species::Dog, 5.0, PetSize::Small, &config);
        let large = convert_to_human_years(Species::Dog, 5.0, PetSize::Large, &config);
        let cat = convert_to_human_years(Species::Cat, 5.0, PetSize::Large, &config);
        assert!((small - 36.0).abs() < 1e-9);
        assert!((large - 42.0).abs() < 1e-9);
        assert!((cat - 36.0).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_age_is_zero() {
        let config = AgeConfig::default();
        assert!(convert_to_human_years(Species::Cat, -1.0, PetSize::Small, &config).abs() < f64::EPSILON);
        assert!(convert_to_human_years(Species::Cat, f64::NAN, PetSize::Small, &config).abs() < f64::EPSILON);
    }
}
