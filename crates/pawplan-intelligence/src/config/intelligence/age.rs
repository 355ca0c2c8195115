// ABOUTME: Pet age conversion configuration
// ABOUTME: Configures human-year anchors, yearly increments, and dog size cut-offs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::intelligence::error::ConfigError;
use pawplan_core::constants::age;
use serde::{Deserialize, Serialize};

/// Age conversion configuration
///
/// Reference: AVMA / AAHA canine and feline life stage guidelines (2019, 2021)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgeConfig {
    /// Human years at the end of the first year (15)
    pub first_year_human_years: f64,
    /// Human years at the end of the second year (24)
    pub second_year_human_years: f64,
    /// Yearly increment for cats after year two (4)
    pub cat_yearly_increment: f64,
    /// Yearly increment for small dogs after year two (4)
    pub small_dog_yearly_increment: f64,
    /// Yearly increment for medium dogs after year two (5)
    pub medium_dog_yearly_increment: f64,
    /// Yearly increment for large dogs after year two (6)
    pub large_dog_yearly_increment: f64,
    /// Dogs lighter than this are small (10 kg)
    pub small_dog_max_kg: f64,
    /// Dogs lighter than this are medium (25 kg)
    pub medium_dog_max_kg: f64,
}

impl Default for AgeConfig {
    fn default() -> Self {
        Self {
            first_year_human_years: age::FIRST_YEAR_HUMAN_YEARS,
            second_year_human_years: age::SECOND_YEAR_HUMAN_YEARS,
            cat_yearly_increment: age::CAT_YEARLY_INCREMENT,
            small_dog_yearly_increment: age::SMALL_DOG_YEARLY_INCREMENT,
            medium_dog_yearly_increment: age::MEDIUM_DOG_YEARLY_INCREMENT,
            large_dog_yearly_increment: age::LARGE_DOG_YEARLY_INCREMENT,
            small_dog_max_kg: age::SMALL_DOG_MAX_KG,
            medium_dog_max_kg: age::MEDIUM_DOG_MAX_KG,
        }
    }
}

impl AgeConfig {
    /// Validate anchors and cut-offs
    ///
    /// # Errors
    ///
    /// Returns an error if anchors are not ascending, an increment is not
    /// positive, or the size cut-offs are inverted
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.first_year_human_years <= 0.0
            || self.first_year_human_years >= self.second_year_human_years
        {
            return Err(ConfigError::InvalidRange(
                "first_year_human_years must be positive and < second_year_human_years",
            ));
        }
        let increments = [
            self.cat_yearly_increment,
            self.small_dog_yearly_increment,
            self.medium_dog_yearly_increment,
            self.large_dog_yearly_increment,
        ];
        if increments.iter().any(|i| *i <= 0.0) {
            return Err(ConfigError::ValueOutOfRange("Yearly age increments must be positive"));
        }
        if self.small_dog_max_kg <= 0.0 || self.small_dog_max_kg >= self.medium_dog_max_kg {
            return Err(ConfigError::InvalidRange(
                "small_dog_max_kg must be positive and < medium_dog_max_kg",
            ));
        }
        Ok(())
    }
}
