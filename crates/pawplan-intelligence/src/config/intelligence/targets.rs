// ABOUTME: Weight-bracket nutrition target configuration
// ABOUTME: Defines the bracket table and the fallback target used when no bracket matches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::intelligence::error::ConfigError;
use crate::nutrition_target::NutritionTarget;
use pawplan_core::constants::targets;
use serde::{Deserialize, Serialize};

/// One weight band of the target table, `[min_weight_kg, max_weight_kg)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightBracket {
    /// Inclusive lower bound (kg)
    pub min_weight_kg: f64,
    /// Exclusive upper bound (kg); `None` means unbounded
    pub max_weight_kg: Option<f64>,
    /// Target profile for this band
    pub target: NutritionTarget,
}

impl WeightBracket {
    /// Whether the weight falls inside this band
    #[must_use]
    pub fn contains(&self, weight_kg: f64) -> bool {
        weight_kg >= self.min_weight_kg && self.max_weight_kg.is_none_or(|max| weight_kg < max)
    }
}

/// Nutrition target table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetConfig {
    /// Contiguous weight bands starting at 0 kg
    pub brackets: Vec<WeightBracket>,
    /// Target used when no band matches
    pub fallback: NutritionTarget,
}

const fn bracket_target(protein: f64, fat: f64) -> NutritionTarget {
    NutritionTarget {
        protein,
        fat,
        fiber: targets::FIBER_PERCENT,
        ash: targets::ASH_PERCENT,
        moisture: targets::MOISTURE_PERCENT,
    }
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            brackets: vec![
                WeightBracket {
                    min_weight_kg: 0.0,
                    max_weight_kg: Some(targets::SMALL_MAX_KG),
                    target: bracket_target(28.0, 15.0),
                },
                WeightBracket {
                    min_weight_kg: targets::SMALL_MAX_KG,
                    max_weight_kg: Some(targets::MEDIUM_MAX_KG),
                    target: bracket_target(26.0, 14.0),
                },
                WeightBracket {
                    min_weight_kg: targets::MEDIUM_MAX_KG,
                    max_weight_kg: None,
                    target: bracket_target(24.0, 13.0),
                },
            ],
            fallback: bracket_target(26.0, 14.0),
        }
    }
}

impl TargetConfig {
    /// Validate the bracket table
    ///
    /// # Errors
    ///
    /// Returns an error if the table is empty, does not start at 0 kg, has
    /// gaps or overlaps, is bounded at the top, or holds percentages
    /// outside 0-100
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Some(first) = self.brackets.first() else {
            return Err(ConfigError::MissingField("targets.brackets"));
        };
        if first.min_weight_kg.abs() > f64::EPSILON {
            return Err(ConfigError::InvalidRange("First weight bracket must start at 0 kg"));
        }
        for pair in self.brackets.windows(2) {
            match pair[0].max_weight_kg {
                Some(max) if (max - pair[1].min_weight_kg).abs() <= f64::EPSILON => {}
                _ => {
                    return Err(ConfigError::InvalidRange(
                        "Weight brackets must be contiguous and ascending",
                    ))
                }
            }
            if pair[1].min_weight_kg <= pair[0].min_weight_kg {
                return Err(ConfigError::InvalidRange(
                    "Weight brackets must be contiguous and ascending",
                ));
            }
        }
        if self.brackets.last().is_some_and(|b| b.max_weight_kg.is_some()) {
            return Err(ConfigError::InvalidRange("Last weight bracket must be unbounded"));
        }

        let all_targets = self
            .brackets
            .iter()
            .map(|b| &b.target)
            .chain(std::iter::once(&self.fallback));
        for target in all_targets {
            if target.as_array().iter().any(|v| !(0.0..=100.0).contains(v)) {
                return Err(ConfigError::ValueOutOfRange(
                    "Nutrition target percentages must be between 0 and 100",
                ));
            }
        }
        Ok(())
    }
}
