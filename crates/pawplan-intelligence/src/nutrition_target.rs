// ABOUTME: Weight-bracket nutrition targets and L1 nutrition distance
// ABOUTME: Reference macronutrient profile each product is compared against
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Target Profile
//!
//! Smaller animals get a higher protein/fat target; fiber, ash and moisture
//! targets are the same for every bracket. Distance is the Manhattan (L1)
//! distance over the five guaranteed-analysis values, so each nutrient's
//! contribution can be explained on its own.

use crate::config::intelligence::TargetConfig;
use pawplan_core::models::Product;
use serde::{Deserialize, Serialize};

/// Target guaranteed-analysis profile (percentages)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionTarget {
    /// Crude protein (%)
    pub protein: f64,
    /// Crude fat (%)
    pub fat: f64,
    /// Crude fiber (%)
    pub fiber: f64,
    /// Ash (%)
    pub ash: f64,
    /// Moisture (%)
    pub moisture: f64,
}

impl NutritionTarget {
    /// Values in protein, fat, fiber, ash, moisture order
    #[must_use]
    pub const fn as_array(&self) -> [f64; 5] {
        [self.protein, self.fat, self.fiber, self.ash, self.moisture]
    }
}

/// Look up the target profile for a body weight
///
/// Weights outside every bracket (negative, NaN) get the fallback target.
#[must_use]
pub fn get_nutrition_target(weight_kg: f64, config: &TargetConfig) -> NutritionTarget {
    config
        .brackets
        .iter()
        .find(|bracket| bracket.contains(weight_kg))
        .map_or(config.fallback, |bracket| bracket.target)
}

/// Sum of absolute differences between a product and the target
#[must_use]
pub fn nutrition_distance(product: &Product, target: &NutritionTarget) -> f64 {
    let actual = [
        product.protein,
        product.fat,
        product.fiber,
        product.ash,
        product.moisture,
    ];
    actual
        .iter()
        .zip(target.as_array())
        .map(|(value, goal)| (value - goal).abs())
        .sum()
}
