// ABOUTME: Price positioning configuration for percentile bucketing
// ABOUTME: Configures label thresholds, neutral position, and minimum history length
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::intelligence::error::ConfigError;
use pawplan_core::constants::pricing;
use serde::{Deserialize, Serialize};

/// Price positioning configuration
///
/// Label buckets use inclusive upper bounds: a position equal to
/// `low_max` is still 저가.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Upper bound of 저가 (20)
    pub low_max: f64,
    /// Upper bound of 중저가 (40)
    pub low_mid_max: f64,
    /// Upper bound of 중가 (60)
    pub mid_max: f64,
    /// Upper bound of 중고가 (80); anything above is 고가
    pub mid_high_max: f64,
    /// Position used when no comparison is possible (50)
    pub neutral_position: f64,
    /// History points required before scoring computes a position (3)
    pub min_history_points: usize,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            low_max: pricing::LOW_MAX,
            low_mid_max: pricing::LOW_MID_MAX,
            mid_max: pricing::MID_MAX,
            mid_high_max: pricing::MID_HIGH_MAX,
            neutral_position: pricing::NEUTRAL_POSITION,
            min_history_points: pricing::MIN_HISTORY_POINTS,
        }
    }
}

impl PricingConfig {
    /// Validate bucket thresholds
    ///
    /// # Errors
    ///
    /// Returns an error if thresholds are outside 0-100 or not strictly ascending
    pub fn validate(&self) -> Result<(), ConfigError> {
        let thresholds = [self.low_max, self.low_mid_max, self.mid_max, self.mid_high_max];
        if thresholds.iter().any(|t| !(0.0..=100.0).contains(t)) {
            return Err(ConfigError::ValueOutOfRange(
                "Price label thresholds must be between 0 and 100",
            ));
        }
        if thresholds.windows(2).any(|w| w[0] >= w[1]) {
            return Err(ConfigError::InvalidRange(
                "Price label thresholds must be strictly ascending",
            ));
        }
        if !(0.0..=100.0).contains(&self.neutral_position) {
            return Err(ConfigError::ValueOutOfRange(
                "Neutral price position must be between 0 and 100",
            ));
        }
        Ok(())
    }
}
