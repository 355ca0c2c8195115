// ABOUTME: Price position command for pawplan-cli
// ABOUTME: Rolls observed prices into a range and labels the current price
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pawplan::{
    config::EngineConfig,
    errors::AppResult,
    price_position::{calculate_price_position, price_position_label, RollingPriceRange},
};
use serde_json::json;
use tracing::{debug, info};

use crate::helpers::{display::print_json, validation::require_non_negative};

type Result<T> = AppResult<T>;

/// Print the position of `current` within the observed history
pub fn position(config: &EngineConfig, current: f64, history: &[f64]) -> Result<()> {
    require_non_negative("current", current)?;
    if history.len() < config.pricing.min_history_points {
        debug!(
            points = history.len(),
            "Price history shorter than the recommendation minimum"
        );
    }

    let mut range = RollingPriceRange::default();
    for &price in history {
        range.observe(price);
    }
    let rollup = range.rollup(current);
    let position = calculate_price_position(rollup.current_price, rollup.year_min, rollup.year_max);
    let label = price_position_label(position, &config.pricing);

    info!(position, label = %label, "Price position ready");
    print_json(&json!({
        "current_price": rollup.current_price,
        "year_min": rollup.year_min,
        "year_max": rollup.year_max,
        "position": position,
        "label": label.as_str(),
    }))
}
