// ABOUTME: Price positioning of a current price inside its historical range
// ABOUTME: Rolling min/max accumulation, 0-100 percentile, and qualitative 저가..고가 labels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Price Positioning
//!
//! Maps a current price against the historical low/high of its SKU. 0 means
//! the current price is the lowest seen, 100 the highest. With no variance
//! there is nothing to compare against and the position is 50.

use crate::config::intelligence::PricingConfig;
use pawplan_core::constants::pricing;
use pawplan_core::models::ProductSku;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Historical price range including the current price
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRollup {
    /// Current price
    pub current_price: f64,
    /// Lowest price in the window
    pub year_min: f64,
    /// Highest price in the window
    pub year_max: f64,
}

/// Qualitative price bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricePositionLabel {
    /// 저가
    Low,
    /// 중저가
    LowMid,
    /// 중가
    Mid,
    /// 중고가
    MidHigh,
    /// 고가
    High,
}

impl PricePositionLabel {
    /// Korean label shown to users
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "저가",
            Self::LowMid => "중저가",
            Self::Mid => "중가",
            Self::MidHigh => "중고가",
            Self::High => "고가",
        }
    }
}

impl fmt::Display for PricePositionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Price indicator for one SKU
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceSummary {
    /// Range the position was computed against
    pub rollup: PriceRollup,
    /// Position in [0, 100]
    pub position: f64,
    /// Bucket for `position`
    pub label: PricePositionLabel,
}

/// Accumulates observed prices into a range that only ever widens
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RollingPriceRange {
    min: Option<f64>,
    max: Option<f64>,
}

impl RollingPriceRange {
    /// Start from a previously stored range
    #[must_use]
    pub const fn from_bounds(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    /// Record one price snapshot; NaN snapshots are ignored
    pub fn observe(&mut self, price: f64) {
        if price.is_nan() {
            return;
        }
        self.min = Some(self.min.map_or(price, |min| min.min(price)));
        self.max = Some(self.max.map_or(price, |max| max.max(price)));
    }

    /// Lowest price observed
    #[must_use]
    pub const fn min(&self) -> Option<f64> {
        self.min
    }

    /// Highest price observed
    #[must_use]
    pub const fn max(&self) -> Option<f64> {
        self.max
    }

    /// Roll the stored range up with a current price
    #[must_use]
    pub fn rollup(&self, current_price: f64) -> PriceRollup {
        build_price_rollup(current_price, self.min, self.max)
    }
}

/// Combine a current price with a possibly missing historical range
///
/// Missing bounds default to the current price, then the range widens to
/// include it.
#[must_use]
pub fn build_price_rollup(
    current_price: f64,
    year_min: Option<f64>,
    year_max: Option<f64>,
) -> PriceRollup {
    let min = year_min.unwrap_or(current_price);
    let max = year_max.unwrap_or(current_price);
    PriceRollup {
        current_price,
        year_min: min.min(current_price),
        year_max: max.max(current_price),
    }
}

/// Percentile of `current` within `[min, max]`, clamped to 0-100
///
/// Returns exactly 50 when `min == max`.
#[must_use]
pub fn calculate_price_position(current: f64, min: f64, max: f64) -> f64 {
    let range = max - min;
    if range.abs() < f64::EPSILON {
        return pricing::NEUTRAL_POSITION;
    }
    let position = ((current - min) / range) * 100.0;
    if position.is_nan() {
        return pricing::NEUTRAL_POSITION;
    }
    position.clamp(0.0, 100.0)
}

/// Bucket a position using inclusive upper bounds
#[must_use]
pub fn price_position_label(position: f64, config: &PricingConfig) -> PricePositionLabel {
    if position.is_nan() {
        PricePositionLabel::Mid
    } else if position <= config.low_max {
        PricePositionLabel::Low
    } else if position <= config.low_mid_max {
        PricePositionLabel::LowMid
    } else if position <= config.mid_max {
        PricePositionLabel::Mid
    } else if position <= config.mid_high_max {
        PricePositionLabel::MidHigh
    } else {
        PricePositionLabel::High
    }
}

/// Price indicator for a product-detail view
///
/// An empty history is the degenerate range `[current, current]`, which
/// gives position 50 and 중가.
#[must_use]
pub fn summarize_sku_price(sku: &ProductSku, config: &PricingConfig) -> PriceSummary {
    let (min, max) = sku
        .history_bounds()
        .map_or((None, None), |(min, max)| (Some(min), Some(max)));
    let rollup = build_price_rollup(sku.current_price, min, max);
    let position = calculate_price_position(rollup.current_price, rollup.year_min, rollup.year_max);
    PriceSummary {
        rollup,
        position,
        label: price_position_label(position, config),
    }
}
