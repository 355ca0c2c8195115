// ABOUTME: Feeding and recommendation engine for dogs and cats
// ABOUTME: Energy requirements, calorie estimation, price positioning, and product ranking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pawplan Intelligence
//!
//! Pure, synchronous calculations over caller-owned [`PetProfile`] and
//! [`Product`] values. Nothing here performs I/O or keeps state between
//! calls; configuration is an explicit [`EngineConfig`] parameter.
//!
//! - **`nutrition_calculator`**: RER, DER, daily grams, Atwater kcal/kg, mixed feeding
//! - **`price_position`**: Current price against historical range, labelled 저가..고가
//! - **`nutrition_target`**: Weight-bracket targets and L1 nutrition distance
//! - **`recommendation_engine`**: Allergen-safe ranking with recommendation reasons
//! - **`age_converter`**: Pet age to human-equivalent years
//!
//! [`PetProfile`]: pawplan_core::models::PetProfile
//! [`Product`]: pawplan_core::models::Product

/// Engine configuration with defaults, validation, and environment overrides
pub mod config;

/// Pet age conversion
pub mod age_converter;

/// Energy requirement and ration calculations
pub mod nutrition_calculator;

/// Weight-bracket nutrition targets
pub mod nutrition_target;

/// Price positioning within historical range
pub mod price_position;

/// Product scoring and ranking
pub mod recommendation_engine;

pub use age_converter::{convert_to_human_years, PetSize};
pub use config::intelligence::{ConfigError, EngineConfig};
pub use nutrition_calculator::{
    activity_factor, calculate_daily_grams, calculate_der, calculate_feeding_plan, calculate_nfe,
    calculate_rer, estimate_kcal_per_kg, mix_plan, mix_plan_by_density, FeedingPlan, MixPlan,
};
pub use nutrition_target::{get_nutrition_target, nutrition_distance, NutritionTarget};
pub use price_position::{
    build_price_rollup, calculate_price_position, price_position_label, summarize_sku_price,
    PricePositionLabel, PriceRollup, PriceSummary, RollingPriceRange,
};
pub use recommendation_engine::{
    calculate_value_score, generate_recommendation_reasons, get_nutrition_match,
    products_for_species, recommend_products, recommend_products_with_score, score_products,
    NutrientComparison, NutritionMatch, RecommendationEngine, ScoredProduct,
};
