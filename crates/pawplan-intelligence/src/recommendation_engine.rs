// ABOUTME: Product recommendation engine ranking catalog foods for one pet
// ABOUTME: Combines nutrition distance, allergen safety, value, and price position with reasons
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Product recommendation engine
//!
//! Products are compared against the weight-bracket target of the pet.
//! Allergen-safe products rank by nutrition distance, then by how cheap the
//! current price is relative to its history. When no product is safe the
//! closest nutritional matches are returned anyway so the result is never
//! empty for a non-empty catalog.

use crate::config::intelligence::{EngineConfig, RecommendationConfig};
use crate::nutrition_calculator::{calculate_feeding_plan, FeedingPlan};
use crate::nutrition_target::{get_nutrition_target, nutrition_distance, NutritionTarget};
use crate::price_position::{price_position_label, summarize_sku_price, PricePositionLabel};
use pawplan_core::models::{PetProfile, Product, Species};
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

/// One product scored for one pet
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredProduct<'a> {
    /// Source catalog entry
    pub product: &'a Product,
    /// L1 distance to the weight-bracket target
    pub nutrition_distance: f64,
    /// Price per 100 g of the first SKU
    pub value_score: i64,
    /// Price position of the first SKU in [0, 100]
    pub price_position: f64,
    /// Bucket for `price_position`
    pub price_position_label: PricePositionLabel,
    /// Up to three reasons to recommend; empty for unsafe products
    pub reasons: Vec<String>,
    /// No declared allergy is present in the product
    pub is_safe: bool,
}

/// Actual vs target for one nutrient
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NutrientComparison {
    /// Product value (%)
    pub actual: f64,
    /// Target value (%)
    pub target: f64,
    /// `actual - target`, sign kept
    pub diff: f64,
}

impl NutrientComparison {
    /// Compare an actual value with its target
    #[must_use]
    pub fn new(actual: f64, target: f64) -> Self {
        Self {
            actual,
            target,
            diff: actual - target,
        }
    }
}

/// Per-nutrient comparison used for reason generation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NutritionMatch {
    /// Protein comparison
    pub protein: NutrientComparison,
    /// Fat comparison
    pub fat: NutrientComparison,
    /// Fiber comparison
    pub fiber: NutrientComparison,
}

/// Price per 100 g of the first SKU, rounded
///
/// 0 when the product has no SKU or the SKU has no usable size.
#[must_use]
pub fn calculate_value_score(product: &Product) -> i64 {
    let Some(sku) = product.first_sku() else {
        return 0;
    };
    if sku.size_kg.is_nan() || sku.size_kg <= 0.0 {
        return 0;
    }
    ((sku.current_price / sku.size_kg) / 10.0).round() as i64
}

/// Compare protein, fat and fiber against the target
#[must_use]
pub fn get_nutrition_match(product: &Product, target: &NutritionTarget) -> NutritionMatch {
    NutritionMatch {
        protein: NutrientComparison::new(product.protein, target.protein),
        fat: NutrientComparison::new(product.fat, target.fat),
        fiber: NutrientComparison::new(product.fiber, target.fiber),
    }
}

/// Format a percentage without a trailing `.0`
fn format_percent(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

/// Explain why a product suits the pet
///
/// Rules fire in a fixed order (protein, fat, fiber, allergies) and at most
/// one reason per rule. Below-target protein and above-target fat produce no
/// reason. If nothing fired a single generic reason is returned.
#[must_use]
pub fn generate_recommendation_reasons(
    product: &Product,
    profile: &PetProfile,
    config: &EngineConfig,
) -> Vec<String> {
    let target = get_nutrition_target(profile.weight_kg, &config.targets);
    reasons_for_target(product, profile, &target, &config.recommendation)
}

fn reasons_for_target(
    product: &Product,
    profile: &PetProfile,
    target: &NutritionTarget,
    config: &RecommendationConfig,
) -> Vec<String> {
    let messages = &config.messages;
    let tolerance = config.near_target_tolerance;
    let matched = get_nutrition_match(product, target);
    let mut reasons = Vec::with_capacity(4);

    if matched.protein.diff.abs() <= tolerance {
        reasons.push(
            messages
                .protein_near_target
                .replace("{target}", &format_percent(matched.protein.target)),
        );
    } else if matched.protein.diff > 0.0 {
        reasons.push(
            messages
                .protein_above_target
                .replace("{diff}", &format_percent(matched.protein.diff)),
        );
    }

    if matched.fat.diff.abs() <= tolerance {
        reasons.push(messages.fat_in_range.clone());
    } else if matched.fat.diff < 0.0 {
        reasons.push(
            messages
                .low_fat
                .replace("{fat}", &format_percent(matched.fat.actual)),
        );
    }

    if (config.fiber_digestive_min..=config.fiber_digestive_max).contains(&product.fiber) {
        reasons.push(messages.fiber_digestive.clone());
    }

    if profile.has_allergies() && !product.contains_any_allergen(&profile.allergies) {
        let allergens = profile
            .allergies
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        reasons.push(messages.allergen_free.replace("{allergens}", &allergens));
    }

    if reasons.is_empty() {
        reasons.push(messages.balanced.clone());
    }

    reasons.truncate(config.max_reasons);
    reasons
}

fn score_product<'a>(
    product: &'a Product,
    profile: &PetProfile,
    target: &NutritionTarget,
    config: &EngineConfig,
) -> ScoredProduct<'a> {
    let is_safe = !product.contains_any_allergen(&profile.allergies);

    let (price_position, label) = match product.first_sku() {
        Some(sku) if sku.price_history.len() >= config.pricing.min_history_points => {
            let summary = summarize_sku_price(sku, &config.pricing);
            (summary.position, summary.label)
        }
        _ => {
            let neutral = config.pricing.neutral_position;
            (neutral, price_position_label(neutral, &config.pricing))
        }
    };

    let reasons = if is_safe {
        reasons_for_target(product, profile, target, &config.recommendation)
    } else {
        Vec::new()
    };

    ScoredProduct {
        product,
        nutrition_distance: nutrition_distance(product, target),
        value_score: calculate_value_score(product),
        price_position,
        price_position_label: label,
        reasons,
        is_safe,
    }
}

/// Score every product for the pet, in input order
#[must_use]
pub fn score_products<'a>(
    products: &'a [Product],
    profile: &PetProfile,
    config: &EngineConfig,
) -> Vec<ScoredProduct<'a>> {
    let target = get_nutrition_target(profile.weight_kg, &config.targets);
    products
        .par_iter()
        .map(|product| score_product(product, profile, &target, config))
        .collect()
}

/// Rank products for the pet
///
/// Safe products sort by nutrition distance, ties broken by lower price
/// position. With no safe product, the closest `fallback_limit` products
/// overall are returned, sorted by distance.
#[must_use]
pub fn recommend_products_with_score<'a>(
    products: &'a [Product],
    profile: &PetProfile,
    config: &EngineConfig,
) -> Vec<ScoredProduct<'a>> {
    let scored = score_products(products, profile, config);

    if !scored.iter().any(|s| s.is_safe) {
        debug!(
            candidates = scored.len(),
            fallback_limit = config.recommendation.fallback_limit,
            "No allergen-safe products, recommending closest nutritional matches"
        );
        let mut closest = scored;
        closest.sort_by(|a, b| a.nutrition_distance.total_cmp(&b.nutrition_distance));
        closest.truncate(config.recommendation.fallback_limit);
        return closest;
    }

    let mut safe: Vec<ScoredProduct<'a>> = scored.into_iter().filter(|s| s.is_safe).collect();
    safe.sort_by(|a, b| {
        a.nutrition_distance
            .total_cmp(&b.nutrition_distance)
            .then_with(|| a.price_position.total_cmp(&b.price_position))
    });
    debug!(safe = safe.len(), "Ranked allergen-safe products");
    safe
}

/// Ranked products without scores
#[must_use]
pub fn recommend_products<'a>(
    products: &'a [Product],
    profile: &PetProfile,
    config: &EngineConfig,
) -> Vec<&'a Product> {
    recommend_products_with_score(products, profile, config)
        .into_iter()
        .map(|scored| scored.product)
        .collect()
}

/// Catalog entries made for the given species
#[must_use]
pub fn products_for_species(products: &[Product], species: Species) -> Vec<Product> {
    products
        .iter()
        .filter(|product| product.species == species)
        .cloned()
        .collect()
}

/// Stateless recommendation service bound to one configuration
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    config: EngineConfig,
}

impl RecommendationEngine {
    /// Create an engine with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom configuration
    #[must_use]
    pub const fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Score every product, in input order
    #[must_use]
    pub fn score<'a>(&self, products: &'a [Product], profile: &PetProfile) -> Vec<ScoredProduct<'a>> {
        score_products(products, profile, &self.config)
    }

    /// Ranked products with scores
    #[must_use]
    pub fn recommend_with_score<'a>(
        &self,
        products: &'a [Product],
        profile: &PetProfile,
    ) -> Vec<ScoredProduct<'a>> {
        recommend_products_with_score(products, profile, &self.config)
    }

    /// Ranked products
    #[must_use]
    pub fn recommend<'a>(&self, products: &'a [Product], profile: &PetProfile) -> Vec<&'a Product> {
        recommend_products(products, profile, &self.config)
    }

    /// Daily feeding plan for the pet on one food
    #[must_use]
    pub fn feeding_plan(&self, profile: &PetProfile, kcal_per_kg: f64) -> FeedingPlan {
        calculate_feeding_plan(profile, kcal_per_kg, &self.config.nutrition.energy)
    }
}
