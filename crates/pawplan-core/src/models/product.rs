// ABOUTME: Catalog product model with guaranteed analysis, energy density, and SKUs
// ABOUTME: ProductSku carries package size, current price, and chronological price history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use crate::models::pet::Species;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One purchasable package of a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSku {
    /// Package weight in kilograms
    pub size_kg: f64,
    /// Current price
    pub current_price: f64,
    /// Historical prices, oldest first
    #[serde(default)]
    pub price_history: Vec<f64>,
}

impl ProductSku {
    /// Create a SKU without price history
    #[must_use]
    pub const fn new(size_kg: f64, current_price: f64) -> Self {
        Self {
            size_kg,
            current_price,
            price_history: Vec::new(),
        }
    }

    /// Attach a price history
    #[must_use]
    pub fn with_history(mut self, price_history: Vec<f64>) -> Self {
        self.price_history = price_history;
        self
    }

    /// Lowest and highest historical price, if any history exists
    #[must_use]
    pub fn history_bounds(&self) -> Option<(f64, f64)> {
        let mut prices = self.price_history.iter().copied();
        let first = prices.next()?;
        Some(prices.fold((first, first), |(min, max), price| {
            (min.min(price), max.max(price))
        }))
    }
}

/// Catalog product
///
/// Macronutrients are guaranteed-analysis percentages (as-fed).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Target species
    pub species: Species,
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
    /// Energy density (kcal/kg)
    pub kcal_per_kg: f64,
    /// Ingredient names that commonly trigger allergies
    #[serde(default)]
    pub allergens: BTreeSet<String>,
    /// Purchasable packages; the first one is the reference SKU
    #[serde(default)]
    pub skus: Vec<ProductSku>,
}

impl Product {
    /// The reference SKU used for value and price scoring
    #[must_use]
    pub fn first_sku(&self) -> Option<&ProductSku> {
        self.skus.first()
    }

    /// Whether the product contains any of the given ingredient names
    #[must_use]
    pub fn contains_any_allergen(&self, allergies: &BTreeSet<String>) -> bool {
        !self.allergens.is_disjoint(allergies)
    }

    /// Validate catalog data before it is shown to a user
    ///
    /// # Errors
    ///
    /// Returns an error if the id is empty, a macronutrient is outside 0-100,
    /// or the energy density is not positive
    pub fn validate(&self) -> AppResult<()> {
        if self.id.trim().is_empty() {
            return Err(AppError::missing_field("id"));
        }
        let macros = [
            ("protein", self.protein),
            ("fat", self.fat),
            ("fiber", self.fiber),
            ("ash", self.ash),
            ("moisture", self.moisture),
        ];
        for (name, value) in macros {
            if !(0.0..=100.0).contains(&value) {
                return Err(AppError::value_out_of_range(format!(
                    "Product {}: {name} must be between 0 and 100%, got {value}",
                    self.id
                )));
            }
        }
        if !self.kcal_per_kg.is_finite() || self.kcal_per_kg <= 0.0 {
            return Err(AppError::invalid_input(format!(
                "Product {}: kcal_per_kg must be positive",
                self.id
            )));
        }
        Ok(())
    }
}
