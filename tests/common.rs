// ABOUTME: Shared test utilities and fixtures for Pawplan integration tests
// ABOUTME: Quiet tracing setup plus builders for pet profiles and catalog products
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    dead_code,
    missing_docs
)]

//! Shared test utilities for `pawplan`
//!
//! Each integration test binary includes this with `mod common;`, so not
//! every helper is used by every test file.

use pawplan::models::{PetProfile, Product, ProductSku, Species};
use std::collections::BTreeSet;
use std::env;
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls verbosity; default is quiet
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            Ok("WARN" | "ERROR") | _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Dog with the given weight, neutered, moderate activity, no allergies
pub fn dog(weight_kg: f64) -> PetProfile {
    PetProfile::new(Species::Dog, weight_kg, true, 3)
}

/// Dog food with the given analysis, one 2 kg SKU at 30,000 and no history
pub fn product(id: &str, protein: f64, fat: f64, fiber: f64, ash: f64, moisture: f64) -> Product {
    Product {
        id: id.to_owned(),
        name: format!("Test food {id}"),
        species: Species::Dog,
        protein,
        fat,
        fiber,
        ash,
        moisture,
        kcal_per_kg: 3600.0,
        allergens: BTreeSet::new(),
        skus: vec![ProductSku::new(2.0, 30_000.0)],
    }
}

/// The small-dog target profile exactly: 28/15/3/7/10
pub fn small_dog_target_product(id: &str) -> Product {
    product(id, 28.0, 15.0, 3.0, 7.0, 10.0)
}

/// Add allergens to a product
pub fn with_allergens(mut product: Product, allergens: &[&str]) -> Product {
    product.allergens = allergens.iter().map(|a| (*a).to_owned()).collect();
    product
}

/// Replace the first SKU with a priced SKU and history
pub fn with_prices(mut product: Product, current: f64, history: &[f64]) -> Product {
    product.skus = vec![ProductSku::new(2.0, current).with_history(history.to_vec())];
    product
}
