// ABOUTME: Benchmark fixtures for generating realistic pet food catalogs
// ABOUTME: Provides deterministic data generation for reproducible performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Deterministic catalog generation for benchmarks.

use pawplan::models::{Product, ProductSku, Species};
use std::collections::BTreeSet;

/// Predefined catalog sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum CatalogSize {
    /// Small catalog (20 products) - one brand
    Small,
    /// Medium catalog (200 products) - typical shop
    Medium,
    /// Large catalog (2,000 products) - marketplace
    Large,
}

impl CatalogSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 20,
            Self::Medium => 200,
            Self::Large => 2_000,
        }
    }
}

const PROTEINS: [&str; 5] = ["닭", "소고기", "연어", "양고기", "오리"];

/// Generate a single product; analysis and prices vary with `index`
#[allow(clippy::cast_precision_loss)]
fn generate_product(index: usize) -> Product {
    let protein = 22.0 + (index % 13) as f64;
    let fat = 10.0 + (index % 9) as f64;
    let current_price = 20_000.0 + ((index * 733) % 30_000) as f64;
    let history = (0..12)
        .map(|step| current_price * (0.85 + ((index + step * 7) % 30) as f64 / 100.0))
        .collect();

    let allergens: BTreeSet<String> = [PROTEINS[index % PROTEINS.len()].to_owned()]
        .into_iter()
        .collect();

    Product {
        id: format!("bench_product_{index}"),
        name: format!("Benchmark Food {index}"),
        species: if index % 4 == 0 { Species::Cat } else { Species::Dog },
        protein,
        fat,
        fiber: 2.0 + (index % 5) as f64,
        ash: 6.0 + (index % 3) as f64,
        moisture: 9.0 + (index % 4) as f64,
        kcal_per_kg: 3_300.0 + ((index * 37) % 700) as f64,
        allergens,
        skus: vec![ProductSku::new(1.0 + (index % 6) as f64, current_price).with_history(history)],
    }
}

/// Generate a catalog of the given size
#[must_use]
pub fn generate_catalog(size: CatalogSize) -> Vec<Product> {
    (0..size.count()).map(generate_product).collect()
}
