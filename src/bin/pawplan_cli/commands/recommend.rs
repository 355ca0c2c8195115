// ABOUTME: Recommendation command for pawplan-cli
// ABOUTME: Reads a JSON product catalog from stdin and prints the ranked result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pawplan::{
    config::EngineConfig,
    errors::{AppError, AppResult},
    models::{PetProfile, Product},
    recommendation_engine::{products_for_species, RecommendationEngine},
};
use std::io;
use tracing::info;

use crate::helpers::display::print_json;

type Result<T> = AppResult<T>;

/// Rank the stdin catalog for the pet
pub fn run(config: EngineConfig, profile: &PetProfile, with_score: bool) -> Result<()> {
    profile.validate()?;

    let input = io::read_to_string(io::stdin()).map_err(|e| {
        AppError::invalid_input("Failed to read product catalog from stdin").with_source(e)
    })?;
    let catalog = parse_catalog(&input)?;
    let candidates = products_for_species(&catalog, profile.species);

    info!(
        catalog = catalog.len(),
        candidates = candidates.len(),
        species = %profile.species,
        "Ranking products"
    );

    let engine = RecommendationEngine::with_config(config);
    if with_score {
        print_json(&engine.recommend_with_score(&candidates, profile))
    } else {
        print_json(&engine.recommend(&candidates, profile))
    }
}

/// Parse and validate a JSON array of products
fn parse_catalog(input: &str) -> Result<Vec<Product>> {
    let products: Vec<Product> = serde_json::from_str(input)?;
    for product in &products {
        product.validate()?;
    }
    Ok(products)
}
