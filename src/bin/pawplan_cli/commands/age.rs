// ABOUTME: Age conversion command for pawplan-cli
// ABOUTME: Maps pet age to human-equivalent years using species and size class
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pawplan::{
    age_converter::{convert_to_human_years, PetSize},
    config::EngineConfig,
    errors::AppResult,
    models::Species,
};
use serde_json::json;

use crate::helpers::{
    display::print_json,
    validation::{require_non_negative, require_positive},
};

type Result<T> = AppResult<T>;

/// Print the human-equivalent age; dogs without a weight count as medium
pub fn human_age(
    config: &EngineConfig,
    species: Species,
    years: f64,
    weight_kg: Option<f64>,
) -> Result<()> {
    require_non_negative("years", years)?;
    let size = match weight_kg {
        Some(weight) => {
            require_positive("weight", weight)?;
            PetSize::from_weight_kg(weight, &config.age)
        }
        None => PetSize::Medium,
    };

    let human_years = convert_to_human_years(species, years, size, &config.age);
    print_json(&json!({
        "species": species,
        "age_years": years,
        "size": size,
        "human_years": human_years,
    }))
}
