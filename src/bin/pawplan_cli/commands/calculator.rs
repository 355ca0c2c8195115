// ABOUTME: Feeding calculator commands for pawplan-cli
// ABOUTME: Handles plan, estimate-kcal, and mix operations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pawplan::{
    config::EngineConfig,
    errors::AppResult,
    models::PetProfile,
    nutrition_calculator::{
        activity_factor, calculate_der, calculate_feeding_plan, calculate_nfe, calculate_rer,
        estimate_kcal_per_kg, mix_plan_by_density,
    },
};
use serde_json::json;
use tracing::info;

use crate::helpers::{
    display::print_json,
    validation::{require_percentage, require_positive},
};

type Result<T> = AppResult<T>;

/// Print the daily feeding plan, or energy needs only without a food
pub fn plan(config: &EngineConfig, profile: &PetProfile, kcal_per_kg: Option<f64>) -> Result<()> {
    profile.validate()?;
    let energy = &config.nutrition.energy;

    let Some(kcal_per_kg) = kcal_per_kg else {
        let rer = calculate_rer(profile.weight_kg, energy);
        let factor = activity_factor(profile.activity_level, profile.is_neutered, energy);
        return print_json(&json!({
            "rer": rer,
            "activity_factor": factor,
            "der": rer * factor,
        }));
    };

    require_positive("kcal-per-kg", kcal_per_kg)?;
    let feeding_plan = calculate_feeding_plan(profile, kcal_per_kg, energy);
    info!(
        der = feeding_plan.der,
        daily_grams = feeding_plan.daily_grams,
        "Feeding plan ready"
    );
    print_json(&feeding_plan)
}

/// Print NFE and estimated kcal/kg for protein, fat, fiber, ash, moisture
pub fn estimate_kcal(config: &EngineConfig, analysis: [f64; 5]) -> Result<()> {
    let names = ["protein", "fat", "fiber", "ash", "moisture"];
    for (name, value) in names.iter().zip(analysis) {
        require_percentage(name, value)?;
    }

    let [protein, fat, fiber, ash, moisture] = analysis;
    let nfe = calculate_nfe(protein, fat, fiber, ash, moisture);
    let kcal_per_kg =
        estimate_kcal_per_kg(protein, fat, fiber, ash, moisture, &config.nutrition.atwater);

    print_json(&json!({
        "nfe": nfe,
        "kcal_per_kg": kcal_per_kg,
    }))
}

/// Print the calorie and gram split between two foods
pub fn mix(
    config: &EngineConfig,
    profile: &PetProfile,
    kcal_per_kg_a: f64,
    kcal_per_kg_b: f64,
    ratio_a: f64,
) -> Result<()> {
    profile.validate()?;
    require_positive("kcal-a", kcal_per_kg_a)?;
    require_positive("kcal-b", kcal_per_kg_b)?;

    let der = calculate_der(
        profile.weight_kg,
        profile.activity_level,
        profile.is_neutered,
        &config.nutrition.energy,
    );
    let split = mix_plan_by_density(der, kcal_per_kg_a, kcal_per_kg_b, ratio_a);

    print_json(&json!({
        "der": der,
        "mix": split,
    }))
}
