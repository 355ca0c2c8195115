// ABOUTME: Main library entry point for the Pawplan feeding engine
// ABOUTME: Re-exports core models and engine operations and provides logging setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pawplan
//!
//! Feeding calculator and food recommendation engine for dogs and cats.
//!
//! - **Feeding**: RER/DER energy needs, grams per day, mixed feeding splits
//! - **Calories**: kcal/kg estimated from a guaranteed analysis
//! - **Pricing**: where today's price sits between its historical low and high
//! - **Recommendations**: allergen-safe products ranked by nutrition distance
//!
//! ## Example Usage
//!
//! ```rust
//! use pawplan::config::EngineConfig;
//! use pawplan::models::{PetProfile, Species};
//! use pawplan::nutrition_calculator::calculate_feeding_plan;
//!
//! let config = EngineConfig::default();
//! let pet = PetProfile::new(Species::Dog, 10.0, true, 3);
//! let plan = calculate_feeding_plan(&pet, 3500.0, &config.nutrition.energy);
//! assert!(plan.daily_grams > 0.0);
//! ```

/// Structured logging setup
pub mod logging;

pub use pawplan_core::{constants, errors, models};
pub use pawplan_intelligence::{
    age_converter, config, nutrition_calculator, nutrition_target, price_position,
    recommendation_engine,
};

pub use pawplan_core::{AppError, AppResult, ErrorCode, PetProfile, Product, ProductSku, Species};
pub use pawplan_intelligence::{EngineConfig, RecommendationEngine};
