// ABOUTME: Pawplan CLI - command-line front end for the feeding and recommendation engine
// ABOUTME: Validates inputs, runs engine operations, and prints JSON results to stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Daily ration for a 10 kg neutered dog on a 3,500 kcal/kg food
//! pawplan-cli plan --species dog --weight 10 --activity 3 --neutered --kcal-per-kg 3500
//!
//! # Energy density from a guaranteed analysis
//! pawplan-cli estimate-kcal --protein 26 --fat 14 --fiber 3 --ash 7 --moisture 10
//!
//! # 70/30 calorie split between two foods
//! pawplan-cli mix --weight 10 --activity 3 --kcal-a 3500 --kcal-b 4000 --ratio 0.7
//!
//! # Where today's price sits in its history
//! pawplan-cli price --current 30000 --history 28000,32000,36000
//!
//! # Human-equivalent age
//! pawplan-cli age --species dog --years 5 --weight 30
//!
//! # Rank a catalog read from stdin
//! pawplan-cli recommend --species dog --weight 5 --allergy 닭고기 --with-score < products.json
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use pawplan::{
    config::EngineConfig,
    errors::{AppError, AppResult},
    logging::LoggingConfig,
    models::{PetProfile, Species},
};
use tracing::info;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "pawplan-cli",
    about = "Pawplan feeding calculator and food recommendations",
    long_about = "Feeding amounts, calorie estimates, price positions, and food recommendations for dogs and cats."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Daily energy requirement and feeding amount
    Plan {
        /// dog or cat
        #[arg(long)]
        species: Species,

        /// Body weight (kg)
        #[arg(long)]
        weight: f64,

        /// Activity level 1-5
        #[arg(long, default_value_t = 3)]
        activity: i32,

        /// Spayed or neutered
        #[arg(long)]
        neutered: bool,

        /// Energy density of the food (kcal/kg); omit for energy only
        #[arg(long)]
        kcal_per_kg: Option<f64>,
    },

    /// Estimate kcal/kg from a guaranteed analysis
    EstimateKcal {
        /// Crude protein (%)
        #[arg(long)]
        protein: f64,

        /// Crude fat (%)
        #[arg(long)]
        fat: f64,

        /// Crude fiber (%)
        #[arg(long)]
        fiber: f64,

        /// Ash (%)
        #[arg(long)]
        ash: f64,

        /// Moisture (%)
        #[arg(long)]
        moisture: f64,
    },

    /// Split the daily energy between two foods
    Mix {
        /// dog or cat
        #[arg(long, default_value = "dog")]
        species: Species,

        /// Body weight (kg)
        #[arg(long)]
        weight: f64,

        /// Activity level 1-5
        #[arg(long, default_value_t = 3)]
        activity: i32,

        /// Spayed or neutered
        #[arg(long)]
        neutered: bool,

        /// Energy density of food A (kcal/kg)
        #[arg(long)]
        kcal_a: f64,

        /// Energy density of food B (kcal/kg)
        #[arg(long)]
        kcal_b: f64,

        /// Share of calories from food A (0-1)
        #[arg(long, default_value_t = 0.5)]
        ratio: f64,
    },

    /// Price position of a current price within its history
    Price {
        /// Current price
        #[arg(long)]
        current: f64,

        /// Historical prices (comma-separated)
        #[arg(long, value_delimiter = ',')]
        history: Vec<f64>,
    },

    /// Convert pet age to human-equivalent years
    Age {
        /// dog or cat
        #[arg(long)]
        species: Species,

        /// Age in years
        #[arg(long)]
        years: f64,

        /// Body weight (kg), selects the dog size class
        #[arg(long)]
        weight: Option<f64>,
    },

    /// Rank a JSON product catalog read from stdin
    Recommend {
        /// dog or cat
        #[arg(long)]
        species: Species,

        /// Body weight (kg)
        #[arg(long)]
        weight: f64,

        /// Activity level 1-5
        #[arg(long, default_value_t = 3)]
        activity: i32,

        /// Spayed or neutered
        #[arg(long)]
        neutered: bool,

        /// Allergy to avoid (repeatable)
        #[arg(long = "allergy")]
        allergies: Vec<String>,

        /// Include scores and reasons
        #[arg(long)]
        with_score: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging
        .init()
        .map_err(|e| AppError::internal(format!("{e:#}")))?;

    let config = EngineConfig::load()?;
    info!("Pawplan CLI");

    match cli.command {
        Command::Plan {
            species,
            weight,
            activity,
            neutered,
            kcal_per_kg,
        } => {
            let profile = PetProfile::new(species, weight, neutered, activity);
            commands::calculator::plan(&config, &profile, kcal_per_kg)?;
        }
        Command::EstimateKcal {
            protein,
            fat,
            fiber,
            ash,
            moisture,
        } => {
            commands::calculator::estimate_kcal(&config, [protein, fat, fiber, ash, moisture])?;
        }
        Command::Mix {
            species,
            weight,
            activity,
            neutered,
            kcal_a,
            kcal_b,
            ratio,
        } => {
            let profile = PetProfile::new(species, weight, neutered, activity);
            commands::calculator::mix(&config, &profile, kcal_a, kcal_b, ratio)?;
        }
        Command::Price { current, history } => {
            commands::pricing::position(&config, current, &history)?;
        }
        Command::Age {
            species,
            years,
            weight,
        } => {
            commands::age::human_age(&config, species, years, weight)?;
        }
        Command::Recommend {
            species,
            weight,
            activity,
            neutered,
            allergies,
            with_score,
        } => {
            let profile =
                PetProfile::new(species, weight, neutered, activity).with_allergies(allergies);
            commands::recommend::run(config, &profile, with_score)?;
        }
    }

    Ok(())
}
