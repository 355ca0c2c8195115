// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Veterinary energy coefficients, price bucketing, targets, and service names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Default values for every tunable the engine exposes. The configuration
//! layer in `pawplan-intelligence` starts from these and lets the
//! environment override them.

/// Energy requirement constants
///
/// References:
/// - NRC (2006). Nutrient Requirements of Dogs and Cats. National Academies Press.
/// - WSAVA Global Nutrition Guidelines (2011)
pub mod energy {
    /// Resting energy requirement coefficient: RER = 70 x weight^0.75
    pub const RER_COEFFICIENT: f64 = 70.0;

    /// Metabolic body weight exponent
    pub const RER_EXPONENT: f64 = 0.75;

    /// Base activity multiplier for neutered/spayed animals
    pub const NEUTERED_BASE_FACTOR: f64 = 1.2;

    /// Base activity multiplier for intact animals
    pub const INTACT_BASE_FACTOR: f64 = 1.4;

    /// Per-level multipliers for activity levels 1 through 5
    pub const ACTIVITY_LEVEL_MULTIPLIERS: [f64; 5] = [0.9, 1.0, 1.15, 1.3, 1.5];

    /// Lowest accepted activity level
    pub const MIN_ACTIVITY_LEVEL: i32 = 1;

    /// Highest accepted activity level
    pub const MAX_ACTIVITY_LEVEL: i32 = 5;

    /// Default number of meals the daily ration is split into
    pub const DEFAULT_MEALS_PER_DAY: u8 = 2;

    /// Grams per kilogram
    pub const GRAMS_PER_KG: f64 = 1000.0;
}

/// Modified Atwater factors (kcal per gram) for pet food labels
///
/// Reference: AAFCO Official Publication, calorie content statement methodology
pub mod atwater {
    /// Protein: 3.5 kcal/g
    pub const PROTEIN_KCAL_PER_G: f64 = 3.5;

    /// Fat: 8.5 kcal/g
    pub const FAT_KCAL_PER_G: f64 = 8.5;

    /// Nitrogen-free extract: 3.5 kcal/g
    pub const NFE_KCAL_PER_G: f64 = 3.5;

    /// Converts kcal/100g to kcal/kg
    pub const KCAL_PER_100G_TO_KG: f64 = 10.0;
}

/// Price position constants
pub mod pricing {
    /// Upper bound (inclusive) of the 저가 bucket
    pub const LOW_MAX: f64 = 20.0;

    /// Upper bound (inclusive) of the 중저가 bucket
    pub const LOW_MID_MAX: f64 = 40.0;

    /// Upper bound (inclusive) of the 중가 bucket
    pub const MID_MAX: f64 = 60.0;

    /// Upper bound (inclusive) of the 중고가 bucket
    pub const MID_HIGH_MAX: f64 = 80.0;

    /// Position reported when there is no price variance to compare against
    pub const NEUTRAL_POSITION: f64 = 50.0;

    /// History points required before a price position is computed
    pub const MIN_HISTORY_POINTS: usize = 3;
}

/// Weight-bracket nutrition targets (guaranteed analysis percentages)
pub mod targets {
    /// Upper bound (exclusive) of the small bracket in kg
    pub const SMALL_MAX_KG: f64 = 7.0;

    /// Upper bound (exclusive) of the medium bracket in kg
    pub const MEDIUM_MAX_KG: f64 = 18.0;

    /// Fiber target shared by every bracket
    pub const FIBER_PERCENT: f64 = 3.0;

    /// Ash target shared by every bracket
    pub const ASH_PERCENT: f64 = 7.0;

    /// Moisture target shared by every bracket
    pub const MOISTURE_PERCENT: f64 = 10.0;
}

/// Recommendation scoring constants
pub mod recommendation {
    /// Percentage points within which a nutrient counts as on target
    pub const NEAR_TARGET_TOLERANCE: f64 = 2.0;

    /// Fiber range (inclusive) considered good for digestion
    pub const FIBER_DIGESTIVE_MIN: f64 = 3.0;

    /// Upper end of the digestive fiber range
    pub const FIBER_DIGESTIVE_MAX: f64 = 5.0;

    /// Maximum reasons attached to one recommendation
    pub const MAX_REASONS: usize = 3;

    /// Products returned when no candidate passes the allergy filter
    pub const FALLBACK_LIMIT: usize = 5;
}

/// Pet age conversion constants
pub mod age {
    /// Human-equivalent years at the end of the first year
    pub const FIRST_YEAR_HUMAN_YEARS: f64 = 15.0;

    /// Human-equivalent years at the end of the second year
    pub const SECOND_YEAR_HUMAN_YEARS: f64 = 24.0;

    /// Yearly increment after year two for cats
    pub const CAT_YEARLY_INCREMENT: f64 = 4.0;

    /// Yearly increment after year two for small dogs
    pub const SMALL_DOG_YEARLY_INCREMENT: f64 = 4.0;

    /// Yearly increment after year two for medium dogs
    pub const MEDIUM_DOG_YEARLY_INCREMENT: f64 = 5.0;

    /// Yearly increment after year two for large dogs
    pub const LARGE_DOG_YEARLY_INCREMENT: f64 = 6.0;

    /// Dogs below this weight (kg) count as small
    pub const SMALL_DOG_MAX_KG: f64 = 10.0;

    /// Dogs below this weight (kg) count as medium
    pub const MEDIUM_DOG_MAX_KG: f64 = 25.0;
}

/// Service names used in structured logs
pub mod service_names {
    /// Command-line front end
    pub const PAWPLAN_CLI: &str = "pawplan-cli";
}
