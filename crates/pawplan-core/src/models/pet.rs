// ABOUTME: Pet profile model supplied by callers for every calculation
// ABOUTME: Species, weight, neuter status, activity level, and declared allergies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Animal species
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Species {
    /// Dog
    Dog,
    /// Cat
    Cat,
}

impl Species {
    /// Lowercase identifier
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dog => "dog",
            Self::Cat => "cat",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Species {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dog" | "강아지" => Ok(Self::Dog),
            "cat" | "고양이" => Ok(Self::Cat),
            other => Err(AppError::invalid_input(format!(
                "Unknown species '{other}', expected dog or cat"
            ))),
        }
    }
}

/// Pet profile for one calculation
///
/// The engine never rejects a profile: `activity_level` is clamped and
/// degenerate weights degrade to zero energy. Callers that take user input
/// should run [`PetProfile::validate`] first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetProfile {
    /// Species
    pub species: Species,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Neutered or spayed
    pub is_neutered: bool,
    /// Activity level, 1 (sedentary) to 5 (very active)
    pub activity_level: i32,
    /// Ingredient names the pet reacts to
    #[serde(default)]
    pub allergies: BTreeSet<String>,
}

impl PetProfile {
    /// Create a profile without allergies
    #[must_use]
    pub const fn new(species: Species, weight_kg: f64, is_neutered: bool, activity_level: i32) -> Self {
        Self {
            species,
            weight_kg,
            is_neutered,
            activity_level,
            allergies: BTreeSet::new(),
        }
    }

    /// Add declared allergies
    #[must_use]
    pub fn with_allergies<I, S>(mut self, allergies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allergies.extend(allergies.into_iter().map(Into::into));
        self
    }

    /// Whether any allergy is declared
    #[must_use]
    pub fn has_allergies(&self) -> bool {
        !self.allergies.is_empty()
    }

    /// Validate user-facing input before handing the profile to the engine
    ///
    /// # Errors
    ///
    /// Returns an error if the weight is not a positive finite number or the
    /// activity level is outside 1-5
    pub fn validate(&self) -> AppResult<()> {
        if !self.weight_kg.is_finite() || self.weight_kg <= 0.0 {
            return Err(AppError::invalid_input("Weight must be a positive number of kg"));
        }
        if !(1..=5).contains(&self.activity_level) {
            return Err(AppError::value_out_of_range(format!(
                "Activity level must be between 1 and 5, got {}",
                self.activity_level
            )));
        }
        Ok(())
    }
}
