// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Input checks for pawplan-cli arguments
// ABOUTME: Rejects non-finite and out-of-range numbers before they reach the engine

use pawplan::errors::{AppError, AppResult};

/// Require a finite, strictly positive number
pub fn require_positive(name: &str, value: f64) -> AppResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(AppError::invalid_input(format!(
            "{name} must be a positive number, got {value}"
        )))
    }
}

/// Require a finite number that is zero or greater
pub fn require_non_negative(name: &str, value: f64) -> AppResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(AppError::invalid_input(format!(
            "{name} must be zero or greater, got {value}"
        )))
    }
}

/// Require a percentage in 0-100
pub fn require_percentage(name: &str, value: f64) -> AppResult<()> {
    if (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(AppError::value_out_of_range(format!(
            "{name} must be between 0 and 100, got {value}"
        )))
    }
}
