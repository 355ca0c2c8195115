// ABOUTME: Configuration module for pawplan-intelligence crate
// ABOUTME: Re-exports engine configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Engine configuration (energy, pricing, targets, recommendations, age)
pub mod intelligence;

pub use intelligence::EngineConfig;
