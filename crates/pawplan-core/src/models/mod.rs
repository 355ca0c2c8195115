// ABOUTME: Core data models consumed by the feeding engine
// ABOUTME: Re-exports pet profile and catalog product types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Pet profile and species
pub mod pet;

/// Catalog products and SKUs
pub mod product;

pub use pet::{PetProfile, Species};
pub use product::{Product, ProductSku};
