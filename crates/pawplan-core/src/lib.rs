// ABOUTME: Core types and constants for the Pawplan feeding engine
// ABOUTME: Foundation crate with error handling, pet/product models, and nutrition constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pawplan Core
//!
//! Foundation crate providing shared types and constants for the Pawplan
//! feeding engine. Everything here is plain data; the calculations live in
//! `pawplan-intelligence`.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Nutrition, pricing, and recommendation constants organized by domain
//! - **models**: Caller-owned inputs (`PetProfile`, `Product`, `ProductSku`, `Species`)

/// Unified error handling system with standard error codes
pub mod errors;

/// Engine constants organized by domain
pub mod constants;

/// Pet profile and catalog product models
pub mod models;

pub use errors::{AppError, AppResult, ErrorCode};
pub use models::{PetProfile, Product, ProductSku, Species};
