// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Helper modules for pawplan-cli
// ABOUTME: Output rendering and shared input checks

pub mod display;
pub mod validation;
