// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for pawplan-cli
// ABOUTME: Provides access to feeding, pricing, age, and recommendation commands

pub mod age;
pub mod calculator;
pub mod pricing;
pub mod recommend;
