// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for pawplan-cli
// ABOUTME: Renders command results as pretty JSON on stdout

use pawplan::errors::AppResult;
use serde::Serialize;

/// Print a result as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> AppResult<()> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
