// ABOUTME: Per-scheme encoded-value bounds for validation
// ABOUTME: Upper limits keep every legal encoding inside the sort-key value domain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Throwdown Competition Platform

//! Encoded-value bounds per scheme.
//!
//! Every bound stays at or below [`super::sort_key::MAX_DOMAIN`]; the parser
//! enforces them so no legal encoding can escape the sort-key value domain.

/// Longest accepted time, 99:59:59 in whole seconds
pub const MAX_TIME_SECONDS: u64 = 359_999;

/// Largest accepted rep count
pub const MAX_REPS: u64 = 1_000_000;

/// Largest accepted round count in the compound rounds+reps encoding.
///
/// `9_999_999 * 100_000 + 99_999` is exactly the top of the value domain.
pub const MAX_ROUNDS: u64 = 9_999_999;

/// Largest accepted load in integer hundredths (1,000,000.00)
pub const MAX_LOAD_HUNDREDTHS: u64 = 100_000_000;

/// Largest accepted calorie count
pub const MAX_CALORIES: u64 = 1_000_000;

/// Largest accepted distance, meters or feet
pub const MAX_DISTANCE: u64 = 10_000_000;

/// Largest accepted judged-points total
pub const MAX_POINTS: u64 = 100_000_000;

/// Largest accepted EMOM round count
pub const MAX_EMOM_ROUNDS: u64 = 10_000;
