// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Sort-key composition constants and per-scheme encoded-value bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Throwdown Competition Platform

//! Constants module
//!
//! Sort-key composition and value-domain constants live here, in one place
//! shared by the encoder and the decoder so the two cannot drift apart.
//! These values are part of the stored-data contract: changing any of them
//! invalidates every persisted sort key and requires a full recompute.

/// Sort-key composition constants
pub mod sort_key;

/// Per-scheme encoded-value bounds
pub mod bounds;

/// Time unit constants
pub mod time {
    /// Seconds per minute
    pub const SECONDS_PER_MINUTE: u64 = 60;
    /// Seconds per hour
    pub const SECONDS_PER_HOUR: u64 = 3_600;
}

/// Scheme encoding multipliers
pub mod encoding {
    /// Multiplier separating rounds from reps in the compound rounds+reps
    /// encoding: `rounds * ROUNDS_MULTIPLIER + reps`. The reps component must
    /// stay below this multiplier for the encoding to be reversible.
    pub const ROUNDS_MULTIPLIER: u64 = 100_000;

    /// Load values carry at most two decimals and encode as integer
    /// hundredths: `185.5 lb` stores as `18_550`.
    pub const LOAD_HUNDREDTHS: u64 = 100;
}
