// ABOUTME: Core types and constants for the Throwdown competition platform
// ABOUTME: Foundation crate with scoring models, error types, and sort-key constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Throwdown Competition Platform

#![deny(unsafe_code)]

//! # Throwdown Core
//!
//! Foundation crate providing the shared scoring types for the Throwdown
//! competition platform. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Engine error handling with [`ScoringError`] and [`ScoringResult`]
//! - **constants**: Sort-key composition constants and per-scheme value bounds
//! - **models**: Scoring domain models (`WorkoutScheme`, `ScoreStatus`, results, rosters)

/// Engine error handling with `ScoringError` and the `ScoringResult` alias
pub mod errors;

/// Sort-key composition constants and per-scheme encoded-value bounds
pub mod constants;

/// Scoring domain models (schemes, statuses, results, rosters)
pub mod models;

pub use errors::{ScoringError, ScoringResult};
pub use models::{
    Competitor, EventResult, LeaderboardEntry, Roster, ScoreRow, ScoreStatus, ScoreType, SortKey,
    SortDirection, TeamMember, TiebreakScheme, WorkoutScheme,
};
