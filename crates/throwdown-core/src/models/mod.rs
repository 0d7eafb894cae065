// ABOUTME: Core scoring data models for the Throwdown competition platform
// ABOUTME: Re-exports schemes, statuses, sort keys, result records, and rosters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Throwdown Competition Platform

//! # Data Models
//!
//! Plain value objects exchanged with persistence and presentation. The
//! engine consumes and produces these records; it never owns their storage.
//!
//! ## Design Principles
//!
//! - **Closed variant sets**: schemes, score types, and statuses are enums,
//!   and every scheme-dependent branch matches exhaustively
//! - **Serializable**: all models support JSON serialization for the
//!   platform's server functions
//! - **Exact arithmetic**: encoded values and sort keys are integers;
//!   no floating point enters the comparison path

// Domain modules
mod key;
mod result;
mod roster;
mod scheme;
mod status;

// Re-export all public types for convenience
pub use key::SortKey;
pub use result::{EventResult, LeaderboardEntry, ScoreRow};
pub use roster::{Competitor, Roster, TeamMember};
pub use scheme::{InputShape, ScoreType, SortDirection, TiebreakScheme, WorkoutScheme};
pub use status::ScoreStatus;
