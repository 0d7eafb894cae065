// ABOUTME: Points tables and engine configuration
// ABOUTME: Explicit configuration threaded through the ranker and aggregator constructors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Throwdown Competition Platform

//! Engine configuration.
//!
//! Nothing here is global state: the points table is handed to
//! [`crate::ranker::EventRanker`] and [`crate::leaderboard::LeaderboardAggregator`]
//! at construction, so tests can run alternate tables deterministically.
//! The table is part of the stored-data contract together with the sort-key
//! constants; changing it requires recomputing persisted points.

use serde::{Deserialize, Serialize};

use throwdown_core::errors::{ScoringError, ScoringResult};

/// Default first-place award of the traditional table
pub const DEFAULT_FIRST_PLACE_POINTS: u32 = 100;

/// Default per-place step of the traditional table
pub const DEFAULT_POINTS_STEP: u32 = 5;

/// Front-loaded award table rewarding top finishers disproportionately
const WINNER_TAKES_MORE: [u32; 20] = [
    100, 82, 70, 61, 54, 48, 43, 39, 35, 31, 28, 25, 22, 19, 16, 13, 10, 7, 4, 2,
];

/// Monotonically decreasing award table indexed by rank.
///
/// Rank 1 maps to the first entry; ranks beyond the table score zero, and
/// rank 0 (unranked) always scores zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsTable {
    places: Vec<u32>,
}

impl PointsTable {
    /// Fixed-step table: `first_place`, then `step` fewer per place, down to
    /// the last positive award.
    #[must_use]
    pub fn traditional(first_place: u32, step: u32) -> Self {
        let places = if step == 0 {
            vec![first_place]
        } else {
            (0..)
                .map(|place| first_place.saturating_sub(place * step))
                .take_while(|points| *points > 0)
                .collect()
        };
        Self { places }
    }

    /// Front-loaded table rewarding the podium disproportionately
    #[must_use]
    pub fn winner_takes_more() -> Self {
        Self {
            places: WINNER_TAKES_MORE.to_vec(),
        }
    }

    /// Explicit table.
    ///
    /// # Errors
    ///
    /// `DomainViolation` when the table is empty or increases anywhere —
    /// a non-monotonic table would let a worse rank outscore a better one.
    pub fn custom(places: Vec<u32>) -> ScoringResult<Self> {
        Self::validate(&places)?;
        Ok(Self { places })
    }

    /// Apply per-rank overrides on top of this table.
    ///
    /// # Errors
    ///
    /// `DomainViolation` when an override targets rank 0 or breaks the
    /// monotonic-decrease requirement.
    pub fn with_overrides(mut self, overrides: &[(u32, u32)]) -> ScoringResult<Self> {
        for (rank, points) in overrides {
            if *rank == 0 {
                return Err(ScoringError::domain_violation(
                    "points override targets rank 0",
                ));
            }
            let index = (*rank - 1) as usize;
            if index >= self.places.len() {
                self.places.resize(index + 1, 0);
            }
            self.places[index] = *points;
        }
        Self::validate(&self.places)?;
        Ok(self)
    }

    /// Points awarded at a rank; 0 for unranked entries and ranks beyond
    /// the table
    #[must_use]
    pub fn points_for(&self, rank: u32) -> u32 {
        if rank == 0 {
            return 0;
        }
        self.places.get((rank - 1) as usize).copied().unwrap_or(0)
    }

    /// Number of places carrying a positive award
    #[must_use]
    pub fn len(&self) -> usize {
        self.places.len()
    }

    /// Whether the table awards nothing at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    fn validate(places: &[u32]) -> ScoringResult<()> {
        if places.is_empty() {
            return Err(ScoringError::domain_violation("points table is empty"));
        }
        if places.windows(2).any(|pair| pair[1] > pair[0]) {
            return Err(ScoringError::domain_violation(
                "points table must decrease monotonically",
            ));
        }
        Ok(())
    }
}

impl Default for PointsTable {
    fn default() -> Self {
        Self::traditional(DEFAULT_FIRST_PLACE_POINTS, DEFAULT_POINTS_STEP)
    }
}

/// Engine-wide configuration handed to the aggregator
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Award table used for every event
    pub points_table: PointsTable,
}
