// ABOUTME: Leaderboard aggregator folding ranked events into overall standings
// ABOUTME: Sums multiplied points per competitor and resolves team identity via the roster
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Throwdown Competition Platform

//! Overall standings.
//!
//! The aggregator consumes per-event ranked results and a division roster
//! and produces the competition leaderboard: multiplied points summed per
//! competitor, overall competition ranks over the totals, and the per-event
//! cells kept on every entry so single-event views need no second pass.
//!
//! Competitor identity is whatever the roster says it is — an athlete id in
//! individual divisions, a team id in team divisions. Member names ride
//! along for presentation and never touch scoring. A result referencing an
//! id the roster does not know is a rejected write, never a silent drop.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

use throwdown_core::errors::{ScoringError, ScoringResult};
use throwdown_core::models::{EventResult, LeaderboardEntry, Roster, ScoreRow};

use crate::config::ScoringConfig;
use crate::format::FormatOptions;
use crate::ranker::EventRanker;

/// One event's ranked results plus its points multiplier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedEvent {
    /// Scheduled workout id
    pub track_workout_id: String,
    /// Points multiplier in percent; 100 is face value
    pub multiplier_percent: u32,
    /// The event's ranked results
    pub results: Vec<EventResult>,
}

/// One event's raw stored rows, for the full rank-then-aggregate pipeline
#[derive(Debug, Clone)]
pub struct EventRows {
    /// Scheduled workout id
    pub track_workout_id: String,
    /// Points multiplier in percent; 100 is face value
    pub multiplier_percent: u32,
    /// Display context for this workout's scores
    pub format: FormatOptions,
    /// Stored result rows for the event
    pub rows: Vec<ScoreRow>,
}

/// Folds ranked events into the overall leaderboard
#[derive(Debug, Clone, Default)]
pub struct LeaderboardAggregator {
    config: ScoringConfig,
}

impl LeaderboardAggregator {
    /// Create an aggregator over an explicit configuration
    #[must_use]
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Rank every event and aggregate the overall standings in one pass.
    ///
    /// Events rank independently, so the fan-out runs in parallel; the
    /// output is identical to ranking them one by one.
    ///
    /// # Errors
    ///
    /// Everything [`EventRanker::rank`] rejects, plus the roster errors of
    /// [`Self::aggregate`].
    pub fn standings(
        &self,
        events: &[EventRows],
        roster: &Roster,
    ) -> ScoringResult<Vec<LeaderboardEntry>> {
        let ranker = EventRanker::new(self.config.points_table.clone());
        let ranked: Vec<RankedEvent> = events
            .par_iter()
            .map(|event| {
                ranker.rank(&event.rows, &event.format).map(|results| RankedEvent {
                    track_workout_id: event.track_workout_id.clone(),
                    multiplier_percent: event.multiplier_percent,
                    results,
                })
            })
            .collect::<ScoringResult<Vec<RankedEvent>>>()?;
        self.aggregate(&ranked, roster)
    }

    /// Aggregate ranked events into overall standings.
    ///
    /// Every roster competitor appears in the output; missing an event
    /// contributes zero points and an `N/A` audit cell. Overall ranks use
    /// the same shared-rank tie rule as event ranking, over total points
    /// descending.
    ///
    /// # Errors
    ///
    /// `RosterMismatch` when any result references a competitor the roster
    /// does not contain.
    pub fn aggregate(
        &self,
        events: &[RankedEvent],
        roster: &Roster,
    ) -> ScoringResult<Vec<LeaderboardEntry>> {
        let known = roster.by_id();
        for event in events {
            for result in &event.results {
                if !known.contains_key(result.competitor_id.as_str()) {
                    return Err(ScoringError::roster_mismatch(
                        result.competitor_id.clone(),
                        event.track_workout_id.clone(),
                    ));
                }
            }
        }

        let mut entries: Vec<LeaderboardEntry> = roster
            .competitors()
            .iter()
            .map(|competitor| LeaderboardEntry {
                competitor_id: competitor.id.clone(),
                display_name: competitor.display_name.clone(),
                members: competitor.members.clone(),
                per_event: Vec::with_capacity(events.len()),
                total_points: 0,
                overall_rank: 0,
            })
            .collect();

        for event in events {
            let by_competitor: HashMap<&str, &EventResult> = event
                .results
                .iter()
                .map(|result| (result.competitor_id.as_str(), result))
                .collect();

            for entry in &mut entries {
                match by_competitor.get(entry.competitor_id.as_str()) {
                    Some(result) => {
                        let mut cell = (*result).clone();
                        cell.points = apply_multiplier(result.points, event.multiplier_percent);
                        entry.total_points += cell.points;
                        entry.per_event.push(cell);
                    }
                    None => {
                        entry.per_event.push(EventResult::absent(
                            entry.competitor_id.clone(),
                            event.track_workout_id.clone(),
                        ));
                    }
                }
            }
        }

        // Total points descending; competitor id only stabilizes the output
        // order of tied entries, which share a rank anyway.
        entries.sort_by(|a, b| {
            b.total_points
                .cmp(&a.total_points)
                .then_with(|| a.competitor_id.cmp(&b.competitor_id))
        });

        let mut rank = 0_u32;
        let mut previous_total = None;
        for (position, entry) in entries.iter_mut().enumerate() {
            if previous_total != Some(entry.total_points) {
                rank = position as u32 + 1;
                previous_total = Some(entry.total_points);
            }
            entry.overall_rank = rank;
        }

        debug!(
            events = events.len(),
            competitors = entries.len(),
            "aggregated leaderboard"
        );
        Ok(entries)
    }
}

/// Points × percent multiplier, round-half-up in integer arithmetic
const fn apply_multiplier(points: u32, multiplier_percent: u32) -> u32 {
    (points * multiplier_percent + 50) / 100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiplier_rounds_half_up() {
        assert_eq!(apply_multiplier(95, 100), 95);
        assert_eq!(apply_multiplier(95, 150), 143); // 142.5 rounds up
        assert_eq!(apply_multiplier(85, 50), 43); // 42.5 rounds up
        assert_eq!(apply_multiplier(0, 200), 0);
    }
}
