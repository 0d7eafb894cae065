// ABOUTME: Result records exchanged with persistence and presentation
// ABOUTME: ScoreRow (stored input), EventResult (ranked output), LeaderboardEntry (standings)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Throwdown Competition Platform

use serde::{Deserialize, Serialize};

use super::key::SortKey;
use super::roster::TeamMember;
use super::scheme::{ScoreType, TiebreakScheme, WorkoutScheme};
use super::status::ScoreStatus;

/// One stored result row as persistence hands it to the engine.
///
/// Competitor and workout ids are opaque caller-supplied strings; for team
/// divisions the competitor id is the team id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRow {
    /// Competitor (or team) the result belongs to
    pub competitor_id: String,
    /// Scheduled workout the result was submitted against
    pub track_workout_id: String,
    /// Scoring scheme of the workout
    pub scheme: WorkoutScheme,
    /// Aggregation rule / direction override for the workout
    pub score_type: ScoreType,
    /// Declared tiebreak dimension, if the workout has one
    pub tiebreak_scheme: Option<TiebreakScheme>,
    /// Terminal status of the result
    pub status: ScoreStatus,
    /// Canonical encoded value; `None` for non-scored statuses without one
    pub value: Option<u64>,
    /// Encoded tiebreak value, or reps completed for capped athletes
    pub secondary_value: Option<u64>,
}

/// One competitor's outcome in one event, rank and points assigned.
///
/// `status`/`sort_key` are `None` only on the audit cells the aggregator
/// synthesizes for competitors with no submission in an event; every ranked
/// result carries both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventResult {
    /// Competitor (or team) id
    pub competitor_id: String,
    /// Scheduled workout id
    pub track_workout_id: String,
    /// Canonical encoded value
    pub value: Option<u64>,
    /// Encoded tiebreak value
    pub secondary_value: Option<u64>,
    /// Terminal status; `None` means no submission at all
    pub status: Option<ScoreStatus>,
    /// Composite ranking key
    pub sort_key: Option<SortKey>,
    /// Competition rank within the event; 0 means unranked (no submission)
    pub rank: u32,
    /// Points awarded for the event. The ranker fills the face value from
    /// the points table; leaderboard cells carry the multiplied value.
    pub points: u32,
    /// Human-readable score for leaderboard cells
    pub formatted_score: String,
}

impl EventResult {
    /// Audit cell for a competitor with no submission in this event
    #[must_use]
    pub fn absent(competitor_id: impl Into<String>, track_workout_id: impl Into<String>) -> Self {
        Self {
            competitor_id: competitor_id.into(),
            track_workout_id: track_workout_id.into(),
            value: None,
            secondary_value: None,
            status: None,
            sort_key: None,
            rank: 0,
            points: 0,
            formatted_score: "N/A".to_owned(),
        }
    }

    /// Whether this cell represents an actual submission
    #[must_use]
    pub const fn is_submitted(&self) -> bool {
        self.status.is_some()
    }
}

/// One row of the overall competition leaderboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// Competitor (or team) id
    pub competitor_id: String,
    /// Athlete display name or team name
    pub display_name: String,
    /// Team members, empty for individual divisions; presentation only
    pub members: Vec<TeamMember>,
    /// Per-event cells, one per event, audit cells included
    pub per_event: Vec<EventResult>,
    /// Sum of multiplied event points
    pub total_points: u32,
    /// Competition rank over total points, descending
    pub overall_rank: u32,
}
