// ABOUTME: Event ranker assigning competition ranks and points
// ABOUTME: Sorts one event's rows by sort key and applies the points table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Throwdown Competition Platform

//! Per-event ranking.
//!
//! Ranks are standard competition ranking: equal sort keys share a rank and
//! the next distinct key ranks at ties-so-far + 1 (`1, 1, 3`, never
//! `1, 1, 2`). Non-completion entries still rank inside their status band,
//! so a DQ stays visible at the bottom of the event rather than vanishing.

use tracing::debug;

use throwdown_core::errors::{ScoringError, ScoringResult};
use throwdown_core::models::{EventResult, ScoreRow};

use crate::config::PointsTable;
use crate::format::{format_result, FormatOptions};
use crate::sort_key::key_for_row;

/// Ranks one event's stored rows.
///
/// The points table is injected at construction so alternate tables rank
/// deterministically in tests and previews.
#[derive(Debug, Clone)]
pub struct EventRanker {
    points: PointsTable,
}

impl EventRanker {
    /// Create a ranker over an award table
    #[must_use]
    pub fn new(points: PointsTable) -> Self {
        Self { points }
    }

    /// Rank every row of one event, filling rank, points, sort key, and the
    /// formatted score.
    ///
    /// Identical input sets always produce identical output: rows are
    /// ordered by sort key with the competitor id as a stable disambiguator
    /// for presentation, and tied keys share both rank and points.
    ///
    /// # Errors
    ///
    /// `DomainViolation` when rows disagree on the workout or its scoring
    /// declaration, carry duplicate competitors, or hold an encoding the
    /// formatter rejects. These indicate corrupted state, not athlete input.
    pub fn rank(
        &self,
        rows: &[ScoreRow],
        format: &FormatOptions,
    ) -> ScoringResult<Vec<EventResult>> {
        let Some(first) = rows.first() else {
            return Ok(Vec::new());
        };

        for row in rows {
            if row.track_workout_id != first.track_workout_id {
                return Err(ScoringError::domain_violation(format!(
                    "rows span workouts '{}' and '{}'",
                    first.track_workout_id, row.track_workout_id
                )));
            }
            if row.scheme != first.scheme
                || row.score_type != first.score_type
                || row.tiebreak_scheme != first.tiebreak_scheme
            {
                return Err(ScoringError::domain_violation(format!(
                    "inconsistent scoring declaration for workout '{}'",
                    first.track_workout_id
                )));
            }
        }

        let mut keyed: Vec<(&ScoreRow, _)> = rows.iter().map(|row| (row, key_for_row(row))).collect();
        keyed.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.competitor_id.cmp(&b.0.competitor_id)));

        for pair in keyed.windows(2) {
            if pair[0].0.competitor_id == pair[1].0.competitor_id {
                return Err(ScoringError::domain_violation(format!(
                    "duplicate result for competitor '{}' in workout '{}'",
                    pair[0].0.competitor_id, first.track_workout_id
                )));
            }
        }

        let mut results = Vec::with_capacity(keyed.len());
        let mut rank = 0_u32;
        let mut previous_key = None;
        for (position, (row, key)) in keyed.iter().enumerate() {
            if previous_key != Some(*key) {
                rank = position as u32 + 1;
                previous_key = Some(*key);
            }

            let formatted_score =
                format_result(row.value, row.secondary_value, row.status, row.scheme, format)?;

            results.push(EventResult {
                competitor_id: row.competitor_id.clone(),
                track_workout_id: row.track_workout_id.clone(),
                value: row.value,
                secondary_value: row.secondary_value,
                status: Some(row.status),
                sort_key: Some(*key),
                rank,
                points: self.points.points_for(rank),
                formatted_score,
            });
        }

        debug!(
            workout = %first.track_workout_id,
            entries = results.len(),
            "ranked event"
        );
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use throwdown_core::models::{ScoreStatus, ScoreType, WorkoutScheme};

    fn time_row(competitor: &str, seconds: u64) -> ScoreRow {
        ScoreRow {
            competitor_id: competitor.to_owned(),
            track_workout_id: "tw_1".to_owned(),
            scheme: WorkoutScheme::Time,
            score_type: ScoreType::Min,
            tiebreak_scheme: None,
            status: ScoreStatus::Scored,
            value: Some(seconds),
            secondary_value: None,
        }
    }

    #[test]
    fn test_faster_time_ranks_first() {
        let ranker = EventRanker::new(PointsTable::default());
        let results = ranker
            .rank(&[time_row("a", 180), time_row("b", 165)], &FormatOptions::default())
            .unwrap_or_default();
        assert_eq!(results[0].competitor_id, "b");
        assert_eq!(results[0].rank, 1);
        assert_eq!(results[0].formatted_score, "2:45");
        assert_eq!(results[1].rank, 2);
    }

    #[test]
    fn test_mixed_workouts_rejected() {
        let ranker = EventRanker::new(PointsTable::default());
        let mut other = time_row("b", 100);
        other.track_workout_id = "tw_2".to_owned();
        let outcome = ranker.rank(&[time_row("a", 90), other], &FormatOptions::default());
        assert!(outcome.is_err());
    }

    #[test]
    fn test_duplicate_competitor_rejected() {
        let ranker = EventRanker::new(PointsTable::default());
        let outcome = ranker.rank(
            &[time_row("a", 90), time_row("a", 95)],
            &FormatOptions::default(),
        );
        assert!(outcome.is_err());
    }
}
