// ABOUTME: Composite sort-key encoder producing one integer per result
// ABOUTME: Ascending key order is always best-to-worst regardless of scheme direction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Throwdown Competition Platform

//! Sort-key construction.
//!
//! [`compute_sort_key`] folds a result's status band, direction-transformed
//! value, and tiebreak into one `u128` so a single ascending sort — in
//! memory or on a string index — orders an event best to worst. The digit
//! layout and its constants live in `throwdown_core::constants::sort_key`
//! and are shared with the decoder side; see that module for the contract.
//!
//! The tiebreak block is folded unconditionally so every key has the same
//! width. A workout with no secondary dimension writes zeros there, which
//! affects nothing: equal primaries stay equal.

use throwdown_core::constants::sort_key::{MAX_DOMAIN, NO_VALUE, SCALE, TIEBREAK_SCALE};
use throwdown_core::models::{
    ScoreRow, ScoreStatus, ScoreType, SortDirection, SortKey, TiebreakScheme, WorkoutScheme,
};

/// Everything the encoder needs to know about one result
#[derive(Debug, Clone, Copy)]
pub struct ScoreKeyInput {
    /// Canonical encoded value; `None` when the status carries no number
    pub value: Option<u64>,
    /// Terminal status, selecting the band
    pub status: ScoreStatus,
    /// Workout scheme, fixing the default direction
    pub scheme: WorkoutScheme,
    /// Score type, possibly overriding the direction
    pub score_type: ScoreType,
    /// Declared tiebreak dimension, if any
    pub tiebreak_scheme: Option<TiebreakScheme>,
    /// Tiebreak value, or reps completed for capped athletes
    pub secondary_value: Option<u64>,
}

impl ScoreKeyInput {
    /// Build the encoder input from a stored row
    #[must_use]
    pub fn from_row(row: &ScoreRow) -> Self {
        Self {
            value: row.value,
            status: row.status,
            scheme: row.scheme,
            score_type: row.score_type,
            tiebreak_scheme: row.tiebreak_scheme,
            secondary_value: row.secondary_value,
        }
    }
}

/// Compute the composite ranking key for one result.
///
/// Zero is a valid value distinct from "no value"; a missing value takes the
/// band's sentinel and sorts last within the band. Genuine ties — identical
/// status, value, and secondary — produce identical keys.
#[must_use]
pub fn compute_sort_key(input: &ScoreKeyInput) -> SortKey {
    let direction = input.scheme.direction_for(input.score_type);
    let value_block = match input.value {
        Some(value) => transform(value, direction),
        None => NO_VALUE,
    };

    let primary = u128::from(input.status.band()) * SCALE + u128::from(value_block);

    let tiebreak_block = match secondary_direction(input.scheme, input.tiebreak_scheme) {
        Some(direction) => match input.secondary_value {
            Some(value) => transform(value, direction),
            None => NO_VALUE,
        },
        None => 0,
    };

    SortKey::new(primary * TIEBREAK_SCALE + u128::from(tiebreak_block))
}

/// Compute the key straight from a stored row
#[must_use]
pub fn key_for_row(row: &ScoreRow) -> SortKey {
    compute_sort_key(&ScoreKeyInput::from_row(row))
}

/// Direction-transform a raw value so smaller always means better
const fn transform(value: u64, direction: SortDirection) -> u64 {
    let clamped = if value > MAX_DOMAIN { MAX_DOMAIN } else { value };
    match direction {
        SortDirection::Ascending => clamped,
        SortDirection::Descending => MAX_DOMAIN - clamped,
    }
}

/// The secondary dimension of a workout, when one exists.
///
/// A declared tiebreak wins; `time-with-cap` workouts carry an implicit
/// reps-completed secondary for capped athletes even without one.
const fn secondary_direction(
    scheme: WorkoutScheme,
    tiebreak: Option<TiebreakScheme>,
) -> Option<SortDirection> {
    match tiebreak {
        Some(t) => Some(t.direction()),
        None => match scheme {
            WorkoutScheme::TimeWithCap => Some(SortDirection::Descending),
            _ => None,
        },
    }
}

/// Decomposed view of a sort key, for diagnostics and tests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKeyParts {
    /// Status band, 0..=3
    pub band: u8,
    /// Direction-transformed primary value; `None` when the band held the
    /// no-value sentinel
    pub value: Option<u64>,
    /// Direction-transformed tiebreak value; `None` when the block held the
    /// sentinel
    pub tiebreak: Option<u64>,
}

/// Split a key back into its digit blocks.
///
/// The extracted values are still direction-transformed; for ascending
/// dimensions they equal the raw encoded value.
#[must_use]
pub fn extract_sort_key(key: SortKey) -> SortKeyParts {
    let raw = key.raw();
    let tiebreak_block = (raw % TIEBREAK_SCALE) as u64;
    let primary = raw / TIEBREAK_SCALE;
    let band = (primary / SCALE) as u8;
    let value_block = (primary % SCALE) as u64;

    SortKeyParts {
        band,
        value: (value_block != NO_VALUE).then_some(value_block),
        tiebreak: (tiebreak_block != NO_VALUE).then_some(tiebreak_block),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored_time(seconds: u64) -> ScoreKeyInput {
        ScoreKeyInput {
            value: Some(seconds),
            status: ScoreStatus::Scored,
            scheme: WorkoutScheme::Time,
            score_type: ScoreType::Min,
            tiebreak_scheme: None,
            secondary_value: None,
        }
    }

    #[test]
    fn test_faster_time_sorts_first() {
        let faster = compute_sort_key(&scored_time(165));
        let slower = compute_sort_key(&scored_time(180));
        assert!(faster < slower);
    }

    #[test]
    fn test_more_reps_sorts_first() {
        let make = |reps| {
            compute_sort_key(&ScoreKeyInput {
                value: Some(reps),
                status: ScoreStatus::Scored,
                scheme: WorkoutScheme::Reps,
                score_type: ScoreType::Max,
                tiebreak_scheme: None,
                secondary_value: None,
            })
        };
        assert!(make(150) < make(100));
    }

    #[test]
    fn test_band_dominates_value() {
        let slow_but_scored = compute_sort_key(&scored_time(359_000));
        let capped = compute_sort_key(&ScoreKeyInput {
            value: Some(1),
            status: ScoreStatus::Cap,
            scheme: WorkoutScheme::Time,
            score_type: ScoreType::Min,
            tiebreak_scheme: None,
            secondary_value: None,
        });
        assert!(slow_but_scored < capped);
    }

    #[test]
    fn test_zero_is_distinct_from_no_value() {
        let zero = compute_sort_key(&scored_time(0));
        let none = compute_sort_key(&ScoreKeyInput {
            value: None,
            ..scored_time(0)
        });
        assert!(zero < none);

        let parts = extract_sort_key(none);
        assert_eq!(parts.value, None);
        let parts = extract_sort_key(zero);
        assert_eq!(parts.value, Some(0));
    }

    #[test]
    fn test_capped_athletes_order_by_reps_completed() {
        let make = |reps| {
            compute_sort_key(&ScoreKeyInput {
                value: None,
                status: ScoreStatus::Cap,
                scheme: WorkoutScheme::TimeWithCap,
                score_type: ScoreType::Min,
                tiebreak_scheme: None,
                secondary_value: Some(reps),
            })
        };
        assert!(make(150) < make(100));
    }

    #[test]
    fn test_extract_round_trips_blocks() {
        let key = compute_sort_key(&ScoreKeyInput {
            value: Some(754),
            status: ScoreStatus::Scored,
            scheme: WorkoutScheme::Time,
            score_type: ScoreType::Min,
            tiebreak_scheme: Some(TiebreakScheme::Time),
            secondary_value: Some(510),
        });
        let parts = extract_sort_key(key);
        assert_eq!(parts.band, 0);
        assert_eq!(parts.value, Some(754));
        assert_eq!(parts.tiebreak, Some(510));
    }
}
