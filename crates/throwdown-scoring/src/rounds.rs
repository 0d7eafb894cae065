// ABOUTME: Multi-round score aggregation
// ABOUTME: Folds per-round encoded values into the official value by score type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Throwdown Competition Platform

//! Multi-round workouts.
//!
//! A 10×3 back squat records ten loads, a "3 rounds for time" records three
//! splits, an EMOM records a value per minute. The workout's score type is
//! the rule that folds those per-round values into the one official value
//! the sort key is built from: `min`, `max`, `sum`, `first`, `last` exact
//! over integers, `average` a round-half-up integer mean.

use serde::{Deserialize, Serialize};

use throwdown_core::models::{ScoreType, WorkoutScheme};

use crate::parser::{parse, ParseOptions, ParseOutcome};

/// Result of encoding a full set of rounds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundsOutcome {
    /// Whether every round parsed
    pub is_valid: bool,
    /// Per-round canonical encodings, in round order
    pub rounds: Vec<u64>,
    /// Official value folded from the rounds
    pub aggregated: Option<u64>,
    /// Message naming the offending round when invalid
    pub error: Option<String>,
}

impl RoundsOutcome {
    fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            rounds: Vec::new(),
            aggregated: None,
            error: Some(message.into()),
        }
    }
}

/// Fold already-encoded round values into the official value.
///
/// Returns `None` for an empty round set. `sum` saturates rather than wrap;
/// the caller's domain bounds reject any saturated result downstream.
#[must_use]
pub fn aggregate_values(values: &[u64], score_type: ScoreType) -> Option<u64> {
    if values.is_empty() {
        return None;
    }
    let folded = match score_type {
        ScoreType::Min => *values.iter().min()?,
        ScoreType::Max => *values.iter().max()?,
        ScoreType::Sum => values.iter().fold(0_u64, |acc, v| acc.saturating_add(*v)),
        ScoreType::Average => {
            let count = values.len() as u64;
            let sum = values.iter().fold(0_u64, |acc, v| acc.saturating_add(*v));
            // Round-half-up integer mean.
            (sum + count / 2) / count
        }
        ScoreType::First => *values.first()?,
        ScoreType::Last => *values.last()?,
    };
    Some(folded)
}

/// Parse every round of a multi-round score and fold the official value.
///
/// Any invalid round invalidates the whole outcome with a message naming
/// the round; rounds are numbered from 1 the way judges' sheets are.
#[must_use]
pub fn encode_rounds(
    raw_rounds: &[&str],
    scheme: WorkoutScheme,
    score_type: ScoreType,
    options: &ParseOptions,
) -> RoundsOutcome {
    if raw_rounds.is_empty() {
        return RoundsOutcome::invalid("no rounds entered");
    }

    let mut rounds = Vec::with_capacity(raw_rounds.len());
    for (index, raw) in raw_rounds.iter().enumerate() {
        let outcome: ParseOutcome = parse(raw, scheme, options);
        match outcome.encoded {
            Some(value) if outcome.is_valid => rounds.push(value),
            _ => {
                let detail = outcome
                    .error
                    .unwrap_or_else(|| "invalid score".to_owned());
                return RoundsOutcome::invalid(format!("round {}: {detail}", index + 1));
            }
        }
    }

    let aggregated = aggregate_values(&rounds, score_type);
    if aggregated.is_some_and(|value| value > scheme.max_encoded()) {
        return RoundsOutcome::invalid("aggregated score is out of range");
    }

    RoundsOutcome {
        is_valid: true,
        rounds,
        aggregated,
        error: None,
    }
}
