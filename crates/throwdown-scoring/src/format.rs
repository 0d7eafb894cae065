// ABOUTME: Score formatter, the display-side inverse of the parser
// ABOUTME: Decodes canonical integer encodings back to leaderboard strings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Throwdown Competition Platform

//! Score formatting.
//!
//! [`decode`] is a total function over the legal encoded domain of each
//! scheme. Only engine-produced encodings are ever decoded, so a value
//! outside that domain is corrupted state: the decoder fails fast with a
//! `DomainViolation` rather than guessing at a rendering.

use serde::{Deserialize, Serialize};

use throwdown_core::constants::encoding::ROUNDS_MULTIPLIER;
use throwdown_core::constants::time::{SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use throwdown_core::errors::{ScoringError, ScoringResult};
use throwdown_core::models::{ScoreStatus, TiebreakScheme, WorkoutScheme};

use crate::parser::WeightUnit;

/// Display context for decoding
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatOptions {
    /// Append the scheme unit ("185 lb" vs "185")
    pub include_unit: bool,
    /// Prefix non-scored statuses ("CAP (142 reps)" vs "142 reps")
    pub show_status: bool,
    /// Reps per round, when the workout declares one
    pub reps_per_round: Option<u64>,
    /// Display unit for loads
    pub weight_unit: WeightUnit,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            include_unit: true,
            show_status: true,
            reps_per_round: None,
            weight_unit: WeightUnit::default(),
        }
    }
}

/// Seconds → `M:SS`, or `H:MM:SS` from one hour up
#[must_use]
pub fn format_time(total_seconds: u64) -> String {
    let hours = total_seconds / SECONDS_PER_HOUR;
    let minutes = (total_seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
    let seconds = total_seconds % SECONDS_PER_MINUTE;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}

/// Decode a canonical encoded value for display.
///
/// # Errors
///
/// `DomainViolation` when the value lies outside the scheme's legal encoded
/// domain.
pub fn decode(value: u64, scheme: WorkoutScheme, options: &FormatOptions) -> ScoringResult<String> {
    if value > scheme.max_encoded() {
        return Err(ScoringError::domain_violation(format!(
            "encoded value {value} is outside the {scheme} domain"
        )));
    }

    let formatted = match scheme {
        WorkoutScheme::Time | WorkoutScheme::TimeWithCap => format_time(value),
        WorkoutScheme::RoundsReps => {
            let per_round = options.reps_per_round.unwrap_or(ROUNDS_MULTIPLIER);
            if per_round == 0 {
                return Err(ScoringError::domain_violation(
                    "reps per round must be positive",
                ));
            }
            let rounds = value / per_round;
            let reps = value % per_round;
            format!("{rounds} + {reps}")
        }
        WorkoutScheme::Load => {
            let number = format_load(value);
            if options.include_unit {
                format!("{number} {}", options.weight_unit.suffix())
            } else {
                number
            }
        }
        WorkoutScheme::PassFail => {
            if value == 1 {
                "Pass".to_owned()
            } else {
                "Fail".to_owned()
            }
        }
        WorkoutScheme::Reps
        | WorkoutScheme::Calories
        | WorkoutScheme::Meters
        | WorkoutScheme::Feet
        | WorkoutScheme::Points
        | WorkoutScheme::Emom => match scheme.unit() {
            Some(unit) if options.include_unit => format!("{value} {unit}"),
            _ => value.to_string(),
        },
    };

    Ok(formatted)
}

/// Status-aware rendering of a full result for a leaderboard cell.
///
/// # Errors
///
/// `DomainViolation` on out-of-domain values, or on a scored result with no
/// value at all (which persistence should never produce).
pub fn format_result(
    value: Option<u64>,
    secondary_value: Option<u64>,
    status: ScoreStatus,
    scheme: WorkoutScheme,
    options: &FormatOptions,
) -> ScoringResult<String> {
    match status {
        ScoreStatus::Scored => match value {
            Some(v) => decode(v, scheme, options),
            None => Err(ScoringError::domain_violation(
                "scored result has no encoded value",
            )),
        },
        ScoreStatus::Cap => {
            let reps = match secondary_value {
                Some(reps) => Some(decode(reps, WorkoutScheme::Reps, options)?),
                None => None,
            };
            Ok(match (options.show_status, reps) {
                (true, Some(reps)) => format!("CAP ({reps})"),
                (true, None) => "CAP".to_owned(),
                (false, Some(reps)) => reps,
                (false, None) => "CAP".to_owned(),
            })
        }
        ScoreStatus::Dq | ScoreStatus::Withdrawn => Ok(status.label().to_owned()),
    }
}

/// Append a parsed tiebreak to a formatted primary score
///
/// # Errors
///
/// `DomainViolation` when the tiebreak value escapes its domain.
pub fn format_with_tiebreak(
    primary: &str,
    tiebreak_value: u64,
    tiebreak: TiebreakScheme,
    options: &FormatOptions,
) -> ScoringResult<String> {
    if tiebreak_value > tiebreak.max_encoded() {
        return Err(ScoringError::domain_violation(format!(
            "tiebreak value {tiebreak_value} is out of range"
        )));
    }
    let secondary = match tiebreak {
        TiebreakScheme::Time => format_time(tiebreak_value),
        TiebreakScheme::Reps => decode(tiebreak_value, WorkoutScheme::Reps, options)?,
    };
    Ok(format!("{primary} (TB {secondary})"))
}

/// Render each round of a multi-round score
///
/// # Errors
///
/// `DomainViolation` when any round value escapes the scheme domain.
pub fn format_rounds(
    round_values: &[u64],
    scheme: WorkoutScheme,
    options: &FormatOptions,
) -> ScoringResult<Vec<String>> {
    round_values
        .iter()
        .map(|value| decode(*value, scheme, options))
        .collect()
}

/// Load hundredths → display number, trailing zeros stripped
pub(crate) fn format_load(hundredths: u64) -> String {
    let whole = hundredths / 100;
    let frac = hundredths % 100;
    if frac == 0 {
        whole.to_string()
    } else if frac % 10 == 0 {
        format!("{whole}.{}", frac / 10)
    } else {
        format!("{whole}.{frac:02}")
    }
}
