// ABOUTME: Workout scheme enumeration and scoring metadata registry
// ABOUTME: Defines schemes, score types, tiebreak schemes, and comparison directions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Throwdown Competition Platform

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::bounds;
use crate::errors::ScoringError;

/// Comparison direction for a scoring dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Lower values are better (times)
    Ascending,
    /// Higher values are better (reps, load, distance, points)
    Descending,
}

/// Raw-input shape a scheme's grammar accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputShape {
    /// `MM:SS`, `H:MM:SS`, or bare seconds
    Clock,
    /// `"R+reps"` or a bare total rep count
    RoundsAndReps,
    /// Non-negative integer
    Integer,
    /// Non-negative number with up to two decimals
    Decimal,
    /// Small keyword set (`pass`/`fail`)
    Keyword,
}

/// Enumeration of supported workout scoring schemes
///
/// The scheme fixes the unit of the encoded value and the default
/// comparison direction. It is immutable for the life of a workout; the
/// open question of re-scoring existing results under a changed scheme is
/// resolved by external migration, never by reinterpretation here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkoutScheme {
    /// For-time workout, whole seconds
    Time,
    /// For-time workout with a time cap; capped athletes carry reps completed
    TimeWithCap,
    /// AMRAP scored as rounds plus extra reps
    RoundsReps,
    /// Max total reps
    Reps,
    /// Max load lifted, encoded as integer hundredths
    Load,
    /// Calories on a machine
    Calories,
    /// Distance covered in meters
    Meters,
    /// Distance covered in feet
    Feet,
    /// Judged points
    Points,
    /// Pass/fail standard, encoded 1/0
    PassFail,
    /// Every-minute-on-the-minute; rounds completed or pass/fail per sub-mode
    Emom,
}

impl WorkoutScheme {
    /// Whether the primary value is a clock time
    #[must_use]
    pub const fn is_time_based(self) -> bool {
        matches!(self, Self::Time | Self::TimeWithCap)
    }

    /// Default comparison direction for the scheme.
    ///
    /// Only the time-based schemes minimize; everything else, EMOM included,
    /// treats higher as better.
    #[must_use]
    pub const fn default_direction(self) -> SortDirection {
        match self {
            Self::Time | Self::TimeWithCap => SortDirection::Ascending,
            Self::RoundsReps
            | Self::Reps
            | Self::Load
            | Self::Calories
            | Self::Meters
            | Self::Feet
            | Self::Points
            | Self::PassFail
            | Self::Emom => SortDirection::Descending,
        }
    }

    /// Default score type used when a workout does not declare one
    #[must_use]
    pub const fn default_score_type(self) -> ScoreType {
        match self {
            Self::Time | Self::TimeWithCap => ScoreType::Min,
            Self::RoundsReps
            | Self::Reps
            | Self::Load
            | Self::Calories
            | Self::Meters
            | Self::Feet
            | Self::Points
            | Self::PassFail
            | Self::Emom => ScoreType::Max,
        }
    }

    /// Raw-input shape accepted by the parser for this scheme
    #[must_use]
    pub const fn input_shape(self) -> InputShape {
        match self {
            Self::Time | Self::TimeWithCap => InputShape::Clock,
            Self::RoundsReps => InputShape::RoundsAndReps,
            Self::Load => InputShape::Decimal,
            Self::PassFail => InputShape::Keyword,
            Self::Reps | Self::Calories | Self::Meters | Self::Feet | Self::Points | Self::Emom => {
                InputShape::Integer
            }
        }
    }

    /// Display unit suffix, if the scheme has one
    #[must_use]
    pub const fn unit(self) -> Option<&'static str> {
        match self {
            Self::Time | Self::TimeWithCap | Self::PassFail => None,
            Self::RoundsReps | Self::Reps => Some("reps"),
            Self::Load => Some("lb"),
            Self::Calories => Some("cal"),
            Self::Meters => Some("m"),
            Self::Feet => Some("ft"),
            Self::Points => Some("pts"),
            Self::Emom => Some("rounds"),
        }
    }

    /// Upper bound of the legal encoded domain for this scheme
    #[must_use]
    pub const fn max_encoded(self) -> u64 {
        match self {
            Self::Time | Self::TimeWithCap => bounds::MAX_TIME_SECONDS,
            Self::RoundsReps => {
                bounds::MAX_ROUNDS * crate::constants::encoding::ROUNDS_MULTIPLIER
                    + (crate::constants::encoding::ROUNDS_MULTIPLIER - 1)
            }
            Self::Reps => bounds::MAX_REPS,
            Self::Load => bounds::MAX_LOAD_HUNDREDTHS,
            Self::Calories => bounds::MAX_CALORIES,
            Self::Meters | Self::Feet => bounds::MAX_DISTANCE,
            Self::Points => bounds::MAX_POINTS,
            Self::PassFail => 1,
            Self::Emom => bounds::MAX_EMOM_ROUNDS,
        }
    }

    /// Resolve the comparison direction for this scheme under a score type.
    ///
    /// `min`/`max` override the scheme default; aggregating score types
    /// inherit it.
    #[must_use]
    pub const fn direction_for(self, score_type: ScoreType) -> SortDirection {
        match score_type.direction_override() {
            Some(direction) => direction,
            None => self.default_direction(),
        }
    }

    /// Canonical wire name, matching the serde representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Time => "time",
            Self::TimeWithCap => "time-with-cap",
            Self::RoundsReps => "rounds-reps",
            Self::Reps => "reps",
            Self::Load => "load",
            Self::Calories => "calories",
            Self::Meters => "meters",
            Self::Feet => "feet",
            Self::Points => "points",
            Self::PassFail => "pass-fail",
            Self::Emom => "emom",
        }
    }
}

impl fmt::Display for WorkoutScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutScheme {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "time" => Ok(Self::Time),
            "time-with-cap" => Ok(Self::TimeWithCap),
            "rounds-reps" => Ok(Self::RoundsReps),
            "reps" => Ok(Self::Reps),
            "load" => Ok(Self::Load),
            "calories" => Ok(Self::Calories),
            "meters" => Ok(Self::Meters),
            "feet" => Ok(Self::Feet),
            "points" => Ok(Self::Points),
            "pass-fail" => Ok(Self::PassFail),
            "emom" => Ok(Self::Emom),
            other => Err(ScoringError::domain_violation(format!(
                "unknown workout scheme: '{other}'"
            ))),
        }
    }
}

/// Aggregation rule determining the official result and its direction.
///
/// For single-round workouts only `min`/`max` matter: they override the
/// scheme's comparison direction. For multi-round workouts the score type is
/// also the rule that folds per-round values into the official value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreType {
    /// Lowest value wins (or lowest round, for multi-round)
    Min,
    /// Highest value wins (or highest round, for multi-round)
    Max,
    /// Sum of round values
    Sum,
    /// Round-half-up integer mean of round values
    Average,
    /// First round's value
    First,
    /// Last round's value
    Last,
}

impl ScoreType {
    /// Direction forced by this score type, if any
    #[must_use]
    pub const fn direction_override(self) -> Option<SortDirection> {
        match self {
            Self::Min => Some(SortDirection::Ascending),
            Self::Max => Some(SortDirection::Descending),
            Self::Sum | Self::Average | Self::First | Self::Last => None,
        }
    }

    /// Canonical wire name, matching the serde representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Min => "min",
            Self::Max => "max",
            Self::Sum => "sum",
            Self::Average => "average",
            Self::First => "first",
            Self::Last => "last",
        }
    }
}

impl fmt::Display for ScoreType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScoreType {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "min" => Ok(Self::Min),
            "max" => Ok(Self::Max),
            "sum" => Ok(Self::Sum),
            "average" | "avg" => Ok(Self::Average),
            "first" => Ok(Self::First),
            "last" => Ok(Self::Last),
            other => Err(ScoringError::domain_violation(format!(
                "unknown score type: '{other}'"
            ))),
        }
    }
}

/// Secondary metric used only to separate ties on the primary score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TiebreakScheme {
    /// Time to a checkpoint; lower is better
    Time,
    /// Reps at a checkpoint; higher is better
    Reps,
}

impl TiebreakScheme {
    /// Comparison direction of the tiebreak value
    #[must_use]
    pub const fn direction(self) -> SortDirection {
        match self {
            Self::Time => SortDirection::Ascending,
            Self::Reps => SortDirection::Descending,
        }
    }

    /// Upper bound of the legal tiebreak value domain
    #[must_use]
    pub const fn max_encoded(self) -> u64 {
        match self {
            Self::Time => bounds::MAX_TIME_SECONDS,
            Self::Reps => bounds::MAX_REPS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_defaults() {
        assert_eq!(
            WorkoutScheme::Time.default_direction(),
            SortDirection::Ascending
        );
        assert_eq!(
            WorkoutScheme::TimeWithCap.default_direction(),
            SortDirection::Ascending
        );
        // EMOM counts rounds completed: higher is better.
        assert_eq!(
            WorkoutScheme::Emom.default_direction(),
            SortDirection::Descending
        );
        assert_eq!(
            WorkoutScheme::Load.default_direction(),
            SortDirection::Descending
        );
    }

    #[test]
    fn test_score_type_overrides_scheme_direction() {
        assert_eq!(
            WorkoutScheme::Time.direction_for(ScoreType::Max),
            SortDirection::Descending
        );
        assert_eq!(
            WorkoutScheme::Reps.direction_for(ScoreType::Min),
            SortDirection::Ascending
        );
        assert_eq!(
            WorkoutScheme::Reps.direction_for(ScoreType::Sum),
            SortDirection::Descending
        );
    }

    #[test]
    fn test_input_shapes() {
        assert_eq!(WorkoutScheme::Time.input_shape(), InputShape::Clock);
        assert_eq!(WorkoutScheme::RoundsReps.input_shape(), InputShape::RoundsAndReps);
        assert_eq!(WorkoutScheme::Load.input_shape(), InputShape::Decimal);
        assert_eq!(WorkoutScheme::PassFail.input_shape(), InputShape::Keyword);
        assert_eq!(WorkoutScheme::Calories.input_shape(), InputShape::Integer);
    }

    #[test]
    fn test_wire_names_round_trip() {
        for scheme in [
            WorkoutScheme::Time,
            WorkoutScheme::TimeWithCap,
            WorkoutScheme::RoundsReps,
            WorkoutScheme::Reps,
            WorkoutScheme::Load,
            WorkoutScheme::Calories,
            WorkoutScheme::Meters,
            WorkoutScheme::Feet,
            WorkoutScheme::Points,
            WorkoutScheme::PassFail,
            WorkoutScheme::Emom,
        ] {
            assert_eq!(scheme.as_str().parse::<WorkoutScheme>().ok(), Some(scheme));
            let json = serde_json::to_string(&scheme).ok();
            assert_eq!(json.as_deref(), Some(format!("\"{scheme}\"").as_str()));
        }
    }
}
