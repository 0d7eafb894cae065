// ABOUTME: Score status enumeration with its total precedence order
// ABOUTME: Completions always outrank caps, caps outrank DQs, DQs outrank withdrawals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Throwdown Competition Platform

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ScoringError;

/// Terminal status of a submitted result.
///
/// The derive order IS the precedence order: `scored < cap < dq <
/// withdrawn`. A completion outranks every non-completion, and a
/// non-completion ranks below any numeric result, zero included.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum ScoreStatus {
    /// Completed the workout with a countable result
    #[default]
    Scored,
    /// Hit the time cap before finishing
    Cap,
    /// Disqualified
    Dq,
    /// Withdrew from the competition
    Withdrawn,
}

impl ScoreStatus {
    /// Sort-key band index, 0 being best
    #[must_use]
    pub const fn band(self) -> u8 {
        match self {
            Self::Scored => 0,
            Self::Cap => 1,
            Self::Dq => 2,
            Self::Withdrawn => 3,
        }
    }

    /// Short display label shown on leaderboards
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Scored => "",
            Self::Cap => "CAP",
            Self::Dq => "DQ",
            Self::Withdrawn => "WD",
        }
    }

    /// Canonical wire name, matching the serde representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scored => "scored",
            Self::Cap => "cap",
            Self::Dq => "dq",
            Self::Withdrawn => "withdrawn",
        }
    }
}

impl fmt::Display for ScoreStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScoreStatus {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "scored" => Ok(Self::Scored),
            "cap" => Ok(Self::Cap),
            "dq" => Ok(Self::Dq),
            "withdrawn" | "wd" => Ok(Self::Withdrawn),
            other => Err(ScoringError::domain_violation(format!(
                "unknown score status: '{other}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_precedence_is_total() {
        assert!(ScoreStatus::Scored < ScoreStatus::Cap);
        assert!(ScoreStatus::Cap < ScoreStatus::Dq);
        assert!(ScoreStatus::Dq < ScoreStatus::Withdrawn);
    }

    #[test]
    fn test_bands_match_precedence() {
        assert_eq!(ScoreStatus::Scored.band(), 0);
        assert_eq!(ScoreStatus::Withdrawn.band(), 3);
    }
}
