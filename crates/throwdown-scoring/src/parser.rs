// ABOUTME: Smart score parser handling every workout scheme
// ABOUTME: Raw athlete input becomes a canonical integer encoding or an inline validation message
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Throwdown Competition Platform

//! Score parsing.
//!
//! [`parse`] accepts whatever an athlete typed into a score field and
//! produces a [`ParseOutcome`]. Bad input is reported inside the outcome —
//! the parser never returns `Err` and never panics, because invalid input is
//! the normal case for a form field and must be recoverable inline.
//!
//! Keyword statuses parse here too: `cap` (time-based schemes only), `dq`,
//! and `wd`/`withdrawn`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use throwdown_core::constants::encoding::ROUNDS_MULTIPLIER;
use throwdown_core::models::{ScoreStatus, TiebreakScheme, WorkoutScheme};

use crate::format::format_time;

/// How bare digits are read for time-based schemes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimePrecision {
    /// `"90"` is ninety seconds (1:30)
    #[default]
    Seconds,
    /// `"1234"` is a digit clock: 12:34
    Clock,
}

/// EMOM scoring sub-mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmomMode {
    /// Score is the number of rounds completed before breaking
    #[default]
    RoundsCompleted,
    /// Score collapses to pass (held every minute) or fail
    PassFail,
}

/// Display unit for load scores
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightUnit {
    /// Pounds
    #[default]
    Pounds,
    /// Kilograms
    Kilograms,
}

impl WeightUnit {
    /// Display suffix
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Pounds => "lb",
            Self::Kilograms => "kg",
        }
    }
}

/// Per-workout context the parser needs beyond the scheme itself
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParseOptions {
    /// Bare-digit interpretation for times
    #[serde(default)]
    pub time_precision: TimePrecision,
    /// Time cap in whole seconds, for `time-with-cap` workouts
    #[serde(default)]
    pub time_cap_seconds: Option<u64>,
    /// Reps per round, when the workout declares one
    #[serde(default)]
    pub reps_per_round: Option<u64>,
    /// Declared tiebreak dimension
    #[serde(default)]
    pub tiebreak_scheme: Option<TiebreakScheme>,
    /// EMOM sub-mode
    #[serde(default)]
    pub emom_mode: EmomMode,
    /// Display unit for loads
    #[serde(default)]
    pub weight_unit: WeightUnit,
}

/// Result of parsing one raw score field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOutcome {
    /// Whether the input produced a usable result
    pub is_valid: bool,
    /// Canonical encoded value; `None` for keyword statuses without one
    pub encoded: Option<u64>,
    /// Canonical display form of what was parsed
    pub formatted: String,
    /// Status implied by the input (`scored`, or a parsed keyword status)
    pub status: Option<ScoreStatus>,
    /// Whether the workout now needs a secondary score for this entry
    pub needs_tiebreak: bool,
    /// Scheme-specific validation message when `is_valid` is false, or an
    /// advisory note on an otherwise valid score
    pub error: Option<String>,
}

impl ParseOutcome {
    fn scored(encoded: u64, formatted: impl Into<String>, needs_tiebreak: bool) -> Self {
        Self {
            is_valid: true,
            encoded: Some(encoded),
            formatted: formatted.into(),
            status: Some(ScoreStatus::Scored),
            needs_tiebreak,
            error: None,
        }
    }

    fn keyword(status: ScoreStatus, encoded: Option<u64>, formatted: impl Into<String>) -> Self {
        Self {
            is_valid: true,
            encoded,
            formatted: formatted.into(),
            status: Some(status),
            needs_tiebreak: false,
            error: None,
        }
    }

    fn invalid(raw: &str, message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            encoded: None,
            formatted: raw.to_owned(),
            status: None,
            needs_tiebreak: false,
            error: Some(message.into()),
        }
    }

    fn empty() -> Self {
        Self {
            is_valid: false,
            encoded: None,
            formatted: String::new(),
            status: None,
            needs_tiebreak: false,
            error: None,
        }
    }
}

/// Parse a raw score for a workout scheme.
///
/// Input is trimmed and keywords are case-insensitive. Unparseable input
/// yields `is_valid = false` with a scheme-specific message.
#[must_use]
pub fn parse(raw: &str, scheme: WorkoutScheme, options: &ParseOptions) -> ParseOutcome {
    let normalized = raw.trim().to_lowercase();

    if normalized.is_empty() {
        return ParseOutcome::empty();
    }

    // Keyword statuses take precedence over any grammar.
    if normalized == "dq" || normalized == "disqualified" {
        return ParseOutcome::keyword(ScoreStatus::Dq, None, "DQ");
    }
    if normalized == "wd" || normalized == "withdrawn" {
        return ParseOutcome::keyword(ScoreStatus::Withdrawn, None, "WD");
    }
    if normalized == "cap" || normalized == "c" {
        if !scheme.is_time_based() {
            return ParseOutcome::invalid(raw, "CAP is only valid for timed workouts");
        }
        let formatted = options
            .time_cap_seconds
            .map_or_else(|| "CAP".to_owned(), |cap| format!("CAP ({})", format_time(cap)));
        let mut outcome = ParseOutcome::keyword(ScoreStatus::Cap, options.time_cap_seconds, formatted);
        outcome.needs_tiebreak =
            options.tiebreak_scheme.is_some() || scheme == WorkoutScheme::TimeWithCap;
        return outcome;
    }

    let outcome = match scheme {
        WorkoutScheme::Time | WorkoutScheme::TimeWithCap => {
            parse_time(raw, &normalized, scheme, options)
        }
        WorkoutScheme::RoundsReps => parse_rounds_reps(raw, &normalized, options),
        WorkoutScheme::Reps => parse_integer(raw, &normalized, scheme, options),
        WorkoutScheme::Load => parse_load(raw, &normalized, options),
        WorkoutScheme::Calories
        | WorkoutScheme::Meters
        | WorkoutScheme::Feet
        | WorkoutScheme::Points => parse_integer(raw, &normalized, scheme, options),
        WorkoutScheme::PassFail => parse_pass_fail(raw, &normalized),
        WorkoutScheme::Emom => match options.emom_mode {
            EmomMode::RoundsCompleted => parse_integer(raw, &normalized, scheme, options),
            EmomMode::PassFail => parse_pass_fail(raw, &normalized),
        },
    };

    if !outcome.is_valid {
        debug!(scheme = %scheme, input = raw, "rejected score input");
    }
    outcome
}

/// Parse a secondary (tiebreak) score.
///
/// Tiebreak times follow the time grammar; tiebreak reps are bare integers.
#[must_use]
pub fn parse_tiebreak(
    raw: &str,
    tiebreak: TiebreakScheme,
    options: &ParseOptions,
) -> ParseOutcome {
    let normalized = raw.trim().to_lowercase();
    if normalized.is_empty() {
        return ParseOutcome::empty();
    }
    match tiebreak {
        TiebreakScheme::Time => {
            // The cap never applies to a tiebreak time.
            let mut opts = options.clone();
            opts.time_cap_seconds = None;
            parse_time(raw, &normalized, WorkoutScheme::Time, &opts)
        }
        TiebreakScheme::Reps => {
            parse_integer(raw, &normalized, WorkoutScheme::Reps, options)
        }
    }
}

fn parse_time(
    raw: &str,
    normalized: &str,
    scheme: WorkoutScheme,
    options: &ParseOptions,
) -> ParseOutcome {
    if normalized.starts_with('-') {
        return ParseOutcome::invalid(raw, "Time cannot be negative");
    }
    if normalized.contains('.') {
        return ParseOutcome::invalid(raw, "Sub-second precision is not recorded; enter whole seconds");
    }

    let total_seconds = if normalized.contains(':') {
        match parse_clock(normalized) {
            Some(seconds) => seconds,
            None => return ParseOutcome::invalid(raw, "Invalid time format; use MM:SS or H:MM:SS"),
        }
    } else {
        let Ok(digits) = normalized.parse::<u64>() else {
            return ParseOutcome::invalid(raw, "Invalid time format; use MM:SS or H:MM:SS");
        };
        match options.time_precision {
            TimePrecision::Seconds => digits,
            TimePrecision::Clock => match crammed_clock(normalized) {
                Some(seconds) => seconds,
                None => return ParseOutcome::invalid(raw, "Invalid time format"),
            },
        }
    };

    if total_seconds > WorkoutScheme::Time.max_encoded() {
        return ParseOutcome::invalid(raw, "Time is out of range");
    }

    let formatted = format_time(total_seconds);

    // At or past the cap the result counts as capped.
    if let Some(cap) = options.time_cap_seconds {
        if total_seconds == cap {
            let mut outcome =
                ParseOutcome::keyword(ScoreStatus::Cap, Some(cap), format!("CAP ({formatted})"));
            outcome.needs_tiebreak =
                options.tiebreak_scheme.is_some() || scheme == WorkoutScheme::TimeWithCap;
            return outcome;
        }
        if total_seconds > cap {
            let mut outcome = ParseOutcome::scored(total_seconds, formatted, false);
            outcome.error = Some(format!("Time exceeds cap of {}", format_time(cap)));
            return outcome;
        }
    }

    ParseOutcome::scored(total_seconds, formatted, false)
}

/// `MM:SS` or `H:MM:SS` with strict separators
fn parse_clock(normalized: &str) -> Option<u64> {
    let parts: Vec<&str> = normalized.split(':').collect();
    let fields: Vec<u64> = parts
        .iter()
        .map(|p| {
            if p.is_empty() || !p.bytes().all(|b| b.is_ascii_digit()) {
                None
            } else {
                p.parse::<u64>().ok()
            }
        })
        .collect::<Option<Vec<u64>>>()?;

    match fields.as_slice() {
        [minutes, seconds] if *seconds < 60 => Some(minutes * 60 + seconds),
        [hours, minutes, seconds] if *minutes < 60 && *seconds < 60 => {
            Some(hours * 3_600 + minutes * 60 + seconds)
        }
        _ => None,
    }
}

/// Digit-clock shorthand: `"1234"` → 12:34, `"234"` → 2:34, `"34"` → 0:34
fn crammed_clock(digits: &str) -> Option<u64> {
    let split = digits.len().saturating_sub(2);
    let (minutes, seconds) = digits.split_at(split);
    let minutes: u64 = if minutes.is_empty() { 0 } else { minutes.parse().ok()? };
    let seconds: u64 = seconds.parse().ok()?;
    if seconds >= 60 {
        return None;
    }
    Some(minutes * 60 + seconds)
}

/// Drop a trailing unit word ("150 reps", "225 lbs") before numeric parsing
fn strip_unit_suffix(normalized: &str) -> &str {
    normalized.trim_end_matches(|c: char| c.is_ascii_alphabetic() || c == ' ')
}

fn parse_rounds_reps(raw: &str, normalized: &str, options: &ParseOptions) -> ParseOutcome {
    let needs_tiebreak = options.tiebreak_scheme.is_some();

    if normalized.contains('+') {
        let mut parts = normalized.splitn(2, '+');
        let rounds_part = parts.next().unwrap_or_default().trim();
        let reps_part = parts.next().unwrap_or_default().trim();

        let (Ok(rounds), Ok(reps)) = (rounds_part.parse::<u64>(), reps_part.parse::<u64>()) else {
            return ParseOutcome::invalid(raw, "Invalid rounds+reps format; use e.g. 5+12");
        };

        let encoded = if let Some(reps_per_round) = options.reps_per_round {
            if reps_per_round == 0 {
                return ParseOutcome::invalid(raw, "Workout has an invalid round size");
            }
            if reps >= reps_per_round {
                return ParseOutcome::invalid(
                    raw,
                    format!("Reps exceed the round size of {reps_per_round}"),
                );
            }
            rounds * reps_per_round + reps
        } else {
            if reps >= ROUNDS_MULTIPLIER {
                return ParseOutcome::invalid(raw, "Rep count is out of range");
            }
            rounds * ROUNDS_MULTIPLIER + reps
        };

        if encoded > WorkoutScheme::RoundsReps.max_encoded() {
            return ParseOutcome::invalid(raw, "Round count is out of range");
        }

        return ParseOutcome::scored(encoded, format!("{rounds} + {reps}"), needs_tiebreak);
    }

    // A bare integer is a rep total.
    let Ok(total_reps) = strip_unit_suffix(normalized).parse::<u64>() else {
        return ParseOutcome::invalid(raw, "Invalid rep count");
    };
    if options.reps_per_round.is_none() && total_reps >= ROUNDS_MULTIPLIER {
        return ParseOutcome::invalid(raw, "Rep count is out of range");
    }
    if total_reps > WorkoutScheme::RoundsReps.max_encoded() {
        return ParseOutcome::invalid(raw, "Rep count is out of range");
    }
    ParseOutcome::scored(total_reps, format!("{total_reps} reps"), needs_tiebreak)
}

fn parse_integer(
    raw: &str,
    normalized: &str,
    scheme: WorkoutScheme,
    options: &ParseOptions,
) -> ParseOutcome {
    if normalized.starts_with('-') {
        return ParseOutcome::invalid(raw, "Score cannot be negative");
    }
    let Ok(value) = strip_unit_suffix(normalized).parse::<u64>() else {
        return ParseOutcome::invalid(raw, invalid_integer_message(scheme));
    };
    if value > scheme.max_encoded() {
        return ParseOutcome::invalid(raw, "Score is out of range");
    }

    let needs_tiebreak = options.tiebreak_scheme.is_some()
        && matches!(scheme, WorkoutScheme::Reps | WorkoutScheme::Emom);
    let formatted = match scheme.unit() {
        Some(unit) => format!("{value} {unit}"),
        None => value.to_string(),
    };
    ParseOutcome::scored(value, formatted, needs_tiebreak)
}

const fn invalid_integer_message(scheme: WorkoutScheme) -> &'static str {
    match scheme {
        WorkoutScheme::Reps => "Invalid rep count",
        WorkoutScheme::Calories => "Invalid calorie count",
        WorkoutScheme::Meters | WorkoutScheme::Feet => "Invalid distance",
        WorkoutScheme::Points => "Invalid points",
        WorkoutScheme::Emom => "Invalid round count",
        _ => "Invalid number",
    }
}

fn parse_load(raw: &str, normalized: &str, options: &ParseOptions) -> ParseOutcome {
    if normalized.starts_with('-') {
        return ParseOutcome::invalid(raw, "Load cannot be negative");
    }

    let normalized = strip_unit_suffix(normalized);
    let (whole_part, frac_part) = match normalized.split_once('.') {
        Some((w, f)) => (w, f),
        None => (normalized, ""),
    };
    if whole_part.is_empty()
        || !whole_part.bytes().all(|b| b.is_ascii_digit())
        || frac_part.len() > 2
        || !frac_part.bytes().all(|b| b.is_ascii_digit())
    {
        return ParseOutcome::invalid(raw, "Invalid load; use e.g. 185 or 185.5");
    }

    let Ok(whole) = whole_part.parse::<u64>() else {
        return ParseOutcome::invalid(raw, "Invalid load; use e.g. 185 or 185.5");
    };
    let hundredths = match frac_part.len() {
        0 => 0,
        1 => frac_part.parse::<u64>().unwrap_or(0) * 10,
        _ => frac_part.parse::<u64>().unwrap_or(0),
    };
    let encoded = whole * 100 + hundredths;

    if encoded > WorkoutScheme::Load.max_encoded() {
        return ParseOutcome::invalid(raw, "Load is out of range");
    }

    let formatted = format!(
        "{} {}",
        crate::format::format_load(encoded),
        options.weight_unit.suffix()
    );
    ParseOutcome::scored(encoded, formatted, false)
}

fn parse_pass_fail(raw: &str, normalized: &str) -> ParseOutcome {
    match normalized {
        "pass" | "p" | "1" => ParseOutcome::scored(1, "Pass", false),
        "fail" | "f" | "0" => ParseOutcome::scored(0, "Fail", false),
        _ => ParseOutcome::invalid(raw, "Enter 'pass' or 'fail'"),
    }
}

/// Whether a score deviates more than two standard deviations from its
/// division's mean. Advisory only; a flagged score is still accepted.
#[must_use]
pub fn is_outlier(value: u64, division_values: &[u64]) -> bool {
    // Below three samples there is no meaningful distribution.
    if division_values.len() < 3 {
        return false;
    }

    let n = division_values.len() as f64;
    let mean = division_values.iter().map(|v| *v as f64).sum::<f64>() / n;
    let variance = division_values
        .iter()
        .map(|v| (*v as f64 - mean).powi(2))
        .sum::<f64>()
        / n;
    let std_dev = variance.sqrt();

    (value as f64 - mean).abs() > 2.0 * std_dev
}
