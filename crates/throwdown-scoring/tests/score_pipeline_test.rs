// ABOUTME: Integration tests for the parse → encode → decode pipeline
// ABOUTME: Covers scheme grammars, keyword statuses, tiebreaks, and round-trip identity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Throwdown Competition Platform

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use throwdown_core::models::{ScoreStatus, ScoreType, TiebreakScheme, WorkoutScheme};
use throwdown_scoring::format::{decode, format_rounds, format_with_tiebreak, FormatOptions};
use throwdown_scoring::parser::{parse, parse_tiebreak, EmomMode, ParseOptions, TimePrecision};
use throwdown_scoring::rounds::encode_rounds;

fn defaults() -> ParseOptions {
    ParseOptions::default()
}

// === Time grammar ===

#[test]
fn test_time_colon_forms() {
    assert_eq!(parse("3:00", WorkoutScheme::Time, &defaults()).encoded, Some(180));
    assert_eq!(parse("2:45", WorkoutScheme::Time, &defaults()).encoded, Some(165));
    assert_eq!(parse("1:02:03", WorkoutScheme::Time, &defaults()).encoded, Some(3_723));
    assert_eq!(parse("  12:34 ", WorkoutScheme::Time, &defaults()).encoded, Some(754));
}

#[test]
fn test_time_bare_seconds() {
    let outcome = parse("754", WorkoutScheme::Time, &defaults());
    assert!(outcome.is_valid);
    assert_eq!(outcome.encoded, Some(754));
    assert_eq!(outcome.formatted, "12:34");
    assert_eq!(outcome.status, Some(ScoreStatus::Scored));
}

#[test]
fn test_time_rejects_malformed_input() {
    for bad in ["3:75", "-1:00", "1:2:3:4", "12:", ":30", "3::00", "abc", "1:xx"] {
        let outcome = parse(bad, WorkoutScheme::Time, &defaults());
        assert!(!outcome.is_valid, "'{bad}' should be rejected");
        assert!(outcome.error.is_some(), "'{bad}' should carry a message");
    }
}

#[test]
fn test_time_never_panics_on_noise() {
    let long_digits = "9".repeat(40);
    for noise in ["", "   ", "++", long_digits.as_str(), "∞", "1.5e3"] {
        let _ = parse(noise, WorkoutScheme::Time, &defaults());
        let _ = parse(noise, WorkoutScheme::RoundsReps, &defaults());
        let _ = parse(noise, WorkoutScheme::Load, &defaults());
    }
}

#[test]
fn test_clock_precision_digit_cram() {
    let options = ParseOptions {
        time_precision: TimePrecision::Clock,
        ..ParseOptions::default()
    };
    assert_eq!(parse("1234", WorkoutScheme::Time, &options).encoded, Some(754));
}

// === Time cap interaction ===

#[test]
fn test_time_at_cap_becomes_capped() {
    let options = ParseOptions {
        time_cap_seconds: Some(900),
        ..ParseOptions::default()
    };
    let outcome = parse("15:00", WorkoutScheme::TimeWithCap, &options);
    assert!(outcome.is_valid);
    assert_eq!(outcome.status, Some(ScoreStatus::Cap));
    assert_eq!(outcome.formatted, "CAP (15:00)");
}

#[test]
fn test_cap_keyword_carries_cap_time() {
    let options = ParseOptions {
        time_cap_seconds: Some(900),
        ..ParseOptions::default()
    };
    let outcome = parse("CAP", WorkoutScheme::TimeWithCap, &options);
    assert!(outcome.is_valid);
    assert_eq!(outcome.status, Some(ScoreStatus::Cap));
    assert_eq!(outcome.encoded, Some(900));
    // Capped athletes owe a secondary score (reps completed).
    assert!(outcome.needs_tiebreak);
}

#[test]
fn test_time_over_cap_is_scored_with_note() {
    let options = ParseOptions {
        time_cap_seconds: Some(900),
        ..ParseOptions::default()
    };
    let outcome = parse("15:30", WorkoutScheme::TimeWithCap, &options);
    assert!(outcome.is_valid);
    assert_eq!(outcome.status, Some(ScoreStatus::Scored));
    assert!(outcome.error.unwrap().contains("15:00"));
}

// === Keyword statuses ===

#[test]
fn test_dq_and_withdrawn_keywords() {
    let dq = parse("dq", WorkoutScheme::Reps, &defaults());
    assert_eq!(dq.status, Some(ScoreStatus::Dq));
    assert_eq!(dq.encoded, None);
    assert_eq!(dq.formatted, "DQ");

    let wd = parse(" Withdrawn ", WorkoutScheme::Time, &defaults());
    assert_eq!(wd.status, Some(ScoreStatus::Withdrawn));
    assert_eq!(wd.formatted, "WD");
}

#[test]
fn test_cap_keyword_invalid_outside_time_schemes() {
    assert!(!parse("cap", WorkoutScheme::Load, &defaults()).is_valid);
}

// === Rounds + reps ===

#[test]
fn test_rounds_reps_with_known_round_size() {
    let options = ParseOptions {
        reps_per_round: Some(20),
        ..ParseOptions::default()
    };
    let outcome = parse("5 + 12", WorkoutScheme::RoundsReps, &options);
    assert_eq!(outcome.encoded, Some(112));
    assert_eq!(outcome.formatted, "5 + 12");

    // Reps beyond the round size make no sense.
    assert!(!parse("5 + 20", WorkoutScheme::RoundsReps, &options).is_valid);
}

#[test]
fn test_rounds_reps_compound_encoding() {
    let outcome = parse("5+12", WorkoutScheme::RoundsReps, &defaults());
    assert_eq!(outcome.encoded, Some(500_012));
}

#[test]
fn test_rounds_reps_bare_total() {
    let outcome = parse("150", WorkoutScheme::RoundsReps, &defaults());
    assert_eq!(outcome.encoded, Some(150));
    assert_eq!(outcome.formatted, "150 reps");
}

// === Simple integer and load schemes ===

#[test]
fn test_integer_schemes_accept_unit_suffixes() {
    assert_eq!(parse("150 reps", WorkoutScheme::Reps, &defaults()).encoded, Some(150));
    assert_eq!(parse("72 cal", WorkoutScheme::Calories, &defaults()).encoded, Some(72));
    assert_eq!(parse("1000 m", WorkoutScheme::Meters, &defaults()).encoded, Some(1_000));
    assert_eq!(parse("80 pts", WorkoutScheme::Points, &defaults()).encoded, Some(80));
}

#[test]
fn test_negative_scores_rejected() {
    assert!(!parse("-5", WorkoutScheme::Reps, &defaults()).is_valid);
    assert!(!parse("-225", WorkoutScheme::Load, &defaults()).is_valid);
}

#[test]
fn test_load_decimals_encode_as_hundredths() {
    assert_eq!(parse("225", WorkoutScheme::Load, &defaults()).encoded, Some(22_500));
    assert_eq!(parse("225.5", WorkoutScheme::Load, &defaults()).encoded, Some(22_550));
    assert_eq!(parse("225.5 lbs", WorkoutScheme::Load, &defaults()).encoded, Some(22_550));
}

#[test]
fn test_pass_fail_keywords() {
    assert_eq!(parse("PASS", WorkoutScheme::PassFail, &defaults()).encoded, Some(1));
    assert_eq!(parse("f", WorkoutScheme::PassFail, &defaults()).encoded, Some(0));
    assert_eq!(parse("1", WorkoutScheme::PassFail, &defaults()).encoded, Some(1));
    assert!(!parse("maybe", WorkoutScheme::PassFail, &defaults()).is_valid);
}

// === Tiebreak parsing ===

#[test]
fn test_tiebreak_time_and_reps() {
    let time = parse_tiebreak("8:30", TiebreakScheme::Time, &defaults());
    assert_eq!(time.encoded, Some(510));

    let reps = parse_tiebreak("42", TiebreakScheme::Reps, &defaults());
    assert_eq!(reps.encoded, Some(42));

    assert!(!parse_tiebreak("8:99", TiebreakScheme::Time, &defaults()).is_valid);
}

// === Round-trip identity: parse(decode(value)) == value ===

#[test]
fn test_round_trip_across_schemes() {
    let cases: &[(WorkoutScheme, u64)] = &[
        (WorkoutScheme::Time, 0),
        (WorkoutScheme::Time, 754),
        (WorkoutScheme::Time, 3_723),
        (WorkoutScheme::TimeWithCap, 899),
        (WorkoutScheme::Reps, 150),
        (WorkoutScheme::RoundsReps, 500_012),
        (WorkoutScheme::Load, 18_550),
        (WorkoutScheme::Load, 22_500),
        (WorkoutScheme::Calories, 72),
        (WorkoutScheme::Meters, 5_000),
        (WorkoutScheme::Feet, 300),
        (WorkoutScheme::Points, 88),
        (WorkoutScheme::PassFail, 1),
        (WorkoutScheme::PassFail, 0),
        (WorkoutScheme::Emom, 9),
    ];

    for (scheme, value) in cases {
        let display = decode(*value, *scheme, &FormatOptions::default()).unwrap();
        let reparsed = parse(&display, *scheme, &defaults());
        assert_eq!(
            reparsed.encoded,
            Some(*value),
            "{scheme} value {value} rendered '{display}' failed to round-trip"
        );
    }
}

#[test]
fn test_round_trip_with_round_size() {
    // 5 rounds of 20 plus 12 reps.
    let format = FormatOptions {
        reps_per_round: Some(20),
        ..FormatOptions::default()
    };
    let display = decode(112, WorkoutScheme::RoundsReps, &format).unwrap();
    assert_eq!(display, "5 + 12");

    let options = ParseOptions {
        reps_per_round: Some(20),
        ..ParseOptions::default()
    };
    assert_eq!(parse(&display, WorkoutScheme::RoundsReps, &options).encoded, Some(112));
}

// === Multi-round encoding ===

#[test]
fn test_back_squat_rounds_keep_best_lift() {
    let raws = ["225", "235", "245", "255", "265"];
    let outcome = encode_rounds(&raws, WorkoutScheme::Load, ScoreType::Max, &defaults());
    assert!(outcome.is_valid);
    assert_eq!(outcome.aggregated, Some(26_500));
    assert_eq!(outcome.rounds.len(), 5);
}

#[test]
fn test_emom_rounds_sum() {
    let raws = ["12", "12", "11", "10"];
    let outcome = encode_rounds(&raws, WorkoutScheme::Emom, ScoreType::Sum, &defaults());
    assert_eq!(outcome.aggregated, Some(45));
}

#[test]
fn test_emom_pass_fail_mode() {
    let options = ParseOptions {
        emom_mode: EmomMode::PassFail,
        ..ParseOptions::default()
    };
    assert_eq!(parse("pass", WorkoutScheme::Emom, &options).encoded, Some(1));
    assert_eq!(parse("fail", WorkoutScheme::Emom, &options).encoded, Some(0));
    // Rounds-completed mode reads the same input as a round count.
    assert!(!parse("pass", WorkoutScheme::Emom, &defaults()).is_valid);
}

// === Display helpers ===

#[test]
fn test_format_with_tiebreak_appends_secondary() {
    let display = format_with_tiebreak("5 + 12", 510, TiebreakScheme::Time, &FormatOptions::default());
    assert_eq!(display.ok(), Some("5 + 12 (TB 8:30)".to_owned()));

    let display = format_with_tiebreak("12:34", 42, TiebreakScheme::Reps, &FormatOptions::default());
    assert_eq!(display.ok(), Some("12:34 (TB 42 reps)".to_owned()));
}

#[test]
fn test_format_rounds_renders_each_round() {
    let rendered = format_rounds(&[22_500, 23_500], WorkoutScheme::Load, &FormatOptions::default());
    assert_eq!(
        rendered.ok(),
        Some(vec!["225 lb".to_owned(), "235 lb".to_owned()])
    );
}
