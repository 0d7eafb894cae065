// ABOUTME: Sort-key composition constants shared by encoder and decoder
// ABOUTME: Defines the band/value/tiebreak digit layout of the 128-bit sort key
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Throwdown Competition Platform

//! Sort-key layout
//!
//! A sort key is a single `u128` composed of three decimal digit blocks,
//! most significant first:
//!
//! ```text
//! [status band] [primary value, direction-transformed] [tiebreak value]
//!       1 digit          13 digits                         13 digits
//! ```
//!
//! Ascending numeric order over the whole key is always "best to worst":
//! the band block dominates, so a completion beats any capped result beats
//! any DQ beats any withdrawal, regardless of the numeric blocks below it.
//! Within a band, descending schemes store `MAX_DOMAIN - value` so larger
//! raw scores become smaller keys. The tiebreak block is always present;
//! workouts without a secondary dimension write zeros there.
//!
//! Keys serialize as [`SORT_KEY_WIDTH`]-digit zero-padded decimal strings,
//! which makes lexicographic string order identical to numeric order —
//! the property persistence relies on for index-backed "best first" reads.

/// Largest legal direction-transformed value (`10^12 - 1`).
///
/// Every per-scheme bound in [`super::bounds`] stays at or below this, which
/// is what makes the descending transform `MAX_DOMAIN - value` injective.
pub const MAX_DOMAIN: u64 = 999_999_999_999;

/// Sentinel stored when a band has no numeric value (`10^12`).
///
/// Strictly greater than any transformed value, so null-value entries sort
/// deterministically last within their band. Zero is a real value and never
/// collides with this.
pub const NO_VALUE: u64 = 1_000_000_000_000;

/// Multiplier placing the status band above every transformed value (`10^13`)
pub const SCALE: u128 = 10_000_000_000_000;

/// Multiplier folding the tiebreak block below the primary key (`10^13`)
pub const TIEBREAK_SCALE: u128 = 10_000_000_000_000;

/// Width of the zero-padded decimal serialization of a sort key
pub const SORT_KEY_WIDTH: usize = 27;

/// Version tag for the sort-key layout and the constants above.
///
/// Persisted alongside stored keys; a mismatch means every stored sort key
/// and points cell must be recomputed before results can be compared.
pub const SORT_KEY_ENCODING_VERSION: u32 = 1;
