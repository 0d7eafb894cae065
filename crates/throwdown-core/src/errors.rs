// ABOUTME: Error types for the scoring engine
// ABOUTME: Defines ScoringError variants for domain violations and roster mismatches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Throwdown Competition Platform

//! # Error Handling
//!
//! The engine distinguishes three failure classes:
//!
//! - Invalid athlete input is NOT an error here. The parser reports it inline
//!   through its structured outcome so a form can surface the message next to
//!   the offending field.
//! - [`ScoringError::DomainViolation`] marks internal-integrity failures:
//!   decoding a value outside the legal encoded domain, or ranking with an
//!   inconsistent scheme/score-type pairing. These indicate corrupted state
//!   or a programming error and are meant to propagate uncaught.
//! - [`ScoringError::RosterMismatch`] marks a result that references a
//!   competitor outside the relevant roster. Callers must reject the write;
//!   the engine never drops such a result silently.

use thiserror::Error;

/// Unified error type for the scoring engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    /// An encoded value or configuration escaped the legal domain.
    ///
    /// Only internally-produced encodings are ever decoded, so this can only
    /// arise from corrupted state, never from athlete input.
    #[error("domain violation: {0}")]
    DomainViolation(String),

    /// A result references a competitor outside the relevant roster
    #[error("roster mismatch: competitor '{competitor_id}' is not on the roster for '{context}'")]
    RosterMismatch {
        /// The unknown competitor or team id carried by the result
        competitor_id: String,
        /// The event or division the result was submitted against
        context: String,
    },
}

impl ScoringError {
    /// Create a `DomainViolation` error
    pub fn domain_violation(message: impl Into<String>) -> Self {
        Self::DomainViolation(message.into())
    }

    /// Create a `RosterMismatch` error
    pub fn roster_mismatch(competitor_id: impl Into<String>, context: impl Into<String>) -> Self {
        Self::RosterMismatch {
            competitor_id: competitor_id.into(),
            context: context.into(),
        }
    }
}

/// Result alias used across the engine
pub type ScoringResult<T> = Result<T, ScoringError>;
