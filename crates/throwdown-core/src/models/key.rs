// ABOUTME: SortKey newtype wrapping the 128-bit composite ranking key
// ABOUTME: Serializes as a fixed-width decimal string so lexicographic order equals numeric order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Throwdown Competition Platform

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

use crate::constants::sort_key::SORT_KEY_WIDTH;
use crate::errors::{ScoringError, ScoringResult};

/// Composite ranking key: status band, direction-transformed value, and
/// tiebreak folded into one integer, ascending order meaning best first.
///
/// Keys travel and persist as [`SORT_KEY_WIDTH`]-digit zero-padded decimal
/// strings; the serde implementations below enforce that representation so a
/// string column index sorts identically to the numeric key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SortKey(u128);

impl SortKey {
    /// Wrap a raw composite key
    #[must_use]
    pub const fn new(raw: u128) -> Self {
        Self(raw)
    }

    /// The raw composite integer
    #[must_use]
    pub const fn raw(self) -> u128 {
        self.0
    }

    /// Fixed-width zero-padded decimal form used for storage
    #[must_use]
    pub fn to_padded_string(self) -> String {
        format!("{:0width$}", self.0, width = SORT_KEY_WIDTH)
    }

    /// Parse a stored key string.
    ///
    /// Anything other than a decimal string inside the key domain is a
    /// `DomainViolation`: stored keys are engine-produced, so a mismatch
    /// means the stored data and the engine disagree on the encoding.
    pub fn from_padded_string(s: &str) -> ScoringResult<Self> {
        if s.len() > SORT_KEY_WIDTH {
            return Err(ScoringError::domain_violation(format!(
                "sort key '{s}' exceeds {SORT_KEY_WIDTH} digits"
            )));
        }
        s.parse::<u128>()
            .map(Self)
            .map_err(|_| ScoringError::domain_violation(format!("malformed sort key '{s}'")))
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_padded_string())
    }
}

impl Serialize for SortKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_padded_string())
    }
}

impl<'de> Deserialize<'de> for SortKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_padded_string(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padded_string_preserves_order() {
        let small = SortKey::new(510_000);
        let large = SortKey::new(720_000);
        assert!(small.to_padded_string() < large.to_padded_string());
        assert_eq!(small.to_padded_string().len(), SORT_KEY_WIDTH);
    }

    #[test]
    fn test_string_round_trip() {
        let key = SortKey::new(31_000_000_000_000_000_000_000_142);
        let parsed = SortKey::from_padded_string(&key.to_padded_string());
        assert_eq!(parsed.ok(), Some(key));
    }

    #[test]
    fn test_serde_uses_padded_string() {
        let key = SortKey::new(42);
        let json = serde_json::to_string(&key).ok();
        assert_eq!(json.as_deref(), Some("\"000000000000000000000000042\""));
    }
}
