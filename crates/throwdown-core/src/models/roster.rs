// ABOUTME: Roster models resolving competitor identity for a division
// ABOUTME: Competitors are athletes or teams; members attach for display only
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Throwdown Competition Platform

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A member of a team competitor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    /// The member's own athlete id
    pub id: String,
    /// Display name
    pub display_name: String,
    /// Whether this member is the team captain
    #[serde(default)]
    pub captain: bool,
}

/// One competitor eligible to hold results in a division.
///
/// For team divisions the competitor id is the team id and `members` lists
/// the athletes; member names never affect scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competitor {
    /// Opaque competitor (athlete or team) id
    pub id: String,
    /// Athlete display name or team name
    pub display_name: String,
    /// Team members, empty for individuals
    #[serde(default)]
    pub members: Vec<TeamMember>,
}

/// The set of competitors results may reference within one division
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    competitors: Vec<Competitor>,
}

impl Roster {
    /// Build a roster from its competitors
    #[must_use]
    pub fn new(competitors: Vec<Competitor>) -> Self {
        Self { competitors }
    }

    /// All competitors in registration order
    #[must_use]
    pub fn competitors(&self) -> &[Competitor] {
        &self.competitors
    }

    /// Look up a competitor by id
    #[must_use]
    pub fn get(&self, competitor_id: &str) -> Option<&Competitor> {
        self.competitors.iter().find(|c| c.id == competitor_id)
    }

    /// Whether the id belongs to a roster competitor
    #[must_use]
    pub fn contains(&self, competitor_id: &str) -> bool {
        self.get(competitor_id).is_some()
    }

    /// Index competitors by id for repeated lookups
    #[must_use]
    pub fn by_id(&self) -> HashMap<&str, &Competitor> {
        self.competitors.iter().map(|c| (c.id.as_str(), c)).collect()
    }

    /// Number of competitors on the roster
    #[must_use]
    pub fn len(&self) -> usize {
        self.competitors.len()
    }

    /// Whether the roster is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.competitors.is_empty()
    }
}
