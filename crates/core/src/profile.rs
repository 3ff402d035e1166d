//! Per-user profile state
//!
//! The profile is the only durable state in the system. It is owned
//! exclusively by the personality engine for its user id; no other
//! component reads or writes the persisted representation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Stated interaction preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Preferred communication style
    #[serde(default = "default_communication_style")]
    pub communication_style: String,
    /// Topics the user has shown interest in
    #[serde(default)]
    pub topics_of_interest: Vec<String>,
    /// How often the user interacts
    #[serde(default = "default_interaction_frequency")]
    pub interaction_frequency: String,
}

fn default_communication_style() -> String {
    "professional".to_string()
}

fn default_interaction_frequency() -> String {
    "daily".to_string()
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            communication_style: default_communication_style(),
            topics_of_interest: Vec::new(),
            interaction_frequency: default_interaction_frequency(),
        }
    }
}

/// Interaction counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct InteractionStats {
    /// Total turns across all sessions
    #[serde(default)]
    pub total_interactions: u64,
    /// Timestamp of the very first turn, set once
    #[serde(default)]
    pub first_interaction: Option<DateTime<Utc>>,
    /// Timestamp of the most recent turn
    #[serde(default)]
    pub last_interaction: Option<DateTime<Utc>>,
}

/// Long-term profile for one user id
///
/// Created with default values on first use, mutated on every turn,
/// persisted after every mutation, reloaded at engine construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UserProfile {
    #[serde(default)]
    pub preferences: Preferences,
    #[serde(default)]
    pub interaction_history: InteractionStats,
    /// Entity-type → distinct values seen, insertion order preserved
    #[serde(default)]
    pub learned_context: BTreeMap<String, Vec<String>>,
}

impl UserProfile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one completed turn
    ///
    /// Increments the counter, stamps `last_interaction`, and sets
    /// `first_interaction` if this is the first recorded turn.
    pub fn record_interaction(&mut self, now: DateTime<Utc>) {
        self.interaction_history.total_interactions += 1;
        self.interaction_history.last_interaction = Some(now);
        if self.interaction_history.first_interaction.is_none() {
            self.interaction_history.first_interaction = Some(now);
        }
    }

    /// Remember an entity value, with set semantics
    ///
    /// Returns `true` if the value was new for its type.
    pub fn learn(&mut self, entity_type: &str, value: &str) -> bool {
        let values = self
            .learned_context
            .entry(entity_type.to_string())
            .or_default();
        if values.iter().any(|v| v == value) {
            return false;
        }
        values.push(value.to_string());
        true
    }

    /// Values learned so far for an entity type
    pub fn learned(&self, entity_type: &str) -> &[String] {
        self.learned_context
            .get(entity_type)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
