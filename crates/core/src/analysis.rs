//! Tagged analysis types produced by the NLP pipeline
//!
//! Every analyzer output is a closed enum or typed aggregate so that
//! intent/sentiment handling is exhaustiveness-checked at compile time
//! instead of flowing through string-keyed maps.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::Language;

/// Coarse conversational purpose of an utterance
///
/// `Statement` is the fallback for anything no category pattern matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Greeting,
    Question,
    Command,
    Information,
    #[default]
    Statement,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Greeting => "greeting",
            Intent::Question => "question",
            Intent::Command => "command",
            Intent::Information => "information",
            Intent::Statement => "statement",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Coarse affect polarity of an utterance
///
/// Ties between positive and negative lexicon hits resolve to `Neutral`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Extracted entities, keyed by entity-type name
///
/// Values for a type are kept in order of first occurrence in the text and
/// duplicates are preserved as found. Types with no matches are absent
/// rather than present with an empty list. Types iterate in a stable
/// (sorted) order so downstream learning passes are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityBag {
    entries: BTreeMap<String, Vec<String>>,
}

impl EntityBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the values matched for an entity type
    ///
    /// Empty value lists are dropped so absence stays observable.
    pub fn insert(&mut self, entity_type: impl Into<String>, values: Vec<String>) {
        if !values.is_empty() {
            self.entries.insert(entity_type.into(), values);
        }
    }

    /// Get the matched values for an entity type
    pub fn get(&self, entity_type: &str) -> Option<&[String]> {
        self.entries.get(entity_type).map(Vec::as_slice)
    }

    pub fn contains(&self, entity_type: &str) -> bool {
        self.entries.contains_key(entity_type)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entity types with at least one match
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate over (type, values) pairs in sorted type order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

/// Aggregate result of one pipeline pass over an utterance
///
/// Immutable once produced; the personality engine consumes it exactly
/// once per turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NlpResult {
    /// Original input text, unmodified
    pub text: String,
    /// Detected source language
    pub language: Language,
    /// Classified intent
    pub intent: Intent,
    /// Extracted entities
    pub entities: EntityBag,
    /// Analyzed sentiment
    pub sentiment: Sentiment,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_default_is_statement() {
        assert_eq!(Intent::default(), Intent::Statement);
    }

    #[test]
    fn test_sentiment_default_is_neutral() {
        assert_eq!(Sentiment::default(), Sentiment::Neutral);
    }

    #[test]
    fn test_entity_bag_drops_empty_lists() {
        let mut bag = EntityBag::new();
        bag.insert("time", vec![]);
        assert!(!bag.contains("time"));
        assert!(bag.is_empty());
    }

    #[test]
    fn test_entity_bag_preserves_value_order() {
        let mut bag = EntityBag::new();
        bag.insert("time", vec!["3:30 PM".to_string(), "5:00 PM".to_string()]);
        assert_eq!(
            bag.get("time"),
            Some(&["3:30 PM".to_string(), "5:00 PM".to_string()][..])
        );
    }

    #[test]
    fn test_entity_bag_iterates_types_in_sorted_order() {
        let mut bag = EntityBag::new();
        bag.insert("time", vec!["3:30 PM".to_string()]);
        bag.insert("email", vec!["a@b.com".to_string()]);
        let types: Vec<&str> = bag.iter().map(|(t, _)| t).collect();
        assert_eq!(types, vec!["email", "time"]);
    }

    #[test]
    fn test_serde_lowercase_tags() {
        assert_eq!(
            serde_json::to_string(&Intent::Greeting).unwrap(),
            "\"greeting\""
        );
        assert_eq!(
            serde_json::to_string(&Sentiment::Neutral).unwrap(),
            "\"neutral\""
        );
    }
}
