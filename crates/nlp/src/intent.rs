//! Intent classification
//!
//! Categories are tested in the fixed priority order given by the rule
//! table (greeting → question → command → information in the shipped
//! tables); the first category with any matching pattern wins. The total
//! order resolves ambiguous utterances deterministically — a greeting that
//! also contains a question word classifies as a greeting. Anything no
//! category matches is a statement.

use regex::Regex;

use crate::{NlpError, Result};
use sahayak_config::IntentRule;
use sahayak_core::Intent;

struct CompiledCategory {
    intent: Intent,
    patterns: Vec<Regex>,
}

/// Regex-based intent classifier
pub struct IntentClassifier {
    categories: Vec<CompiledCategory>,
}

impl IntentClassifier {
    /// Compile a classifier from the configured rule table
    ///
    /// Patterns are matched against lower-cased text, so the rules
    /// themselves are written in lower case.
    pub fn from_rules(rules: &[IntentRule]) -> Result<Self> {
        let mut categories = Vec::with_capacity(rules.len());
        for rule in rules {
            let mut patterns = Vec::with_capacity(rule.patterns.len());
            for pattern in &rule.patterns {
                let regex = Regex::new(pattern).map_err(|source| NlpError::InvalidPattern {
                    context: format!("intent {}", rule.intent),
                    pattern: pattern.clone(),
                    source,
                })?;
                patterns.push(regex);
            }
            categories.push(CompiledCategory {
                intent: rule.intent,
                patterns,
            });
        }
        tracing::debug!(categories = categories.len(), "Compiled intent categories");
        Ok(Self { categories })
    }

    /// Classify the intent of `text`
    ///
    /// Always returns exactly one intent; `Intent::Statement` when nothing
    /// matches.
    pub fn classify(&self, text: &str) -> Intent {
        let text_lower = text.to_lowercase();

        for category in &self.categories {
            if category.patterns.iter().any(|p| p.is_match(&text_lower)) {
                return category.intent;
            }
        }

        Intent::Statement
    }
}
