//! Entity extraction
//!
//! Applies each entity type's pattern case-insensitively against the
//! original (not lower-cased) text so extracted values keep their surface
//! form. All matches are collected in order of appearance without
//! deduplication; types with no matches stay absent from the bag.

use regex::{Regex, RegexBuilder};

use crate::{NlpError, Result};
use sahayak_config::EntityRule;
use sahayak_core::EntityBag;

struct CompiledEntity {
    name: String,
    regex: Regex,
}

/// Regex-based entity extractor
pub struct EntityExtractor {
    entities: Vec<CompiledEntity>,
}

impl EntityExtractor {
    /// Compile an extractor from the configured rule table
    pub fn from_rules(rules: &[EntityRule]) -> Result<Self> {
        let mut entities = Vec::with_capacity(rules.len());
        for rule in rules {
            let regex = RegexBuilder::new(&rule.pattern)
                .case_insensitive(true)
                .build()
                .map_err(|source| NlpError::InvalidPattern {
                    context: format!("entity {}", rule.name),
                    pattern: rule.pattern.clone(),
                    source,
                })?;
            entities.push(CompiledEntity {
                name: rule.name.clone(),
                regex,
            });
        }
        tracing::debug!(entities = entities.len(), "Compiled entity patterns");
        Ok(Self { entities })
    }

    /// Extract all entities from `text`
    ///
    /// If a pattern has capture groups the first group is the extracted
    /// value; otherwise the whole match is used.
    pub fn extract(&self, text: &str) -> EntityBag {
        let mut bag = EntityBag::new();

        for entity in &self.entities {
            let values: Vec<String> = entity
                .regex
                .captures_iter(text)
                .filter_map(|caps| {
                    caps.get(1)
                        .or_else(|| caps.get(0))
                        .map(|m| m.as_str().to_string())
                })
                .collect();
            bag.insert(entity.name.as_str(), values);
        }

        bag
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sahayak_config::RuleSet;

    fn extractor() -> EntityExtractor {
        EntityExtractor::from_rules(&RuleSet::default().entities).unwrap()
    }

    #[test]
    fn test_time_extraction_preserves_order() {
        let e = extractor();
        let bag = e.extract("Set a reminder for 3:30 PM and call at 5:00 PM");
        assert_eq!(
            bag.get("time"),
            Some(&["3:30 PM".to_string(), "5:00 PM".to_string()][..])
        );
    }

    #[test]
    fn test_date_extraction() {
        let e = extractor();
        let bag = e.extract("The meeting is on 12/05/2026.");
        assert_eq!(bag.get("date"), Some(&["12/05/2026".to_string()][..]));
    }

    #[test]
    fn test_email_extraction() {
        let e = extractor();
        let bag = e.extract("Write to Dev.Patel+work@example.co.in please");
        assert_eq!(
            bag.get("email"),
            Some(&["Dev.Patel+work@example.co.in".to_string()][..])
        );
    }

    #[test]
    fn test_number_uses_whole_match() {
        let e = extractor();
        let bag = e.extract("I need 2 copies of page 47");
        assert_eq!(
            bag.get("number"),
            Some(&["2".to_string(), "47".to_string()][..])
        );
    }

    #[test]
    fn test_duplicates_are_preserved() {
        let e = extractor();
        let bag = e.extract("call at 5:00 PM, yes 5:00 PM sharp");
        assert_eq!(bag.get("time").map(<[String]>::len), Some(2));
    }

    #[test]
    fn test_absent_types_are_not_present() {
        let e = extractor();
        let bag = e.extract("nothing to see here");
        assert!(bag.is_empty());
        assert!(bag.get("time").is_none());
    }

    #[test]
    fn test_case_insensitive_matching() {
        let e = extractor();
        let bag = e.extract("wake me at 6:15 am");
        assert_eq!(bag.get("time"), Some(&["6:15 am".to_string()][..]));
    }
}
