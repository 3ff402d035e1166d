//! NLP rule tables
//!
//! Intent categories, entity patterns, and sentiment lexicons are plain
//! data. English and transliterated-Hindi variants live side by side in the
//! same tables, so adding a language means adding rows, not touching
//! classifier logic.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::ConfigError;
use sahayak_core::Intent;

/// One intent category with its match patterns
///
/// Categories are tested in list order; the first category with any
/// matching pattern wins. `Intent::Statement` needs no entry, it is the
/// fallback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentRule {
    pub intent: Intent,
    pub patterns: Vec<String>,
}

/// One entity type with its extraction pattern
///
/// If the pattern has capture groups, group 1 is the extracted value;
/// otherwise the whole match is used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityRule {
    pub name: String,
    pub pattern: String,
}

/// Positive/negative word lists for one language family
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SentimentLexicon {
    pub positive: Vec<String>,
    pub negative: Vec<String>,
}

/// Sentiment lexicons for both supported language families
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SentimentLexicons {
    pub english: SentimentLexicon,
    /// Transliterated (romanized) Hindi
    pub hindi: SentimentLexicon,
}

/// Complete NLP rule set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleSet {
    /// Intent categories in priority order
    pub intents: Vec<IntentRule>,
    /// Entity extraction patterns
    pub entities: Vec<EntityRule>,
    /// Sentiment lexicons
    pub sentiment: SentimentLexicons,
}

impl RuleSet {
    /// Load a rule set from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|_| ConfigError::FileNotFound(path.display().to_string()))?;
        let rules: RuleSet = serde_yaml::from_str(&raw)?;
        rules.validate()?;
        Ok(rules)
    }

    /// Load from the configured path, or fall back to the built-in tables
    pub fn load_or_default(path: Option<&str>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => {
                tracing::info!(path = %p, "Loading NLP rule tables");
                Self::from_yaml_file(p)
            },
            None => Ok(Self::default()),
        }
    }

    /// Validate table shape
    ///
    /// Broken tables are fatal at startup, not deferred to runtime.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for rule in &self.intents {
            if rule.intent == Intent::Statement {
                return Err(ConfigError::InvalidValue {
                    field: "intents".to_string(),
                    message: "statement is the fallback intent and takes no patterns".to_string(),
                });
            }
            if rule.patterns.is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: format!("intents.{}", rule.intent),
                    message: "intent category has no patterns".to_string(),
                });
            }
        }

        for rule in &self.entities {
            if rule.name.trim().is_empty() {
                return Err(ConfigError::MissingField("entities[].name".to_string()));
            }
            if rule.pattern.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: format!("entities.{}", rule.name),
                    message: "entity pattern cannot be empty".to_string(),
                });
            }
        }

        Ok(())
    }
}

impl Default for RuleSet {
    /// Built-in tables covering English and transliterated Hindi
    fn default() -> Self {
        let intents = vec![
            IntentRule {
                intent: Intent::Greeting,
                patterns: vec![
                    r"\b(hello|hi|hey|greetings|namaste|namaskar|pranam)\b".to_string(),
                    r"\b(good morning|good afternoon|good evening|shubh prabhat|shubh sandhya|shubh raatri)\b".to_string(),
                    r"\b(aadab|sat shri akaal|vanakkam)\b".to_string(),
                ],
            },
            IntentRule {
                intent: Intent::Question,
                patterns: vec![
                    r"\b(what|how|when|where|why|who|which)\b.*\?".to_string(),
                    r"\b(could|would|can|will|shall)\b".to_string(),
                    r"\b(kya|kaise|kab|kahan|kyun|kaun|kis)\b.*\?".to_string(),
                    r"\b(kya aap|kya mein|kya hum)\b".to_string(),
                ],
            },
            IntentRule {
                intent: Intent::Command,
                patterns: vec![
                    r"\b(open|close|start|stop|run|execute)\b".to_string(),
                    r"\b(set|change|update|modify)\b".to_string(),
                    r"\b(kholo|band karo|shuru karo|ruk jao|chala do)\b".to_string(),
                    r"\b(set karo|badlo|update karo|modify karo)\b".to_string(),
                ],
            },
            IntentRule {
                intent: Intent::Information,
                patterns: vec![
                    r"\b(tell me about|explain|describe)\b".to_string(),
                    r"\b(what is|who is|where is)\b".to_string(),
                    r"\b(batao|samjhao|vistar se batao)\b".to_string(),
                    r"\b(kya hai|kaun hai|kahan hai)\b".to_string(),
                ],
            },
        ];

        let entities = vec![
            EntityRule {
                name: "time".to_string(),
                pattern: r"\b(\d{1,2}:\d{2}\s*(AM|PM)?)\b".to_string(),
            },
            EntityRule {
                name: "date".to_string(),
                pattern: r"\b(\d{1,2}/\d{1,2}/\d{4})\b".to_string(),
            },
            EntityRule {
                name: "number".to_string(),
                pattern: r"\b\d+\b".to_string(),
            },
            EntityRule {
                name: "email".to_string(),
                pattern: r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b".to_string(),
            },
        ];

        let sentiment = SentimentLexicons {
            english: SentimentLexicon {
                positive: [
                    "good",
                    "great",
                    "excellent",
                    "amazing",
                    "wonderful",
                    "fantastic",
                    "awesome",
                    "brilliant",
                    "perfect",
                    "love",
                ]
                .map(String::from)
                .to_vec(),
                negative: [
                    "bad",
                    "terrible",
                    "awful",
                    "horrible",
                    "hate",
                    "disgusting",
                    "worst",
                    "annoying",
                    "frustrating",
                ]
                .map(String::from)
                .to_vec(),
            },
            hindi: SentimentLexicon {
                positive: [
                    "accha",
                    "acha",
                    "bahut accha",
                    "bahut acha",
                    "shandar",
                    "badiya",
                    "mazaboot",
                    "kamaal",
                    "badi mazaboot",
                    "kamaal ka",
                    "pyaar",
                    "pasand",
                ]
                .map(String::from)
                .to_vec(),
                negative: [
                    "bura",
                    "buraa",
                    "bekar",
                    "bekaar",
                    "ghatiya",
                    "ghatiyaa",
                    "nafrat",
                    "ganda",
                    "gandaa",
                    "pareshan",
                    "pareshaan",
                ]
                .map(String::from)
                .to_vec(),
            },
        };

        Self {
            intents,
            entities,
            sentiment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_rules_validate() {
        assert!(RuleSet::default().validate().is_ok());
    }

    #[test]
    fn test_intent_priority_order() {
        let rules = RuleSet::default();
        let order: Vec<Intent> = rules.intents.iter().map(|r| r.intent).collect();
        assert_eq!(
            order,
            vec![
                Intent::Greeting,
                Intent::Question,
                Intent::Command,
                Intent::Information
            ]
        );
    }

    #[test]
    fn test_statement_rule_is_rejected() {
        let mut rules = RuleSet::default();
        rules.intents.push(IntentRule {
            intent: Intent::Statement,
            patterns: vec![r".*".to_string()],
        });
        assert!(rules.validate().is_err());
    }

    #[test]
    fn test_empty_pattern_list_is_rejected() {
        let mut rules = RuleSet::default();
        rules.intents[0].patterns.clear();
        assert!(rules.validate().is_err());
    }

    #[test]
    fn test_yaml_round_trip() {
        let rules = RuleSet::default();
        let yaml = serde_yaml::to_string(&rules).unwrap();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();

        let loaded = RuleSet::from_yaml_file(file.path()).unwrap();
        assert_eq!(loaded.intents.len(), rules.intents.len());
        assert_eq!(loaded.entities.len(), rules.entities.len());
        assert_eq!(
            loaded.sentiment.english.positive,
            rules.sentiment.english.positive
        );
    }

    #[test]
    fn test_missing_file_is_reported() {
        let err = RuleSet::from_yaml_file("does/not/exist.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }
}
