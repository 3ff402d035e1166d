//! Response template tables
//!
//! Two full tables, one per language. There is no cross-language fallback:
//! Hindi input is always answered from the Hindi table and vice versa.
//! Every Intent×Language combination is a struct field, so totality is
//! enforced by the type itself; `validate()` additionally rejects empty
//! strings when a table is loaded from file.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::ConfigError;
use sahayak_core::{Humor, Intent, Language, Sentiment};

/// Humor suffixes appended to returning-user greetings
///
/// Only `subtle` and `moderate` have entries; the other levels carry no
/// modifier in the shipped rule set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HumorSuffixes {
    pub subtle: String,
    pub moderate: String,
}

/// Response templates for one language
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseTable {
    /// Greeting for a session with no prior exchanges
    pub greeting_first_time: String,
    /// Greeting once the session already has history
    pub greeting_returning: String,
    pub question: String,
    pub command: String,
    pub information: String,
    /// Statement replies, sub-keyed by sentiment
    pub statement_positive: String,
    pub statement_negative: String,
    pub statement_neutral: String,
    pub humor: HumorSuffixes,
}

impl ResponseTable {
    /// Look up the base response for an intent
    ///
    /// `first_contact` selects between the two greeting variants and is
    /// ignored for every other intent. `Statement` is sub-keyed by
    /// sentiment. The lookup is total by construction.
    pub fn response(&self, intent: Intent, sentiment: Sentiment, first_contact: bool) -> &str {
        match intent {
            Intent::Greeting if first_contact => &self.greeting_first_time,
            Intent::Greeting => &self.greeting_returning,
            Intent::Question => &self.question,
            Intent::Command => &self.command,
            Intent::Information => &self.information,
            Intent::Statement => match sentiment {
                Sentiment::Positive => &self.statement_positive,
                Sentiment::Negative => &self.statement_negative,
                Sentiment::Neutral => &self.statement_neutral,
            },
        }
    }

    /// Suffix for the given humor level, if the rule set defines one
    pub fn humor_suffix(&self, humor: Humor) -> Option<&str> {
        match humor {
            Humor::Subtle => Some(self.humor.subtle.as_str()),
            Humor::Moderate => Some(self.humor.moderate.as_str()),
            Humor::None | Humor::Heavy => None,
        }
    }

    fn validate(&self, language: &str) -> Result<(), ConfigError> {
        let fields = [
            ("greeting_first_time", &self.greeting_first_time),
            ("greeting_returning", &self.greeting_returning),
            ("question", &self.question),
            ("command", &self.command),
            ("information", &self.information),
            ("statement_positive", &self.statement_positive),
            ("statement_negative", &self.statement_negative),
            ("statement_neutral", &self.statement_neutral),
            ("humor.subtle", &self.humor.subtle),
            ("humor.moderate", &self.humor.moderate),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: format!("{language}.{name}"),
                    message: "template cannot be empty".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Response template tables for both languages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseTemplates {
    pub english: ResponseTable,
    pub hindi: ResponseTable,
}

impl ResponseTemplates {
    /// Get the table for a language
    pub fn table(&self, language: Language) -> &ResponseTable {
        match language {
            Language::English => &self.english,
            Language::Hindi => &self.hindi,
        }
    }

    /// Load template tables from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|_| ConfigError::FileNotFound(path.display().to_string()))?;
        let templates: ResponseTemplates = serde_yaml::from_str(&raw)?;
        templates.validate()?;
        Ok(templates)
    }

    /// Load from the configured path, or fall back to the built-in tables
    pub fn load_or_default(path: Option<&str>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => {
                tracing::info!(path = %p, "Loading response templates");
                Self::from_yaml_file(p)
            },
            None => Ok(Self::default()),
        }
    }

    /// Validate both tables
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.english.validate("english")?;
        self.hindi.validate("hindi")?;
        Ok(())
    }
}

impl Default for ResponseTemplates {
    fn default() -> Self {
        Self {
            english: ResponseTable {
                greeting_first_time:
                    "Good day. I am Sahayak, your virtual assistant. How may I be of service to you today?"
                        .to_string(),
                greeting_returning: "Welcome back. How can I assist you?".to_string(),
                question:
                    "That is an excellent inquiry. Allow me to provide you with the information you seek."
                        .to_string(),
                command: "Acknowledged. I shall execute that directive immediately.".to_string(),
                information: "I would be delighted to share information on that subject."
                    .to_string(),
                statement_positive: "I appreciate your positive outlook.".to_string(),
                statement_negative:
                    "I sense some frustration. How might I assist in resolving this matter?"
                        .to_string(),
                statement_neutral: "I understand. How else may I be of assistance?".to_string(),
                humor: HumorSuffixes {
                    subtle: "It appears we meet again.".to_string(),
                    moderate: "Right on schedule, I see.".to_string(),
                },
            },
            hindi: ResponseTable {
                greeting_first_time:
                    "नमस्ते। मैं आपका वर्चुअल सहायक हूँ। मैं आपकी किस प्रकार सहायता कर सकता हूँ?".to_string(),
                greeting_returning: "वापसी पर स्वागत है। मैं आपकी किस प्रकार सहायता कर सकता हूँ?".to_string(),
                question: "यह एक उत्कृष्ट प्रश्न है। मैं आपको आवश्यक जानकारी प्रदान करूंगा।".to_string(),
                command: "स्वीकृत। मैं तुरंत वह निर्देश निष्पादित करूंगा।".to_string(),
                information: "मुझे खुशी होगी कि वह विषय आपको समझाऊं।".to_string(),
                statement_positive: "मुझे आपके सकारात्मक दृष्टिकोण की सराहना है।".to_string(),
                statement_negative:
                    "मुझे कुछ निराशा का एहसास हो रहा है। मैं इस मामले को हल करने में आपकी किस प्रकार सहायता कर सकता हूँ?"
                        .to_string(),
                statement_neutral: "मैं समझ गया। मैं आपकी किस प्रकार और सहायता कर सकता हूँ?".to_string(),
                humor: HumorSuffixes {
                    subtle: "ऐसा लगता है कि हम फिर से मिले हैं।".to_string(),
                    moderate: "समय पर, मैं देखता हूँ।".to_string(),
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_templates_validate() {
        assert!(ResponseTemplates::default().validate().is_ok());
    }

    #[test]
    fn test_lookup_is_total() {
        let templates = ResponseTemplates::default();
        for language in [Language::English, Language::Hindi] {
            let table = templates.table(language);
            for intent in [
                Intent::Greeting,
                Intent::Question,
                Intent::Command,
                Intent::Information,
                Intent::Statement,
            ] {
                for sentiment in [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral] {
                    for first in [true, false] {
                        assert!(!table.response(intent, sentiment, first).is_empty());
                    }
                }
            }
        }
    }

    #[test]
    fn test_greeting_variants_differ() {
        let table = &ResponseTemplates::default().english;
        assert_ne!(table.greeting_first_time, table.greeting_returning);
        assert_eq!(
            table.response(Intent::Greeting, Sentiment::Neutral, true),
            table.greeting_first_time
        );
        assert_eq!(
            table.response(Intent::Greeting, Sentiment::Neutral, false),
            table.greeting_returning
        );
    }

    #[test]
    fn test_humor_suffix_levels() {
        let table = &ResponseTemplates::default().english;
        assert_eq!(table.humor_suffix(Humor::Subtle), Some("It appears we meet again."));
        assert_eq!(table.humor_suffix(Humor::Moderate), Some("Right on schedule, I see."));
        assert_eq!(table.humor_suffix(Humor::None), None);
        assert_eq!(table.humor_suffix(Humor::Heavy), None);
    }

    #[test]
    fn test_empty_template_is_rejected() {
        let mut templates = ResponseTemplates::default();
        templates.hindi.question = String::new();
        assert!(templates.validate().is_err());
    }
}
