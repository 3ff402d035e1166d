//! Unified NLP pipeline
//!
//! Runs all four analyzers against the identical input text and assembles
//! their outputs without cross-influence: language detection never changes
//! which pattern set or lexicon the other analyzers consult. English and
//! Hindi rules are checked unconditionally everywhere.

use crate::{
    EntityExtractor, IntentClassifier, LanguageDetector, Result, SentimentAnalyzer,
};
use sahayak_config::RuleSet;
use sahayak_core::NlpResult;

/// The full analysis pipeline
pub struct NlpPipeline {
    detector: LanguageDetector,
    classifier: IntentClassifier,
    extractor: EntityExtractor,
    sentiment: SentimentAnalyzer,
}

impl NlpPipeline {
    /// Compile a pipeline from a rule set
    ///
    /// Fails only on broken configuration (an uncompilable pattern), never
    /// on input.
    pub fn new(rules: &RuleSet) -> Result<Self> {
        Ok(Self {
            detector: LanguageDetector::new(),
            classifier: IntentClassifier::from_rules(&rules.intents)?,
            extractor: EntityExtractor::from_rules(&rules.entities)?,
            sentiment: SentimentAnalyzer::from_lexicons(&rules.sentiment),
        })
    }

    /// Process one utterance into a structured result
    pub fn process(&self, text: &str) -> NlpResult {
        let language = self.detector.detect(text);
        let intent = self.classifier.classify(text);
        let entities = self.extractor.extract(text);
        let sentiment = self.sentiment.analyze(text);

        tracing::debug!(
            %language,
            %intent,
            %sentiment,
            entity_types = entities.len(),
            "Processed utterance"
        );

        NlpResult {
            text: text.to_string(),
            language,
            intent,
            entities,
            sentiment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sahayak_core::{Intent, Language, Sentiment};

    fn pipeline() -> NlpPipeline {
        NlpPipeline::new(&RuleSet::default()).unwrap()
    }

    #[test]
    fn test_full_result() {
        let p = pipeline();
        let result = p.process("Hello, remind me at 3:30 PM");
        assert_eq!(result.text, "Hello, remind me at 3:30 PM");
        assert_eq!(result.language, Language::English);
        assert_eq!(result.intent, Intent::Greeting);
        assert_eq!(result.entities.get("time"), Some(&["3:30 PM".to_string()][..]));
        assert_eq!(result.sentiment, Sentiment::Neutral);
    }

    #[test]
    fn test_hindi_input() {
        let p = pipeline();
        let result = p.process("नमस्ते सहायक");
        assert_eq!(result.language, Language::Hindi);
        // Devanagari input matches no romanized pattern; the intent falls
        // back to statement while the language tag is still Hindi.
        assert_eq!(result.sentiment, Sentiment::Neutral);
    }

    #[test]
    fn test_transliterated_hindi_rules_fire_on_english_tagged_text() {
        let p = pipeline();
        let result = p.process("namaste, yeh bahut accha hai");
        assert_eq!(result.language, Language::English);
        assert_eq!(result.intent, Intent::Greeting);
        assert_eq!(result.sentiment, Sentiment::Positive);
    }

    #[test]
    fn test_totality_on_arbitrary_input() {
        let p = pipeline();
        for text in ["", "zzzz", "42", "!!!", "नमस्ते"] {
            let result = p.process(text);
            // One intent and one sentiment always come out.
            let _ = (result.intent, result.sentiment);
        }
    }
}
