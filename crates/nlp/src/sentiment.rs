//! Sentiment analysis
//!
//! A bag-of-words heuristic over the configured positive/negative lexicons
//! for English and transliterated Hindi. Each lexicon entry found as a
//! substring of the lower-cased text contributes one hit; hits are summed
//! across both language families and the majority side wins. Ties
//! (including no hits at all) are neutral.
//!
//! Matching is deliberately not token-boundary-aware: entries can fire
//! inside longer words. Precision is only claimed for short, explicit
//! affect words.

use sahayak_config::SentimentLexicons;
use sahayak_core::Sentiment;

/// Lexicon-based sentiment analyzer
pub struct SentimentAnalyzer {
    positive: Vec<String>,
    negative: Vec<String>,
}

impl SentimentAnalyzer {
    /// Build an analyzer from the configured lexicons
    ///
    /// Both language families are merged up front; language detection has
    /// no influence on which entries are checked.
    pub fn from_lexicons(lexicons: &SentimentLexicons) -> Self {
        let mut positive = lexicons.english.positive.clone();
        positive.extend(lexicons.hindi.positive.iter().cloned());
        let mut negative = lexicons.english.negative.clone();
        negative.extend(lexicons.hindi.negative.iter().cloned());

        Self { positive, negative }
    }

    /// Analyze the sentiment of `text`
    pub fn analyze(&self, text: &str) -> Sentiment {
        let text_lower = text.to_lowercase();

        let positive_count = self
            .positive
            .iter()
            .filter(|w| text_lower.contains(w.as_str()))
            .count();
        let negative_count = self
            .negative
            .iter()
            .filter(|w| text_lower.contains(w.as_str()))
            .count();

        if positive_count > negative_count {
            Sentiment::Positive
        } else if negative_count > positive_count {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sahayak_config::RuleSet;

    fn analyzer() -> SentimentAnalyzer {
        SentimentAnalyzer::from_lexicons(&RuleSet::default().sentiment)
    }

    #[test]
    fn test_positive() {
        let a = analyzer();
        assert_eq!(a.analyze("This is amazing and wonderful!"), Sentiment::Positive);
    }

    #[test]
    fn test_negative() {
        let a = analyzer();
        assert_eq!(a.analyze("This is terrible and awful!"), Sentiment::Negative);
    }

    #[test]
    fn test_plain_statement_is_neutral() {
        let a = analyzer();
        assert_eq!(a.analyze("The sky is blue."), Sentiment::Neutral);
    }

    #[test]
    fn test_tie_resolves_to_neutral() {
        let a = analyzer();
        assert_eq!(a.analyze("good bad"), Sentiment::Neutral);
    }

    #[test]
    fn test_empty_text_is_neutral() {
        let a = analyzer();
        assert_eq!(a.analyze(""), Sentiment::Neutral);
    }

    #[test]
    fn test_hindi_lexicon_counts() {
        let a = analyzer();
        assert_eq!(a.analyze("yeh bahut accha hai"), Sentiment::Positive);
        assert_eq!(a.analyze("kitna ghatiya kaam"), Sentiment::Negative);
    }

    #[test]
    fn test_families_sum_together() {
        let a = analyzer();
        // One English negative plus two Hindi positives.
        assert_eq!(a.analyze("bad but shandar and badiya"), Sentiment::Positive);
    }

    #[test]
    fn test_case_insensitive() {
        let a = analyzer();
        assert_eq!(a.analyze("ABSOLUTELY WONDERFUL"), Sentiment::Positive);
    }
}
