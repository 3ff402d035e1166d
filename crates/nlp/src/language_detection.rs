//! Language detection
//!
//! Classifies an utterance as English or Hindi from the share of distinct
//! Devanagari characters. The single threshold is intentionally coarse: it
//! trades accuracy on heavily mixed-script input for a rule that is trivial
//! to reason about and needs no training data.

use std::collections::HashSet;

use sahayak_core::{Language, Script};

/// Share of distinct Devanagari characters above which text is Hindi
pub const DEFAULT_DEVANAGARI_THRESHOLD: f64 = 0.3;

/// Character-ratio language detector
#[derive(Debug, Clone)]
pub struct LanguageDetector {
    threshold: f64,
}

impl LanguageDetector {
    pub fn new() -> Self {
        Self {
            threshold: DEFAULT_DEVANAGARI_THRESHOLD,
        }
    }

    /// Create a detector with a custom threshold
    pub fn with_threshold(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Detect the language of `text`
    ///
    /// Pure and idempotent: the same input always yields the same tag.
    /// Empty text (no distinct characters) is English.
    pub fn detect(&self, text: &str) -> Language {
        let distinct: HashSet<char> = text.chars().collect();
        if distinct.is_empty() {
            return Language::English;
        }

        let devanagari = distinct
            .iter()
            .filter(|c| Script::Devanagari.contains_char(**c))
            .count();

        let ratio = devanagari as f64 / distinct.len() as f64;
        if ratio > self.threshold {
            Language::Hindi
        } else {
            Language::English
        }
    }
}

impl Default for LanguageDetector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_text() {
        let detector = LanguageDetector::new();
        assert_eq!(detector.detect("Hello, how are you?"), Language::English);
    }

    #[test]
    fn test_hindi_text() {
        let detector = LanguageDetector::new();
        assert_eq!(detector.detect("नमस्ते सहायक"), Language::Hindi);
        assert_eq!(detector.detect("आप कैसे हैं?"), Language::Hindi);
    }

    #[test]
    fn test_empty_text_is_english() {
        let detector = LanguageDetector::new();
        assert_eq!(detector.detect(""), Language::English);
    }

    #[test]
    fn test_mostly_latin_mixed_input_is_english() {
        let detector = LanguageDetector::new();
        // A single Devanagari character among many distinct Latin ones
        // stays under the 30% threshold.
        assert_eq!(
            detector.detect("please translate न for me quickly"),
            Language::English
        );
    }

    #[test]
    fn test_detection_is_idempotent() {
        let detector = LanguageDetector::new();
        let text = "नमस्ते friend";
        let first = detector.detect(text);
        assert_eq!(detector.detect(text), first);
    }
}
