//! Assistant coordinator
//!
//! Wires the NLP pipeline and the personality engine into the per-turn
//! flow: learn from the utterance, generate the reply, append the exchange
//! to history. The engine does not auto-chain these steps; this crate is
//! the caller that drives them in order.

pub mod speech;

pub use speech::{first_available, ConsoleSpeaker, NullSpeaker, SpeakerFactory, StdinListener};

use unicode_segmentation::UnicodeSegmentation;

use sahayak_config::{ResponseTemplates, RuleSet, Settings};
use sahayak_nlp::NlpPipeline;
use sahayak_persistence::ProfileStore;
use sahayak_persona::PersonalityEngine;

/// Single-user conversational assistant
pub struct Assistant {
    name: String,
    wake_word: Option<String>,
    pipeline: NlpPipeline,
    engine: PersonalityEngine,
}

impl Assistant {
    /// Build an assistant from explicit parts
    pub fn new(
        name: impl Into<String>,
        wake_word: Option<String>,
        pipeline: NlpPipeline,
        engine: PersonalityEngine,
    ) -> Self {
        Self {
            name: name.into(),
            wake_word,
            pipeline,
            engine,
        }
    }

    /// Build an assistant from settings
    ///
    /// Rule tables and templates are loaded and validated here; a broken
    /// table aborts startup instead of failing mid-conversation.
    pub fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        settings.validate()?;

        let rules = RuleSet::load_or_default(settings.rules.nlp_path.as_deref())?;
        rules.validate()?;
        let templates = ResponseTemplates::load_or_default(settings.rules.templates_path.as_deref())?;
        templates.validate()?;

        let pipeline = NlpPipeline::new(&rules)?;
        let store = ProfileStore::new(&settings.profiles.dir);
        let engine = PersonalityEngine::new(
            settings.assistant.user_id.as_str(),
            settings.personality,
            templates,
            store,
        );

        Ok(Self::new(
            settings.assistant.name.as_str(),
            settings.assistant.wake_word.clone(),
            pipeline,
            engine,
        ))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn engine(&self) -> &PersonalityEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut PersonalityEngine {
        &mut self.engine
    }

    /// Greeting line printed (and spoken) at startup
    pub fn welcome_message(&self) -> String {
        format!(
            "{} is online. Type your message, or 'exit' to quit.",
            self.name
        )
    }

    /// Process one utterance end to end and return the reply
    pub fn process_input(&mut self, input: &str) -> String {
        let text = match &self.wake_word {
            Some(wake) => strip_wake_word(input, wake),
            None => input.trim().to_string(),
        };

        let nlp = self.pipeline.process(&text);
        tracing::debug!(
            reply_language = nlp.language.code(),
            "Routing hint for the speech collaborator"
        );

        self.engine.learn_from_interaction(&nlp);
        let response = self.engine.respond(&nlp);
        self.engine.add_to_history(&text, &response);

        response
    }

    /// Process an optional turn
    ///
    /// `None` or blank input means there is no turn to process; it is not
    /// an error and produces no reply.
    pub fn handle_turn(&mut self, input: Option<&str>) -> Option<String> {
        let text = input?.trim();
        if text.is_empty() {
            return None;
        }
        Some(self.process_input(text))
    }
}

/// Remove the wake word from an utterance
///
/// Word-boundary aware (works for Devanagari as well as Latin tokens) and
/// case-insensitive; leftover separators at the edges are trimmed.
pub fn strip_wake_word(text: &str, wake_word: &str) -> String {
    let wake_lower = wake_word.to_lowercase();
    let stripped: String = text
        .split_word_bounds()
        .filter(|token| token.to_lowercase() != wake_lower)
        .collect();

    stripped
        .trim()
        .trim_start_matches([',', '.', '!', '?', '-'])
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_wake_word_leading() {
        assert_eq!(strip_wake_word("Sahayak, open the door", "sahayak"), "open the door");
    }

    #[test]
    fn test_strip_wake_word_embedded() {
        assert_eq!(strip_wake_word("hey sahayak what time is it?", "sahayak"), "hey  what time is it?");
    }

    #[test]
    fn test_strip_wake_word_absent() {
        assert_eq!(strip_wake_word("open the door", "sahayak"), "open the door");
    }

    #[test]
    fn test_strip_wake_word_devanagari() {
        assert_eq!(strip_wake_word("सहायक नमस्ते", "सहायक"), "नमस्ते");
    }
}
