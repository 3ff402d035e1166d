//! Rule-based NLP pipeline for the Sahayak assistant
//!
//! This crate provides the four analyzers and their orchestration:
//! - **Language detection**: Devanagari character-ratio heuristic
//! - **Intent classification**: ordered regex categories, first match wins
//! - **Entity extraction**: typed substring patterns (time, date, number, email)
//! - **Sentiment analysis**: bilingual lexicon counting
//!
//! All rule tables come from `sahayak-config`; patterns are compiled once
//! at construction and a broken pattern is a startup error, not a runtime
//! one. For any text input the pipeline always produces exactly one intent
//! and one sentiment — unclassifiable utterances degrade to the
//! statement/neutral defaults rather than surfacing an error.
//!
//! # Example
//!
//! ```
//! use sahayak_config::RuleSet;
//! use sahayak_nlp::NlpPipeline;
//! use sahayak_core::Intent;
//!
//! let pipeline = NlpPipeline::new(&RuleSet::default()).unwrap();
//! let result = pipeline.process("Hello there!");
//! assert_eq!(result.intent, Intent::Greeting);
//! ```

pub mod entities;
pub mod intent;
pub mod language_detection;
pub mod pipeline;
pub mod sentiment;

pub use entities::EntityExtractor;
pub use intent::IntentClassifier;
pub use language_detection::LanguageDetector;
pub use pipeline::NlpPipeline;
pub use sentiment::SentimentAnalyzer;

use thiserror::Error;

/// Result alias for pipeline construction
pub type Result<T> = std::result::Result<T, NlpError>;

#[derive(Error, Debug)]
pub enum NlpError {
    /// A configured pattern failed to compile
    #[error("invalid pattern for {context}: '{pattern}': {source}")]
    InvalidPattern {
        context: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
