//! Configuration for the Sahayak assistant
//!
//! Supports loading configuration from:
//! - YAML/TOML files
//! - Environment variables (SAHAYAK_ prefix)
//!
//! # Rule tables
//!
//! Intent patterns, entity patterns, sentiment lexicons, and response
//! templates are all data, editable without code changes. Each table has a
//! compiled-in default mirroring the shipped assistant and can be replaced
//! by a YAML file referenced from `Settings::rules`. Tables are validated
//! at startup; a broken table is a fatal configuration defect, never a
//! mid-conversation surprise.

pub mod rules;
pub mod settings;
pub mod templates;

pub use rules::{EntityRule, IntentRule, RuleSet, SentimentLexicon, SentimentLexicons};
pub use settings::{
    load_settings, AssistantConfig, ObservabilityConfig, ProfileConfig, RulesConfig, Settings,
};
pub use templates::{HumorSuffixes, ResponseTable, ResponseTemplates};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
