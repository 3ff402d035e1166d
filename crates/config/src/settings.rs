//! Main settings module

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::ConfigError;
use sahayak_core::PersonalityTraits;

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Assistant identity
    #[serde(default)]
    pub assistant: AssistantConfig,

    /// Profile storage
    #[serde(default)]
    pub profiles: ProfileConfig,

    /// Personality trait defaults applied at engine construction
    #[serde(default)]
    pub personality: PersonalityTraits,

    /// Rule table file locations (compiled-in defaults when absent)
    #[serde(default)]
    pub rules: RulesConfig,

    /// Observability configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.assistant.name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "assistant.name".to_string(),
                message: "Assistant name cannot be empty".to_string(),
            });
        }

        if self.assistant.user_id.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "assistant.user_id".to_string(),
                message: "User id cannot be empty".to_string(),
            });
        }

        if self.profiles.dir.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "profiles.dir".to_string(),
                message: "Profile directory cannot be empty".to_string(),
            });
        }

        Ok(())
    }
}

/// Assistant identity configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantConfig {
    /// Display name used in the welcome message
    #[serde(default = "default_assistant_name")]
    pub name: String,

    /// User id whose profile the engine owns
    #[serde(default = "default_user_id")]
    pub user_id: String,

    /// Wake word stripped from incoming commands, if configured
    #[serde(default = "default_wake_word")]
    pub wake_word: Option<String>,
}

fn default_assistant_name() -> String {
    "Sahayak".to_string()
}

fn default_user_id() -> String {
    "default".to_string()
}

fn default_wake_word() -> Option<String> {
    Some("sahayak".to_string())
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            name: default_assistant_name(),
            user_id: default_user_id(),
            wake_word: default_wake_word(),
        }
    }
}

/// Profile storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// Directory holding one JSON file per user id
    #[serde(default = "default_profile_dir")]
    pub dir: String,
}

fn default_profile_dir() -> String {
    "user_profiles".to_string()
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            dir: default_profile_dir(),
        }
    }
}

/// Rule table file locations
///
/// Both paths are optional; absent paths fall back to the compiled-in
/// default tables.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RulesConfig {
    /// YAML file with intent/entity/sentiment rule tables
    #[serde(default)]
    pub nlp_path: Option<String>,

    /// YAML file with response template tables
    #[serde(default)]
    pub templates_path: Option<String>,
}

/// Observability configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Enable JSON logging
    #[serde(default)]
    pub log_json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

/// Load settings from files and environment
///
/// Priority (highest to lowest):
/// 1. Environment variables (SAHAYAK_ prefix)
/// 2. config/{env}.yaml (if env specified)
/// 3. config/default.yaml
pub fn load_settings(env: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder();

    builder = builder.add_source(File::with_name("config/default").required(false));

    if let Some(env_name) = env {
        builder =
            builder.add_source(File::with_name(&format!("config/{}", env_name)).required(false));
    }

    builder = builder.add_source(
        Environment::with_prefix("SAHAYAK")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;
    let settings: Settings = config.try_deserialize()?;

    settings.validate()?;

    Ok(settings)
}
