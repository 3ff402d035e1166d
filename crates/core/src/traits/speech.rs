//! Speech collaborator traits
//!
//! The core never touches audio hardware. Output goes through `Speaker`,
//! input arrives through `Listener`, and both must be fully testable with
//! in-memory implementations. Every concrete engine implements the same
//! capability uniformly; there is no probing for which methods a backend
//! happens to have.

use crate::{Language, Result};

/// Voice rendering parameters
#[derive(Debug, Clone, PartialEq)]
pub struct VoiceSettings {
    /// Speaking rate in words per minute
    pub rate: Option<u32>,
    /// Volume level (0.0 - 1.0)
    pub volume: Option<f32>,
    /// Backend-specific voice identifier
    pub voice: Option<String>,
}

impl VoiceSettings {
    pub fn new() -> Self {
        Self {
            rate: None,
            volume: None,
            voice: None,
        }
    }

    pub fn with_rate(mut self, rate: u32) -> Self {
        self.rate = Some(rate);
        self
    }

    pub fn with_volume(mut self, volume: f32) -> Self {
        self.volume = Some(volume.clamp(0.0, 1.0));
        self
    }

    pub fn with_voice(mut self, voice: impl Into<String>) -> Self {
        self.voice = Some(voice.into());
        self
    }
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self::new()
    }
}

/// Speech output interface
pub trait Speaker: Send {
    /// Render the text as speech
    fn speak(&mut self, text: &str) -> Result<()>;

    /// Apply voice parameters to subsequent `speak` calls
    fn configure(&mut self, settings: &VoiceSettings);

    /// Backend name for logging
    fn name(&self) -> &str;

    /// Languages this backend can render
    fn supported_languages(&self) -> &[Language];

    fn supports_language(&self, lang: Language) -> bool {
        self.supported_languages().contains(&lang)
    }
}

/// Speech input interface
///
/// `Ok(None)` means no turn to process (silence, timeout, end of input);
/// it is not an error.
pub trait Listener: Send {
    /// Wait for and return the next utterance, if any
    fn listen(&mut self) -> Result<Option<String>>;

    /// Backend name for logging
    fn name(&self) -> &str;
}
