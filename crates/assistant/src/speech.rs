//! Speech input/output backends
//!
//! Backend selection is a plain control-flow table: an ordered list of
//! constructors tried in sequence at initialization, first success wins.
//! Real audio engines live outside this repository; the backends here
//! read from stdin and render to the console or to nothing, which keeps
//! the core fully testable without audio hardware.

use std::io::{self, BufRead};

use sahayak_core::{Language, Listener, Result, Speaker, VoiceSettings};

/// Constructor entry for the selection table
pub type SpeakerFactory = fn() -> Result<Box<dyn Speaker>>;

/// Try each backend constructor in order; first success is selected
///
/// Falls back to the silent backend when every constructor fails, so the
/// assistant keeps answering in text.
pub fn first_available(backends: &[(&str, SpeakerFactory)]) -> Box<dyn Speaker> {
    for (name, factory) in backends {
        match factory() {
            Ok(speaker) => {
                tracing::info!(backend = name, "Selected speech backend");
                return speaker;
            },
            Err(e) => {
                tracing::warn!(backend = name, error = %e, "Speech backend unavailable, trying next");
            },
        }
    }

    tracing::warn!("No speech backend available; falling back to silent output");
    Box::new(NullSpeaker::new())
}

const BOTH_LANGUAGES: [Language; 2] = [Language::English, Language::Hindi];

/// Renders replies as plain console lines
pub struct ConsoleSpeaker {
    settings: VoiceSettings,
}

impl ConsoleSpeaker {
    pub fn new() -> Self {
        Self {
            settings: VoiceSettings::default(),
        }
    }

    /// Factory for the selection table
    pub fn create() -> Result<Box<dyn Speaker>> {
        Ok(Box::new(Self::new()))
    }

    /// Currently configured voice parameters
    pub fn settings(&self) -> &VoiceSettings {
        &self.settings
    }
}

impl Default for ConsoleSpeaker {
    fn default() -> Self {
        Self::new()
    }
}

impl Speaker for ConsoleSpeaker {
    fn speak(&mut self, text: &str) -> Result<()> {
        println!("{}", text);
        Ok(())
    }

    fn configure(&mut self, settings: &VoiceSettings) {
        self.settings = settings.clone();
    }

    fn name(&self) -> &str {
        "console"
    }

    fn supported_languages(&self) -> &[Language] {
        &BOTH_LANGUAGES
    }
}

/// Accepts text and renders nothing (silent mode)
pub struct NullSpeaker;

impl NullSpeaker {
    pub fn new() -> Self {
        Self
    }

    /// Factory for the selection table
    pub fn create() -> Result<Box<dyn Speaker>> {
        Ok(Box::new(Self::new()))
    }
}

impl Default for NullSpeaker {
    fn default() -> Self {
        Self::new()
    }
}

impl Speaker for NullSpeaker {
    fn speak(&mut self, _text: &str) -> Result<()> {
        Ok(())
    }

    fn configure(&mut self, _settings: &VoiceSettings) {}

    fn name(&self) -> &str {
        "null"
    }

    fn supported_languages(&self) -> &[Language] {
        &BOTH_LANGUAGES
    }
}

/// Reads utterances line by line from standard input
///
/// End of input maps to `Ok(None)`: there is no turn to process.
pub struct StdinListener;

impl StdinListener {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdinListener {
    fn default() -> Self {
        Self::new()
    }
}

impl Listener for StdinListener {
    fn listen(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn name(&self) -> &str {
        "stdin"
    }
}
