//! Trait seams for pluggable collaborators

mod speech;

pub use speech::{Listener, Speaker, VoiceSettings};
