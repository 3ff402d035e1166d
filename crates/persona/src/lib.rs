//! Personality engine for the Sahayak assistant
//!
//! Consumes an NLP result plus the engine's traits, conversation history,
//! and user profile; selects and stylizes a reply; and keeps the profile
//! persisted. One engine instance exclusively owns the profile for its
//! user id — nothing else reads or writes that file.

mod engine;

pub use engine::PersonalityEngine;
