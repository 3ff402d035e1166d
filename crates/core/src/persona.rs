//! Personality trait definitions
//!
//! Traits modulate response wording. Each level is a small closed enum;
//! changes apply to subsequent turns only.

use serde::{Deserialize, Serialize};

/// Register of address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Formality {
    #[default]
    Professional,
    Casual,
    Informal,
}

/// Humor level
///
/// Only `Subtle` and `Moderate` carry response modifiers in the shipped
/// template tables; `Heavy` is a configuration gap left open on purpose to
/// keep response length bounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Humor {
    None,
    #[default]
    Subtle,
    Moderate,
    Heavy,
}

/// Empathy level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Empathy {
    Low,
    #[default]
    Moderate,
    High,
}

/// Preferred response length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Responsiveness {
    Verbose,
    Moderate,
    #[default]
    Concise,
}

/// Personality configuration owned by one engine instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PersonalityTraits {
    #[serde(default)]
    pub formality: Formality,
    #[serde(default)]
    pub humor: Humor,
    #[serde(default)]
    pub empathy: Empathy,
    #[serde(default)]
    pub responsiveness: Responsiveness,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_shipped_persona() {
        let traits = PersonalityTraits::default();
        assert_eq!(traits.formality, Formality::Professional);
        assert_eq!(traits.humor, Humor::Subtle);
        assert_eq!(traits.empathy, Empathy::Moderate);
        assert_eq!(traits.responsiveness, Responsiveness::Concise);
    }

    #[test]
    fn test_snake_case_serde() {
        assert_eq!(serde_json::to_string(&Humor::None).unwrap(), "\"none\"");
        assert_eq!(
            serde_json::from_str::<Formality>("\"professional\"").unwrap(),
            Formality::Professional
        );
    }
}
