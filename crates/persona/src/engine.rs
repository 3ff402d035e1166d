//! Response generation state machine
//!
//! Per turn: template selection keyed by (language, intent) — statements
//! sub-keyed by sentiment — then first-contact disambiguation, then trait
//! modulation, then profile update and synchronous persistence. Template
//! lookup is total; there is no cross-language fallback.

use chrono::Utc;

use sahayak_config::ResponseTemplates;
use sahayak_core::{
    ConversationHistory, Empathy, Exchange, Formality, Humor, Intent, NlpResult,
    PersonalityTraits, Responsiveness, UserProfile,
};
use sahayak_persistence::ProfileStore;

/// Trait-modulated response engine for one user id
pub struct PersonalityEngine {
    user_id: String,
    traits: PersonalityTraits,
    templates: ResponseTemplates,
    store: ProfileStore,
    profile: UserProfile,
    history: ConversationHistory,
}

impl PersonalityEngine {
    /// Construct an engine, reloading the user's persisted profile
    pub fn new(
        user_id: impl Into<String>,
        traits: PersonalityTraits,
        templates: ResponseTemplates,
        store: ProfileStore,
    ) -> Self {
        let user_id = user_id.into();
        let profile = store.load(&user_id);
        tracing::info!(
            user_id = %user_id,
            total_interactions = profile.interaction_history.total_interactions,
            "Loaded user profile"
        );

        Self {
            user_id,
            traits,
            templates,
            store,
            profile,
            history: ConversationHistory::new(),
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn traits(&self) -> &PersonalityTraits {
        &self.traits
    }

    pub fn history(&self) -> &ConversationHistory {
        &self.history
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// Generate the reply for one analyzed utterance
    ///
    /// Side effects: the interaction counters are updated and the profile
    /// is persisted before this returns. The caller remains responsible
    /// for `add_to_history` and for handing the text to the speech
    /// collaborator.
    pub fn respond(&mut self, nlp: &NlpResult) -> String {
        let table = self.templates.table(nlp.language);
        let first_contact = self.history.is_empty();

        let mut response = table
            .response(nlp.intent, nlp.sentiment, first_contact)
            .to_string();

        // Humor modifies only the returning-user greeting; the suffix
        // table itself decides which levels carry one.
        if nlp.intent == Intent::Greeting && !first_contact {
            if let Some(suffix) = table.humor_suffix(self.traits.humor) {
                response.push(' ');
                response.push_str(suffix);
            }
        }

        self.profile.record_interaction(Utc::now());
        self.persist_profile();

        response
    }

    /// Remember entity values from the turn, with set semantics
    ///
    /// A separate call from `respond` so the caller controls whether a
    /// given turn is learned from. Persists the profile after the pass.
    pub fn learn_from_interaction(&mut self, nlp: &NlpResult) {
        let mut learned = 0usize;
        for (entity_type, values) in nlp.entities.iter() {
            for value in values {
                if self.profile.learn(entity_type, value) {
                    learned += 1;
                }
            }
        }
        if learned > 0 {
            tracing::debug!(user_id = %self.user_id, learned, "Learned new entity values");
        }
        self.persist_profile();
    }

    /// Append the completed exchange to the in-memory history
    pub fn add_to_history(&mut self, user_input: &str, response: &str) {
        self.history.push(Exchange::new(user_input, response));
    }

    /// Replace all traits; applies to subsequent turns only
    pub fn update_traits(&mut self, traits: PersonalityTraits) {
        tracing::info!(user_id = %self.user_id, ?traits, "Updated personality traits");
        self.traits = traits;
    }

    pub fn set_formality(&mut self, formality: Formality) {
        self.traits.formality = formality;
    }

    pub fn set_humor(&mut self, humor: Humor) {
        self.traits.humor = humor;
    }

    pub fn set_empathy(&mut self, empathy: Empathy) {
        self.traits.empathy = empathy;
    }

    pub fn set_responsiveness(&mut self, responsiveness: Responsiveness) {
        self.traits.responsiveness = responsiveness;
    }

    /// Write the profile; on failure keep the in-memory state authoritative
    fn persist_profile(&self) {
        if let Err(e) = self.store.save(&self.user_id, &self.profile) {
            tracing::warn!(
                user_id = %self.user_id,
                error = %e,
                "Could not save user profile; keeping in-memory state"
            );
        }
    }
}
