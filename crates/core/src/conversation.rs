//! Conversation history for one engine session
//!
//! A bounded, ordered record of recent exchanges. It lives only for the
//! engine's lifetime and is never persisted; the engine consults it solely
//! to distinguish a first greeting from a returning one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use uuid::Uuid;

/// Maximum exchanges retained before the oldest is evicted
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

/// One user turn and the reply it produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exchange {
    /// What the user said
    pub user_input: String,
    /// What the assistant answered
    pub response: String,
    /// When the exchange completed
    pub timestamp: DateTime<Utc>,
}

impl Exchange {
    pub fn new(user_input: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            user_input: user_input.into(),
            response: response.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Bounded FIFO of recent exchanges
#[derive(Debug, Clone)]
pub struct ConversationHistory {
    session_id: Uuid,
    capacity: usize,
    exchanges: VecDeque<Exchange>,
}

impl ConversationHistory {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// Create a history with a custom bound (used by tests)
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            capacity,
            exchanges: VecDeque::with_capacity(capacity),
        }
    }

    /// Session identifier for log correlation
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Append an exchange, evicting the oldest past capacity
    pub fn push(&mut self, exchange: Exchange) {
        self.exchanges.push_back(exchange);
        while self.exchanges.len() > self.capacity {
            self.exchanges.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.exchanges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exchanges.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterate oldest-first
    pub fn iter(&self) -> impl Iterator<Item = &Exchange> {
        self.exchanges.iter()
    }

    /// Most recent exchange, if any
    pub fn last(&self) -> Option<&Exchange> {
        self.exchanges.back()
    }
}

impl Default for ConversationHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_len() {
        let mut history = ConversationHistory::new();
        assert!(history.is_empty());
        history.push(Exchange::new("hello", "Good day."));
        assert_eq!(history.len(), 1);
        assert_eq!(history.last().unwrap().user_input, "hello");
    }

    #[test]
    fn test_eviction_keeps_newest_fifty() {
        let mut history = ConversationHistory::new();
        for i in 0..60 {
            history.push(Exchange::new(format!("input {i}"), format!("reply {i}")));
        }
        assert_eq!(history.len(), DEFAULT_HISTORY_CAPACITY);
        // Entries 10..60 survive; the oldest ten were evicted.
        assert_eq!(history.iter().next().unwrap().user_input, "input 10");
        assert_eq!(history.last().unwrap().user_input, "input 59");
    }

    #[test]
    fn test_custom_capacity() {
        let mut history = ConversationHistory::with_capacity(2);
        history.push(Exchange::new("a", "1"));
        history.push(Exchange::new("b", "2"));
        history.push(Exchange::new("c", "3"));
        let inputs: Vec<&str> = history.iter().map(|e| e.user_input.as_str()).collect();
        assert_eq!(inputs, vec!["b", "c"]);
    }
}
