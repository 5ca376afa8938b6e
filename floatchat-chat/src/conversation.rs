//! Per-session conversation logging.
//!
//! An append-only turn log keyed by session id. Appends for a given
//! session go through `&mut self`, so turn ordering within a session is
//! arrival order. The backing store caps each session to the most recent
//! [`MAX_SESSION_TURNS`] turns; responses only ever surface the tail of
//! that.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Retention cap per session; the oldest turns are dropped past this.
pub const MAX_SESSION_TURNS: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

/// One message turn in a session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversationTurn {
    pub role: Role,
    pub content: String,
    pub metadata: Option<serde_json::Value>,
    pub timestamp: DateTime<Utc>,
}

/// The per-session conversation store.
#[derive(Debug, Default)]
pub struct ConversationLog {
    sessions: HashMap<String, Vec<ConversationTurn>>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a turn to a session, creating the session on first use.
    pub fn add(
        &mut self,
        session_id: &str,
        role: Role,
        content: impl Into<String>,
        metadata: Option<serde_json::Value>,
    ) {
        let turns = self.sessions.entry(session_id.to_string()).or_default();
        turns.push(ConversationTurn {
            role,
            content: content.into(),
            metadata,
            timestamp: Utc::now(),
        });
        if turns.len() > MAX_SESSION_TURNS {
            let excess = turns.len() - MAX_SESSION_TURNS;
            turns.drain(..excess);
        }
    }

    /// The last `limit` turns of a session, most-recent-last.
    ///
    /// Unknown sessions yield an empty history.
    pub fn history(&self, session_id: &str, limit: usize) -> Vec<ConversationTurn> {
        match self.sessions.get(session_id) {
            Some(turns) => turns[turns.len().saturating_sub(limit)..].to_vec(),
            None => Vec::new(),
        }
    }

    /// The last five turns rendered as "role: content" lines, for prompt
    /// construction against the external AI service.
    pub fn context(&self, session_id: &str) -> String {
        self.history(session_id, 5)
            .iter()
            .map(|turn| format!("{}: {}\n", turn.role, turn.content))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_returns_most_recent_last() {
        let mut log = ConversationLog::new();
        log.add("s1", Role::User, "first", None);
        log.add("s1", Role::Assistant, "second", None);
        log.add("s1", Role::User, "third", None);

        let history = log.history("s1", 2);
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].content, "second");
        assert_eq!(history[1].content, "third");
    }

    #[test]
    fn sessions_are_independent() {
        let mut log = ConversationLog::new();
        log.add("a", Role::User, "hello", None);
        assert!(log.history("b", 10).is_empty());
    }

    #[test]
    fn backing_store_caps_at_retention_limit() {
        let mut log = ConversationLog::new();
        for i in 0..(MAX_SESSION_TURNS + 25) {
            log.add("s", Role::User, format!("turn {i}"), None);
        }
        let all = log.history("s", usize::MAX);
        assert_eq!(all.len(), MAX_SESSION_TURNS);
        assert_eq!(all.last().unwrap().content, format!("turn {}", MAX_SESSION_TURNS + 24));
        // Oldest turns were evicted.
        assert_eq!(all[0].content, "turn 25");
    }

    #[test]
    fn context_renders_role_prefixed_lines() {
        let mut log = ConversationLog::new();
        log.add("s", Role::User, "hi", None);
        log.add("s", Role::Assistant, "hello", None);
        assert_eq!(log.context("s"), "user: hi\nassistant: hello\n");
    }
}
