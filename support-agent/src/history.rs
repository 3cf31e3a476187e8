//! Caller-supplied conversation history and the trailing context window.

use ai_llm_service::{ChatMessage, ChatRole};
use serde::{Deserialize, Serialize};

/// Number of trailing history entries considered for context.
pub const HISTORY_WINDOW: usize = 6;

/// One prior message as the caller keeps it.
///
/// `role` stays free text so any transcript deserializes; only `user` and
/// `assistant` turns are ever forwarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: String,
    pub content: String,
}

impl ConversationTurn {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new("assistant", content)
    }

    fn as_context(&self) -> Option<ChatMessage> {
        match ChatRole::parse(&self.role)? {
            ChatRole::System => None,
            role => Some(ChatMessage::new(role, self.content.clone())),
        }
    }
}

/// Last [`HISTORY_WINDOW`] entries, then only the user/assistant ones.
///
/// The window is cut before filtering, so fewer than six messages come back
/// when the tail holds other roles. Relative order is kept.
pub fn context_window(history: &[ConversationTurn]) -> Vec<ChatMessage> {
    let start = history.len().saturating_sub(HISTORY_WINDOW);
    history[start..]
        .iter()
        .filter_map(ConversationTurn::as_context)
        .collect()
}
