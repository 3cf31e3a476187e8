//! Message list sent to the chat collaborator on a knowledge-base miss.

use ai_llm_service::ChatMessage;

use crate::history::{ConversationTurn, context_window};

/// Fixed system instruction for generated answers.
pub const SYSTEM_INSTRUCTION: &str = "You are a helpful customer support AI assistant. \
You should provide helpful, accurate, and professional responses to user questions. \
Keep responses concise but informative. If you don't know something, be honest about it. \
Maintain a friendly and professional tone appropriate for customer support.";

/// System instruction, then the history window, then the current message.
///
/// # Example
/// ```
/// # use support_agent::prompt::build_messages;
/// let msgs = build_messages("Tell me a joke", &[]);
/// assert_eq!(msgs.len(), 2);
/// assert_eq!(msgs[1].content, "Tell me a joke");
/// ```
pub fn build_messages(user_message: &str, history: &[ConversationTurn]) -> Vec<ChatMessage> {
    let context = context_window(history);
    let mut out = Vec::with_capacity(context.len() + 2);
    out.push(ChatMessage::system(SYSTEM_INSTRUCTION));
    out.extend(context);
    out.push(ChatMessage::user(user_message));
    out
}
