use serde::Deserialize;
use support_agent::ConversationTurn;

/// Request payload for `POST /chat`.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// The user's new message.
    pub message: String,
    /// Prior turns kept by the client, oldest first.
    #[serde(default)]
    pub history: Vec<ConversationTurn>,
}
