//! Response router: knowledge base first, collaborator second, fixed copy last.

use std::sync::Arc;

use ai_llm_service::OpenAiService;
use tracing::{debug, info, warn};

use crate::cfg::AgentConfig;
use crate::collaborator::ChatCollaborator;
use crate::envelope::{Reply, ResponseEnvelope};
use crate::error::AgentError;
use crate::history::ConversationTurn;
use crate::knowledge::{DEFAULT_MATCH_THRESHOLD, KnowledgeBase};
use crate::prompt::build_messages;

/// Reason recorded on fallback envelopes.
pub const COLLABORATOR_UNAVAILABLE: &str = "OpenAI API not available";

/// Stateless per-request router over a read-only knowledge base and an
/// optional collaborator handle. Share it behind an `Arc`.
pub struct SupportAgent {
    knowledge: KnowledgeBase,
    collaborator: Option<Arc<dyn ChatCollaborator>>,
    threshold: f64,
}

impl std::fmt::Debug for SupportAgent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SupportAgent")
            .field("entries", &self.knowledge.len())
            .field("collaborator", &self.collaborator.as_ref().map(|c| c.name()))
            .field("threshold", &self.threshold)
            .finish()
    }
}

impl SupportAgent {
    pub fn new(
        knowledge: KnowledgeBase,
        collaborator: Option<Arc<dyn ChatCollaborator>>,
    ) -> Self {
        Self {
            knowledge,
            collaborator,
            threshold: DEFAULT_MATCH_THRESHOLD,
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Builds the knowledge base and, when configured, the OpenAI collaborator.
    ///
    /// # Errors
    /// Unreadable knowledge file or invalid LLM client settings.
    pub fn from_config(cfg: AgentConfig) -> Result<Self, AgentError> {
        let knowledge = match &cfg.knowledge_path {
            Some(path) => KnowledgeBase::from_json_file(path)?,
            None => KnowledgeBase::builtin(),
        };

        let collaborator = match cfg.llm {
            Some(llm) => Some(Arc::new(OpenAiService::new(llm)?) as Arc<dyn ChatCollaborator>),
            None => None,
        };

        info!(
            entries = knowledge.len(),
            threshold = cfg.match_threshold,
            collaborator = collaborator.as_ref().map(|c| c.name()).unwrap_or("none"),
            "support agent ready"
        );

        Ok(Self::new(knowledge, collaborator).with_threshold(cfg.match_threshold))
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Decides how to answer `message`.
    ///
    /// Never fails: a collaborator error becomes [`Reply::Failed`].
    pub async fn reply(&self, message: &str, history: &[ConversationTurn]) -> Reply {
        if message.trim().is_empty() {
            return Reply::Greeting;
        }

        if let Some((question, entry)) = self.knowledge.find_best_match(message, self.threshold) {
            return Reply::Matched {
                question: question.to_string(),
                answer: entry.answer.clone(),
            };
        }

        let Some(collaborator) = &self.collaborator else {
            warn!("no knowledge match and no collaborator configured");
            return Reply::Fallback {
                reason: COLLABORATOR_UNAVAILABLE.to_string(),
            };
        };

        let messages = build_messages(message, history);
        debug!(
            collaborator = collaborator.name(),
            messages = messages.len(),
            "delegating to collaborator"
        );
        match collaborator.complete(&messages).await {
            Ok(text) => Reply::Generated(text),
            Err(e) => {
                warn!(error = %e, "collaborator failed");
                Reply::Failed {
                    cause: e.to_string(),
                }
            }
        }
    }

    /// Routes `message` and flattens the outcome into an envelope.
    pub async fn process_message(
        &self,
        message: &str,
        history: &[ConversationTurn],
    ) -> ResponseEnvelope {
        let envelope = ResponseEnvelope::from(self.reply(message, history).await);
        debug!(
            source = %envelope.source,
            confidence = envelope.confidence,
            matched_question = envelope.matched_question.as_deref().unwrap_or(""),
            "message routed"
        );
        envelope
    }

    /// Canonical questions, for display.
    pub fn get_available_topics(&self) -> Vec<String> {
        self.knowledge.get_all_questions()
    }

    pub fn is_collaborator_available(&self) -> bool {
        self.collaborator.is_some()
    }
}
