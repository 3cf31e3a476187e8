//! Customer-support routing core.
//!
//! A [`SupportAgent`] answers one message at a time: a fuzzy lookup in the
//! [`KnowledgeBase`] first, then an optional [`ChatCollaborator`] on a miss,
//! then fixed fallback copy. Every outcome is flattened into a
//! [`ResponseEnvelope`]; nothing escapes [`SupportAgent::process_message`].
//!
//! # Example
//! ```
//! # use support_agent::{KnowledgeBase, ResponseSource, SupportAgent};
//! # #[tokio::main(flavor = "current_thread")] async fn main() {
//! let agent = SupportAgent::new(KnowledgeBase::builtin(), None);
//! let env = agent.process_message("What does EVA do?", &[]).await;
//! assert_eq!(env.source, ResponseSource::Predefined);
//! # }
//! ```

pub mod agent;
pub mod cfg;
pub mod collaborator;
pub mod envelope;
pub mod error;
pub mod history;
pub mod knowledge;
pub mod prompt;
mod seed;

pub use agent::{COLLABORATOR_UNAVAILABLE, SupportAgent};
pub use cfg::AgentConfig;
pub use collaborator::{ChatCollaborator, CompletionFuture};
pub use envelope::{Reply, ResponseEnvelope, ResponseSource};
pub use error::AgentError;
pub use history::{ConversationTurn, HISTORY_WINDOW};
pub use knowledge::{DEFAULT_MATCH_THRESHOLD, KnowledgeBase, KnowledgeEntry, MatchScore};
