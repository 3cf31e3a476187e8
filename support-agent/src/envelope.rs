//! Uniform result of one routed message.

use serde::{Deserialize, Serialize};

/// Greeting returned for empty or whitespace-only input.
pub const GREETING: &str = "I'm here to help! Please ask me a question about Thoughtful AI or any other topic you need assistance with.";

/// Answer when nothing matched and no collaborator is configured.
pub const FALLBACK_ANSWER: &str = "I don't have a specific answer for that question about Thoughtful AI. For detailed information, please contact our support team at support@thoughtfulai.com or visit our website.";

/// Answer when routing failed for this request.
pub const APOLOGY: &str = "I apologize, but I'm experiencing technical difficulties. Please try again in a moment or contact our support team directly at support@thoughtfulai.com.";

/// Which strategy produced a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseSource {
    Predefined,
    AiGenerated,
    Fallback,
    Error,
    System,
}

impl ResponseSource {
    /// Fixed confidence attached to each source.
    pub fn confidence(self) -> f64 {
        match self {
            ResponseSource::Predefined | ResponseSource::System => 1.0,
            ResponseSource::AiGenerated => 0.8,
            ResponseSource::Fallback => 0.5,
            ResponseSource::Error => 0.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ResponseSource::Predefined => "predefined",
            ResponseSource::AiGenerated => "ai_generated",
            ResponseSource::Fallback => "fallback",
            ResponseSource::Error => "error",
            ResponseSource::System => "system",
        }
    }
}

impl std::fmt::Display for ResponseSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Routing outcome before it is flattened into an envelope.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// Input was empty.
    Greeting,
    /// Knowledge-base hit.
    Matched { question: String, answer: String },
    /// Collaborator answer.
    Generated(String),
    /// No match and no collaborator.
    Fallback { reason: String },
    /// Something failed while handling this request.
    Failed { cause: String },
}

impl Reply {
    pub fn source(&self) -> ResponseSource {
        match self {
            Reply::Greeting => ResponseSource::System,
            Reply::Matched { .. } => ResponseSource::Predefined,
            Reply::Generated(_) => ResponseSource::AiGenerated,
            Reply::Fallback { .. } => ResponseSource::Fallback,
            Reply::Failed { .. } => ResponseSource::Error,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    pub response: String,
    pub source: ResponseSource,
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_question: Option<String>,
    pub error: Option<String>,
}

impl From<Reply> for ResponseEnvelope {
    fn from(reply: Reply) -> Self {
        let source = reply.source();
        let (response, matched_question, error) = match reply {
            Reply::Greeting => (GREETING.to_string(), None, None),
            Reply::Matched { question, answer } => (answer, Some(question), None),
            Reply::Generated(text) => (text, None, None),
            Reply::Fallback { reason } => (FALLBACK_ANSWER.to_string(), None, Some(reason)),
            Reply::Failed { cause } => (APOLOGY.to_string(), None, Some(cause)),
        };
        Self {
            response,
            source,
            confidence: source.confidence(),
            matched_question,
            error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_fixes_confidence() {
        let cases = [
            (Reply::Greeting, 1.0),
            (
                Reply::Matched {
                    question: "q".into(),
                    answer: "a".into(),
                },
                1.0,
            ),
            (Reply::Generated("g".into()), 0.8),
            (Reply::Fallback { reason: "r".into() }, 0.5),
            (Reply::Failed { cause: "c".into() }, 0.0),
        ];
        for (reply, expected) in cases {
            let source = reply.source();
            let env = ResponseEnvelope::from(reply);
            assert_eq!(env.source, source);
            assert_eq!(env.confidence, expected);
        }
    }

    #[test]
    fn serializes_snake_case_and_skips_missing_match() {
        let env = ResponseEnvelope::from(Reply::Generated("hi".into()));
        let json = serde_json::to_value(&env).unwrap();
        assert_eq!(json["source"], "ai_generated");
        assert!(json.get("matched_question").is_none());
        assert!(json["error"].is_null());

        let hit = ResponseEnvelope::from(Reply::Matched {
            question: "Q".into(),
            answer: "A".into(),
        });
        let json = serde_json::to_value(&hit).unwrap();
        assert_eq!(json["source"], "predefined");
        assert_eq!(json["matched_question"], "Q");
        assert_eq!(json["response"], "A");
    }

    #[test]
    fn fixed_copy_for_degraded_outcomes() {
        let fb = ResponseEnvelope::from(Reply::Fallback {
            reason: "OpenAI API not available".into(),
        });
        assert_eq!(fb.response, FALLBACK_ANSWER);
        assert_eq!(fb.error.as_deref(), Some("OpenAI API not available"));

        let failed = ResponseEnvelope::from(Reply::Failed {
            cause: "boom".into(),
        });
        assert_eq!(failed.response, APOLOGY);
        assert_eq!(failed.error.as_deref(), Some("boom"));

        let greet = ResponseEnvelope::from(Reply::Greeting);
        assert_eq!(greet.response, GREETING);
        assert!(greet.error.is_none());
    }
}
