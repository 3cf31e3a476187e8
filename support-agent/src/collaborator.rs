//! External text-generation collaborator consulted on knowledge-base misses.

use std::{future::Future, pin::Pin};

use ai_llm_service::{ChatMessage, OpenAiService};
use tracing::warn;

use crate::error::AgentError;

/// Boxed future returned by [`ChatCollaborator::complete`].
pub type CompletionFuture<'a> = Pin<Box<dyn Future<Output = Result<String, AgentError>> + Send + 'a>>;

/// Anything that turns a message list into one generated answer.
///
/// Implementations perform no retries. Every failure comes back as a single
/// [`AgentError::Collaborator`] describing the cause.
pub trait ChatCollaborator: Send + Sync {
    /// Short label for logs.
    fn name(&self) -> &str;

    /// Trimmed text of the first generated choice.
    fn complete<'a>(&'a self, messages: &'a [ChatMessage]) -> CompletionFuture<'a>;
}

impl ChatCollaborator for OpenAiService {
    fn name(&self) -> &str {
        self.model()
    }

    fn complete<'a>(&'a self, messages: &'a [ChatMessage]) -> CompletionFuture<'a> {
        Box::pin(async move {
            match self.chat(messages).await {
                Ok(text) => Ok(text.trim().to_string()),
                Err(e) => {
                    warn!(model = %self.model(), error = %e, "chat completion failed");
                    Err(AgentError::Collaborator(e.to_string()))
                }
            }
        })
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use super::*;

    /// In-memory collaborator that replays one scripted outcome and records
    /// every message list it receives.
    pub(crate) struct ScriptedCollaborator {
        outcome: Result<String, String>,
        pub(crate) calls: Mutex<Vec<Vec<ChatMessage>>>,
    }

    impl ScriptedCollaborator {
        pub(crate) fn answering(text: &str) -> Self {
            Self {
                outcome: Ok(text.to_string()),
                calls: Mutex::new(Vec::new()),
            }
        }

        pub(crate) fn failing(cause: &str) -> Self {
            Self {
                outcome: Err(cause.to_string()),
                calls: Mutex::new(Vec::new()),
            }
        }

        pub(crate) fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    impl ChatCollaborator for ScriptedCollaborator {
        fn name(&self) -> &str {
            "scripted"
        }

        fn complete<'a>(&'a self, messages: &'a [ChatMessage]) -> CompletionFuture<'a> {
            self.calls.lock().unwrap().push(messages.to_vec());
            let out = self
                .outcome
                .clone()
                .map(|t| t.trim().to_string())
                .map_err(AgentError::Collaborator);
            Box::pin(async move { out })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ai_llm_service::{LlmModelConfig, LlmProvider};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn service(endpoint: &str) -> OpenAiService {
        OpenAiService::new(LlmModelConfig {
            provider: LlmProvider::OpenAI,
            model: "gpt-4o".into(),
            endpoint: endpoint.into(),
            api_key: Some("sk-test".into()),
            max_tokens: Some(500),
            temperature: Some(0.7),
            top_p: None,
            timeout_secs: Some(2),
        })
        .unwrap()
    }

    /// One-shot HTTP responder; returns its base URL.
    async fn respond_once(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut sock, _) = listener.accept().await.unwrap();
            let mut buf = Vec::new();
            let mut chunk = [0u8; 4096];
            loop {
                let n = sock.read(&mut chunk).await.unwrap_or(0);
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&chunk[..n]);
                let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else {
                    continue;
                };
                let head = String::from_utf8_lossy(&buf[..end]).to_lowercase();
                let len = head
                    .lines()
                    .find_map(|l| l.strip_prefix("content-length:"))
                    .and_then(|v| v.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if buf.len() >= end + 4 + len {
                    break;
                }
            }
            let resp = format!(
                "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = sock.write_all(resp.as_bytes()).await;
            let _ = sock.shutdown().await;
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn openai_answer_is_trimmed() {
        let url = respond_once("200 OK", r#"{"choices":[{"message":{"content":"  hi  "}}]}"#).await;
        let out = service(&url)
            .complete(&[ChatMessage::user("hello")])
            .await
            .unwrap();
        assert_eq!(out, "hi");
    }

    #[tokio::test]
    async fn openai_status_error_keeps_upstream_cause() {
        let url = respond_once("500 Internal Server Error", r#"{"error":"oops quota"}"#).await;
        let err = service(&url)
            .complete(&[ChatMessage::user("hello")])
            .await
            .unwrap_err();
        let AgentError::Collaborator(cause) = &err else {
            panic!("expected collaborator error, got {err:?}");
        };
        assert!(cause.contains("HTTP 500"));
        assert!(cause.contains("oops quota"));
        assert!(err.to_string().starts_with("failed to get AI response: "));
    }

    #[tokio::test]
    async fn openai_failure_becomes_single_collaborator_error() {
        // Nothing listens on the discard port, so the request fails at transport.
        let svc = service("http://127.0.0.1:9");
        let err = svc
            .complete(&[ChatMessage::user("hi")])
            .await
            .unwrap_err();
        assert!(matches!(err, AgentError::Collaborator(ref cause) if !cause.is_empty()));
        assert!(err.to_string().starts_with("failed to get AI response: "));
        assert_eq!(ChatCollaborator::name(&svc), "gpt-4o");
    }

    #[tokio::test]
    async fn scripted_double_trims_and_records() {
        let c = testing::ScriptedCollaborator::answering("  hello  ");
        let out = c.complete(&[ChatMessage::user("x")]).await.unwrap();
        assert_eq!(out, "hello");
        assert_eq!(c.call_count(), 1);
    }
}
