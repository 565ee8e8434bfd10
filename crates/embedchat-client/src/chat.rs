//! Chat-completion client.
//!
//! Performs exactly one request/response exchange per call against the
//! backend chat endpoint. No retry, no backoff, no queueing — refusal to
//! start a send while one is outstanding belongs to the widget state
//! machine, not this client.

use embedchat_core::error::{EmbedChatError, Result};
use embedchat_core::message::{ChatMessage, Role};
use embedchat_core::session::Session;
use embedchat_core::widget::CONNECTIVITY_ERROR;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

const CHAT_PATH: &str = "/api/chat";

/// Outcome of a completed chat exchange. Both variants mean the backend was
/// reachable; transport failures surface as `Err` instead.
#[derive(Debug, Clone, PartialEq)]
pub enum ChatReply {
    /// Authoritative conversation history. The widget replaces its entire
    /// message list with this — it is not an append.
    History(Vec<ChatMessage>),
    /// Application-level failure (`success: false`), with the server's
    /// error text or a default.
    Error(String),
}

/// Client for the backend chat-completion endpoint.
#[derive(Debug, Clone)]
pub struct ChatClient {
    client: Client,
    base_url: String,
}

impl ChatClient {
    /// Creates a client against a backend origin. A trailing slash on the
    /// base URL is tolerated.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends one message and returns the server's verdict.
    ///
    /// All four wire fields are required non-empty; the message is trimmed
    /// before sending. Transport failures (connection, non-2xx status,
    /// malformed body) come back as [`EmbedChatError::Transport`] for the
    /// caller to convert into the single generic connectivity bubble.
    pub async fn send_message(&self, session: &Session, message: &str) -> Result<ChatReply> {
        let message = message.trim();
        if message.is_empty() {
            return Err(EmbedChatError::validation("message must not be empty"));
        }
        if session.sub_id.is_empty() || session.session_id.is_empty() || session.agent_id.is_empty()
        {
            return Err(EmbedChatError::validation(
                "sub_id, session_id, and agent_id are all required",
            ));
        }

        let url = format!("{}{}", self.base_url, CHAT_PATH);
        debug!(
            target: "embedchat::chat",
            session_id = %session.session_id,
            agent_id = %session.agent_id,
            "Sending chat message"
        );

        let response = self
            .client
            .post(&url)
            .json(&ChatRequest {
                sub_id: &session.sub_id,
                session_id: &session.session_id,
                agent_id: &session.agent_id,
                message,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(EmbedChatError::transport(format!(
                "chat endpoint returned status {status}"
            )));
        }

        let parsed: ChatResponse = response.json().await?;
        if parsed.success {
            let history = parsed
                .conversation_history
                .unwrap_or_default()
                .into_iter()
                .map(HistoryEntry::into_message)
                .collect();
            Ok(ChatReply::History(history))
        } else {
            // Same fallback line the generated script uses when the backend
            // reports failure without an error string.
            Ok(ChatReply::Error(
                parsed
                    .error
                    .unwrap_or_else(|| CONNECTIVITY_ERROR.to_string()),
            ))
        }
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    sub_id: &'a str,
    session_id: &'a str,
    agent_id: &'a str,
    message: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    success: bool,
    #[serde(default)]
    conversation_history: Option<Vec<HistoryEntry>>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Deserialize)]
struct HistoryEntry {
    role: Role,
    content: String,
}

impl HistoryEntry {
    fn into_message(self) -> ChatMessage {
        match self.role {
            Role::User => ChatMessage::user(self.content),
            Role::Assistant => ChatMessage::assistant(self.content),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_shape() {
        let request = ChatRequest {
            sub_id: "sub-1",
            session_id: "cw-abc",
            agent_id: "agent-1",
            message: "hello",
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["sub_id"], "sub-1");
        assert_eq!(json["session_id"], "cw-abc");
        assert_eq!(json["agent_id"], "agent-1");
        assert_eq!(json["message"], "hello");
    }

    #[test]
    fn test_response_parses_history() {
        let parsed: ChatResponse = serde_json::from_str(
            r#"{"success":true,"conversation_history":[
                {"role":"user","content":"hi"},
                {"role":"assistant","content":"hello"}
            ]}"#,
        )
        .unwrap();
        assert!(parsed.success);
        let history = parsed.conversation_history.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[1].content, "hello");
    }

    #[test]
    fn test_response_parses_application_error() {
        let parsed: ChatResponse =
            serde_json::from_str(r#"{"success":false,"error":"agent disabled"}"#).unwrap();
        assert!(!parsed.success);
        assert!(parsed.conversation_history.is_none());
        assert_eq!(parsed.error.as_deref(), Some("agent disabled"));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = ChatClient::new("https://api.example.com/");
        assert_eq!(client.base_url(), "https://api.example.com");
    }

    #[tokio::test]
    async fn test_empty_message_refused_before_network() {
        let client = ChatClient::new("http://127.0.0.1:1");
        let session = Session::with_session_id("cw-x", "sub-1", "agent-1");
        let err = client.send_message(&session, "   ").await.unwrap_err();
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn test_missing_identity_refused_before_network() {
        let client = ChatClient::new("http://127.0.0.1:1");
        let session = Session::with_session_id("cw-x", "", "agent-1");
        let err = client.send_message(&session, "hello").await.unwrap_err();
        assert!(err.is_validation());
    }
}
