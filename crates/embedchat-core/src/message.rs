//! Chat message domain model.
//!
//! Messages live only in the widget's in-memory list for the lifetime of a
//! session. They are never mutated after creation; a successful exchange
//! replaces the whole list with the server's conversation history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single entry in the widget's message list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    /// Client-generated, display-only. Not persisted across reloads.
    pub timestamp: DateTime<Utc>,
    /// Marks an inline error bubble (connectivity or backend failure).
    #[serde(default)]
    pub error: bool,
}

impl ChatMessage {
    /// Creates a user-authored message, stamped now.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            timestamp: Utc::now(),
            error: false,
        }
    }

    /// Creates an assistant message, stamped now.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            timestamp: Utc::now(),
            error: false,
        }
    }

    /// Creates an error-styled bubble. Rendered in the assistant column but
    /// visually distinguishable from a normal reply.
    pub fn error(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            timestamp: Utc::now(),
            error: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(
            serde_json::to_string(&Role::Assistant).unwrap(),
            "\"assistant\""
        );
    }

    #[test]
    fn test_error_bubble_uses_assistant_role() {
        let msg = ChatMessage::error("having trouble connecting");
        assert_eq!(msg.role, Role::Assistant);
        assert!(msg.error);
    }

    #[test]
    fn test_error_flag_defaults_to_false_when_absent() {
        let msg: ChatMessage =
            serde_json::from_str(r#"{"role":"user","content":"hi","timestamp":"2024-05-01T00:00:00Z"}"#)
                .unwrap();
        assert!(!msg.error);
    }
}
