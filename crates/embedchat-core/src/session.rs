//! Widget session identity.
//!
//! One `Session` exists per open widget instance. The session identifier is
//! generated once at instantiation and sent with every request so the
//! backend can thread the conversation history.

use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Identity of one widget conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque client-generated identifier, stable for the life of the
    /// widget instance.
    pub session_id: String,
    /// End-user/tenant identifier, supplied by the embedding context.
    pub sub_id: String,
    /// The configured agent this widget talks to.
    pub agent_id: String,
}

impl Session {
    /// Creates a session with a freshly generated identifier.
    ///
    /// `sub_id` and `agent_id` are injected by the caller; the widget never
    /// reads them from ambient state.
    pub fn new(sub_id: impl Into<String>, agent_id: impl Into<String>) -> Self {
        Self {
            session_id: generate_session_id(),
            sub_id: sub_id.into(),
            agent_id: agent_id.into(),
        }
    }

    /// Creates a session with an explicit identifier (tests, replays).
    pub fn with_session_id(
        session_id: impl Into<String>,
        sub_id: impl Into<String>,
        agent_id: impl Into<String>,
    ) -> Self {
        Self {
            session_id: session_id.into(),
            sub_id: sub_id.into(),
            agent_id: agent_id.into(),
        }
    }
}

/// Generates a session identifier: a random base-36 chunk followed by the
/// current time in milliseconds, also base-36. The same scheme runs inside
/// the generated standalone widget script.
pub fn generate_session_id() -> String {
    let random: u64 = rand::thread_rng().r#gen();
    let millis = Utc::now().timestamp_millis().max(0) as u64;
    format!("cw-{}{}", to_base36(random), to_base36(millis))
}

fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize] as char);
        value /= 36;
    }
    out.iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_base36() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(36 * 36 + 1), "101");
    }

    #[test]
    fn test_session_id_shape() {
        let id = generate_session_id();
        assert!(id.starts_with("cw-"));
        assert!(
            id[3..].chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()),
            "unexpected characters in {id}"
        );
    }

    #[test]
    fn test_session_ids_are_distinct() {
        let a = generate_session_id();
        let b = generate_session_id();
        assert_ne!(a, b);
    }

    #[test]
    fn test_new_session_carries_injected_identity() {
        let session = Session::new("sub-1", "agent-1");
        assert_eq!(session.sub_id, "sub-1");
        assert_eq!(session.agent_id, "agent-1");
        assert!(!session.session_id.is_empty());
    }
}
