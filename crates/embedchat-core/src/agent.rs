//! Agent instance model.
//!
//! Produced by the admin provisioning layer and consumed here by the widget
//! code generator and the interactive preview.

use serde::{Deserialize, Serialize};

/// A configured chatbot instance: identity, persona, and the knowledge-base
/// context that drives its answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentInstance {
    /// Identifier sent with every chat request for this agent.
    pub id: String,
    /// Display name, interpolated into widget chrome.
    pub name: String,
    /// Descriptive category (e.g. "support", "sales").
    #[serde(default)]
    pub agent_type: String,
    /// Site the widget is meant to be embedded on.
    #[serde(default)]
    pub website: String,
    /// Free-text role/persona description.
    #[serde(default)]
    pub agent_roles: String,
    /// Free-text knowledge base. Must be non-blank before a widget can be
    /// generated for this agent.
    #[serde(default)]
    pub context: String,
}

impl AgentInstance {
    /// True when the knowledge-base context holds any non-whitespace text.
    pub fn has_context(&self) -> bool {
        !self.context.trim().is_empty()
    }

    /// Avatar initials for the widget header: first letters of the first two
    /// words of the name, uppercased. Falls back to "AI" for a blank name.
    pub fn initials(&self) -> String {
        let initials: String = self
            .name
            .split_whitespace()
            .take(2)
            .filter_map(|word| word.chars().next())
            .flat_map(|c| c.to_uppercase())
            .collect();
        if initials.is_empty() {
            "AI".to_string()
        } else {
            initials
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agent(name: &str, context: &str) -> AgentInstance {
        AgentInstance {
            id: "agent-1".to_string(),
            name: name.to_string(),
            agent_type: "support".to_string(),
            website: "https://example.com".to_string(),
            agent_roles: "Helpful assistant".to_string(),
            context: context.to_string(),
        }
    }

    #[test]
    fn test_has_context_rejects_blank() {
        assert!(!agent("Acme", "").has_context());
        assert!(!agent("Acme", "   \n\t ").has_context());
        assert!(agent("Acme", "knowledge").has_context());
    }

    #[test]
    fn test_initials() {
        assert_eq!(agent("Acme Support", "x").initials(), "AS");
        assert_eq!(agent("acme", "x").initials(), "A");
        assert_eq!(agent("one two three", "x").initials(), "OT");
        assert_eq!(agent("", "x").initials(), "AI");
    }
}
