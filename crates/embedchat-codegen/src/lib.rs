//! Standalone widget bundle generator.
//!
//! Produces a single dependency-free text bundle (markup + inline styles +
//! inline script) that reimplements the widget runtime state machine for
//! embedding in arbitrary third-party pages. The bundle is deterministic
//! for fixed inputs; the session identifier is generated by the emitted
//! script at page-load time, not here.

mod escape;

use embedchat_core::agent::AgentInstance;
use embedchat_core::config::EnvironmentUrls;
use embedchat_core::error::{EmbedChatError, Result};
use embedchat_core::format::escape_html;
use embedchat_core::widget::CONNECTIVITY_ERROR;
use minijinja::{Environment as TemplateEnvironment, context};
use tracing::info;

pub use escape::escape_js;

const WIDGET_TEMPLATE: &str = include_str!("../templates/widget.html.j2");
const TEMPLATE_NAME: &str = "widget";

/// Generator for embeddable widget bundles.
///
/// Holds the environment → base-URL table and the parsed template. One
/// instance can generate bundles for any number of agents.
pub struct WidgetCodegen {
    environments: EnvironmentUrls,
    templates: TemplateEnvironment<'static>,
}

impl Default for WidgetCodegen {
    fn default() -> Self {
        Self::new()
    }
}

impl WidgetCodegen {
    /// Generator with the built-in environment table.
    pub fn new() -> Self {
        Self::with_environments(EnvironmentUrls::default())
    }

    /// Generator with a deployment-specific environment table.
    pub fn with_environments(environments: EnvironmentUrls) -> Self {
        let mut templates = TemplateEnvironment::new();
        templates
            .add_template(TEMPLATE_NAME, WIDGET_TEMPLATE)
            .expect("widget template parses");
        Self {
            environments,
            templates,
        }
    }

    /// Generates the self-contained widget bundle for one agent instance.
    ///
    /// Refuses with a [`EmbedChatError::Validation`] before any templating
    /// when the agent's knowledge-base context is empty or whitespace-only —
    /// the single validation rule of this component. `environment` is
    /// resolved by exact-match name lookup; unrecognized names use the
    /// default origin.
    pub fn generate(
        &self,
        agent: &AgentInstance,
        sub_id: &str,
        environment: &str,
    ) -> Result<String> {
        if !agent.has_context() {
            return Err(EmbedChatError::validation(
                "Agent context is required before widget code can be generated. \
                 Add knowledge-base content to this agent first.",
            ));
        }

        // Trailing slash tolerated, as in the HTTP clients; the script
        // appends its own "/api/..." paths.
        let base_url = self.environments.resolve_name(environment).trim_end_matches('/');

        let bundle = self
            .templates
            .get_template(TEMPLATE_NAME)
            .and_then(|template| {
                template.render(context! {
                    title => escape_html(&agent.name),
                    subtitle => escape_html(&agent.agent_type),
                    website => escape_html(&agent.website),
                    initials => escape_html(&agent.initials()),
                    base_url_js => escape_js(base_url),
                    sub_id_js => escape_js(sub_id),
                    agent_id_js => escape_js(&agent.id),
                    connectivity_error_js => escape_js(CONNECTIVITY_ERROR),
                })
            })
            .map_err(|err| EmbedChatError::template(err.to_string()))?;

        info!(
            target: "embedchat::codegen",
            agent_id = %agent.id,
            environment,
            bytes = bundle.len(),
            "Generated widget bundle"
        );
        Ok(bundle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agent() -> AgentInstance {
        AgentInstance {
            id: "agent-7".to_string(),
            name: "Acme Support".to_string(),
            agent_type: "support".to_string(),
            website: "https://acme.example".to_string(),
            agent_roles: "Helpful support assistant".to_string(),
            context: "Acme sells widgets. Returns within 30 days.".to_string(),
        }
    }

    #[test]
    fn test_refuses_blank_context() {
        let codegen = WidgetCodegen::new();
        for context in ["", "   ", "\n\t"] {
            let mut agent = agent();
            agent.context = context.to_string();
            let err = codegen.generate(&agent, "sub-1", "production").unwrap_err();
            assert!(err.is_validation(), "context {context:?} should be refused");
        }
    }

    #[test]
    fn test_bundle_embeds_identity_and_base_url() {
        let bundle = WidgetCodegen::new()
            .generate(&agent(), "sub-42", "staging")
            .unwrap();
        assert!(bundle.contains("var SUB_ID=\"sub-42\""));
        assert!(bundle.contains("var AGENT_ID=\"agent-7\""));
        assert!(bundle.contains(&EnvironmentUrls::default().staging));
        assert!(bundle.contains("Acme Support"));
        assert!(bundle.contains(">AS</div>"));
    }
}
