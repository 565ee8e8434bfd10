//! Deployment environment selection.
//!
//! The widget and the code generator talk to one of a small fixed set of
//! backend origins. Resolution is an exact-match name lookup; anything
//! unrecognized falls back to the default (production) origin.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::error::Result;

/// Named deployment environment.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Production,
    Staging,
    Development,
}

impl Environment {
    /// Exact-match lookup with default fallback: an unrecognized name is the
    /// default environment, never an error.
    pub fn from_name(name: &str) -> Self {
        Self::from_str(name.trim()).unwrap_or_default()
    }
}

/// Backend base URL per environment.
///
/// Exact values are deployment configuration; these defaults can be
/// overridden from a TOML table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentUrls {
    pub production: String,
    pub staging: String,
    pub development: String,
}

impl Default for EnvironmentUrls {
    fn default() -> Self {
        Self {
            production: "https://api.embedchat.io".to_string(),
            staging: "https://staging-api.embedchat.io".to_string(),
            development: "http://localhost:8000".to_string(),
        }
    }
}

impl EnvironmentUrls {
    /// Base URL for an environment.
    pub fn resolve(&self, environment: Environment) -> &str {
        match environment {
            Environment::Production => &self.production,
            Environment::Staging => &self.staging,
            Environment::Development => &self.development,
        }
    }

    /// Base URL for an environment name, applying the default fallback.
    pub fn resolve_name(&self, name: &str) -> &str {
        self.resolve(Environment::from_name(name))
    }

    /// Loads overrides from a TOML document. Missing keys keep their
    /// defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_names() {
        assert_eq!(Environment::from_name("production"), Environment::Production);
        assert_eq!(Environment::from_name("Staging"), Environment::Staging);
        assert_eq!(Environment::from_name(" development "), Environment::Development);
    }

    #[test]
    fn test_unrecognized_name_falls_back_to_default() {
        assert_eq!(Environment::from_name("qa-west-2"), Environment::Production);
        assert_eq!(Environment::from_name(""), Environment::Production);
    }

    #[test]
    fn test_fallback_resolves_to_default_url() {
        let urls = EnvironmentUrls::default();
        let resolved = urls.resolve_name("not-an-environment");
        assert_eq!(resolved, urls.production);
        assert!(!resolved.is_empty());
    }

    #[test]
    fn test_toml_overrides_keep_missing_defaults() {
        let urls =
            EnvironmentUrls::from_toml_str("staging = \"https://stage.internal\"").unwrap();
        assert_eq!(urls.staging, "https://stage.internal");
        assert_eq!(urls.production, EnvironmentUrls::default().production);
    }

    #[test]
    fn test_display_matches_parse() {
        assert_eq!(Environment::Staging.to_string(), "staging");
        assert_eq!(
            Environment::from_name(&Environment::Development.to_string()),
            Environment::Development
        );
    }
}
