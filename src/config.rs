//! Environment-sourced configuration for the hosted chat connection.

use std::env;

/// Default Azure OpenAI API version when none is supplied.
pub const DEFAULT_API_VERSION: &str = "2024-06-01";

/// Connection parameters for the chat-completion service.
///
/// All three credentials are optional at construction time: an incomplete
/// config produces an agent in degraded mode rather than a hard failure.
#[derive(Debug, Clone)]
pub struct AgentConfig {
    pub api_key: Option<String>,
    pub deployment_name: Option<String>,
    pub endpoint: Option<String>,
    pub api_version: String,
}

impl AgentConfig {
    /// Create from explicit values.
    pub fn new(
        api_key: Option<String>,
        deployment_name: Option<String>,
        endpoint: Option<String>,
    ) -> Self {
        Self {
            api_key,
            deployment_name,
            endpoint,
            api_version: DEFAULT_API_VERSION.to_string(),
        }
    }

    /// Load from the process environment.
    ///
    /// Reads `API_KEY`, `MODEL_DEPLOYMENT_NAME`, and `PROJECT_ENDPOINT`.
    /// A `.env` file in the working directory is loaded first if present.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error
        Self::new(
            env::var("API_KEY").ok(),
            env::var("MODEL_DEPLOYMENT_NAME").ok(),
            env::var("PROJECT_ENDPOINT").ok(),
        )
    }

    /// Override the API version.
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Whether a connection can be built from this config.
    pub fn is_complete(&self) -> bool {
        self.api_key.is_some() && self.deployment_name.is_some() && self.endpoint.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full() -> AgentConfig {
        AgentConfig::new(
            Some("key".into()),
            Some("gpt-4o".into()),
            Some("https://example.openai.azure.com".into()),
        )
    }

    #[test]
    fn complete_config_requires_all_three_values() {
        assert!(full().is_complete());

        let missing_key = AgentConfig::new(
            None,
            Some("gpt-4o".into()),
            Some("https://example.openai.azure.com".into()),
        );
        assert!(!missing_key.is_complete());

        let empty = AgentConfig::new(None, None, None);
        assert!(!empty.is_complete());
    }

    #[test]
    fn api_version_defaults_and_overrides() {
        assert_eq!(full().api_version, DEFAULT_API_VERSION);
        assert_eq!(
            full().with_api_version("2024-10-21").api_version,
            "2024-10-21"
        );
    }

    #[test]
    fn from_env_reads_connection_parameters() {
        env::set_var("API_KEY", "env-key");
        env::set_var("MODEL_DEPLOYMENT_NAME", "env-deployment");
        env::set_var("PROJECT_ENDPOINT", "https://env.openai.azure.com");

        let config = AgentConfig::from_env();

        env::remove_var("API_KEY");
        env::remove_var("MODEL_DEPLOYMENT_NAME");
        env::remove_var("PROJECT_ENDPOINT");

        assert_eq!(config.api_key.as_deref(), Some("env-key"));
        assert_eq!(config.deployment_name.as_deref(), Some("env-deployment"));
        assert_eq!(
            config.endpoint.as_deref(),
            Some("https://env.openai.azure.com")
        );
        assert!(config.is_complete());
    }
}
