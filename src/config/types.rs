use serde::{Deserialize, Serialize};

use crate::analyst::ProviderType;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub refinement: RefinementConfig,
    #[serde(default)]
    pub agent: AgentConfig,
}

/// Refinement loop configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefinementConfig {
    /// Upper bound on refinement rounds within one setup session.
    #[serde(default = "default_max_rounds")]
    pub max_rounds: usize,
}

impl Default for RefinementConfig {
    fn default() -> Self {
        Self {
            max_rounds: default_max_rounds(),
        }
    }
}

fn default_max_rounds() -> usize {
    10
}

/// Analysis service configuration (provider credentials and defaults)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// OpenAI API key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub openai_api_key: Option<String>,
    /// Anthropic API key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anthropic_api_key: Option<String>,
    /// Gemini API key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gemini_api_key: Option<String>,
    /// Default provider (openai, anthropic, or gemini)
    #[serde(default = "default_provider")]
    pub default_provider: String,
    /// Default model for the selected provider
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_model: Option<String>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            anthropic_api_key: None,
            gemini_api_key: None,
            default_provider: default_provider(),
            default_model: None,
        }
    }
}

impl AgentConfig {
    /// Get the stored API key for a provider
    pub fn api_key(&self, provider: ProviderType) -> Option<&str> {
        match provider {
            ProviderType::OpenAI => self.openai_api_key.as_deref(),
            ProviderType::Anthropic => self.anthropic_api_key.as_deref(),
            ProviderType::Gemini => self.gemini_api_key.as_deref(),
        }
    }

    /// Set the API key for a provider
    pub fn set_api_key(&mut self, provider: ProviderType, key: String) {
        match provider {
            ProviderType::OpenAI => self.openai_api_key = Some(key),
            ProviderType::Anthropic => self.anthropic_api_key = Some(key),
            ProviderType::Gemini => self.gemini_api_key = Some(key),
        }
    }

    /// Resolve the configured default provider, if it parses.
    pub fn provider(&self) -> Option<ProviderType> {
        self.default_provider.parse().ok()
    }
}

fn default_provider() -> String {
    "gemini".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_yields_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.refinement.max_rounds, 10);
        assert_eq!(config.agent.default_provider, "gemini");
        assert!(config.agent.gemini_api_key.is_none());
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config: Config = toml::from_str(
            r#"
            [refinement]
            max_rounds = 3

            [agent]
            default_provider = "anthropic"
            "#,
        )
        .unwrap();
        assert_eq!(config.refinement.max_rounds, 3);
        assert_eq!(config.agent.provider(), Some(ProviderType::Anthropic));
        assert!(config.agent.default_model.is_none());
    }

    #[test]
    fn test_api_key_accessors_cover_all_providers() {
        let mut agent = AgentConfig::default();
        agent.set_api_key(ProviderType::OpenAI, "sk-1".to_string());
        agent.set_api_key(ProviderType::Gemini, "g-1".to_string());

        assert_eq!(agent.api_key(ProviderType::OpenAI), Some("sk-1"));
        assert_eq!(agent.api_key(ProviderType::Gemini), Some("g-1"));
        assert_eq!(agent.api_key(ProviderType::Anthropic), None);
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let mut config = Config::default();
        config.agent.set_api_key(ProviderType::Anthropic, "sk-ant".to_string());
        config.refinement.max_rounds = 5;

        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.refinement.max_rounds, 5);
        assert_eq!(parsed.agent.api_key(ProviderType::Anthropic), Some("sk-ant"));
    }
}
