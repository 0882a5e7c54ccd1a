//! rig-backed implementation of the analysis service, plus API key bootstrap.

use async_trait::async_trait;
use colored::Colorize;
use rig::client::{CompletionClient, ProviderClient};
use rig::completion::Prompt;
use rig::providers::{anthropic, gemini, openai};

use super::{
    AnalystError, AnalystResult, FollowUpQuestion, ProjectAnalyst, ProviderType,
    parse_follow_up_questions, prompts,
};
use crate::config;
use crate::stack::ProjectSpec;

const DEFAULT_OPENAI_MODEL: &str = "gpt-4o";
const DEFAULT_ANTHROPIC_MODEL: &str = "claude-sonnet-4-5-20250929";
const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

const MAX_RESPONSE_TOKENS: u64 = 4096;

/// Analysis service client backed by a rig completion provider.
pub struct RigAnalyst {
    provider: ProviderType,
    model: Option<String>,
}

impl RigAnalyst {
    pub fn new(provider: ProviderType, model: Option<String>) -> Self {
        Self { provider, model }
    }

    /// Send one prompt and return the completion text.
    async fn complete(&self, prompt_text: &str) -> AnalystResult<String> {
        match self.provider {
            ProviderType::OpenAI => {
                let client = openai::Client::from_env();
                let model = self.model.as_deref().unwrap_or(DEFAULT_OPENAI_MODEL);
                let agent = client
                    .agent(model)
                    .preamble(prompts::ANALYST_PREAMBLE)
                    .max_tokens(MAX_RESPONSE_TOKENS)
                    .build();
                agent
                    .prompt(prompt_text)
                    .await
                    .map_err(|e| AnalystError::Provider(e.to_string()))
            }
            ProviderType::Anthropic => {
                let client = anthropic::Client::from_env();
                let model = self.model.as_deref().unwrap_or(DEFAULT_ANTHROPIC_MODEL);
                let agent = client
                    .agent(model)
                    .preamble(prompts::ANALYST_PREAMBLE)
                    .max_tokens(MAX_RESPONSE_TOKENS)
                    .build();
                agent
                    .prompt(prompt_text)
                    .await
                    .map_err(|e| AnalystError::Provider(e.to_string()))
            }
            ProviderType::Gemini => {
                let client = gemini::Client::from_env();
                let model = self.model.as_deref().unwrap_or(DEFAULT_GEMINI_MODEL);
                let agent = client
                    .agent(model)
                    .preamble(prompts::ANALYST_PREAMBLE)
                    .max_tokens(MAX_RESPONSE_TOKENS)
                    .build();
                agent
                    .prompt(prompt_text)
                    .await
                    .map_err(|e| AnalystError::Provider(e.to_string()))
            }
        }
    }
}

#[async_trait]
impl ProjectAnalyst for RigAnalyst {
    async fn analyze(&self, spec: &ProjectSpec) -> AnalystResult<String> {
        self.complete(&prompts::analysis_prompt(spec)).await
    }

    async fn follow_up_questions(
        &self,
        spec: &ProjectSpec,
        previous_analysis: &str,
    ) -> AnalystResult<Vec<FollowUpQuestion>> {
        let raw = self
            .complete(&prompts::follow_up_prompt(spec, previous_analysis))
            .await?;
        Ok(parse_follow_up_questions(&raw))
    }
}

/// Environment variable holding the API key for a provider.
pub fn env_var(provider: ProviderType) -> &'static str {
    match provider {
        ProviderType::OpenAI => "OPENAI_API_KEY",
        ProviderType::Anthropic => "ANTHROPIC_API_KEY",
        ProviderType::Gemini => "GEMINI_API_KEY",
    }
}

/// Make sure an API key for the provider is present in the environment.
///
/// Resolution order: environment variable, stored config key, interactive
/// setup (which persists the key to the config file).
pub fn ensure_api_key(provider: ProviderType) -> crate::Result<()> {
    let var = env_var(provider);

    if std::env::var(var).is_ok() {
        return Ok(());
    }

    let agent = config::load_agent_config();
    if let Some(key) = agent.api_key(provider) {
        // SAFETY: setting a well-known env var with a valid string value
        unsafe { std::env::set_var(var, key) };
        return Ok(());
    }

    prompt_api_key(provider)
}

/// First-run key setup: ask for the key, store it, export it for the session.
fn prompt_api_key(provider: ProviderType) -> crate::Result<()> {
    println!("No API key found for {}.", provider);
    println!(
        "{}",
        format!("The key is stored in {} and read from {} when set.", config::CONFIG_FILE_NAME, env_var(provider)).dimmed()
    );

    let key = inquire::Text::new(&format!("Enter your {} API key:", provider)).prompt()?;
    let key = key.trim().to_string();
    if key.is_empty() {
        return Err(AnalystError::MissingApiKey(env_var(provider).to_string()).into());
    }

    let mut agent = config::load_agent_config();
    agent.set_api_key(provider, key.clone());
    agent.default_provider = provider.to_string();
    config::save_agent_config(&agent)?;

    // SAFETY: setting a well-known env var with a valid string value
    unsafe { std::env::set_var(env_var(provider), &key) };

    println!("{} API key saved.", "✓".green());
    Ok(())
}
