//! Analysis service used by the setup wizard.
//!
//! The service is an opaque text-completion collaborator: it gets a prompt and
//! returns prose. Two call shapes exist — a free-form project analysis that is
//! rendered verbatim, and a follow-up question request whose response must
//! parse as a JSON list of category/question records. The rig-backed client
//! lives in [`client`]; the [`ProjectAnalyst`] trait is the seam that lets the
//! refinement engine run against a scripted analyst in tests.

pub mod client;
pub mod prompts;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::stack::ProjectSpec;

pub use client::{RigAnalyst, ensure_api_key};

/// Provider backing the analysis service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProviderType {
    OpenAI,
    Anthropic,
    #[default]
    Gemini,
}

impl std::fmt::Display for ProviderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderType::OpenAI => write!(f, "openai"),
            ProviderType::Anthropic => write!(f, "anthropic"),
            ProviderType::Gemini => write!(f, "gemini"),
        }
    }
}

impl std::str::FromStr for ProviderType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "openai" => Ok(ProviderType::OpenAI),
            "anthropic" => Ok(ProviderType::Anthropic),
            "gemini" | "google" => Ok(ProviderType::Gemini),
            _ => Err(format!(
                "Unknown provider: {}. Use: openai, anthropic, or gemini",
                s
            )),
        }
    }
}

/// Error types for the analysis service
#[derive(Debug, thiserror::Error)]
pub enum AnalystError {
    #[error("Missing API key. Set {0} environment variable.")]
    MissingApiKey(String),

    #[error("Provider error: {0}")]
    Provider(String),
}

pub type AnalystResult<T> = Result<T, AnalystError>;

/// A follow-up question produced by the analysis service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowUpQuestion {
    pub category: String,
    pub question: String,
}

impl FollowUpQuestion {
    /// The single generic question substituted when the service response does
    /// not parse as a question list.
    pub fn fallback() -> Self {
        Self {
            category: "General".to_string(),
            question: "What additional details would you like to share about your project?"
                .to_string(),
        }
    }
}

/// Text-completion collaborator for project analysis.
#[async_trait]
pub trait ProjectAnalyst {
    /// Produce a free-form analysis of the specification.
    async fn analyze(&self, spec: &ProjectSpec) -> AnalystResult<String>;

    /// Produce follow-up questions seeded with the current specification and
    /// the previous analysis. Implementations must not fail on a malformed
    /// response body — only on transport/provider errors.
    async fn follow_up_questions(
        &self,
        spec: &ProjectSpec,
        previous_analysis: &str,
    ) -> AnalystResult<Vec<FollowUpQuestion>>;
}

/// Parse a follow-up question response.
///
/// The payload must deserialize to a non-empty array of category/question
/// records, optionally wrapped in a markdown code fence. Anything else yields
/// exactly one fallback question so the round degrades instead of aborting.
pub fn parse_follow_up_questions(raw: &str) -> Vec<FollowUpQuestion> {
    let payload = strip_code_fence(raw);

    match serde_json::from_str::<Vec<FollowUpQuestion>>(payload) {
        Ok(questions) => {
            let questions: Vec<FollowUpQuestion> = questions
                .into_iter()
                .filter(|q| !q.question.trim().is_empty())
                .collect();
            if questions.is_empty() {
                log::warn!("analysis service returned an empty question list");
                vec![FollowUpQuestion::fallback()]
            } else {
                questions
            }
        }
        Err(e) => {
            log::warn!("could not parse follow-up questions: {}", e);
            vec![FollowUpQuestion::fallback()]
        }
    }
}

/// Strip a surrounding markdown code fence, tolerating an info string on the
/// opening fence.
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let body = rest.split_once('\n').map(|(_, b)| b).unwrap_or("");
    match body.trim_end().strip_suffix("```") {
        Some(inner) => inner.trim(),
        None => body.trim(),
    }
}
