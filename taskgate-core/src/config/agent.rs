use super::error::ConfigError;
use super::loader::read_toml;
use crate::constants::{DEFAULT_MAX_STEPS, DEFAULT_SYSTEM_PROMPT};
use serde::Deserialize;
use std::env;
use std::path::Path;
use tracing::warn;

/// Connection settings for the OpenAI-compatible model endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct LlmSettings {
    pub model: String,
    pub base_url: String,
    pub api_key: String,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

/// Agent configuration loaded from `config/config.toml`.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentConfig {
    pub llm: LlmSettings,
    pub max_steps: usize,
    pub system_prompt: String,
}

#[derive(Debug, Deserialize)]
struct RawAgentFile {
    llm: Option<RawLlm>,
    #[serde(default)]
    agent: RawAgent,
}

#[derive(Debug, Deserialize)]
struct RawLlm {
    model: Option<String>,
    base_url: Option<String>,
    api_key: Option<String>,
    api_key_env: Option<String>,
    max_tokens: Option<u32>,
    temperature: Option<f32>,
}

#[derive(Debug, Deserialize, Default)]
struct RawAgent {
    max_steps: Option<usize>,
    system_prompt: Option<String>,
}

impl AgentConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw: RawAgentFile = read_toml(path)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawAgentFile) -> Result<Self, ConfigError> {
        let llm = raw.llm.ok_or(ConfigError::MissingField { field: "llm" })?;
        let model = llm
            .model
            .filter(|m| !m.trim().is_empty())
            .ok_or(ConfigError::MissingField { field: "llm.model" })?;
        let base_url = llm
            .base_url
            .filter(|u| !u.trim().is_empty())
            .ok_or(ConfigError::MissingField {
                field: "llm.base_url",
            })?;
        let api_key = resolve_api_key(llm.api_key.as_deref(), llm.api_key_env.as_deref())
            .ok_or_else(|| ConfigError::MissingApiKey {
                model: model.clone(),
            })?;

        Ok(Self {
            llm: LlmSettings {
                model,
                base_url,
                api_key,
                max_tokens: llm.max_tokens,
                temperature: llm.temperature,
            },
            max_steps: raw
                .agent
                .max_steps
                .filter(|steps| *steps > 0)
                .unwrap_or(DEFAULT_MAX_STEPS),
            system_prompt: raw
                .agent
                .system_prompt
                .unwrap_or_else(|| DEFAULT_SYSTEM_PROMPT.to_string()),
        })
    }
}

/// A literal key wins; otherwise the named environment variable is read.
fn resolve_api_key(literal: Option<&str>, env_name: Option<&str>) -> Option<String> {
    if let Some(key) = literal.map(str::trim).filter(|k| !k.is_empty()) {
        return Some(key.to_string());
    }
    let name = env_name.map(str::trim).filter(|n| !n.is_empty())?;
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        Ok(_) => None,
        Err(err) => {
            warn!(env_var = name, %err, "API key environment variable is not set");
            None
        }
    }
}
