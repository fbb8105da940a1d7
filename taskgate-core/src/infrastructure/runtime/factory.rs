use super::agent::LlmAgent;
use crate::agent::{AgentFactory, ConstructError};
use crate::config::AgentConfig;
use crate::model::OpenAiProvider;
use std::path::PathBuf;
use tracing::debug;

/// Builds [`LlmAgent`]s from the agent configuration file.
///
/// The file is read on every construction, so a missing file surfaces as
/// [`ConstructError::ConfigurationMissing`] per request and can be fixed
/// without restarting the gateway.
#[derive(Debug, Clone)]
pub struct LlmAgentFactory {
    config_path: PathBuf,
}

impl LlmAgentFactory {
    pub fn new(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }
}

impl AgentFactory for LlmAgentFactory {
    type Agent = LlmAgent<OpenAiProvider>;

    fn construct(&self) -> Result<Self::Agent, ConstructError> {
        let config = AgentConfig::load(&self.config_path)?;
        debug!(
            model = config.llm.model.as_str(),
            max_steps = config.max_steps,
            "Constructing LLM agent"
        );
        let provider = OpenAiProvider::new(&config.llm);
        Ok(LlmAgent::new(provider, config))
    }
}
