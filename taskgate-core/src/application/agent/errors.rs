use crate::config::ConfigError;
use crate::infrastructure::model::ModelError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConstructError {
    #[error("agent configuration not found at {path:?}")]
    ConfigurationMissing { path: PathBuf },
    #[error("invalid agent configuration: {0}")]
    InvalidConfiguration(#[source] ConfigError),
    #[error("failed to construct agent: {0}")]
    Other(String),
}

impl From<ConfigError> for ConstructError {
    fn from(error: ConfigError) -> Self {
        match error {
            ConfigError::NotFound { path } => ConstructError::ConfigurationMissing { path },
            other => ConstructError::InvalidConfiguration(other),
        }
    }
}

#[derive(Debug, Error)]
pub enum AgentError {
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error("agent run cancelled")]
    Cancelled,
    #[error("{0}")]
    Failed(String),
}

impl AgentError {
    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed(reason.into())
    }
}
