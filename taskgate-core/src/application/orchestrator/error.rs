use crate::application::agent::{AgentError, ConstructError};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunError {
    /// Required setup is absent; the run was never attempted.
    #[error("agent configuration missing at {path:?}")]
    ConfigurationMissing { path: PathBuf },
    #[error("{0}")]
    Internal(String),
    #[error("agent run cancelled")]
    Cancelled,
}

impl From<ConstructError> for RunError {
    fn from(error: ConstructError) -> Self {
        match error {
            ConstructError::ConfigurationMissing { path } => RunError::ConfigurationMissing { path },
            other => RunError::Internal(other.to_string()),
        }
    }
}

impl From<AgentError> for RunError {
    fn from(error: AgentError) -> Self {
        match error {
            AgentError::Cancelled => RunError::Cancelled,
            other => RunError::Internal(other.to_string()),
        }
    }
}
