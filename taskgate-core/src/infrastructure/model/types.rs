//! Model types - Request, Response, and Error types

use crate::types::ChatMessage;
use thiserror::Error;

/// Model request for LLM chat
#[derive(Debug, Clone)]
pub struct ModelRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

/// Model response from LLM
#[derive(Debug, Clone)]
pub struct ModelResponse {
    pub content: String,
}

impl ModelResponse {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// Model errors
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("network error calling model '{model}': {source}")]
    Network {
        model: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("model '{model}' returned invalid response: {reason}")]
    InvalidResponse { model: String, reason: String },
}

impl ModelError {
    pub fn network(model: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Network {
            model: model.into(),
            source,
        }
    }

    pub fn invalid_response(model: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidResponse {
            model: model.into(),
            reason: reason.into(),
        }
    }
}
