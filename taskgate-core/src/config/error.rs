use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration file not found at {path:?}")]
    NotFound { path: PathBuf },

    #[error("failed to read config from {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config from {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("missing required field '{field}' in configuration")]
    MissingField { field: &'static str },

    #[error("no API key configured for model '{model}' (set 'api_key' or 'api_key_env')")]
    MissingApiKey { model: String },

    #[error("invalid bind address '{value}'")]
    InvalidBind { value: String },
}
