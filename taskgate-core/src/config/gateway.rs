use super::error::ConfigError;
use super::loader::{expand_path, read_toml};
use crate::constants::{AGENT_CONFIG_PATH, DEFAULT_BIND, DEFAULT_TITLE, GATEWAY_CONFIG_PATH};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tracing::info;

/// Immutable process configuration, built once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    pub bind: SocketAddr,
    pub title: String,
    pub version: String,
    /// Agent configuration file, read on every agent construction.
    pub agent_config: PathBuf,
}

#[derive(Debug, Deserialize, Default)]
struct RawGatewayConfig {
    bind: Option<String>,
    title: Option<String>,
    version: Option<String>,
    agent_config: Option<String>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND,
            title: DEFAULT_TITLE.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            agent_config: PathBuf::from(AGENT_CONFIG_PATH),
        }
    }
}

impl GatewayConfig {
    /// Loads the gateway config; an absent file at the default location
    /// yields defaults, an absent explicit path is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let raw = match path {
            Some(path) => read_toml::<RawGatewayConfig>(path)?,
            None => match read_toml::<RawGatewayConfig>(Path::new(GATEWAY_CONFIG_PATH)) {
                Ok(raw) => raw,
                Err(ConfigError::NotFound { .. }) => {
                    info!("No gateway config file found, using defaults");
                    RawGatewayConfig::default()
                }
                Err(error) => return Err(error),
            },
        };
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawGatewayConfig) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let bind = match raw.bind {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidBind { value })?,
            None => defaults.bind,
        };

        Ok(Self {
            bind,
            title: raw.title.unwrap_or(defaults.title),
            version: raw.version.unwrap_or(defaults.version),
            agent_config: raw
                .agent_config
                .map(|path| expand_path(&path))
                .unwrap_or(defaults.agent_config),
        })
    }

    pub fn with_bind(mut self, bind: SocketAddr) -> Self {
        self.bind = bind;
        self
    }

    pub fn with_agent_config(mut self, path: PathBuf) -> Self {
        self.agent_config = path;
        self
    }
}
