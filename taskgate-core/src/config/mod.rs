pub mod agent;
pub mod error;
pub mod gateway;
pub mod loader;

pub use agent::{AgentConfig, LlmSettings};
pub use error::ConfigError;
pub use gateway::GatewayConfig;
pub use loader::{ensure_env_loaded, expand_path};
