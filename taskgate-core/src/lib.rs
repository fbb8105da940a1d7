//! Core of the agent-run gateway.
//!
//! - [`domain`] holds the request-scoped wire types and the agent message log.
//! - [`application::agent`] is the contract an agent runtime must satisfy.
//! - [`application::orchestrator`] drives one agent run per request.
//! - [`infrastructure`] ships an LLM-backed implementation of that contract.

pub mod application;
pub mod config;
pub mod constants;
pub mod domain;
pub mod infrastructure;

pub use application::{agent, orchestrator};
pub use config::{AgentConfig, ConfigError, GatewayConfig};
pub use domain::{request, types};
pub use infrastructure::{model, runtime};
