//! # Agent Runtime Contract
//!
//! The gateway never reasons on its own; it drives an external multi-step
//! agent through the narrow contract defined here.
//!
//! ## Key Types
//!
//! - [`AgentFactory`] - builds one fresh agent per request
//! - [`AgentRuntime`] - a single agent instance: run, then read back its state
//! - [`ConstructError`] - construction failures, with missing configuration kept distinct
//! - [`AgentError`] - failures raised while the agent is running

mod contract;
mod errors;

pub use contract::{AgentFactory, AgentRuntime};
pub use errors::{AgentError, ConstructError};
