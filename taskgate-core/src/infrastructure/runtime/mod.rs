//! # LLM Agent Runtime
//!
//! A compact multi-step agent implementing
//! [`AgentRuntime`](crate::agent::AgentRuntime) on top of a
//! [`ModelProvider`](crate::model::ModelProvider).
//!
//! ## Agent Loop
//!
//! 1. Seed memory with the system prompt, caller history and the task
//! 2. Ask the model for one JSON directive per step
//! 3. `think` records the thought and asks the model to continue
//! 4. `final` records the answer and ends the run
//! 5. The run stops at `max_steps` if the model never finishes

mod agent;
mod directive;
mod factory;

pub use agent::LlmAgent;
pub use factory::LlmAgentFactory;
