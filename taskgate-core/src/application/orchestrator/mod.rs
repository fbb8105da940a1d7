//! Request orchestration: one agent per request, run to completion, shaped
//! into an [`AgentRunResult`](crate::domain::request::AgentRunResult).

mod error;
mod policy;
mod service;

pub use error::RunError;
pub use policy::{final_answer, step_markers};
pub use service::RunService;
