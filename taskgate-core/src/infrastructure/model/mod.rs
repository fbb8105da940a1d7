//! Model provider layer used by the LLM-backed agent.

mod openai;
mod traits;
mod types;

pub use openai::OpenAiProvider;
pub use traits::ModelProvider;
pub use types::{ModelError, ModelRequest, ModelResponse};
