use super::errors::{AgentError, ConstructError};
use crate::domain::request::ConversationTurn;
use crate::domain::types::ChatMessage;
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// One agent instance. Owned by exactly one request and dropped with it.
#[async_trait]
pub trait AgentRuntime: Send {
    /// Runs the task to completion and returns the agent's own result text.
    ///
    /// `history` is caller-supplied prior context. Implementations should stop
    /// at their next suspension point once `cancel` fires.
    async fn run(
        &mut self,
        task: &str,
        history: &[ConversationTurn],
        cancel: &CancellationToken,
    ) -> Result<String, AgentError>;

    /// Number of iterations completed by the last run.
    fn steps_taken(&self) -> usize;

    /// Ordered message log accumulated by the last run.
    fn messages(&self) -> &[ChatMessage];
}

/// Capability injected into the orchestration to create agents.
pub trait AgentFactory: Send + Sync {
    type Agent: AgentRuntime + 'static;

    fn construct(&self) -> Result<Self::Agent, ConstructError>;
}
