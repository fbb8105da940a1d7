use super::error::RunError;
use super::policy::{final_answer, step_markers};
use crate::application::agent::{AgentFactory, AgentRuntime};
use crate::domain::request::{AgentRequest, AgentRunResult};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};
use uuid::Uuid;

/// Drives a single agent run per request.
///
/// Holds no per-request state; every call to [`RunService::handle`] builds
/// its own agent through the injected factory.
pub struct RunService<F: AgentFactory> {
    factory: F,
}

impl<F: AgentFactory> RunService<F> {
    pub fn new(factory: F) -> Self {
        Self { factory }
    }

    pub async fn handle(
        &self,
        request: &AgentRequest,
        cancel: &CancellationToken,
    ) -> Result<AgentRunResult, RunError> {
        let run_id = Uuid::new_v4();
        info!(
            conversation_id = request.conversation_id.as_str(),
            %run_id,
            history = request.history.len(),
            "Received agent run request"
        );

        let mut agent = self.factory.construct()?;
        debug!(%run_id, "Agent constructed");

        let raw_result = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(RunError::Cancelled),
            result = agent.run(&request.message, &request.history, cancel) => result?,
        };

        let steps = step_markers(agent.steps_taken());
        let response = final_answer(agent.messages().last(), &raw_result);
        debug!(
            %run_id,
            steps = steps.len(),
            answer_len = response.len(),
            "Agent run finished"
        );

        Ok(AgentRunResult {
            final_answer: response,
            steps_taken: steps,
        })
    }
}
