use super::super::dto::ErrorResponse;
use super::super::error::ApiError;
use super::super::state::ServerState;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use std::sync::Arc;
use taskgate_core::agent::AgentFactory;
use taskgate_core::orchestrator::RunError;
use taskgate_core::request::{AgentRequest, AgentRunResult};
use tokio_util::sync::CancellationToken;
use tracing::{error, warn};

#[utoipa::path(
    post,
    path = "/api/agent/run",
    tag = "agent",
    request_body = AgentRequest,
    responses(
        (status = 200, description = "Agent finished the task", body = AgentRunResult),
        (status = 422, description = "Malformed request", body = ErrorResponse),
        (status = 500, description = "Agent run failed", body = ErrorResponse),
        (status = 503, description = "Agent configuration is missing", body = ErrorResponse)
    )
)]
pub async fn run_agent_handler<F: AgentFactory + 'static>(
    State(state): State<Arc<ServerState<F>>>,
    payload: Result<Json<AgentRequest>, JsonRejection>,
) -> Result<Json<AgentRunResult>, ApiError> {
    let Json(request) = payload?;

    // Fires if this handler is dropped before the run finishes, i.e. the
    // client went away.
    let cancel = CancellationToken::new();
    let _disconnect_guard = cancel.clone().drop_guard();

    let conversation_id = request.conversation_id.clone();
    let task_state = Arc::clone(&state);
    let task = tokio::spawn(async move {
        let outcome = task_state.service().handle(&request, &cancel).await;
        if let Err(RunError::Cancelled) = &outcome {
            warn!(
                conversation_id = request.conversation_id.as_str(),
                "Agent run cancelled before completion"
            );
        }
        outcome
    });

    let outcome = match task.await {
        Ok(outcome) => outcome,
        Err(join_error) => {
            error!(
                conversation_id = conversation_id.as_str(),
                error = %join_error,
                "Agent task aborted"
            );
            return Err(ApiError::Internal(join_error.to_string()));
        }
    };

    match outcome {
        Ok(result) => Ok(Json(result)),
        Err(RunError::ConfigurationMissing { path }) => {
            error!(
                conversation_id = conversation_id.as_str(),
                path = %path.display(),
                "Agent configuration file not found"
            );
            Err(ApiError::configuration_missing(&path))
        }
        Err(RunError::Cancelled) => Err(ApiError::Internal(RunError::Cancelled.to_string())),
        Err(RunError::Internal(message)) => {
            error!(
                conversation_id = conversation_id.as_str(),
                error = message.as_str(),
                "Error processing request"
            );
            Err(ApiError::Internal(message))
        }
    }
}
