use super::dto::{ErrorResponse, HealthResponse, RootResponse};
use super::routes;
use taskgate_core::request::{AgentRequest, AgentRunResult, ConversationTurn, TurnRole};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::meta::root_handler,
        routes::meta::health_handler,
        routes::agent::run_agent_handler
    ),
    components(
        schemas(
            AgentRequest,
            AgentRunResult,
            ConversationTurn,
            TurnRole,
            RootResponse,
            HealthResponse,
            ErrorResponse
        )
    ),
    tags(
        (name = "meta", description = "Service status"),
        (name = "agent", description = "Run an autonomous agent to completion")
    )
)]
pub(super) struct ApiDoc;
