use super::docs::ApiDoc;
use super::routes;
use super::state::ServerState;
use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;
use taskgate_core::agent::AgentFactory;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Builds the full application router around a shared state.
pub fn build_router<F>(state: Arc<ServerState<F>>) -> Router
where
    F: AgentFactory + 'static,
{
    // Credentials forbid wildcard CORS headers, so the request's own origin,
    // method and headers are echoed back instead.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .route("/", get(routes::meta::root_handler::<F>))
        .route("/health", get(routes::meta::health_handler))
        .route("/api/agent/run", post(routes::agent::run_agent_handler::<F>))
        .fallback(routes::meta::not_found_handler)
        .layer(cors)
        .with_state(state)
}
