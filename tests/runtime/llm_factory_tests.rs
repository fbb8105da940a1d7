// LLM agent factory tests - the real factory behind the HTTP surface
//
// No model endpoint is contacted: every case fails during construction.

#[path = "../common/mod.rs"]
mod common;

use axum::http::StatusCode;
use common::{post_json, router_with, send};
use serde_json::json;
use std::fs;
use taskgate_core::runtime::LlmAgentFactory;
use tempfile::tempdir;

#[tokio::test]
async fn absent_config_file_yields_503_guidance() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    let router = router_with(LlmAgentFactory::new(&path));

    let (status, body) = send(
        router,
        post_json(
            "/api/agent/run",
            &json!({"conversationId": "c1", "message": "2+2?", "history": []}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    let detail = body["detail"].as_str().expect("detail text");
    assert!(detail.starts_with("LLM configuration not set up."));
    assert!(detail.contains(&path.display().to_string()));
}

#[tokio::test]
async fn invalid_config_file_yields_500_with_reason() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[llm]
base_url = "https://api.openai.com/v1"
api_key = "sk-test"
"#,
    )
    .expect("write config");
    let router = router_with(LlmAgentFactory::new(&path));

    let (status, body) = send(
        router,
        post_json(
            "/api/agent/run",
            &json!({"conversationId": "c1", "message": "task"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(
        body["detail"]
            .as_str()
            .expect("detail text")
            .contains("llm.model")
    );
}

#[tokio::test]
async fn config_created_after_startup_is_picked_up() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    let factory = LlmAgentFactory::new(&path);
    let router = router_with(factory);
    let request = json!({"conversationId": "c1", "message": "task"});

    let (before, _) = send(router.clone(), post_json("/api/agent/run", &request)).await;
    assert_eq!(before, StatusCode::SERVICE_UNAVAILABLE);

    // Present but unusable: proves the file is re-read per request without
    // reaching any model endpoint.
    fs::write(&path, "[agent]\nmax_steps = 1\n").expect("write config");
    let (after, _) = send(router, post_json("/api/agent/run", &request)).await;
    assert_eq!(after, StatusCode::INTERNAL_SERVER_ERROR);
}
