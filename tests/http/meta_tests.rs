// Meta endpoint tests - root, health, fallback, CORS and API docs

#[path = "../common/mod.rs"]
mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use common::{Script, ScriptedFactory, TEST_TITLE, TEST_VERSION, get, router_with, send};
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn root_reports_running_status() {
    let router = router_with(ScriptedFactory::new(Script::default()));

    let (status, body) = send(router, get("/")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"message": TEST_TITLE, "status": "running", "version": TEST_VERSION})
    );
}

#[tokio::test]
async fn health_reports_healthy() {
    let router = router_with(ScriptedFactory::new(Script::default()));

    let (status, body) = send(router, get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "healthy"}));
}

#[tokio::test]
async fn unknown_route_is_a_json_not_found() {
    let router = router_with(ScriptedFactory::new(Script::default()));

    let (status, body) = send(router, get("/api/agent/missing")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"detail": "Not Found"}));
}

#[tokio::test]
async fn preflight_allows_any_origin_with_credentials() {
    let router = router_with(ScriptedFactory::new(Script::default()));
    let request = Request::builder()
        .method("OPTIONS")
        .uri("/api/agent/run")
        .header(header::ORIGIN, "https://app.example.com")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type,x-trace-id")
        .body(Body::empty())
        .expect("valid request");

    let response = router.oneshot(request).await.expect("router responds");
    let headers = response.headers();

    assert!(response.status().is_success());
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "https://app.example.com"
    );
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "POST");
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_HEADERS],
        "content-type,x-trace-id"
    );
}

#[tokio::test]
async fn simple_request_echoes_origin() {
    let router = router_with(ScriptedFactory::new(Script::default()));
    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .header(header::ORIGIN, "http://localhost:5173")
        .body(Body::empty())
        .expect("valid request");

    let response = router.oneshot(request).await.expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:5173"
    );
}

#[tokio::test]
async fn openapi_document_lists_the_run_endpoint() {
    let router = router_with(ScriptedFactory::new(Script::default()));

    let (status, body) = send(router, get("/api-doc/openapi.json")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/agent/run"]["post"].is_object());
    assert!(body["paths"]["/health"]["get"].is_object());
}
