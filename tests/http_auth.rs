//! Integration tests for the bearer-token gate in front of the MCP endpoint
//!
//! Drives the axum router directly with `tower::ServiceExt::oneshot`; no
//! socket is bound.

#![cfg(feature = "http")]

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use personal_mcp_server::core::transport::HttpConfig;
use personal_mcp_server::core::transport::http::build_router;
use personal_mcp_server::core::{BearerAuth, Config, McpServer};
use std::sync::Arc;
use tower::ServiceExt;

const SECRET: &str = "test-secret-token";

fn app() -> axum::Router {
    let mut config = Config::default();
    config.auth.token = Some(SECRET.to_string());
    config.tools.validate_number = Some("15550100".to_string());

    build_router(
        McpServer::new(config),
        &HttpConfig::default(),
        Arc::new(BearerAuth::new(SECRET)),
    )
}

fn initialize_request(authorization: Option<&str>) -> Request<Body> {
    let body = serde_json::json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "initialize",
        "params": {
            "protocolVersion": "2025-03-26",
            "capabilities": {},
            "clientInfo": { "name": "test-client", "version": "0.0.1" }
        }
    });

    let mut builder = Request::builder()
        .method("POST")
        .uri("/mcp")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::ACCEPT, "application/json, text/event-stream");
    if let Some(value) = authorization {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

#[tokio::test]
async fn test_health_is_public() {
    let response = app()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_root_reports_configured_mcp_path() {
    let config = HttpConfig {
        rpc_path: "/custom-rpc".to_string(),
        ..Default::default()
    };
    let app = build_router(
        McpServer::new(Config::default()),
        &config,
        Arc::new(BearerAuth::new(SECRET)),
    );

    let response = app
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let info: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(info["endpoints"]["mcp"], "/custom-rpc");
    assert_eq!(info["endpoints"]["health"], "/health");
}

#[tokio::test]
async fn test_missing_token_is_rejected() {
    let response = app().oneshot(initialize_request(None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
        "Bearer"
    );
}

#[tokio::test]
async fn test_wrong_token_is_rejected() {
    let response = app()
        .oneshot(initialize_request(Some("Bearer not-the-secret")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_non_bearer_scheme_is_rejected() {
    let response = app()
        .oneshot(initialize_request(Some(&format!("Basic {SECRET}"))))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_valid_token_reaches_mcp_service() {
    let response = app()
        .oneshot(initialize_request(Some(&format!("Bearer {SECRET}"))))
        .await
        .unwrap();
    assert_ne!(response.status(), StatusCode::UNAUTHORIZED);
}
