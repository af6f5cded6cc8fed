//! HTTP transport implementation.
//!
//! Serves the MCP streamable HTTP protocol through rmcp's
//! `StreamableHttpService`, mounted in an axum router behind a bearer-token
//! gate. `/health` and `/` stay public.

use axum::{
    Json, Router,
    extract::{Request, State},
    http::{StatusCode, header},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
};
use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use super::{TransportError, TransportResult, config::HttpConfig};
use crate::core::McpServer;
use crate::core::security::BearerAuth;

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
    auth: Arc<BearerAuth>,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config and bearer secret.
    pub fn new(config: HttpConfig, auth: BearerAuth) -> Self {
        Self {
            config,
            auth: Arc::new(auth),
        }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Run the HTTP transport until Ctrl-C.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.address();
        let app = build_router(server, &self.config, self.auth.clone());

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        let cors_status = if self.config.enable_cors {
            "enabled"
        } else {
            "disabled"
        };
        info!(
            "Ready - listening on {} (MCP streamable HTTP, CORS {})",
            addr, cors_status
        );
        info!("  → MCP:    {} (bearer auth)", self.config.rpc_path);
        info!("  → Health: GET /health");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| TransportError::http(e.to_string()))?;

        Ok(())
    }
}

/// Build the axum application: the authenticated MCP endpoint plus the
/// public info routes.
pub fn build_router(server: McpServer, config: &HttpConfig, auth: Arc<BearerAuth>) -> Router {
    let mcp_service = StreamableHttpService::new(
        move || Ok(server.clone()),
        LocalSessionManager::default().into(),
        StreamableHttpServerConfig::default(),
    );

    let protected = Router::new()
        .nest_service(&config.rpc_path, mcp_service)
        .layer(middleware::from_fn_with_state(auth, require_bearer));

    let public = Router::new()
        .route("/", get(root_handler))
        .with_state(Arc::<str>::from(config.rpc_path.as_str()));

    let mut app = Router::new()
        .route("/health", get(health_check))
        .merge(public)
        .merge(protected)
        .layer(TraceLayer::new_for_http());

    if config.enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app = app.layer(cors);
    }

    app
}

/// Reject requests whose `Authorization` header does not carry the secret.
///
/// On success the [`AccessToken`](crate::core::security::AccessToken) grant
/// is stored in the request extensions for the duration of the request.
async fn require_bearer(
    State(auth): State<Arc<BearerAuth>>,
    mut request: Request,
    next: Next,
) -> Response {
    let outcome = auth.authorize(
        request
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok()),
    );

    match outcome {
        Ok(grant) => {
            request.extensions_mut().insert(grant);
            next.run(request).await
        }
        Err(e) => {
            warn!("Rejected unauthenticated request to {}: {}", request.uri().path(), e);
            (
                StatusCode::UNAUTHORIZED,
                [(header::WWW_AUTHENTICATE, "Bearer")],
                Json(serde_json::json!({
                    "error": "invalid_token",
                    "error_description": e.to_string()
                })),
            )
                .into_response()
        }
    }
}

/// Root handler - provides API info, including where the MCP endpoint is
/// mounted.
async fn root_handler(State(rpc_path): State<Arc<str>>) -> impl IntoResponse {
    Json(serde_json::json!({
        "name": "Personal MCP Server",
        "version": env!("CARGO_PKG_VERSION"),
        "transport": "Streamable HTTP",
        "endpoints": {
            "mcp": &*rpc_path,
            "health": "/health"
        },
        "auth": "Bearer token"
    }))
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
