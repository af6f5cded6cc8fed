//! Transport service - orchestrates different transport types.
//!
//! This service provides a unified interface for starting the MCP server
//! with different transport mechanisms.

use tracing::info;

use super::TransportConfig;
use crate::core::{McpServer, Result};

#[cfg(feature = "stdio")]
use super::stdio::StdioTransport;

#[cfg(feature = "http")]
use super::http::HttpTransport;
#[cfg(feature = "http")]
use crate::core::security::BearerAuth;

/// Transport service - manages the transport layer for the MCP server.
pub struct TransportService {
    config: TransportConfig,
}

impl TransportService {
    /// Create a new transport service with the given configuration.
    pub fn new(config: TransportConfig) -> Self {
        Self { config }
    }

    /// Start the transport with the given MCP server.
    ///
    /// This method blocks until the transport is shut down. The bearer
    /// secret is taken from the server's configuration.
    pub async fn run(self, server: McpServer) -> Result<()> {
        info!("Starting transport: {}", self.config.description());

        match self.config {
            #[cfg(feature = "stdio")]
            TransportConfig::Stdio => StdioTransport::run(server).await?,
            #[cfg(feature = "http")]
            TransportConfig::Http(cfg) => {
                let token = server.config().auth.token.clone().ok_or_else(|| {
                    super::TransportError::init("no bearer token configured for HTTP transport")
                })?;
                HttpTransport::new(cfg, BearerAuth::new(token))
                    .run(server)
                    .await?
            }
        }

        Ok(())
    }
}

#[cfg(all(test, feature = "http"))]
mod tests {
    use super::*;
    use crate::core::{Config, Error, transport::TransportError};

    #[tokio::test]
    async fn test_http_without_token_fails_before_binding() {
        let mut config = Config::default();
        config.auth.token = None;
        let transport = TransportConfig::http(0, "127.0.0.1");

        let err = TransportService::new(transport)
            .run(McpServer::new(config))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            Error::Transport(TransportError::InitError(ref msg)) if msg.contains("bearer token")
        ));
    }
}
