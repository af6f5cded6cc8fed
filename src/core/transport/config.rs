//! Transport configuration types.

use serde::{Deserialize, Serialize};

/// Transport configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransportConfig {
    /// Standard input/output transport for local clients.
    #[cfg(feature = "stdio")]
    Stdio,

    /// Streamable HTTP transport guarded by a bearer token.
    #[cfg(feature = "http")]
    Http(HttpConfig),
}

/// HTTP transport configuration.
#[cfg(feature = "http")]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Port number to listen on.
    pub port: u16,

    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Path the MCP endpoint is mounted at.
    #[serde(default = "default_rpc_path")]
    pub rpc_path: String,

    /// Enable CORS for browser clients.
    #[serde(default = "default_cors")]
    pub enable_cors: bool,
}

#[cfg(feature = "http")]
fn default_host() -> String {
    "0.0.0.0".to_string()
}

#[cfg(feature = "http")]
fn default_port() -> u16 {
    8085
}

#[cfg(feature = "http")]
fn default_rpc_path() -> String {
    "/mcp".to_string()
}

#[cfg(feature = "http")]
fn default_cors() -> bool {
    true
}

impl Default for TransportConfig {
    fn default() -> Self {
        #[cfg(feature = "http")]
        {
            return Self::Http(HttpConfig::default());
        }

        #[cfg(all(not(feature = "http"), feature = "stdio"))]
        {
            return Self::Stdio;
        }

        #[cfg(not(any(feature = "stdio", feature = "http")))]
        {
            compile_error!("At least one transport feature must be enabled: stdio or http");
        }
    }
}

#[cfg(feature = "http")]
impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
            rpc_path: default_rpc_path(),
            enable_cors: default_cors(),
        }
    }
}

impl TransportConfig {
    /// Create an HTTP transport config.
    #[cfg(feature = "http")]
    pub fn http(port: u16, host: impl Into<String>) -> Self {
        Self::Http(HttpConfig {
            port,
            host: host.into(),
            ..Default::default()
        })
    }

    /// Load transport config from environment variables.
    pub fn from_env() -> Self {
        let transport = std::env::var("MCP_TRANSPORT")
            .unwrap_or_default()
            .to_lowercase();

        match transport.as_str() {
            #[cfg(feature = "stdio")]
            "stdio" => Self::Stdio,
            #[cfg(feature = "http")]
            _ => {
                let port = std::env::var("MCP_HTTP_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or_else(default_port);
                let host = std::env::var("MCP_HTTP_HOST").unwrap_or_else(|_| default_host());
                let rpc_path =
                    std::env::var("MCP_HTTP_PATH").unwrap_or_else(|_| default_rpc_path());
                let enable_cors = std::env::var("MCP_HTTP_CORS")
                    .map(|v| v.to_lowercase() != "false" && v != "0")
                    .unwrap_or(true);
                Self::Http(HttpConfig {
                    port,
                    host,
                    rpc_path,
                    enable_cors,
                })
            }
            #[cfg(all(not(feature = "http"), feature = "stdio"))]
            _ => Self::Stdio,
        }
    }

    /// Get a description of this transport for logging.
    pub fn description(&self) -> String {
        match self {
            #[cfg(feature = "stdio")]
            Self::Stdio => "STDIO (local MCP mode)".to_string(),
            #[cfg(feature = "http")]
            Self::Http(cfg) => format!(
                "Streamable HTTP on {}:{}{}",
                cfg.host, cfg.port, cfg.rpc_path
            ),
        }
    }

    /// Whether clients must present a bearer token on this transport.
    pub fn requires_auth(&self) -> bool {
        #[cfg(feature = "http")]
        {
            matches!(self, Self::Http(_))
        }
        #[cfg(not(feature = "http"))]
        {
            false
        }
    }
}

#[cfg(all(test, feature = "http"))]
mod tests {
    use super::*;

    #[test]
    fn test_default_binds_all_interfaces_on_8085() {
        match TransportConfig::default() {
            TransportConfig::Http(cfg) => {
                assert_eq!(cfg.host, "0.0.0.0");
                assert_eq!(cfg.port, 8085);
                assert_eq!(cfg.rpc_path, "/mcp");
            }
            #[allow(unreachable_patterns)]
            _ => panic!("Expected HTTP transport"),
        }
    }

    #[test]
    fn test_http_requires_auth() {
        assert!(TransportConfig::http(9000, "127.0.0.1").requires_auth());
    }

    #[test]
    fn test_description_names_endpoint() {
        let desc = TransportConfig::http(9000, "127.0.0.1").description();
        assert_eq!(desc, "Streamable HTTP on 127.0.0.1:9000/mcp");
    }
}
