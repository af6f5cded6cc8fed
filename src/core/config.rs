//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, a `.env` file, or defaults.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Resume location used when `MCP_RESUME_PATH` is unset.
const DEFAULT_RESUME_PATH: &str = "resume.pdf";

/// Main configuration structure for the MCP server.
///
/// This struct contains all configurable aspects of the server, organized
/// by concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Bearer authentication configuration.
    pub auth: AuthConfig,

    /// Tools domain configuration.
    pub tools: ToolsConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// Bearer authentication configuration.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    /// The single static secret accepted as a bearer token.
    pub token: Option<String>,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// Configuration for the tools domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsConfig {
    /// Path of the PDF served by the `resume` tool.
    pub resume_path: PathBuf,

    /// Identifier returned by the `validate` tool (digits, no leading '+').
    pub validate_number: Option<String>,

    /// Settings for the `fetch` tool.
    pub fetch: FetchConfig,
}

/// Configuration for outbound fetches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// User-Agent header sent with every request.
    pub user_agent: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            resume_path: PathBuf::from(DEFAULT_RESUME_PATH),
            validate_number: None,
            fetch: FetchConfig::default(),
        }
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: "Puch/1.0 (Autonomous)".to_string(),
            timeout_secs: 30,
        }
    }
}

impl FetchConfig {
    /// Request timeout as a [`std::time::Duration`].
    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "personal-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
            auth: AuthConfig::default(),
            tools: ToolsConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_AUTH_TOKEN`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        if let Ok(token) = std::env::var("MCP_AUTH_TOKEN") {
            if !token.is_empty() {
                config.auth.token = Some(token);
            }
        }

        if let Ok(number) = std::env::var("MCP_VALIDATE_NUMBER") {
            config.tools.validate_number = Some(number.trim_start_matches('+').to_string());
        }

        if let Ok(path) = std::env::var("MCP_RESUME_PATH") {
            config.tools.resume_path = PathBuf::from(path);
        }

        if let Ok(user_agent) = std::env::var("MCP_FETCH_USER_AGENT") {
            config.tools.fetch.user_agent = user_agent;
        }

        if let Ok(timeout) = std::env::var("MCP_FETCH_TIMEOUT_SECS") {
            config.tools.fetch.timeout_secs = timeout.parse().unwrap_or(30);
        }

        config
    }

    /// Check that the values required to serve clients are present.
    pub fn validate(&self) -> Result<()> {
        match self.tools.validate_number.as_deref() {
            Some(number) if !number.is_empty() => {}
            _ => return Err(Error::config("MCP_VALIDATE_NUMBER must be set")),
        }

        if self.transport.requires_auth() && self.auth.token.is_none() {
            return Err(Error::config(
                "MCP_AUTH_TOKEN must be set when serving over HTTP",
            ));
        }

        Ok(())
    }

    /// Non-fatal configuration problems, reported once logging is up.
    pub fn startup_warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.tools.resume_path == PathBuf::from(DEFAULT_RESUME_PATH) {
            warnings.push(format!(
                "MCP_RESUME_PATH not set - serving resume from {:?}",
                self.tools.resume_path
            ));
        }

        warnings
    }
}
