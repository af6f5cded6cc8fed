//! Error types and handling for the MCP server.
//!
//! Startup failures from configuration and the transport layer share one
//! error type so `main` can report them uniformly.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the transport layer.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::transport::TransportError;

    #[test]
    fn test_config_error_display() {
        let err = Error::config("MCP_VALIDATE_NUMBER must be set");
        assert_eq!(
            err.to_string(),
            "Configuration error: MCP_VALIDATE_NUMBER must be set"
        );
    }

    #[test]
    fn test_transport_error_converts() {
        let err: Error = TransportError::init("no listener").into();
        assert!(matches!(
            err,
            Error::Transport(TransportError::InitError(ref msg)) if msg == "no listener"
        ));
        assert_eq!(
            err.to_string(),
            "Transport error: Server initialization error: no listener"
        );
    }
}
