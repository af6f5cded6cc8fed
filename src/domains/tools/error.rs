//! Tool-specific error types.
//!
//! A [`ToolError`] is a protocol-level failure: it is reported to the caller
//! as a JSON-RPC error, not as tool output. Content-level problems are
//! returned as [`ToolText::Inline`](super::ToolText::Inline) instead.

use rmcp::ErrorData as McpError;
use thiserror::Error;

/// Errors that abort a tool call.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ToolError {
    /// Invalid arguments were provided to the tool.
    #[error("Invalid arguments: {0}")]
    InvalidParams(String),

    /// The tool could not complete because of an upstream failure.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    /// Create a new "invalid params" error.
    pub fn invalid_params(msg: impl Into<String>) -> Self {
        Self::InvalidParams(msg.into())
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl From<ToolError> for McpError {
    fn from(err: ToolError) -> Self {
        match err {
            ToolError::InvalidParams(msg) => McpError::invalid_params(msg, None),
            ToolError::Internal(msg) => McpError::internal_error(msg, None),
        }
    }
}
