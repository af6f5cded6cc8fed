//! Validate tool definition.
//!
//! Returns the owner's phone number so the calling platform can confirm
//! which server it is talking to.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute},
    model::{CallToolResult, Tool},
};
use std::sync::Arc;
use tracing::info;

use crate::core::config::Config;
use crate::domains::tools::ToolText;

use super::empty_input_schema;

/// Validate tool - returns the configured phone number.
pub struct ValidateTool;

impl ValidateTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "validate";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Returns the server owner's phone number (country code and number, no '+') for validation.";

    /// Execute the tool logic.
    pub fn execute(config: &Config) -> ToolText {
        info!("Validate tool called");
        ToolText::content(config.tools.validate_number.clone().unwrap_or_default())
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: empty_input_schema(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the rmcp router.
    pub fn create_route<S>(config: Arc<Config>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |_ctx: ToolCallContext<'_, S>| {
            let config = config.clone();
            async move { Ok::<CallToolResult, McpError>(Self::execute(&config).into_call_result()) }
                .boxed()
        })
    }
}
