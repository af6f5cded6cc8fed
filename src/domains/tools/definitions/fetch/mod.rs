//! Fetch tool definition.
//!
//! Retrieves a URL, simplifies HTML pages to markdown and returns one
//! character window of the result. Callers page through long documents by
//! following the `start_index` suggested in the continuation marker.

mod client;
mod paginate;
mod simplify;

pub use client::{FetchedPage, fetch_url, is_html};
pub use paginate::{Page, paginate};
pub use simplify::{extract_content_from_html, to_markdown};

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::Tool,
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};
use url::Url;

use crate::core::config::{Config, FetchConfig};
use crate::domains::tools::{RichToolDescription, ToolError, ToolText};

/// Exclusive upper bound for `max_length`.
pub const MAX_LENGTH_LIMIT: usize = 1_000_000;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the fetch tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct FetchParams {
    /// URL to fetch.
    #[schemars(description = "URL to fetch")]
    pub url: String,

    /// Maximum number of characters to return.
    #[serde(default = "default_max_length")]
    #[schemars(
        description = "Maximum number of characters to return",
        range(min = 1, max = 999_999)
    )]
    pub max_length: usize,

    /// Character offset to start from.
    #[serde(default)]
    #[schemars(
        description = "Start content from this character index, usually the value suggested by a previous truncated call"
    )]
    pub start_index: usize,

    /// Return the page without HTML simplification.
    #[serde(default)]
    #[schemars(description = "Get the actual page content without simplification")]
    pub raw: bool,
}

fn default_max_length() -> usize {
    5000
}

impl FetchParams {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_length: default_max_length(),
            start_index: 0,
            raw: false,
        }
    }

    /// Check the bounds the schema declares and parse the URL.
    fn validate(&self) -> Result<Url, ToolError> {
        let url = self.url.trim();
        if url.is_empty() {
            return Err(ToolError::invalid_params("URL is required"));
        }

        if self.max_length == 0 || self.max_length >= MAX_LENGTH_LIMIT {
            return Err(ToolError::invalid_params(format!(
                "max_length must be greater than 0 and less than {MAX_LENGTH_LIMIT}"
            )));
        }

        let parsed = Url::parse(url)
            .map_err(|e| ToolError::invalid_params(format!("Invalid URL {url:?}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ToolError::invalid_params(format!(
                "Unsupported URL scheme: {}",
                parsed.scheme()
            )));
        }
        Ok(parsed)
    }
}

/// Select the requested window of fetched content. Inline errors from the
/// fetch stage are returned whole, whatever the offset.
fn page_body(content: ToolText, start_index: usize, max_length: usize) -> ToolText {
    match content {
        ToolText::Content(text) => paginate(&text, start_index, max_length).into_tool_text(),
        inline @ ToolText::Inline { .. } => inline,
    }
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Fetch tool - retrieves a URL and returns simplified, paginated content.
pub struct FetchTool;

impl FetchTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "fetch";

    /// Tool description shown to clients.
    pub const DESCRIPTION: RichToolDescription = RichToolDescription {
        description: "Fetch a URL and return its content.",
        use_when: "When the user provides a URL and asks for its content.",
        side_effects: Some("Returns the content in simplified format or raw HTML."),
    };

    /// Execute the tool logic.
    ///
    /// Bad parameters and network or status failures are returned as
    /// [`ToolError`]; exhausted pages and failed simplification come back as
    /// inline errors inside a successful [`ToolText`].
    #[instrument(skip_all, fields(url = %params.url, start_index = params.start_index))]
    pub async fn execute(params: &FetchParams, config: &FetchConfig) -> Result<ToolText, ToolError> {
        let url = params.validate()?;
        info!("Fetch tool called (max_length={}, raw={})", params.max_length, params.raw);

        let FetchedPage { content, prefix } = fetch_url(&url, config, params.raw).await?;

        let body = page_body(content, params.start_index, params.max_length);

        Ok(body.with_preamble(&format!("{prefix}Contents of {url}:\n")))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.to_json().into()),
            input_schema: cached_schema_for_type::<FetchParams>(),
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
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let config = config.clone();
            async move {
                let params: FetchParams = serde_json::from_value(serde_json::Value::Object(args))
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                let text = Self::execute(&params, &config.tools.fetch).await?;
                Ok::<_, McpError>(text.into_call_result())
            }
            .boxed()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
