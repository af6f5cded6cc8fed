//! Resume tool definition.
//!
//! Reads the owner's PDF resume from the configured path and returns its
//! text. Every failure is reported inline; nothing escapes as a protocol
//! error.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute},
    model::Tool,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::core::config::Config;
use crate::domains::tools::{RichToolDescription, ToolText};

use super::empty_input_schema;

const NOT_FOUND: &str = "Resume file not found.";
const EMPTY_TEXT: &str = "Could not extract text from PDF.";

/// Resume tool - serves the configured PDF as plain text.
pub struct ResumeTool;

impl ResumeTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "resume";

    /// Tool description shown to clients.
    pub const DESCRIPTION: RichToolDescription = RichToolDescription {
        description: "Serve your resume in plain markdown.",
        use_when: "Anyone asks for your resume; this must return raw markdown, no extra formatting.",
        side_effects: None,
    };

    /// Execute the tool logic.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub async fn execute(path: &Path) -> ToolText {
        info!("Resume tool called");

        if !matches!(tokio::fs::try_exists(path).await, Ok(true)) {
            warn!("Resume file not found");
            return ToolText::inline(NOT_FOUND);
        }

        let owned: PathBuf = path.to_path_buf();
        let extracted = tokio::task::spawn_blocking(move || pdf_extract::extract_text(&owned)).await;

        match extracted {
            Ok(Ok(text)) => Self::check_text(text),
            Ok(Err(e)) => {
                warn!("PDF extraction failed: {}", e);
                ToolText::inline(format!("Failed to extract resume: {e}"))
            }
            Err(e) => {
                warn!("PDF extraction task failed: {}", e);
                ToolText::inline(format!("Failed to extract resume: {e}"))
            }
        }
    }

    /// Reject text that is empty once whitespace is ignored; otherwise
    /// return it untouched.
    fn check_text(text: String) -> ToolText {
        if text.trim().is_empty() {
            warn!("PDF contained no extractable text");
            ToolText::inline(EMPTY_TEXT)
        } else {
            info!("Extracted {} characters from resume", text.chars().count());
            ToolText::Content(text)
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.to_json().into()),
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
            async move {
                let text = Self::execute(&config.tools.resume_path).await;
                Ok::<_, McpError>(text.into_call_result())
            }
            .boxed()
        })
    }
}
