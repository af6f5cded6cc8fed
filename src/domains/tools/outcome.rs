//! Successful tool output.
//!
//! Every tool that returns normally produces a [`ToolText`]. It is either
//! real content or an inline error marker: a `<error>...</error>` string that
//! tells the caller about a content-level problem while the call itself
//! still succeeds.

use rmcp::model::{CallToolResult, Content};
use std::fmt;

/// A content-level problem, rendered as `<error>{message}</error>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineError {
    message: String,
}

impl InlineError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for InlineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<error>{}</error>", self.message)
    }
}

/// Text returned by a tool call that did not fail at the protocol level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolText {
    /// Real content.
    Content(String),

    /// An inline error marker, optionally preceded by context text.
    Inline { lead: String, error: InlineError },
}

impl ToolText {
    pub fn content(text: impl Into<String>) -> Self {
        Self::Content(text.into())
    }

    /// An inline error with no leading text.
    pub fn inline(message: impl Into<String>) -> Self {
        Self::Inline {
            lead: String::new(),
            error: InlineError::new(message),
        }
    }

    pub fn is_inline_error(&self) -> bool {
        matches!(self, Self::Inline { .. })
    }

    /// Prepend `preamble` to the rendered text, keeping the variant.
    pub fn with_preamble(self, preamble: &str) -> Self {
        match self {
            Self::Content(text) => Self::Content(format!("{preamble}{text}")),
            Self::Inline { lead, error } => Self::Inline {
                lead: format!("{preamble}{lead}"),
                error,
            },
        }
    }

    /// Render the text exactly as it is sent to the client.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Wrap as a successful MCP result with a single text item.
    pub fn into_call_result(self) -> CallToolResult {
        CallToolResult::success(vec![Content::text(self.render())])
    }
}

impl fmt::Display for ToolText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Content(text) => f.write_str(text),
            Self::Inline { lead, error } => write!(f, "{lead}{error}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_rendering() {
        let text = ToolText::inline("Resume file not found.");
        assert!(text.is_inline_error());
        assert_eq!(text.render(), "<error>Resume file not found.</error>");
    }

    #[test]
    fn test_preamble_keeps_variant() {
        let text = ToolText::inline("No more content available.").with_preamble("Contents of x:\n");
        assert!(text.is_inline_error());
        assert_eq!(
            text.render(),
            "Contents of x:\n<error>No more content available.</error>"
        );

        let text = ToolText::content("body").with_preamble("Contents of x:\n");
        assert_eq!(text, ToolText::Content("Contents of x:\nbody".to_string()));
    }

    #[test]
    fn test_call_result_is_success() {
        let result = ToolText::inline("oops").into_call_result();
        assert_ne!(result.is_error, Some(true));
        assert_eq!(result.content.len(), 1);
    }
}
