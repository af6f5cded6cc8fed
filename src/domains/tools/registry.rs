//! Tool Registry - central list of all tools.
//!
//! This module provides the names and metadata of every tool the server
//! exposes. The router in `router.rs` must register the same set.

use rmcp::model::Tool;

use super::definitions::{FetchTool, ResumeTool, ValidateTool};

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - the single source of truth for tool metadata.
pub struct ToolRegistry;

impl ToolRegistry {
    /// Get all tool names.
    pub fn tool_names() -> Vec<&'static str> {
        vec![ResumeTool::NAME, ValidateTool::NAME, FetchTool::NAME]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            ResumeTool::to_tool(),
            ValidateTool::to_tool(),
            FetchTool::to_tool(),
        ]
    }

    /// Look up a tool's metadata by name.
    pub fn get_tool(name: &str) -> Option<Tool> {
        Self::get_all_tools().into_iter().find(|t| t.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_tool_names() {
        let names = ToolRegistry::tool_names();
        assert_eq!(names, vec!["resume", "validate", "fetch"]);
    }

    #[test]
    fn test_every_tool_has_description_and_object_schema() {
        for tool in ToolRegistry::get_all_tools() {
            assert!(tool.description.is_some(), "{} has no description", tool.name);
            assert_eq!(
                tool.input_schema.get("type"),
                Some(&serde_json::json!("object")),
                "{} schema is not an object",
                tool.name
            );
        }
    }

    #[test]
    fn test_get_tool() {
        assert!(ToolRegistry::get_tool("fetch").is_some());
        assert!(ToolRegistry::get_tool("unknown").is_none());
    }
}
