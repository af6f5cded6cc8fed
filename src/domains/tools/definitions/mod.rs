//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own module for better maintainability.

pub mod fetch;
pub mod resume;
pub mod validate;

pub use fetch::{FetchParams, FetchTool};
pub use resume::ResumeTool;
pub use validate::ValidateTool;

use rmcp::model::JsonObject;
use std::sync::Arc;

/// Input schema for tools that take no arguments.
pub(crate) fn empty_input_schema() -> Arc<JsonObject> {
    let mut schema = JsonObject::new();
    schema.insert("type".to_string(), serde_json::json!("object"));
    schema.insert("properties".to_string(), serde_json::json!({}));
    Arc::new(schema)
}
