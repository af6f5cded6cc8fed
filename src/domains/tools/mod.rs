//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Tools are executable functions that can be called by MCP clients.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one module per tool)
//! - `router.rs` - ToolRouter builder used by every transport
//! - `registry.rs` - Central list of tool names and metadata
//! - `outcome.rs` - Successful tool output, including inline error markers
//! - `error.rs` - Protocol-level tool errors
//!
//! ## Adding a New Tool
//!
//! 1. Create a new module in `definitions/` (e.g., `my_tool.rs`)
//! 2. Define params, `execute()`, `to_tool()` and `create_route()`
//! 3. Export in `definitions/mod.rs`
//! 4. Add the route in `router.rs` using `with_route()`
//! 5. List it in `registry.rs`

pub mod definitions;
mod description;
mod error;
mod outcome;
mod registry;
pub mod router;

pub use description::RichToolDescription;
pub use error::ToolError;
pub use outcome::{InlineError, ToolText};
pub use registry::ToolRegistry;
pub use router::build_tool_router;
