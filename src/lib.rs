//! Personal MCP Server Library
//!
//! This crate provides a small Model Context Protocol (MCP) server that
//! exposes three tools to remote clients over streamable HTTP, behind a
//! static bearer token:
//!
//! - **resume**: text of the owner's PDF resume
//! - **validate**: the owner's phone number
//! - **fetch**: a web page, simplified to markdown and paginated
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, bearer auth, the server handler
//!   and the transports
//! - **domains**: business logic organized by bounded contexts
//!   - **tools**: the MCP tools and their shared result types
//!
//! # Example
//!
//! ```rust,no_run
//! use personal_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     config.validate()?;
//!     let server = McpServer::new(config.clone());
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
