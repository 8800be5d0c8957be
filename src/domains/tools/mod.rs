//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Every tool maps onto one GET request against the Aare.guru API.
//!
//! ## Architecture
//!
//! - `definitions/` - Catalog records (one file per tool)
//! - `registry.rs` - Catalog table and call dispatch
//! - `params.rs` - Invocation arguments and parameter resolution
//! - `upstream.rs` - Upstream request builder and HTTP client
//! - `format.rs` - Result formatting
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` (e.g., `my_tool.rs`)
//! 2. Define `NAME`, `DESCRIPTION`, `ENDPOINT`, `definition()` and its header
//! 3. Export in `definitions/mod.rs`
//! 4. Register in `ToolRegistry::catalog()`

pub mod definitions;
mod error;
mod format;
pub mod params;
mod registry;
pub mod upstream;


pub use definitions::ToolDefinition;
pub use error::{ToolError, ToolResult};
pub use params::{ResolvedParameters, ToolArguments};
pub use registry::ToolRegistry;
pub use upstream::{UpstreamClient, UpstreamRequest};
