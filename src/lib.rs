//! Aare.guru MCP Server Library
//!
//! This crate exposes the Aare.guru river data API as Model Context
//! Protocol tools. Each tool translates into one GET request against the
//! upstream API and returns the JSON payload under a short header.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, the protocol handler and stdio serving
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: Tool catalog, parameter resolution, upstream access and dispatch
//!
//! # Example
//!
//! ```rust,no_run
//! use aareguru_mcp_server::core::{Config, McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let server = McpServer::new(Config::from_env())?;
//!     let result = server
//!         .call_tool("get_today_summary", serde_json::json!({ "city": "thun" }).as_object().cloned())
//!         .await;
//!     println!("{:?}", result.content);
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
