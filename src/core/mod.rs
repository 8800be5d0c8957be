//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the MCP server,
//! including error handling, configuration and the protocol handler.
//! Framing is left to rmcp's stdio transport.

pub mod config;
pub mod error;
pub mod server;

pub use config::{Config, UpstreamConfig};
pub use error::{Error, Result};
pub use server::McpServer;
