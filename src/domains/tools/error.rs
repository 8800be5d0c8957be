//! Tool-specific error types.
//!
//! The `Display` output of each variant is the message shown to clients
//! after the `Error: ` prefix added by the dispatcher.

use thiserror::Error;

/// Result type for tool pipeline operations.
pub type ToolResult<T> = std::result::Result<T, ToolError>;

/// Errors that can occur while handling a tool invocation.
#[derive(Debug, Error)]
pub enum ToolError {
    /// A required parameter is missing, empty, or malformed.
    #[error("{0}")]
    Validation(String),

    /// The invocation names a tool that is not in the catalog.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// The upstream service answered with a non-success status.
    #[error("API request failed: {status} {reason}")]
    Upstream { status: u16, reason: String },

    /// The upstream body could not be parsed as JSON.
    #[error("Invalid JSON in API response: {0}")]
    Parse(String),

    /// Anything else raised inside the pipeline (network, serialization).
    #[error("{0}")]
    Unexpected(String),
}

impl ToolError {
    /// Create a new validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a validation error for a missing required parameter.
    pub fn missing_parameter(name: &str) -> Self {
        Self::Validation(format!("missing required parameter: {}", name))
    }

    /// Create a new "unknown tool" error.
    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::UnknownTool(name.into())
    }

    /// Create an upstream status error.
    pub fn upstream(status: u16, reason: impl Into<String>) -> Self {
        Self::Upstream {
            status,
            reason: reason.into(),
        }
    }

    /// Create a new parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create a new unexpected error.
    pub fn unexpected(msg: impl Into<String>) -> Self {
        Self::Unexpected(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ToolError::unknown_tool("nope").to_string(),
            "Unknown tool: nope"
        );
        assert_eq!(
            ToolError::missing_parameter("city").to_string(),
            "missing required parameter: city"
        );
        assert_eq!(
            ToolError::upstream(503, "Service Unavailable").to_string(),
            "API request failed: 503 Service Unavailable"
        );
    }
}
