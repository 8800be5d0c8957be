//! Response formatting.

use rmcp::model::{CallToolResult, Content};
use serde_json::Value;

use super::error::{ToolError, ToolResult};

/// Wrap an upstream payload into a successful result: the header, a blank
/// line, then the payload as pretty-printed JSON.
pub fn format_payload(header: &str, payload: &Value) -> ToolResult<CallToolResult> {
    let pretty = serde_json::to_string_pretty(payload)
        .map_err(|e| ToolError::unexpected(format!("Failed to format response: {}", e)))?;

    Ok(CallToolResult::success(vec![Content::text(format!(
        "{}:\n\n{}",
        header, pretty
    ))]))
}

/// Result returned for any failed invocation.
pub fn error_result(error: &ToolError) -> CallToolResult {
    CallToolResult::error(vec![Content::text(format!("Error: {}", error))])
}
