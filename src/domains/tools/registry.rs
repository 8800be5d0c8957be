//! Tool Registry - the catalog of tools and the call dispatcher.
//!
//! This module provides:
//! - The ordered catalog of tool definitions
//! - Tool metadata for listing
//! - Dispatch of tool calls through the request pipeline

use rmcp::model::{CallToolResult, JsonObject, Tool};
use tracing::{info, instrument, warn};

use super::definitions::{
    CitiesTool, CurrentConditionsTool, HistoricalDataTool, TodaySummaryTool, ToolDefinition,
    WidgetDataTool,
};
use super::error::{ToolError, ToolResult};
use super::format::{error_result, format_payload};
use super::params::{ToolArguments, resolve};
use super::upstream::{UpstreamClient, UpstreamRequest};
use crate::core::config::UpstreamConfig;

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - owns the catalog and dispatches calls.
///
/// The registry is immutable after construction and shares nothing
/// mutable between invocations.
pub struct ToolRegistry {
    upstream: UpstreamConfig,
    client: UpstreamClient,
    definitions: Vec<ToolDefinition>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(upstream: UpstreamConfig) -> ToolResult<Self> {
        Ok(Self {
            definitions: Self::catalog(&upstream),
            client: UpstreamClient::new()?,
            upstream,
        })
    }

    /// All tool definitions, in advertised order.
    ///
    /// This is the single source of truth for the available tools.
    fn catalog(upstream: &UpstreamConfig) -> Vec<ToolDefinition> {
        vec![
            CitiesTool::definition(upstream),
            CurrentConditionsTool::definition(upstream),
            TodaySummaryTool::definition(upstream),
            WidgetDataTool::definition(upstream),
            HistoricalDataTool::definition(upstream),
        ]
    }

    pub fn definitions(&self) -> &[ToolDefinition] {
        &self.definitions
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        self.definitions.iter().map(|d| d.name).collect()
    }

    /// Look up a definition by tool name.
    pub fn get(&self, name: &str) -> Option<&ToolDefinition> {
        self.definitions.iter().find(|d| d.name == name)
    }

    /// Get all tools as Tool models (metadata).
    pub fn list_tools(&self) -> Vec<Tool> {
        self.definitions.iter().map(ToolDefinition::to_tool).collect()
    }

    /// Dispatch a tool call.
    ///
    /// Every failure raised while handling the call is converted here into
    /// an `isError` result; nothing propagates to the transport.
    #[instrument(skip(self, arguments))]
    pub async fn call_tool(&self, name: &str, arguments: Option<JsonObject>) -> CallToolResult {
        info!("Tool called: {}", name);

        match self.dispatch(name, arguments).await {
            Ok(result) => result,
            Err(e) => {
                warn!("Tool {} failed: {}", name, e);
                error_result(&e)
            }
        }
    }

    async fn dispatch(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> ToolResult<CallToolResult> {
        let definition = self.get(name).ok_or_else(|| ToolError::unknown_tool(name))?;
        let args = ToolArguments::from_json(arguments)?;

        (definition.precheck)(&args)?;
        let params = resolve(definition, &args)?;
        let request = UpstreamRequest::build(&self.upstream, definition.endpoint, &params);
        let payload = self.client.execute(&request).await?;

        format_payload(&(definition.header)(&args), &payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> ToolRegistry {
        ToolRegistry::new(UpstreamConfig::default()).unwrap()
    }

    #[test]
    fn test_registry_tool_names() {
        let names = registry().tool_names();
        assert_eq!(
            names,
            vec![
                "get_cities",
                "get_current_conditions",
                "get_today_summary",
                "get_widget_data",
                "get_historical_data",
            ]
        );
    }

    #[test]
    fn test_names_are_unique() {
        let mut names = registry().tool_names();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 5);
    }

    #[test]
    fn test_every_listed_tool_resolves_to_one_entry() {
        let registry = registry();
        for tool in registry.list_tools() {
            let matches = registry
                .definitions()
                .iter()
                .filter(|d| d.name == tool.name)
                .count();
            assert_eq!(matches, 1, "tool {} should be dispatchable", tool.name);
        }
    }

    #[test]
    fn test_endpoints() {
        let registry = registry();
        let endpoint = |name| registry.get(name).map(|d| d.endpoint);
        assert_eq!(endpoint("get_cities"), Some("/cities"));
        assert_eq!(endpoint("get_current_conditions"), Some("/current"));
        assert_eq!(endpoint("get_today_summary"), Some("/today"));
        assert_eq!(endpoint("get_widget_data"), Some("/widget"));
        assert_eq!(endpoint("get_historical_data"), Some("/history"));
        assert_eq!(endpoint("unknown"), None);
    }
}
