//! Widget data tool definition.

use super::{ToolDefinition, common_params, no_precheck};
use crate::core::config::UpstreamConfig;
use crate::domains::tools::params::ToolArguments;

/// Widget data tool - current readings for all locations at once.
pub struct WidgetDataTool;

impl WidgetDataTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_widget_data";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Get current Aare data for all locations at once, suitable for widgets/dashboards";

    pub const ENDPOINT: &'static str = "/widget";

    pub fn definition(upstream: &UpstreamConfig) -> ToolDefinition {
        ToolDefinition {
            name: Self::NAME,
            description: Self::DESCRIPTION,
            endpoint: Self::ENDPOINT,
            params: common_params(upstream),
            precheck: no_precheck,
            header: Self::header,
        }
    }

    fn header(_args: &ToolArguments) -> String {
        "Aare widget data for all locations".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_has_no_city_param() {
        let def = WidgetDataTool::definition(&UpstreamConfig::default());
        assert!(def.param("city").is_none());
        assert_eq!(def.endpoint, "/widget");
    }
}
