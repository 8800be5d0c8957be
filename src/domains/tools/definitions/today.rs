//! Today summary tool definition.

use super::{ToolDefinition, city_param, common_params, display_city, no_precheck};
use crate::core::config::UpstreamConfig;
use crate::domains::tools::params::ToolArguments;

/// Today summary tool - minimal temperature and swimming recommendation.
pub struct TodaySummaryTool;

impl TodaySummaryTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_today_summary";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Get minimal current Aare temperature and swimming recommendation for a location";

    pub const ENDPOINT: &'static str = "/today";

    pub fn definition(upstream: &UpstreamConfig) -> ToolDefinition {
        let mut params = vec![city_param()];
        params.extend(common_params(upstream));

        ToolDefinition {
            name: Self::NAME,
            description: Self::DESCRIPTION,
            endpoint: Self::ENDPOINT,
            params,
            precheck: no_precheck,
            header: Self::header,
        }
    }

    fn header(args: &ToolArguments) -> String {
        format!("Today's Aare summary for {}", display_city(args))
    }
}
