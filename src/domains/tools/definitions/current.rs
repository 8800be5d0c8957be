//! Current conditions tool definition.
//!
//! Full current data for one location: water temperature, flow, weather
//! and forecasts.

use super::{ToolDefinition, city_param, common_params, display_city, no_precheck};
use crate::core::config::UpstreamConfig;
use crate::domains::tools::params::ToolArguments;

/// Current conditions tool.
pub struct CurrentConditionsTool;

impl CurrentConditionsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_current_conditions";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get comprehensive current Aare data for a specific location including temperature, flow, forecasts";

    pub const ENDPOINT: &'static str = "/current";

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
        format!("Current Aare conditions for {}", display_city(args))
    }
}
