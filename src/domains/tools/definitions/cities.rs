//! Cities tool definition.
//!
//! Lists every location for which Aare.guru publishes data.

use super::{ToolDefinition, common_params, no_precheck};
use crate::core::config::UpstreamConfig;
use crate::domains::tools::params::ToolArguments;

/// Cities tool - lists available monitoring locations.
pub struct CitiesTool;

impl CitiesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_cities";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Get list of all available cities/locations with Aare data";

    pub const ENDPOINT: &'static str = "/cities";

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
        "Available Aare monitoring locations".to_string()
    }
}
