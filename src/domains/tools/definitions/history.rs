//! Historical data tool definition.
//!
//! Time series of water temperature, flow and air temperature. `start` and
//! `end` are passed to the upstream verbatim: it accepts ISO dates, unix
//! timestamps and phrases such as `yesterday`, `-1 day` or `now`.

use super::{ParamSpec, ToolDefinition, common_params};
use crate::core::config::UpstreamConfig;
use crate::domains::tools::error::{ToolError, ToolResult};
use crate::domains::tools::params::ToolArguments;

/// Historical data tool.
pub struct HistoricalDataTool;

impl HistoricalDataTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_historical_data";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Get historical time series data for water temperature, flow, and air temperature";

    pub const ENDPOINT: &'static str = "/history";

    pub fn definition(upstream: &UpstreamConfig) -> ToolDefinition {
        let mut params = vec![
            ParamSpec::required("city", "City identifier (required for historical data)"),
            ParamSpec::required(
                "start",
                "Start date/time in various formats (ISO, timestamp, 'yesterday', '-1 day')",
            ),
            ParamSpec::required(
                "end",
                "End date/time in various formats (ISO, timestamp, 'now')",
            ),
        ];
        params.extend(common_params(upstream));

        ToolDefinition {
            name: Self::NAME,
            description: Self::DESCRIPTION,
            endpoint: Self::ENDPOINT,
            params,
            precheck: Self::precheck,
            header: Self::header,
        }
    }

    fn precheck(args: &ToolArguments) -> ToolResult<()> {
        let complete = ["city", "start", "end"]
            .iter()
            .all(|name| args.get(name).is_some());
        if complete {
            Ok(())
        } else {
            Err(ToolError::validation(
                "Historical data requires city, start, and end parameters",
            ))
        }
    }

    fn header(args: &ToolArguments) -> String {
        format!(
            "Historical Aare data for {} ({} to {})",
            args.get("city").unwrap_or_default(),
            args.get("start").unwrap_or_default(),
            args.get("end").unwrap_or_default(),
        )
    }
}
