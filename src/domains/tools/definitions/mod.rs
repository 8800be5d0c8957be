//! Tool definitions module.
//!
//! Each tool is described in its own file by a [`ToolDefinition`] record.
//! The records are plain data plus two function references, and
//! [`ToolRegistry`](super::ToolRegistry) collects them into the catalog.

pub mod cities;
pub mod current;
pub mod history;
pub mod today;
pub mod widget;

use std::sync::Arc;

use rmcp::model::{JsonObject, Tool};
use serde_json::{Value, json};

use super::error::ToolResult;
use super::params::ToolArguments;
use crate::core::config::UpstreamConfig;

pub use cities::CitiesTool;
pub use current::CurrentConditionsTool;
pub use history::HistoricalDataTool;
pub use today::TodaySummaryTool;
pub use widget::WidgetDataTool;

/// Display name used in headers when the caller gives no city.
pub const DEFAULT_DISPLAY_CITY: &str = "Bern";

/// JSON type of a tool parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    String,
}

impl ParamType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
        }
    }
}

/// Default value attached to a parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamDefault {
    /// Written into the resolved parameters when the caller omits the field.
    Injected(String),

    /// Shown in the input schema only; the upstream applies its own default.
    Advertised(&'static str),
}

impl ParamDefault {
    pub fn value(&self) -> &str {
        match self {
            Self::Injected(v) => v,
            Self::Advertised(v) => v,
        }
    }
}

/// One entry of a tool's parameter schema.
#[derive(Debug, Clone)]
pub struct ParamSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: ParamType,
    pub default: Option<ParamDefault>,
    pub required: bool,
}

impl ParamSpec {
    /// An optional string parameter without a default.
    pub fn optional(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            kind: ParamType::String,
            default: None,
            required: false,
        }
    }

    /// A required string parameter.
    pub fn required(name: &'static str, description: &'static str) -> Self {
        Self {
            required: true,
            ..Self::optional(name, description)
        }
    }

    pub fn with_default(mut self, default: ParamDefault) -> Self {
        self.default = Some(default);
        self
    }

    fn schema(&self) -> Value {
        let mut prop = json!({
            "type": self.kind.as_str(),
            "description": self.description,
        });
        if let (Some(default), Value::Object(map)) = (&self.default, &mut prop) {
            map.insert("default".to_string(), json!(default.value()));
        }
        prop
    }
}

/// Catalog record for one tool.
#[derive(Debug, Clone)]
pub struct ToolDefinition {
    pub name: &'static str,
    pub description: &'static str,
    /// Endpoint below the versioned API prefix, e.g. `/current`.
    pub endpoint: &'static str,
    pub params: Vec<ParamSpec>,
    /// Tool-specific check run on the raw arguments before resolution.
    pub precheck: fn(&ToolArguments) -> ToolResult<()>,
    /// Header line placed above the pretty-printed payload.
    pub header: fn(&ToolArguments) -> String,
}

impl ToolDefinition {
    pub fn param(&self, name: &str) -> Option<&ParamSpec> {
        self.params.iter().find(|p| p.name == name)
    }

    /// Names of the parameters marked required, in schema order.
    pub fn required_params(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.params.iter().filter(|p| p.required).map(|p| p.name)
    }

    /// JSON-Schema object advertised as `inputSchema`.
    pub fn input_schema(&self) -> JsonObject {
        let properties: JsonObject = self
            .params
            .iter()
            .map(|p| (p.name.to_string(), p.schema()))
            .collect();

        let mut schema = JsonObject::new();
        schema.insert("type".to_string(), json!("object"));
        schema.insert("properties".to_string(), Value::Object(properties));

        let required: Vec<&str> = self.required_params().collect();
        if !required.is_empty() {
            schema.insert("required".to_string(), json!(required));
        }
        schema
    }

    /// Create a Tool model for this definition (metadata).
    pub fn to_tool(&self) -> Tool {
        Tool {
            name: self.name.into(),
            description: Some(self.description.into()),
            input_schema: Arc::new(self.input_schema()),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}

/// Precheck for tools whose arguments need no extra validation.
pub fn no_precheck(_args: &ToolArguments) -> ToolResult<()> {
    Ok(())
}

/// City name for headers, falling back to [`DEFAULT_DISPLAY_CITY`].
pub fn display_city(args: &ToolArguments) -> &str {
    args.get("city").unwrap_or(DEFAULT_DISPLAY_CITY)
}

/// `city` parameter with the advertised `bern` default.
pub fn city_param() -> ParamSpec {
    ParamSpec::optional("city", "City identifier (e.g., 'bern', 'thun')")
        .with_default(ParamDefault::Advertised("bern"))
}

/// Parameters every tool accepts: `app`, `version` and `values`.
pub fn common_params(upstream: &UpstreamConfig) -> Vec<ParamSpec> {
    vec![
        ParamSpec::optional("app", "Optional app identifier")
            .with_default(ParamDefault::Injected(upstream.app.clone())),
        ParamSpec::optional("version", "Optional version number")
            .with_default(ParamDefault::Injected(upstream.version.clone())),
        ParamSpec::optional(
            "values",
            "Optional comma-separated list of specific values to extract",
        ),
    ]
}
