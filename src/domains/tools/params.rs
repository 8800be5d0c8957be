//! Invocation arguments and parameter resolution.
//!
//! [`ToolArguments`] is the caller's view of an invocation, [`resolve`]
//! turns it into the [`ResolvedParameters`] sent upstream.

use rmcp::model::JsonObject;
use serde_json::Value;
use tracing::debug;

use super::definitions::{ParamDefault, ToolDefinition};
use super::error::{ToolError, ToolResult};

/// Caller-supplied arguments in caller order. `None` marks an undefined
/// (`null`) value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolArguments {
    entries: Vec<(String, Option<String>)>,
}

impl ToolArguments {
    /// Convert the raw JSON object of a `tools/call` request.
    ///
    /// Strings are kept as-is, numbers and booleans become their JSON text
    /// and `null` becomes undefined. Arrays and objects are rejected.
    pub fn from_json(arguments: Option<JsonObject>) -> ToolResult<Self> {
        let Some(arguments) = arguments else {
            return Ok(Self::default());
        };

        let mut entries = Vec::with_capacity(arguments.len());
        for (name, value) in arguments {
            let value = match value {
                Value::String(s) => Some(s),
                Value::Number(n) => Some(n.to_string()),
                Value::Bool(b) => Some(b.to_string()),
                Value::Null => None,
                Value::Array(_) | Value::Object(_) => {
                    return Err(ToolError::validation(format!(
                        "invalid value for parameter {}: expected a string",
                        name
                    )));
                }
            };
            entries.push((name, value));
        }
        Ok(Self { entries })
    }

    /// Value of `name` if the caller supplied a defined, non-empty one.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .and_then(|(_, v)| v.as_deref())
            .filter(|v| !v.is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parameters after default injection and required-field validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedParameters {
    entries: Vec<(String, String)>,
}

impl ResolvedParameters {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == name)
    }
}

/// Resolve `args` against the schema of `definition`.
///
/// Caller values keep caller order. A null or empty value for a field with an
/// injected default takes the default in the caller's position; defaults the
/// caller did not mention follow in schema order. Parameters unknown to the
/// schema pass through.
pub fn resolve(
    definition: &ToolDefinition,
    args: &ToolArguments,
) -> ToolResult<ResolvedParameters> {
    let mut resolved = ResolvedParameters::default();

    for (name, value) in args.iter() {
        let injected = match definition.param(name).and_then(|p| p.default.as_ref()) {
            Some(ParamDefault::Injected(default)) => Some(default),
            _ => None,
        };
        match (value, injected) {
            (Some(value), Some(default)) if value.is_empty() => {
                resolved.entries.push((name.to_string(), default.clone()));
            }
            (Some(value), _) => resolved.entries.push((name.to_string(), value.to_string())),
            (None, Some(default)) => {
                resolved.entries.push((name.to_string(), default.clone()));
            }
            (None, None) => {}
        }
    }

    for spec in &definition.params {
        if let Some(ParamDefault::Injected(default)) = &spec.default {
            if !resolved.contains(spec.name) {
                resolved
                    .entries
                    .push((spec.name.to_string(), default.clone()));
            }
        }
    }

    for name in definition.required_params() {
        if resolved.get(name).is_none_or(str::is_empty) {
            return Err(ToolError::missing_parameter(name));
        }
    }

    debug!(tool = definition.name, params = resolved.len(), "Parameters resolved");
    Ok(resolved)
}
