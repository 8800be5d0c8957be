//! Aare.guru API access.
//!
//! [`UpstreamRequest`] is a fully resolved GET request against the
//! versioned API, [`UpstreamClient`] executes it.

use serde_json::Value;
use tracing::{debug, instrument, warn};

use super::error::{ToolError, ToolResult};
use super::params::ResolvedParameters;
use crate::core::config::UpstreamConfig;

/// A GET request against the upstream API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamRequest {
    /// Base address plus versioned prefix, e.g. `https://aareguru.existenz.ch/v2018`.
    base: String,
    /// Tool endpoint, e.g. `/current`.
    pub endpoint_path: String,
    /// Query parameters in serialization order.
    pub query: Vec<(String, String)>,
}

impl UpstreamRequest {
    /// Build the request for `endpoint_path` from resolved parameters.
    pub fn build(
        upstream: &UpstreamConfig,
        endpoint_path: &str,
        params: &ResolvedParameters,
    ) -> Self {
        Self {
            base: upstream.api_base(),
            endpoint_path: endpoint_path.to_string(),
            query: params
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Form-urlencoded query string without the leading `?`.
    pub fn query_string(&self) -> ToolResult<String> {
        serde_urlencoded::to_string(&self.query)
            .map_err(|e| ToolError::unexpected(format!("Failed to encode query: {}", e)))
    }

    /// The fully serialized request URL.
    pub fn url(&self) -> ToolResult<String> {
        let mut url = format!("{}{}", self.base, self.endpoint_path);
        let query = self.query_string()?;
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query);
        }
        Ok(url)
    }
}

/// HTTP client for the upstream API.
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
}

impl UpstreamClient {
    pub fn new() -> ToolResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ToolError::unexpected(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { http })
    }

    /// Issue the GET request and parse the body as JSON.
    #[instrument(skip_all, fields(endpoint = %request.endpoint_path))]
    pub async fn execute(&self, request: &UpstreamRequest) -> ToolResult<Value> {
        let url = request.url()?;
        debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ToolError::unexpected(format!("Request to {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Upstream returned {}", status);
            return Err(ToolError::upstream(
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown"),
            ));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ToolError::unexpected(format!("Failed to read response body: {}", e)))?;

        debug!("API response received: {} bytes", body.len());

        serde_json::from_slice(&body).map_err(|e| ToolError::parse(e.to_string()))
    }
}
