//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables or defaults.

use super::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default upstream address of the Aare.guru API.
pub const DEFAULT_BASE_URL: &str = "https://aareguru.existenz.ch";

/// Versioned path prefix placed before every tool endpoint.
pub const DEFAULT_API_PREFIX: &str = "/v2018";

/// Client identifier sent as `app` when the caller gives none.
pub const DEFAULT_APP: &str = "mcp-aareguru-server";

/// Value sent as `version` when the caller gives none.
pub const DEFAULT_VERSION: &str = "1.0.0";

/// Main configuration structure for the MCP server.
///
/// This struct contains all configurable aspects of the server, organized
/// by concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Upstream API location and client identity.
    pub upstream: UpstreamConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Upstream Aare.guru API configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Scheme and host, without a trailing slash.
    pub base_url: String,

    /// Versioned API path prefix.
    pub api_prefix: String,

    /// Default `app` query parameter.
    pub app: String,

    /// Default `version` query parameter. Unrelated to the server version.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_prefix: DEFAULT_API_PREFIX.to_string(),
            app: DEFAULT_APP.to_string(),
            version: DEFAULT_VERSION.to_string(),
        }
    }
}

impl UpstreamConfig {
    /// Base address joined with the versioned prefix.
    pub fn api_base(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), self.api_prefix)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "aareguru-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            upstream: UpstreamConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Server settings use the `MCP_` prefix (`MCP_SERVER_NAME`,
    /// `MCP_LOG_LEVEL`), upstream settings the `AAREGURU_`
    /// prefix (`AAREGURU_BASE_URL`, `AAREGURU_API_PREFIX`, `AAREGURU_APP`,
    /// `AAREGURU_VERSION`).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(base_url) = std::env::var("AAREGURU_BASE_URL") {
            config.upstream.base_url = base_url.trim_end_matches('/').to_string();
        }

        if let Ok(prefix) = std::env::var("AAREGURU_API_PREFIX") {
            config.upstream.api_prefix = prefix;
        }

        if let Ok(app) = std::env::var("AAREGURU_APP") {
            config.upstream.app = app;
        }

        if let Ok(version) = std::env::var("AAREGURU_VERSION") {
            config.upstream.version = version;
        }

        config
    }

    /// Check that the upstream settings can produce valid requests.
    pub fn validate(&self) -> Result<()> {
        let base = &self.upstream.base_url;
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(Error::config(format!(
                "upstream base URL must start with http:// or https://, got '{}'",
                base
            )));
        }
        if !self.upstream.api_prefix.is_empty() && !self.upstream.api_prefix.starts_with('/') {
            return Err(Error::config("upstream API prefix must start with '/'"));
        }
        if self.upstream.app.is_empty() || self.upstream.version.is_empty() {
            return Err(Error::config("default app and version must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_upstream_defaults() {
        let upstream = UpstreamConfig::default();
        assert_eq!(upstream.app, "mcp-aareguru-server");
        assert_eq!(upstream.version, "1.0.0");
        assert_eq!(upstream.api_base(), "https://aareguru.existenz.ch/v2018");
    }

    #[test]
    fn test_api_base_trims_trailing_slash() {
        let upstream = UpstreamConfig {
            base_url: "http://localhost:8080/".to_string(),
            ..UpstreamConfig::default()
        };
        assert_eq!(upstream.api_base(), "http://localhost:8080/v2018");
    }

    #[test]
    fn test_upstream_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("AAREGURU_APP", "my-client");
            std::env::set_var("AAREGURU_VERSION", "3.0");
            std::env::set_var("AAREGURU_BASE_URL", "http://localhost:1234/");
        }
        let config = Config::from_env();
        assert_eq!(config.upstream.app, "my-client");
        assert_eq!(config.upstream.version, "3.0");
        assert_eq!(config.upstream.base_url, "http://localhost:1234");
        unsafe {
            std::env::remove_var("AAREGURU_APP");
            std::env::remove_var("AAREGURU_VERSION");
            std::env::remove_var("AAREGURU_BASE_URL");
        }
    }

    #[test]
    fn test_defaults_without_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var("AAREGURU_APP");
            std::env::remove_var("AAREGURU_VERSION");
        }
        let config = Config::from_env();
        assert_eq!(config.upstream.app, DEFAULT_APP);
        assert_eq!(config.upstream.version, DEFAULT_VERSION);
    }

    #[test]
    fn test_validate() {
        assert!(Config::default().validate().is_ok());

        let mut config = Config::default();
        config.upstream.base_url = "aareguru.existenz.ch".to_string();
        assert!(matches!(config.validate(), Err(Error::Config(_))));

        let mut config = Config::default();
        config.upstream.app.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_sections() {
        let value = serde_json::to_value(Config::default()).unwrap();
        let mut sections: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        sections.sort_unstable();
        assert_eq!(sections, vec!["logging", "server", "upstream"]);
    }

    #[test]
    fn test_server_version_is_crate_version() {
        let config = Config::default();
        assert_eq!(config.server.name, "aareguru-server");
        assert_eq!(config.server.version, env!("CARGO_PKG_VERSION"));
    }
}
