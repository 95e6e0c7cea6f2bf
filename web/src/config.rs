//! Configuration management for the todo-lists server.
//!
//! Loads configuration from environment variables with sensible defaults.

use serde::{Deserialize, Serialize};
use std::env;

/// Default session cookie name
pub const DEFAULT_SESSION_COOKIE: &str = "todo_session";

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Host to bind to
    pub host: String,
    /// Port to bind to
    pub port: u16,
    /// Log filter directive (e.g. `info`, `todo_lists_runtime=debug`)
    pub log_level: String,
    /// Whether to install the Prometheus recorder and serve `/metrics`
    pub metrics_enabled: bool,
    /// Name of the cookie carrying the session id
    pub session_cookie: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 4567,
            log_level: "info".to_string(),
            metrics_enabled: true,
            session_cookie: DEFAULT_SESSION_COOKIE.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Unset or unparsable variables fall back to [`Config::default`].
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.port),
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
            metrics_enabled: lookup("METRICS_ENABLED")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.metrics_enabled),
            session_cookie: lookup("SESSION_COOKIE")
                .filter(|s| !s.is_empty())
                .unwrap_or(defaults.session_cookie),
        }
    }

    /// Address the server binds to
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
