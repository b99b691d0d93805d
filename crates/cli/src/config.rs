//! Configuration loading and validation for the paste CLI.
//!
//! All values are read from `PASTE_`-prefixed environment variables, e.g.
//! `PASTE_API_BASE_URL`. Every field has a default suitable for a local
//! backend.

use anyhow::{Context, Result};
use serde::Deserialize;

/// Validated CLI configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Base URL of the paste backend API.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Base URL for printed share links. Defaults to the backend's origin
    /// when unset (useful when a public domain fronts the backend).
    #[serde(default)]
    pub share_base_url: Option<String>,

    /// Per-request timeout in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Tracing log level (e.g. `"info"`, `"debug"`).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_api_base_url() -> String {
    "http://localhost:8080/api".into()
}
fn default_request_timeout() -> u64 {
    10
}
fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load and validate configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable cannot be parsed or validation fails.
    pub fn from_env() -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::Environment::with_prefix("PASTE"))
            .build()
            .context("failed to build configuration from environment")?;

        let c: Config = cfg
            .try_deserialize()
            .context("failed to deserialise configuration")?;

        c.validate()?;
        Ok(c)
    }

    fn validate(&self) -> Result<()> {
        if self.api_base_url.trim().is_empty() {
            anyhow::bail!("PASTE_API_BASE_URL must not be empty");
        }
        if self.request_timeout_secs == 0 {
            anyhow::bail!("PASTE_REQUEST_TIMEOUT_SECS must be > 0");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        assert_eq!(default_api_base_url(), "http://localhost:8080/api");
        assert_eq!(default_request_timeout(), 10);
        assert_eq!(default_log_level(), "info");
    }

    #[test]
    fn validate_rejects_empty_base_url() {
        let cfg = Config {
            api_base_url: "  ".into(),
            share_base_url: None,
            request_timeout_secs: default_request_timeout(),
            log_level: default_log_level(),
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let cfg = Config {
            api_base_url: default_api_base_url(),
            share_base_url: None,
            request_timeout_secs: 0,
            log_level: default_log_level(),
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_accepts_defaults() {
        let cfg = Config {
            api_base_url: default_api_base_url(),
            share_base_url: Some("https://paste.example.com".into()),
            request_timeout_secs: default_request_timeout(),
            log_level: default_log_level(),
        };
        assert!(cfg.validate().is_ok());
    }
}
