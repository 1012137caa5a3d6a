//! Settings loading
//!
//! Merges an optional TOML file with `TOCMOUNT_`-prefixed environment
//! variables on top of built-in defaults. CLI flags are applied by the
//! binary after the merge and win over everything here.

use crate::error::ResolveError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Fetch-related settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchSettings {
    /// User-Agent header sent with remote manifest requests.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_user_agent() -> String {
    concat!("tocmount/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
        }
    }
}

/// Top-level application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub fetch: FetchSettings,
}

impl Settings {
    /// Load settings, merging (lowest to highest precedence): defaults,
    /// the given TOML file if any, `TOCMOUNT_*` environment variables
    /// (e.g. `TOCMOUNT_LOGGING__LEVEL=debug`).
    pub fn load(file: Option<&Path>) -> Result<Self, ResolveError> {
        let mut builder = config::Config::builder();
        if let Some(path) = file {
            let path = path.to_str().ok_or_else(|| {
                ResolveError::ConfigError(format!("config path is not valid UTF-8: {path:?}"))
            })?;
            builder = builder.add_source(config::File::with_name(path));
        }
        let merged = builder
            .add_source(config::Environment::with_prefix("TOCMOUNT").separator("__"))
            .build()?;
        Ok(merged.try_deserialize()?)
    }

    /// Build the HTTP client used for remote manifest retrieval.
    pub fn http_client(&self) -> Result<reqwest::Client, ResolveError> {
        reqwest::Client::builder()
            .user_agent(&self.fetch.user_agent)
            .build()
            .map_err(|e| ResolveError::ConfigError(format!("failed to build HTTP client: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_a_file() {
        let settings = Settings::load(None).unwrap();
        assert_eq!(settings.logging.level, "info");
        assert!(settings.fetch.user_agent.starts_with("tocmount/"));
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tocmount.toml");
        std::fs::write(
            &path,
            "[logging]\nlevel = \"debug\"\n\n[fetch]\nuser_agent = \"custom/1\"\n",
        )
        .unwrap();
        let settings = Settings::load(Some(&path)).unwrap();
        assert_eq!(settings.logging.level, "debug");
        assert_eq!(settings.fetch.user_agent, "custom/1");
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(Settings::load(Some(&path)).is_err());
    }
}
