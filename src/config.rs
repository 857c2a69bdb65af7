//! Client configuration parsed from environment variables.
//!
//! In the browser there is no process environment, so `from_env` falls back
//! to the defaults and requests go to the page's own origin under `/api`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_BASE_PATH: &str = "/api";

/// Errors produced while reading client configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The base path is neither origin-relative nor an absolute http(s) URL.
    #[error("invalid base path '{0}': expected '/...' or 'http(s)://...'")]
    InvalidBasePath(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix prepended to every request path (e.g. `/api`).
    pub base_path: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { base_path: DEFAULT_BASE_PATH.to_owned() }
    }
}

impl ClientConfig {
    /// Build a config with an explicit base path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBasePath`] if `base_path` is not
    /// origin-relative or an absolute http(s) URL.
    pub fn with_base_path(base_path: &str) -> Result<Self, ConfigError> {
        Ok(Self { base_path: parse_base_path(base_path)? })
    }

    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `MIRROR_API_BASE`: default `/api`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBasePath`] if `MIRROR_API_BASE` is set
    /// to something that is not a usable prefix.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var("MIRROR_API_BASE") {
            Ok(raw) if !raw.trim().is_empty() => Self::with_base_path(&raw),
            _ => Ok(Self::default()),
        }
    }
}

fn parse_base_path(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    let valid = trimmed.starts_with('/') || trimmed.starts_with("http://") || trimmed.starts_with("https://");
    if !valid {
        return Err(ConfigError::InvalidBasePath(raw.to_owned()));
    }
    // "/" alone trims to "", which means "no prefix".
    Ok(trimmed.trim_end_matches('/').to_owned())
}
