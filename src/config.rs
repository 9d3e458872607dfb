//! Host configuration parsed from environment variables.
//!
//! Optional (all have defaults):
//! - `PORT`: listen port, default 3000
//! - `API_UPSTREAM_URL`: remote finance API origin, default
//!   `http://localhost:8080`; requests to `/api/*` are forwarded to
//!   `<origin>/api/*`
//! - `API_PROXY_TIMEOUT_SECS`: per-request upstream timeout, default 30
//!
//! Leptos site options come from `[package.metadata.leptos]` or `LEPTOS_*`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_UPSTREAM_URL: &str = "http://localhost:8080";
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
    #[error("API_UPSTREAM_URL must be an http(s) origin, got {0:?}")]
    UpstreamScheme(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    pub upstream_url: String,
    pub proxy_timeout: Duration,
}

impl HostConfig {
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set but unusable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set but unusable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let timeout_secs = parse_or("API_PROXY_TIMEOUT_SECS", lookup("API_PROXY_TIMEOUT_SECS"), DEFAULT_PROXY_TIMEOUT_SECS)?;
        if timeout_secs == 0 {
            return Err(ConfigError::Invalid { var: "API_PROXY_TIMEOUT_SECS", value: "0".into() });
        }

        let upstream_url = lookup("API_UPSTREAM_URL")
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .unwrap_or_else(|| DEFAULT_UPSTREAM_URL.to_string());
        if !(upstream_url.starts_with("http://") || upstream_url.starts_with("https://")) {
            return Err(ConfigError::UpstreamScheme(upstream_url));
        }
        let upstream_url = upstream_url.trim_end_matches('/').to_string();

        Ok(Self { port, upstream_url, proxy_timeout: Duration::from_secs(timeout_secs) })
    }
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::Invalid { var, value: value.to_string() }),
    }
}
