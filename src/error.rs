//! Startup failures of the host process.

use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("http client build failed: {0}")]
    HttpClient(#[from] reqwest::Error),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
