mod config;
mod error;
mod proxy;
mod routes;

use crate::config::HostConfig;
use crate::error::HostError;
use crate::proxy::ProxyState;

#[tokio::main]
async fn main() -> Result<(), HostError> {
    tracing_subscriber::fmt::init();

    match dotenvy::dotenv() {
        Ok(path) => tracing::info!(path = %path.display(), "loaded environment file"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!(error = %e, "ignoring unreadable environment file"),
    }

    let config = HostConfig::from_env()?;
    let proxy = ProxyState::new(&config)?;
    let app = routes::app(proxy)?;

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
    let port = config.port;
    tracing::info!(%port, upstream = %config.upstream_url, "finance-web listening");
    axum::serve(listener, app).await?;
    Ok(())
}
