//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves three things: the `/api/*` proxy to the finance
//! service, the Leptos SSR pages, and the compiled WASM/CSS bundle under
//! `/pkg`. Unknown paths fall through to the Leptos router, whose fallback
//! page handles redirection.

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{any, get};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::HostError;
use crate::proxy::{self, ProxyState};

/// Proxy and health routes.
pub fn api_routes(proxy: ProxyState) -> Router {
    Router::new()
        .route("/api/{*path}", any(proxy::forward))
        .route("/healthz", get(healthz))
        .with_state(proxy)
}

/// Full application: API proxy + Leptos SSR + static bundle.
///
/// # Errors
///
/// Returns [`HostError::Leptos`] if the Leptos configuration cannot be
/// loaded (missing or malformed `[package.metadata.leptos]` section).
pub fn app(proxy: ProxyState) -> Result<Router, HostError> {
    let conf = get_configuration(None).map_err(|e| HostError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(finance_client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || finance_client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(proxy)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
