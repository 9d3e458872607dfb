//! Same-origin proxy from `/api/*` to the remote finance API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser client calls `/api/...` on this host so the bearer token never
//! crosses origins. Each request is replayed against `API_UPSTREAM_URL` with
//! the same method, path, query and body.
//!
//! DESIGN
//! ======
//! Only an allow-list of headers crosses the proxy in each direction. The
//! upstream status is passed through untouched so 401 and 429 reach the
//! client's interception stages unchanged.
//!
//! ERROR HANDLING
//! ==============
//! An unreachable or timed-out upstream becomes `502 Bad Gateway` with a JSON
//! `message`, which the client classifies as a server failure.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, RawQuery, State};
use axum::http::{HeaderMap, HeaderName, Method, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::config::HostConfig;

/// Request headers forwarded upstream.
pub const FORWARDED_REQUEST_HEADERS: [HeaderName; 3] = [header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT];

/// Response headers copied back to the browser.
pub const FORWARDED_RESPONSE_HEADERS: [HeaderName; 2] = [header::CONTENT_TYPE, header::RETRY_AFTER];

const UPSTREAM_UNAVAILABLE: &str = "The finance service is unavailable. Please try again later.";

#[derive(Clone)]
pub struct ProxyState {
    http: reqwest::Client,
    upstream: String,
}

impl ProxyState {
    /// # Errors
    ///
    /// Returns the `reqwest` error when the HTTP client cannot be built.
    pub fn new(config: &HostConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(config.proxy_timeout).build()?;
        Ok(Self { http, upstream: config.upstream_url.clone() })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

#[derive(Serialize)]
struct ProxyFailure {
    message: &'static str,
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "api proxy failure");
        (StatusCode::BAD_GATEWAY, Json(ProxyFailure { message: UPSTREAM_UNAVAILABLE })).into_response()
    }
}

/// Upstream URL for an `/api/{path}` request.
pub fn upstream_url(base: &str, path: &str, query: Option<&str>) -> String {
    let path = path.trim_start_matches('/');
    match query.filter(|q| !q.is_empty()) {
        Some(query) => format!("{base}/api/{path}?{query}"),
        None => format!("{base}/api/{path}"),
    }
}

/// Copy the allow-listed headers, keeping repeated values.
pub fn forwarded(headers: &HeaderMap, allow: &[HeaderName]) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in allow {
        for value in headers.get_all(name) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

/// `ANY /api/{*path}`.
///
/// # Errors
///
/// [`ProxyError`] when the upstream could not be reached or its body could
/// not be read.
pub async fn forward(
    State(proxy): State<ProxyState>,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let url = upstream_url(&proxy.upstream, &path, query.as_deref());
    let mut request = proxy
        .http
        .request(method.clone(), &url)
        .headers(forwarded(&headers, &FORWARDED_REQUEST_HEADERS));
    if !body.is_empty() {
        request = request.body(body);
    }

    let upstream = request.send().await?;
    let status = upstream.status();
    let response_headers = forwarded(upstream.headers(), &FORWARDED_RESPONSE_HEADERS);
    let bytes = upstream.bytes().await?;

    if status.is_server_error() {
        tracing::warn!(%method, path = %path, status = status.as_u16(), "upstream error");
    } else {
        tracing::debug!(%method, path = %path, status = status.as_u16(), "proxied");
    }
    Ok((status, response_headers, bytes).into_response())
}
