//! Raw request transport beneath `ApiClient`.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): a stub that fails every dispatch, since API calls are
//! only meaningful in the browser.
//!
//! DESIGN
//! ======
//! The transport knows nothing about credentials or status semantics. It moves
//! an [`ApiRequest`] over the wire and hands back status + body text, which
//! keeps both interception stages in `http_client` testable without a network.

#![allow(clippy::unused_async)]

use async_trait::async_trait;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

/// An outbound call, relative to the API base path.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), headers: Vec::new(), body: None }
    }

    #[must_use]
    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Replace any existing value for `name`.
    pub fn set_header(&mut self, name: &str, value: String) {
        self.remove_header(name);
        self.headers.push((name.to_owned(), value));
    }

    pub fn remove_header(&mut self, name: &str) {
        self.headers.retain(|(key, _)| !key.eq_ignore_ascii_case(name));
    }
}

/// Status code and body text of a completed round-trip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The request never produced a response (DNS, refused, CORS, offline).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);

#[async_trait(?Send)]
pub trait Transport: Send + Sync {
    async fn dispatch(&self, request: ApiRequest) -> Result<RawResponse, TransportError>;
}

/// Browser transport issuing `fetch` calls against `base` + request path.
#[derive(Clone, Debug)]
pub struct BrowserTransport {
    base: String,
}

impl BrowserTransport {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into().trim_end_matches('/').to_owned() }
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }
}

#[async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn dispatch(&self, request: ApiRequest) -> Result<RawResponse, TransportError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            let url = self.url_for(&request.path);
            let mut builder = match request.method {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
                Method::Patch => Request::patch(&url),
                Method::Delete => Request::delete(&url),
            };
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            let outgoing = match &request.body {
                Some(body) => builder.json(body),
                None => builder.build(),
            }
            .map_err(|e| TransportError(e.to_string()))?;

            let resp = outgoing.send().await.map_err(|e| TransportError(e.to_string()))?;
            let status = resp.status();
            let body = match resp.text().await {
                Ok(text) => text,
                Err(err) => {
                    leptos::logging::warn!("response body unreadable: {err}");
                    String::new()
                }
            };
            Ok(RawResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            _ = request;
            Err(TransportError("not available on server".to_owned()))
        }
    }
}

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;
