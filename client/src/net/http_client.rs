//! Shared request pipeline for every API call.
//!
//! SYSTEM CONTEXT
//! ==============
//! Views never talk to the transport directly. Each call goes through
//! [`ApiClient::send`], which runs two interception stages around the single
//! suspension point (the network round-trip):
//!
//! - outbound: read the credential store *at dispatch time* and attach
//!   `Authorization: Bearer <token>` when a credential is present;
//! - inbound: classify the response; on 401 run the [`InvalidationStage`]
//!   (purge store, session -> anonymous, redirect to `/login`) and still
//!   return the error to the caller.
//!
//! TRADE-OFFS
//! ==========
//! The redirect only fires on the transition out of an authenticated session,
//! and never while already on `/login`. Concurrent 401s all purge the store,
//! but only the first one navigates. A 401 for a credential the store no
//! longer holds (logout and re-login while in flight) is returned to the
//! caller without touching the newer session.

#[cfg(test)]
#[path = "http_client_test.rs"]
mod http_client_test;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::credential_store::{Credential, CredentialStore};
use super::error::{self, ApiError};
use super::transport::{ApiRequest, Method, RawResponse, Transport};
use crate::state::session::{SessionEvent, SessionSink};
use crate::util::navigation::{LOGIN_PATH, Navigator, is_login_route};

pub const AUTHORIZATION: &str = "Authorization";

/// Inbound reaction to a rejected credential.
pub struct InvalidationStage {
    store: Arc<dyn CredentialStore>,
    session: Arc<dyn SessionSink>,
    navigator: Arc<dyn Navigator>,
}

impl InvalidationStage {
    pub fn new(store: Arc<dyn CredentialStore>, session: Arc<dyn SessionSink>, navigator: Arc<dyn Navigator>) -> Self {
        Self { store, session, navigator }
    }

    /// Purge the store, drop the session, then redirect, in that order.
    /// `rejected` is the credential the failed request carried. Returns
    /// whether a navigation was issued.
    pub fn run(&self, rejected: Option<&Credential>) -> bool {
        let current = self.store.read();
        if current.is_some() && current.as_ref() != rejected {
            leptos::logging::log!("ignoring 401 for a credential that was already replaced");
            return false;
        }
        self.store.clear();
        let left_session = self.session.apply(SessionEvent::Invalidated);
        if !left_session {
            return false;
        }
        let at_login = self.navigator.current_path().is_some_and(|path| is_login_route(&path));
        if at_login {
            return false;
        }
        leptos::logging::warn!("credential rejected; redirecting to {LOGIN_PATH}");
        self.navigator.replace(LOGIN_PATH);
        true
    }
}

struct ClientInner {
    transport: Arc<dyn Transport>,
    store: Arc<dyn CredentialStore>,
    invalidation: InvalidationStage,
}

/// Cheaply clonable handle provided through Leptos context.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ClientInner>,
}

impl ApiClient {
    pub fn new(
        transport: Arc<dyn Transport>,
        store: Arc<dyn CredentialStore>,
        session: Arc<dyn SessionSink>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let invalidation = InvalidationStage::new(store.clone(), session, navigator);
        Self { inner: Arc::new(ClientInner { transport, store, invalidation }) }
    }

    /// Outbound stage: attach the credential held by the store right now.
    /// Returns the request together with the credential it carries.
    pub fn authorize(&self, mut request: ApiRequest) -> (ApiRequest, Option<Credential>) {
        request.remove_header(AUTHORIZATION);
        let credential = self.inner.store.read();
        if let Some(credential) = &credential {
            request.set_header(AUTHORIZATION, credential.bearer());
        }
        (request, credential)
    }

    /// Inbound stage: classify and, on 401, invalidate `sent`.
    ///
    /// # Errors
    ///
    /// Returns the classified [`ApiError`] for any non-2xx status.
    pub fn inspect(&self, response: RawResponse, sent: Option<&Credential>) -> Result<RawResponse, ApiError> {
        match error::classify(response.status, &response.body) {
            None => Ok(response),
            Some(err) => {
                if err.is_unauthorized() {
                    self.inner.invalidation.run(sent);
                }
                Err(err)
            }
        }
    }

    /// Run a request through both stages.
    ///
    /// # Errors
    ///
    /// [`ApiError::Network`] when no response arrived, otherwise the
    /// classification of the response status.
    pub async fn send(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
        let (request, sent) = self.authorize(request);
        let response = self
            .inner
            .transport
            .dispatch(request)
            .await
            .map_err(|e| ApiError::Network(e.0))?;
        self.inspect(response, sent.as_ref())
    }

    /// # Errors
    ///
    /// See [`ApiClient::send`]; also [`ApiError::Malformed`] for an
    /// undecodable body.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(ApiRequest::new(Method::Get, path)).await?;
        decode(&response)
    }

    /// # Errors
    ///
    /// See [`ApiClient::get_json`].
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let request = ApiRequest::new(Method::Post, path).with_body(encode(body)?);
        decode(&self.send(request).await?)
    }

    /// # Errors
    ///
    /// See [`ApiClient::get_json`].
    pub async fn patch_json<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let request = ApiRequest::new(Method::Patch, path).with_body(encode(body)?);
        decode(&self.send(request).await?)
    }

    /// Send and discard any response body.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::send`].
    pub async fn send_unit(&self, request: ApiRequest) -> Result<(), ApiError> {
        self.send(request).await.map(|_| ())
    }
}

fn encode<B: Serialize>(body: &B) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Malformed(e.to_string()))
}

fn decode<T: DeserializeOwned>(response: &RawResponse) -> Result<T, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| ApiError::Malformed(e.to_string()))
}
