//! Networking modules for the remote finance API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `credential_store` owns the bearer token, `transport` moves bytes,
//! `http_client` runs the interception stages around every call, `api` holds
//! typed endpoint helpers and `types` defines the wire schema.

pub mod api;
pub mod credential_store;
pub mod error;
pub mod http_client;
pub mod transport;
pub mod types;
