//! Session context: whether, and as whom, this tab is authenticated.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionState` is the single source of truth read by the route guard, the
//! navigation chrome and the auth views. It is written only through
//! [`SessionEvent`]s: by `Session` (restore, login, logout, verify) and by the
//! HTTP client's invalidation stage via [`SessionSink`].
//!
//! DESIGN
//! ======
//! ```text
//!   Restoring --restore(no token)--> Anonymous
//!   Restoring --restore(token)-----> Authenticated { verified: false }
//!   Anonymous --login--------------> Authenticated
//!   Authenticated --verify(user)---> Authenticated { verified: true }
//!   Authenticated --logout/invalidate--> Anonymous
//! ```
//! `Restoring` only exists before the browser has consulted the credential
//! store (server render and the first hydration frame). An unverified session
//! is one rebuilt from a stored token that no request has confirmed yet.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::net::credential_store::{Credential, CredentialError, CredentialStore};
use crate::net::types::{AuthResponse, User};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Restoring,
    Anonymous,
    Authenticated { user: Option<User>, verified: bool },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    /// The credential store was consulted at startup.
    Restored { credential_present: bool },
    LoggedIn { user: Option<User> },
    /// The server confirmed the credential and returned this identity.
    Verified(User),
    LoggedOut,
    /// The server rejected the credential.
    Invalidated,
}

impl SessionState {
    /// Apply one transition. Returns whether the state changed.
    pub fn apply(&mut self, event: SessionEvent) -> bool {
        let next = match (&*self, event) {
            (Self::Restoring, SessionEvent::Restored { credential_present: true }) => {
                Self::Authenticated { user: None, verified: false }
            }
            (Self::Restoring, SessionEvent::Restored { credential_present: false }) => Self::Anonymous,
            (_, SessionEvent::Restored { .. }) => return false,
            (_, SessionEvent::LoggedIn { user }) => {
                let verified = user.is_some();
                Self::Authenticated { user, verified }
            }
            // Late identity after logout must not resurrect the session.
            (Self::Authenticated { .. }, SessionEvent::Verified(user)) => {
                Self::Authenticated { user: Some(user), verified: true }
            }
            (_, SessionEvent::Verified(_)) => return false,
            (_, SessionEvent::LoggedOut | SessionEvent::Invalidated) => Self::Anonymous,
        };
        if *self == next {
            return false;
        }
        *self = next;
        true
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    pub fn is_anonymous(&self) -> bool {
        matches!(self, Self::Anonymous)
    }

    pub fn is_restoring(&self) -> bool {
        matches!(self, Self::Restoring)
    }

    /// Authenticated from a stored token nobody has confirmed yet.
    pub fn needs_verification(&self) -> bool {
        matches!(self, Self::Authenticated { verified: false, .. })
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated { user, .. } => user.as_ref(),
            _ => None,
        }
    }
}

/// Write side of the session, as seen by the HTTP client.
pub trait SessionSink: Send + Sync {
    /// Returns whether the state changed.
    fn apply(&self, event: SessionEvent) -> bool;
}

impl SessionSink for RwSignal<SessionState> {
    fn apply(&self, event: SessionEvent) -> bool {
        // A disposed signal means the app is gone; late responses are dropped.
        self.try_update(|state| state.apply(event)).unwrap_or(false)
    }
}

/// Session context provided to the whole component tree.
#[derive(Clone)]
pub struct Session {
    state: RwSignal<SessionState>,
    store: Arc<dyn CredentialStore>,
}

impl Session {
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self { state: RwSignal::new(SessionState::default()), store }
    }

    fn dispatch(&self, event: SessionEvent) -> bool {
        SessionSink::apply(&self.state, event)
    }

    pub fn state(&self) -> RwSignal<SessionState> {
        self.state
    }

    pub fn sink(&self) -> Arc<dyn SessionSink> {
        Arc::new(self.state)
    }

    /// Rebuild the session from the credential store. The result is
    /// optimistic: a stored token is trusted until a request rejects it.
    pub fn restore(&self) {
        let credential_present = self.store.read().is_some();
        if self.dispatch(SessionEvent::Restored { credential_present }) {
            leptos::logging::log!("session restored (credential present: {credential_present})");
        }
    }

    /// Persist `credential` and mark the session authenticated.
    pub fn login(&self, credential: Credential) {
        self.login_as(credential, None);
    }

    fn login_as(&self, credential: Credential, user: Option<User>) {
        self.store.save(&credential);
        self.dispatch(SessionEvent::LoggedIn { user });
    }

    /// Establish a session from a login/register response.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError::Empty`] when the response carried no token;
    /// the session is left untouched in that case.
    pub fn establish(&self, auth: &AuthResponse) -> Result<(), CredentialError> {
        let credential = Credential::new(auth.token.as_str())?;
        self.login_as(credential, auth.user());
        Ok(())
    }

    /// Record the identity returned by `/users/me`.
    pub fn verified(&self, user: User) {
        self.dispatch(SessionEvent::Verified(user));
    }

    /// Clear the credential and drop to anonymous. The caller navigates.
    pub fn logout(&self) {
        self.store.clear();
        if self.dispatch(SessionEvent::LoggedOut) {
            leptos::logging::log!("session closed");
        }
    }
}
