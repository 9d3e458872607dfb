use super::*;
use crate::net::credential_store::MemoryStore;

fn alice() -> User {
    User { id: Some(1), username: "alice".to_owned(), email: "a@example.com".to_owned() }
}

fn authenticated() -> SessionState {
    SessionState::Authenticated { user: None, verified: false }
}

// =============================================================
// SessionState transitions
// =============================================================

#[test]
fn default_state_is_restoring() {
    assert!(SessionState::default().is_restoring());
}

#[test]
fn restore_without_credential_is_anonymous() {
    let mut state = SessionState::Restoring;
    assert!(state.apply(SessionEvent::Restored { credential_present: false }));
    assert!(state.is_anonymous());
}

#[test]
fn restore_with_credential_is_unverified_authenticated() {
    let mut state = SessionState::Restoring;
    assert!(state.apply(SessionEvent::Restored { credential_present: true }));
    assert!(state.is_authenticated());
    assert!(state.needs_verification());
}

#[test]
fn restore_after_startup_is_ignored() {
    let mut state = SessionState::Anonymous;
    assert!(!state.apply(SessionEvent::Restored { credential_present: true }));
    assert!(state.is_anonymous());
}

#[test]
fn login_from_anonymous_authenticates() {
    let mut state = SessionState::Anonymous;
    assert!(state.apply(SessionEvent::LoggedIn { user: None }));
    assert!(state.is_authenticated());
}

#[test]
fn login_with_identity_is_verified() {
    let mut state = SessionState::Anonymous;
    state.apply(SessionEvent::LoggedIn { user: Some(alice()) });
    assert!(!state.needs_verification());
    assert_eq!(state.user().map(|u| u.username.as_str()), Some("alice"));
}

#[test]
fn verify_records_identity() {
    let mut state = authenticated();
    assert!(state.apply(SessionEvent::Verified(alice())));
    assert_eq!(state, SessionState::Authenticated { user: Some(alice()), verified: true });
}

#[test]
fn verify_after_logout_is_ignored() {
    let mut state = SessionState::Anonymous;
    assert!(!state.apply(SessionEvent::Verified(alice())));
    assert!(state.is_anonymous());
}

#[test]
fn logout_and_invalidate_drop_to_anonymous() {
    for event in [SessionEvent::LoggedOut, SessionEvent::Invalidated] {
        let mut state = authenticated();
        assert!(state.apply(event));
        assert!(state.is_anonymous());
    }
}

#[test]
fn repeated_invalidation_reports_no_change() {
    let mut state = authenticated();
    assert!(state.apply(SessionEvent::Invalidated));
    assert!(!state.apply(SessionEvent::Invalidated));
    assert!(!state.apply(SessionEvent::LoggedOut));
}

#[test]
fn invalidate_during_restore_settles_anonymous() {
    let mut state = SessionState::Restoring;
    assert!(state.apply(SessionEvent::Invalidated));
    assert!(state.is_anonymous());
}

// =============================================================
// Session context
// =============================================================

fn with_owner<T>(f: impl FnOnce() -> T) -> T {
    let owner = Owner::new();
    owner.with(f)
}

#[test]
fn session_login_persists_credential_and_authenticates() {
    with_owner(|| {
        let store = Arc::new(MemoryStore::default());
        let session = Session::new(store.clone());
        session.restore();
        assert!(session.state().get_untracked().is_anonymous());

        session.login(Credential::new("abc123").unwrap());

        assert_eq!(store.read().unwrap().as_str(), "abc123");
        assert!(session.state().get_untracked().is_authenticated());
    });
}

#[test]
fn session_restore_trusts_stored_token_unverified() {
    with_owner(|| {
        let session = Session::new(Arc::new(MemoryStore::with_token("abc123")));
        session.restore();
        assert!(session.state().get_untracked().needs_verification());
    });
}

#[test]
fn session_establish_rejects_empty_token_without_side_effects() {
    with_owner(|| {
        let store = Arc::new(MemoryStore::default());
        let session = Session::new(store.clone());
        session.restore();
        let auth = AuthResponse { token: "  ".to_owned(), username: None, email: None, expires_in: None };

        assert_eq!(session.establish(&auth), Err(CredentialError::Empty));
        assert!(store.read().is_none());
        assert!(session.state().get_untracked().is_anonymous());
    });
}

#[test]
fn session_establish_carries_identity() {
    with_owner(|| {
        let session = Session::new(Arc::new(MemoryStore::default()));
        let auth = AuthResponse {
            token: "abc123".to_owned(),
            username: Some("alice".to_owned()),
            email: Some("a@example.com".to_owned()),
            expires_in: Some(3600),
        };
        session.establish(&auth).unwrap();
        let state = session.state().get_untracked();
        assert_eq!(state.user().map(|u| u.username.as_str()), Some("alice"));
        assert!(!state.needs_verification());
    });
}

#[test]
fn session_logout_clears_store_and_state() {
    with_owner(|| {
        let store = Arc::new(MemoryStore::with_token("abc123"));
        let session = Session::new(store.clone());
        session.restore();
        session.logout();
        assert!(store.read().is_none());
        assert!(session.state().get_untracked().is_anonymous());
    });
}

#[test]
fn session_sink_applies_to_shared_signal() {
    with_owner(|| {
        let session = Session::new(Arc::new(MemoryStore::with_token("abc123")));
        session.restore();
        let sink = session.sink();
        assert!(sink.apply(SessionEvent::Invalidated));
        assert!(!sink.apply(SessionEvent::Invalidated));
        assert!(session.state().get_untracked().is_anonymous());
    });
}

#[test]
fn disposed_signal_drops_late_events() {
    with_owner(|| {
        let signal = RwSignal::new(SessionState::Anonymous);
        signal.dispose();
        assert!(!SessionSink::apply(&signal, SessionEvent::LoggedIn { user: None }));
    });
}
