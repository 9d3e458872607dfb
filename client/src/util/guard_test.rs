use super::*;
use crate::util::navigation::PROTECTED_ROUTES;

fn states() -> [SessionState; 4] {
    [
        SessionState::Restoring,
        SessionState::Anonymous,
        SessionState::Authenticated { user: None, verified: false },
        SessionState::Authenticated { user: None, verified: true },
    ]
}

#[test]
fn redirect_iff_anonymous_on_protected_route() {
    let routes = PROTECTED_ROUTES.iter().copied().chain(["/login", "/register", "/nowhere"]);
    for path in routes {
        for state in states() {
            let redirects = decide(&state, path) == GuardDecision::RedirectToLogin;
            assert_eq!(redirects, state.is_anonymous() && is_protected_route(path), "{state:?} at {path}");
        }
    }
}

#[test]
fn anonymous_deep_link_to_new_budget_redirects() {
    assert_eq!(decide(&SessionState::Anonymous, "/budgets/new"), GuardDecision::RedirectToLogin);
}

#[test]
fn unverified_session_still_renders() {
    let state = SessionState::Authenticated { user: None, verified: false };
    assert_eq!(decide(&state, "/categories"), GuardDecision::Render);
}

#[test]
fn restoring_waits_instead_of_redirecting() {
    assert_eq!(decide(&SessionState::Restoring, "/dashboard"), GuardDecision::Pending);
}

#[test]
fn login_page_always_renders() {
    for state in states() {
        assert_eq!(decide(&state, "/login"), GuardDecision::Render);
    }
}

#[test]
fn authenticated_tab_leaves_auth_views() {
    let state = SessionState::Authenticated { user: None, verified: false };
    assert_eq!(public_route_redirect(&state, "/login"), Some(DASHBOARD_PATH));
    assert_eq!(public_route_redirect(&state, "/register/"), Some(DASHBOARD_PATH));
    assert_eq!(public_route_redirect(&state, "/dashboard"), None);
    assert_eq!(public_route_redirect(&SessionState::Anonymous, "/login"), None);
}

#[test]
fn fallback_depends_on_session() {
    assert_eq!(fallback_target(&SessionState::Restoring), None);
    assert_eq!(fallback_target(&SessionState::Anonymous), Some(LOGIN_PATH));
    assert_eq!(
        fallback_target(&SessionState::Authenticated { user: None, verified: true }),
        Some(DASHBOARD_PATH)
    );
}

#[test]
fn redirects_replace_history() {
    assert!(replace_history().replace);
}

// =============================================================
// One navigation per invalidation
// =============================================================

mod single_redirect {
    use std::sync::Arc;

    use async_trait::async_trait;
    use futures::executor::block_on;

    use super::*;
    use crate::net::credential_store::{CredentialStore, MemoryStore};
    use crate::net::http_client::ApiClient;
    use crate::net::transport::{ApiRequest, Method, RawResponse, Transport, TransportError};
    use crate::state::session::Session;

    struct Rejecting;

    #[async_trait(?Send)]
    impl Transport for Rejecting {
        async fn dispatch(&self, _request: ApiRequest) -> Result<RawResponse, TransportError> {
            Ok(RawResponse { status: 401, body: String::new() })
        }
    }

    /// Drain the queue the way the router bridge does.
    fn navigations(navigator: &RouterNavigator) -> Vec<String> {
        std::iter::from_fn(|| navigator.take_pending()).collect()
    }

    fn guard_step(session: &Session, navigator: &RouterNavigator) -> bool {
        let path = navigator.current_path().unwrap_or_default();
        redirect_to_login(decide(&session.state().get_untracked(), &path), navigator)
    }

    #[test]
    fn invalidation_and_guard_share_one_navigation() {
        Owner::new().with(|| {
            let store = Arc::new(MemoryStore::with_token("abc123"));
            let session = Session::new(store.clone());
            session.restore();
            let navigator = RouterNavigator::new();
            navigator.arrived("/dashboard".to_owned());
            let client = ApiClient::new(Arc::new(Rejecting), store.clone(), session.sink(), Arc::new(navigator));

            let err = block_on(client.send(ApiRequest::new(Method::Get, "/categories"))).unwrap_err();
            assert!(err.is_unauthorized());
            // The guard effect re-runs on the session change before the router moves.
            guard_step(&session, &navigator);

            assert_eq!(navigations(&navigator), vec![LOGIN_PATH.to_owned()]);
            assert!(!guard_step(&session, &navigator));
            assert!(navigations(&navigator).is_empty());
            assert!(store.read().is_none());
        });
    }

    #[test]
    fn logout_redirects_once_through_the_guard() {
        Owner::new().with(|| {
            let session = Session::new(Arc::new(MemoryStore::with_token("abc123")));
            session.restore();
            let navigator = RouterNavigator::new();
            navigator.arrived("/profile".to_owned());

            session.logout();
            assert!(guard_step(&session, &navigator));
            guard_step(&session, &navigator);

            assert_eq!(navigations(&navigator), vec![LOGIN_PATH.to_owned()]);
        });
    }

    #[test]
    fn guard_is_quiet_at_login() {
        Owner::new().with(|| {
            let navigator = RouterNavigator::new();
            navigator.arrived(LOGIN_PATH.to_owned());
            assert!(!redirect_to_login(GuardDecision::RedirectToLogin, &navigator));
            assert!(navigations(&navigator).is_empty());
        });
    }
}
