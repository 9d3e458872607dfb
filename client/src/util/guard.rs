//! Route guard decisions and the redirects that act on them.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ProtectedRoute` and the auth views ask [`decide`] what to do with the
//! current session and path, then install one of the redirect effects below.
//! Decisions are pure so they can be checked for every state/route pair.
//!
//! TRADE-OFFS
//! ==========
//! `Restoring` never redirects. The server render and first hydration frame
//! cannot see `localStorage`, so redirecting there would bounce every
//! signed-in reload through `/login`.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;
use crate::util::navigation::{
    DASHBOARD_PATH, LOGIN_PATH, Navigator, RouterNavigator, is_login_route, is_protected_route, is_public_route,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session not known yet; render a placeholder.
    Pending,
    RedirectToLogin,
    Render,
}

/// What the guard does for `state` at `path`.
pub fn decide(state: &SessionState, path: &str) -> GuardDecision {
    if !is_protected_route(path) {
        return GuardDecision::Render;
    }
    match state {
        SessionState::Restoring => GuardDecision::Pending,
        SessionState::Anonymous => GuardDecision::RedirectToLogin,
        SessionState::Authenticated { .. } => GuardDecision::Render,
    }
}

/// Signed-in tabs are sent from `/login` and `/register` to the dashboard.
pub fn public_route_redirect(state: &SessionState, path: &str) -> Option<&'static str> {
    (state.is_authenticated() && is_public_route(path)).then_some(DASHBOARD_PATH)
}

/// Target for an unknown route.
pub fn fallback_target(state: &SessionState) -> Option<&'static str> {
    match state {
        SessionState::Restoring => None,
        SessionState::Anonymous => Some(LOGIN_PATH),
        SessionState::Authenticated { .. } => Some(DASHBOARD_PATH),
    }
}

/// History-replacing navigation, so Back does not return to a guarded view.
pub fn replace_history() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Act on one guard decision. Returns whether a redirect was requested.
///
/// Nothing is requested when the tab is already at `/login`, which covers
/// the inbound stage having redirected first for the same invalidation.
pub fn redirect_to_login(decision: GuardDecision, navigator: &dyn Navigator) -> bool {
    if decision != GuardDecision::RedirectToLogin {
        return false;
    }
    if navigator.current_path().is_some_and(|path| is_login_route(&path)) {
        return false;
    }
    leptos::logging::log!("guard: no session, redirecting to {LOGIN_PATH}");
    navigator.replace(LOGIN_PATH);
    true
}

/// Redirect to `/login` whenever the guard decision becomes a redirect.
pub fn install_login_redirect(decision: Memo<GuardDecision>, navigator: RouterNavigator) {
    Effect::new(move || {
        redirect_to_login(decision.get(), &navigator);
    });
}

/// Follow `target` whenever it resolves to a path.
pub fn install_redirect<F>(target: Memo<Option<&'static str>>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(path) = target.get() {
            navigate(path, replace_history());
        }
    });
}
