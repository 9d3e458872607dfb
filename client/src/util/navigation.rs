//! Route table and the navigation seam used outside the router tree.
//!
//! SYSTEM CONTEXT
//! ==============
//! The HTTP client's inbound stage lives outside the router, so it navigates
//! through the [`Navigator`] trait. The browser implementation,
//! [`RouterNavigator`], hands the target to the router instead of reloading
//! the document, and the route guard redirects through the same instance.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Routes rendered behind the guard.
pub const PROTECTED_ROUTES: &[&str] = &[
    "/dashboard",
    "/categories",
    "/categories/new",
    "/transactions",
    "/transactions/new",
    "/budgets",
    "/budgets/new",
    "/profile",
];

/// Strip query, fragment and trailing slashes so `/login/?next=x` compares
/// equal to `/login`.
pub fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let trimmed = path[..end].trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

/// `/login` and `/register` are reachable without a session.
pub fn is_public_route(path: &str) -> bool {
    matches!(normalize_path(path), LOGIN_PATH | REGISTER_PATH)
}

/// Every other path, known or not, requires a session.
pub fn is_protected_route(path: &str) -> bool {
    !is_public_route(path)
}

pub fn is_login_route(path: &str) -> bool {
    normalize_path(path) == LOGIN_PATH
}

/// Tab-level navigation.
pub trait Navigator: Send + Sync {
    fn current_path(&self) -> Option<String>;
    /// Navigate to `path`, replacing the current history entry.
    fn replace(&self, path: &str);
}

/// Navigator backed by the router.
///
/// `replace` only queues the target; [`NavigationBridge`], mounted inside
/// `<Router>`, performs the queued navigation with `replace: true`. Every
/// redirect in the app goes through this one queue, so a target that is
/// already queued or already current is dropped instead of navigated twice.
#[derive(Clone, Copy, Debug)]
pub struct RouterNavigator {
    pending: RwSignal<Option<String>>,
    current: RwSignal<Option<String>>,
}

impl RouterNavigator {
    pub fn new() -> Self {
        Self { pending: RwSignal::new(None), current: RwSignal::new(None) }
    }

    /// The router reached `path`.
    pub fn arrived(&self, path: String) {
        self.current.try_set(Some(path));
    }

    /// Take the queued target and record it as current. Tracks the queue
    /// when called inside a reactive scope.
    pub fn take_pending(&self) -> Option<String> {
        self.pending.track();
        let path = self.pending.try_update(Option::take).flatten()?;
        self.current.try_set(Some(path.clone()));
        Some(path)
    }
}

impl Default for RouterNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for RouterNavigator {
    fn current_path(&self) -> Option<String> {
        self.current.try_get_untracked().flatten()
    }

    fn replace(&self, path: &str) {
        let target = normalize_path(path);
        let same = |candidate: Option<String>| candidate.is_some_and(|p| normalize_path(&p) == target);
        if same(self.current_path()) || same(self.pending.try_get_untracked().flatten()) {
            return;
        }
        self.pending.try_set(Some(path.to_owned()));
    }
}

/// Performs navigations queued on the [`RouterNavigator`] in context and
/// keeps its current path in step with the router.
#[component]
pub fn NavigationBridge() -> impl IntoView {
    let navigator = expect_context::<RouterNavigator>();
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move || navigator.arrived(location.pathname.get()));
    Effect::new(move || {
        if let Some(path) = navigator.take_pending() {
            navigate(&path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
