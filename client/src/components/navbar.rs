//! Shared chrome for every protected view: links, greeting and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by `ProtectedRoute` only when a session exists. While the session
//! is unverified (rebuilt from a stored token) the navbar asks `/users/me`
//! once; success records the identity, a 401 collapses the session through the
//! HTTP client's invalidation stage. Logout only ends the session; the route
//! guard redirects.

use leptos::prelude::*;

use crate::net::api;
use crate::net::http_client::ApiClient;
use crate::state::session::Session;
use crate::util::browser;

const LINKS: &[(&str, &str)] = &[
    ("/dashboard", "Dashboard"),
    ("/transactions", "Transactions"),
    ("/categories", "Categories"),
    ("/budgets", "Budgets"),
    ("/profile", "Profile"),
];

fn greeting(username: Option<&str>) -> String {
    username.map_or_else(|| "Hello!".to_owned(), |name| format!("Hello, {name}!"))
}

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<Session>();
    let client = expect_context::<ApiClient>();
    let state = session.state();
    let session_logout = session.clone();

    let verification_requested = RwSignal::new(false);
    Effect::new(move || {
        if !state.get().needs_verification() || verification_requested.get_untracked() {
            return;
        }
        verification_requested.set(true);

        let session = session.clone();
        let client = client.clone();
        browser::spawn(async move {
            match api::current_user(&client).await {
                Ok(user) => session.verified(user),
                // 401 is already handled centrally.
                Err(err) if err.is_unauthorized() => {}
                Err(err) => leptos::logging::warn!("session verification failed: {err}"),
            }
        });
    });

    // The guard sees the session drop and performs the one redirect.
    let on_logout = move |_| session_logout.logout();

    let hello = move || greeting(state.get().user().map(|u| u.username.as_str()));

    view! {
        <nav class="navbar">
            <div class="navbar__links">
                {LINKS
                    .iter()
                    .map(|(href, label)| {
                        view! {
                            <a class="navbar__link" href=*href>
                                {*label}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="navbar__session">
                <span class="navbar__greeting">{hello}</span>
                <button class="btn navbar__logout" on:click=on_logout>
                    "Logout"
                </button>
            </div>
        </nav>
    }
}
