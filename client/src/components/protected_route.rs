//! Route guard wrapping every protected view.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted as the parent route of all protected paths. With a session it
//! renders the navbar plus the matched child route; without one it renders
//! nothing of the child and replaces the history entry with `/login`.

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_location;

use crate::components::navbar::Navbar;
use crate::state::session::Session;
use crate::util::guard::{GuardDecision, decide, install_login_redirect};
use crate::util::navigation::RouterNavigator;

#[component]
pub fn ProtectedRoute() -> impl IntoView {
    let state = expect_context::<Session>().state();
    let location = use_location();
    let decision = Memo::new(move |_| decide(&state.get(), &location.pathname.get()));
    install_login_redirect(decision, expect_context::<RouterNavigator>());

    move || match decision.get() {
        GuardDecision::Render => view! {
            <Navbar/>
            <main class="page">
                <Outlet/>
            </main>
        }
        .into_any(),
        GuardDecision::Pending => view! { <div class="page page--pending">"Loading..."</div> }.into_any(),
        GuardDecision::RedirectToLogin => ().into_any(),
    }
}
