//! Fallback for `/` and unknown paths: dashboard when signed in, login otherwise.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::Session;
use crate::util::guard::{fallback_target, install_redirect};

#[component]
pub fn FallbackPage() -> impl IntoView {
    let state = expect_context::<Session>().state();
    let target = Memo::new(move |_| fallback_target(&state.get()));
    install_redirect(target, use_navigate());

    view! { <p class="page page--pending">"Redirecting..."</p> }
}
