//! Login view.
//!
//! SYSTEM CONTEXT
//! ==============
//! Submits credentials, establishes the session on success and renders the
//! classified error inline otherwise. Navigation to the dashboard follows the
//! session transition through an effect, so a tab that is already signed in
//! when this view mounts leaves it too.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::net::api;
use crate::net::http_client::ApiClient;
use crate::net::types::LoginRequest;
use crate::state::session::Session;
use crate::util::browser;
use crate::util::guard::{install_redirect, public_route_redirect};
use crate::util::navigation::REGISTER_PATH;

/// Build the login payload, rejecting blank fields before any request.
///
/// # Errors
///
/// A user-facing message naming the missing field.
pub fn login_request(username_or_email: &str, password: &str) -> Result<LoginRequest, String> {
    let username_or_email = username_or_email.trim();
    if username_or_email.is_empty() {
        return Err("Enter your username or email.".to_owned());
    }
    if password.is_empty() {
        return Err("Enter your password.".to_owned());
    }
    Ok(LoginRequest { username_or_email: username_or_email.to_owned(), password: password.to_owned() })
}

/// Run a login round-trip and establish the session from its response.
///
/// # Errors
///
/// The message to show inline.
pub async fn submit_login(client: &ApiClient, session: &Session, request: &LoginRequest) -> Result<(), String> {
    let auth = api::login(client, request).await.map_err(|e| e.to_string())?;
    session.establish(&auth).map_err(|e| e.to_string())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let client = expect_context::<ApiClient>();
    let state = session.state();
    let location = use_location();
    let leave = Memo::new(move |_| public_route_redirect(&state.get(), &location.pathname.get()));
    install_redirect(leave, use_navigate());

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match login_request(&username.get_untracked(), &password.get_untracked()) {
            Ok(request) => request,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        error.set(None);
        busy.set(true);

        let client = client.clone();
        let session = session.clone();
        browser::spawn(async move {
            if let Err(message) = submit_login(&client, &session, &request).await {
                error.try_set(Some(message));
            }
            busy.try_set(false);
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Login"</h1>
                <label class="auth-field">
                    "Username or email"
                    <input
                        class="auth-input"
                        type="text"
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-field">
                    "Password"
                    <input
                        class="auth-input"
                        type="password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="form-error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Signing in..." } else { "Login" }}
                </button>
                <p class="auth-card__switch">
                    "No account yet? "
                    <a href=REGISTER_PATH>"Register"</a>
                </p>
            </form>
        </div>
    }
}
