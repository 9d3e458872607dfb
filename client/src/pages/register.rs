//! Registration view. Mirrors the login flow: a successful sign-up
//! establishes the session and the session effect leaves for the dashboard.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::net::api;
use crate::net::error::ApiError;
use crate::net::http_client::ApiClient;
use crate::net::types::RegisterRequest;
use crate::state::session::Session;
use crate::util::browser;
use crate::util::guard::{install_redirect, public_route_redirect};
use crate::util::navigation::LOGIN_PATH;

pub const USERNAME_MAX_LENGTH: usize = 50;
pub const PASSWORD_MIN_LENGTH: usize = 6;

/// Validate the sign-up form locally before calling the API.
///
/// # Errors
///
/// The first user-facing problem found.
pub fn register_request(username: &str, email: &str, password: &str) -> Result<RegisterRequest, String> {
    let username = username.trim();
    let email = email.trim();
    if username.is_empty() {
        return Err("Username is required.".to_owned());
    }
    if username.chars().count() > USERNAME_MAX_LENGTH {
        return Err(format!("Username must be at most {USERNAME_MAX_LENGTH} characters."));
    }
    if !looks_like_email(email) {
        return Err("Enter a valid email address.".to_owned());
    }
    if password.chars().count() < PASSWORD_MIN_LENGTH {
        return Err(format!("Password must be at least {PASSWORD_MIN_LENGTH} characters."));
    }
    Ok(RegisterRequest { username: username.to_owned(), email: email.to_owned(), password: password.to_owned() })
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.starts_with('.'),
        None => false,
    }
}

/// Prefer the server's per-field message (duplicate username or email) over
/// the generic one.
pub fn register_error_message(err: &ApiError) -> String {
    ["username", "email", "password"]
        .into_iter()
        .find_map(|field| err.field_error(field))
        .map_or_else(|| err.to_string(), str::to_owned)
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let client = expect_context::<ApiClient>();
    let state = session.state();
    let location = use_location();
    let leave = Memo::new(move |_| public_route_redirect(&state.get(), &location.pathname.get()));
    install_redirect(leave, use_navigate());

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request =
            match register_request(&username.get_untracked(), &email.get_untracked(), &password.get_untracked()) {
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
            let outcome = match api::register(&client, &request).await {
                Ok(auth) => session.establish(&auth).map_err(|e| e.to_string()),
                Err(err) => Err(register_error_message(&err)),
            };
            if let Err(message) = outcome {
                error.try_set(Some(message));
            }
            busy.try_set(false);
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Sign Up"</h1>
                <label class="auth-field">
                    "Username"
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Choose username"
                        maxlength={USERNAME_MAX_LENGTH.to_string()}
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-field">
                    "Email"
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="example@mail.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-field">
                    "Password"
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="At least 6 chars"
                        autocomplete="new-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="form-error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Creating account..." } else { "Register" }}
                </button>
                <p class="auth-card__switch">
                    "Already have an account? "
                    <a href=LOGIN_PATH>"Log in here"</a>
                </p>
            </form>
        </div>
    }
}
