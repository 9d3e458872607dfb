//! Profile: edit identity, change password, delete the account.
//!
//! Deleting the account ends the session exactly like logout.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::http_client::ApiClient;
use crate::net::types::{PasswordChange, ProfileUpdate, User};
use crate::pages::register::{PASSWORD_MIN_LENGTH, USERNAME_MAX_LENGTH};
use crate::state::session::{Session, SessionState};
use crate::util::browser;

/// Only changed fields are sent.
///
/// # Errors
///
/// A user-facing message when nothing changed or a field is unusable.
pub fn profile_update(current: &User, username: &str, email: &str) -> Result<ProfileUpdate, String> {
    let username = username.trim();
    let email = email.trim();
    if username.is_empty() || email.is_empty() {
        return Err("Username and email are required.".to_owned());
    }
    if username.chars().count() > USERNAME_MAX_LENGTH {
        return Err(format!("Username must be at most {USERNAME_MAX_LENGTH} characters."));
    }
    let update = ProfileUpdate {
        username: (username != current.username).then(|| username.to_owned()),
        email: (email != current.email).then(|| email.to_owned()),
    };
    if update.username.is_none() && update.email.is_none() {
        return Err("Nothing to update.".to_owned());
    }
    Ok(update)
}

/// # Errors
///
/// A user-facing message when a field is missing or the new password is
/// too short or unchanged.
pub fn password_change(current: &str, new: &str) -> Result<PasswordChange, String> {
    if current.is_empty() {
        return Err("Enter your current password.".to_owned());
    }
    if new.chars().count() < PASSWORD_MIN_LENGTH {
        return Err(format!("New password must be at least {PASSWORD_MIN_LENGTH} characters."));
    }
    if new == current {
        return Err("New password must differ from the current one.".to_owned());
    }
    Ok(PasswordChange { password: current.to_owned(), new_password: new.to_owned() })
}

/// Whether the page asks `/users/me` itself. An unverified session is
/// already being confirmed by the navbar, which records the identity in the
/// session.
pub fn fetches_identity(state: &SessionState) -> bool {
    !state.needs_verification()
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let session = expect_context::<Session>();

    let user = RwSignal::new(None::<User>);
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let current_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let message = RwSignal::new(None::<String>);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let show_user = move |loaded: User| {
        username.try_set(loaded.username.clone());
        email.try_set(loaded.email.clone());
        user.try_set(Some(loaded));
    };

    let state = session.state();
    if fetches_identity(&state.get_untracked()) {
        let client = client.clone();
        let session = session.clone();
        browser::spawn(async move {
            match api::current_user(&client).await {
                Ok(loaded) => {
                    session.verified(loaded.clone());
                    show_user(loaded);
                }
                Err(err) => {
                    error.try_set(Some(err.to_string()));
                }
            }
        });
    } else {
        // The navbar is already verifying this session; mirror its result.
        Effect::new(move || {
            if let Some(loaded) = state.get().user().cloned() {
                if user.get_untracked().is_none() {
                    show_user(loaded);
                }
            }
        });
    }

    let begin = move || {
        if busy.get_untracked() {
            return false;
        }
        message.set(None);
        error.set(None);
        busy.set(true);
        true
    };

    let update_client = client.clone();
    let update_session = session.clone();
    let on_update = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(current) = user.get_untracked() else {
            return;
        };
        let update = match profile_update(&current, &username.get_untracked(), &email.get_untracked()) {
            Ok(update) => update,
            Err(problem) => {
                error.set(Some(problem));
                return;
            }
        };
        if !begin() {
            return;
        }
        let client = update_client.clone();
        let session = update_session.clone();
        browser::spawn(async move {
            match api::update_profile(&client, &update).await {
                Ok(updated) => {
                    session.verified(updated.clone());
                    show_user(updated);
                    message.try_set(Some("The profile is updated!".to_owned()));
                }
                Err(err) => {
                    error.try_set(Some(err.to_string()));
                }
            }
            busy.try_set(false);
        });
    };

    let password_client = client.clone();
    let on_change_password = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let change = match password_change(&current_password.get_untracked(), &new_password.get_untracked()) {
            Ok(change) => change,
            Err(problem) => {
                error.set(Some(problem));
                return;
            }
        };
        if !begin() {
            return;
        }
        let client = password_client.clone();
        browser::spawn(async move {
            match api::change_password(&client, &change).await {
                Ok(()) => {
                    current_password.try_set(String::new());
                    new_password.try_set(String::new());
                    message.try_set(Some("Your password is changed!".to_owned()));
                }
                Err(err) => {
                    error.try_set(Some(err.to_string()));
                }
            }
            busy.try_set(false);
        });
    };

    let on_delete = move |_| {
        if !browser::confirm("Warning: This action will delete your account and all your data! Are you sure?") {
            return;
        }
        if !begin() {
            return;
        }
        let client = client.clone();
        let session = session.clone();
        browser::spawn(async move {
            match api::delete_account(&client).await {
                Ok(()) => session.logout(),
                Err(err) => {
                    error.try_set(Some(err.to_string()));
                    busy.try_set(false);
                }
            }
        });
    };

    view! {
        <h1>"My Profile"</h1>
        <Show when=move || message.get().is_some()>
            <p class="form-message">{move || message.get().unwrap_or_default()}</p>
        </Show>
        <Show when=move || error.get().is_some()>
            <p class="form-error">{move || error.get().unwrap_or_default()}</p>
        </Show>
        <div class="card-grid">
            <form class="card form" on:submit=on_update>
                <h3>"Personal data"</h3>
                <label class="form__field">
                    "Username"
                    <input
                        type="text"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    "Email"
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <button
                    class="btn btn--primary"
                    type="submit"
                    disabled=move || busy.get() || user.get().is_none()
                >
                    "Save changes"
                </button>
            </form>
            <form class="card form" on:submit=on_change_password>
                <h3>"Change your password"</h3>
                <label class="form__field">
                    "Current password"
                    <input
                        type="password"
                        autocomplete="current-password"
                        prop:value=move || current_password.get()
                        on:input=move |ev| current_password.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    "New password"
                    <input
                        type="password"
                        autocomplete="new-password"
                        prop:value=move || new_password.get()
                        on:input=move |ev| new_password.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Change password"
                </button>
            </form>
            <div class="card danger-zone">
                <h3>"Delete account"</h3>
                <p>"Personal data is deleted permanently after deleting account!"</p>
                <button class="btn btn--danger" disabled=move || busy.get() on:click=on_delete>
                    "Delete account"
                </button>
            </div>
        </div>
    }
}
