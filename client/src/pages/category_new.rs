//! Create-category form.

#[cfg(test)]
#[path = "category_new_test.rs"]
mod category_new_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::net::http_client::ApiClient;
use crate::net::types::{CategoryType, NewCategory};
use crate::util::browser;

pub const DEFAULT_COLOR: &str = "#000000";

/// # Errors
///
/// A user-facing message for an unusable name or colour.
pub fn new_category(name: &str, kind: CategoryType, color: &str) -> Result<NewCategory, String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Name is required.".to_owned());
    }
    if !is_hex_color(color) {
        return Err("Pick a colour.".to_owned());
    }
    Ok(NewCategory { name: name.to_owned(), kind, color: color.to_ascii_lowercase() })
}

fn is_hex_color(color: &str) -> bool {
    color.len() == 7 && color.starts_with('#') && color[1..].chars().all(|c| c.is_ascii_hexdigit())
}

#[component]
pub fn NewCategoryPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let navigate = use_navigate();
    let name = RwSignal::new(String::new());
    let kind = RwSignal::new(CategoryType::Expense);
    let color = RwSignal::new(DEFAULT_COLOR.to_owned());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let category = match new_category(&name.get_untracked(), kind.get_untracked(), &color.get_untracked()) {
            Ok(category) => category,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        error.set(None);
        busy.set(true);
        let client = client.clone();
        let navigate = navigate.clone();
        browser::spawn(async move {
            match api::create_category(&client, &category).await {
                Ok(_) => navigate("/categories", NavigateOptions::default()),
                Err(err) => {
                    error.try_set(Some(err.field_error("name").map_or_else(|| err.to_string(), str::to_owned)));
                    busy.try_set(false);
                }
            }
        });
    };

    view! {
        <form class="card form" on:submit=on_submit>
            <h2>"New Category"</h2>
            <label class="form__field">
                "Name"
                <input
                    type="text"
                    placeholder="e.g. Groceries"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </label>
            <label class="form__field">
                "Type"
                <select
                    prop:value=move || kind.get().as_str()
                    on:change=move |ev| {
                        if let Some(parsed) = CategoryType::parse(&event_target_value(&ev)) {
                            kind.set(parsed);
                        }
                    }
                >
                    <option value="EXPENSE">"Expense"</option>
                    <option value="INCOME">"Income"</option>
                </select>
            </label>
            <label class="form__field">
                "Colour"
                <input
                    type="color"
                    prop:value=move || color.get()
                    on:input=move |ev| color.set(event_target_value(&ev))
                />
                <span class="muted">{move || color.get()}</span>
            </label>
            <Show when=move || error.get().is_some()>
                <p class="form-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                "Save"
            </button>
        </form>
    }
}
