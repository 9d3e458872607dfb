//! Create-transaction form.

#[cfg(test)]
#[path = "transaction_new_test.rs"]
mod transaction_new_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::net::http_client::ApiClient;
use crate::net::types::{Category, NewTransaction};
use crate::util::browser;
use crate::util::format::today_iso;

pub const DESCRIPTION_MAX_LENGTH: usize = 255;
pub const MIN_AMOUNT: f64 = 0.01;

/// Parse a positive amount typed into a number field.
///
/// # Errors
///
/// A user-facing message when the amount is missing or below one cent.
pub fn parse_amount(raw: &str) -> Result<f64, String> {
    let amount: f64 = raw.trim().parse().map_err(|_| "Enter an amount.".to_owned())?;
    if !amount.is_finite() || amount < MIN_AMOUNT {
        return Err(format!("Amount must be at least {MIN_AMOUNT}."));
    }
    Ok(amount)
}

/// Parse a category id from a `<select>` value.
///
/// # Errors
///
/// A user-facing message when nothing is selected.
pub fn parse_category(raw: &str) -> Result<i64, String> {
    raw.trim().parse().map_err(|_| "Choose a category.".to_owned())
}

/// Dates come from `<input type=date>`, which yields `YYYY-MM-DD` or nothing.
pub fn is_iso_date(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes.iter().enumerate().all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit())
}

/// # Errors
///
/// The first user-facing problem found.
pub fn new_transaction(
    category: &str,
    amount: &str,
    description: &str,
    date: &str,
) -> Result<NewTransaction, String> {
    let category_id = parse_category(category)?;
    let amount = parse_amount(amount)?;
    let description = description.trim();
    if description.chars().count() > DESCRIPTION_MAX_LENGTH {
        return Err(format!("Description must be at most {DESCRIPTION_MAX_LENGTH} characters."));
    }
    if !is_iso_date(date) {
        return Err("Pick a date.".to_owned());
    }
    Ok(NewTransaction {
        category_id,
        amount,
        description: (!description.is_empty()).then(|| description.to_owned()),
        transaction_date: date.to_owned(),
    })
}

/// Load categories for a form, preselecting the first one.
pub(crate) fn load_categories(
    client: ApiClient,
    categories: RwSignal<Option<Vec<Category>>>,
    selected: RwSignal<String>,
    error: RwSignal<Option<String>>,
) {
    browser::spawn(async move {
        match api::categories(&client).await {
            Ok(list) => {
                if let Some(first) = list.first() {
                    selected.try_set(first.id.to_string());
                }
                categories.try_set(Some(list));
            }
            Err(err) => {
                error.try_set(Some(format!("Error loading categories: {err}")));
            }
        }
    });
}

#[component]
pub fn NewTransactionPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let navigate = use_navigate();
    let categories = RwSignal::new(None::<Vec<Category>>);
    let category = RwSignal::new(String::new());
    let amount = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let date = RwSignal::new(today_iso());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    load_categories(client.clone(), categories, category, error);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let transaction = match new_transaction(
            &category.get_untracked(),
            &amount.get_untracked(),
            &description.get_untracked(),
            &date.get_untracked(),
        ) {
            Ok(transaction) => transaction,
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
            match api::create_transaction(&client, &transaction).await {
                Ok(_) => navigate("/transactions", NavigateOptions::default()),
                Err(err) => {
                    error.try_set(Some(err.to_string()));
                    busy.try_set(false);
                }
            }
        });
    };

    view! {
        <div class="card form">
            <h2>"New Transaction"</h2>
            <Show when=move || error.get().is_some()>
                <p class="form-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            {move || match categories.get() {
                None => view! { <p class="muted">"Loading categories..."</p> }.into_any(),
                Some(list) if list.is_empty() => view! {
                    <p class="empty">
                        "At least one category required! " <a href="/categories/new">"Create one"</a>
                    </p>
                }
                .into_any(),
                Some(list) => view! {
                    <form on:submit=on_submit.clone()>
                        <label class="form__field">
                            "Amount (EUR)"
                            <input
                                type="number"
                                step="0.01"
                                min="0.01"
                                prop:value=move || amount.get()
                                on:input=move |ev| amount.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="form__field">
                            "Category"
                            <CategorySelect categories=list selected=category/>
                        </label>
                        <label class="form__field">
                            "Date"
                            <input
                                type="date"
                                prop:value=move || date.get()
                                on:input=move |ev| date.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="form__field">
                            "Description"
                            <input
                                type="text"
                                placeholder="e.g. Lunch"
                                maxlength={DESCRIPTION_MAX_LENGTH.to_string()}
                                prop:value=move || description.get()
                                on:input=move |ev| description.set(event_target_value(&ev))
                            />
                        </label>
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            "Save"
                        </button>
                    </form>
                }
                .into_any(),
            }}
        </div>
    }
}

/// Category dropdown bound to the selected id.
#[component]
pub(crate) fn CategorySelect(categories: Vec<Category>, selected: RwSignal<String>) -> impl IntoView {
    view! {
        <select prop:value=move || selected.get() on:change=move |ev| selected.set(event_target_value(&ev))>
            {categories
                .into_iter()
                .map(|cat| {
                    view! {
                        <option value={cat.id.to_string()}>{format!("{} ({})", cat.name, cat.kind.as_str())}</option>
                    }
                })
                .collect_view()}
        </select>
    }
}
