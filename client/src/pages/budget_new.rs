//! Create-budget form.

#[cfg(test)]
#[path = "budget_new_test.rs"]
mod budget_new_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::net::http_client::ApiClient;
use crate::net::types::{BudgetPeriod, Category, NewBudget};
use crate::pages::transaction_new::{CategorySelect, is_iso_date, load_categories, parse_amount, parse_category};
use crate::util::browser;
use crate::util::format::today_iso;

/// # Errors
///
/// The first user-facing problem found. A custom period needs an end date;
/// other periods accept one optionally.
pub fn new_budget(
    category: &str,
    amount: &str,
    period: BudgetPeriod,
    start_date: &str,
    end_date: &str,
) -> Result<NewBudget, String> {
    let category_id = parse_category(category)?;
    let amount = parse_amount(amount)?;
    if !is_iso_date(start_date) {
        return Err("Pick a start date.".to_owned());
    }
    let end_date = end_date.trim();
    let end_date = if end_date.is_empty() {
        if period == BudgetPeriod::Custom {
            return Err("A custom period needs an end date.".to_owned());
        }
        None
    } else if !is_iso_date(end_date) {
        return Err("Pick a valid end date.".to_owned());
    } else if end_date < start_date {
        return Err("End date must not be before the start date.".to_owned());
    } else {
        Some(end_date.to_owned())
    };
    Ok(NewBudget { category_id, amount, period, start_date: start_date.to_owned(), end_date })
}

#[component]
pub fn NewBudgetPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let navigate = use_navigate();
    let categories = RwSignal::new(None::<Vec<Category>>);
    let category = RwSignal::new(String::new());
    let amount = RwSignal::new(String::new());
    let period = RwSignal::new(BudgetPeriod::Monthly);
    let start_date = RwSignal::new(today_iso());
    let end_date = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    load_categories(client.clone(), categories, category, error);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let budget = match new_budget(
            &category.get_untracked(),
            &amount.get_untracked(),
            period.get_untracked(),
            &start_date.get_untracked(),
            &end_date.get_untracked(),
        ) {
            Ok(budget) => budget,
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
            match api::create_budget(&client, &budget).await {
                Ok(()) => navigate("/budgets", NavigateOptions::default()),
                Err(err) => {
                    error.try_set(Some(err.to_string()));
                    busy.try_set(false);
                }
            }
        });
    };

    let end_label = move || {
        if period.get() == BudgetPeriod::Custom { "End date" } else { "End date (optional)" }
    };

    view! {
        <div class="card form">
            <h2>"New Budget"</h2>
            <Show when=move || error.get().is_some()>
                <p class="form-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            {move || match categories.get() {
                None => view! { <p class="muted">"Loading categories..."</p> }.into_any(),
                Some(list) if list.is_empty() => view! {
                    <p class="empty">
                        "A category should be created first! " <a href="/categories/new">"Create one"</a>
                    </p>
                }
                .into_any(),
                Some(list) => view! {
                    <form on:submit=on_submit.clone()>
                        <label class="form__field">
                            "Category"
                            <CategorySelect categories=list selected=category/>
                        </label>
                        <label class="form__field">
                            "Limit (EUR)"
                            <input
                                type="number"
                                step="0.01"
                                min="0.01"
                                placeholder="E.g. 500"
                                prop:value=move || amount.get()
                                on:input=move |ev| amount.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="form__field">
                            "Period"
                            <select
                                prop:value=move || period.get().as_str()
                                on:change=move |ev| {
                                    if let Some(parsed) = BudgetPeriod::parse(&event_target_value(&ev)) {
                                        period.set(parsed);
                                    }
                                }
                            >
                                {BudgetPeriod::ALL
                                    .into_iter()
                                    .map(|p| view! { <option value={p.as_str()}>{p.label()}</option> })
                                    .collect_view()}
                            </select>
                        </label>
                        <label class="form__field">
                            "Start date"
                            <input
                                type="date"
                                prop:value=move || start_date.get()
                                on:input=move |ev| start_date.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="form__field">
                            {end_label}
                            <input
                                type="date"
                                required=move || period.get() == BudgetPeriod::Custom
                                prop:value=move || end_date.get()
                                on:input=move |ev| end_date.set(event_target_value(&ev))
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
