//! Budget usage cards with activate/deactivate and delete.

#[cfg(test)]
#[path = "budgets_test.rs"]
mod budgets_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::error::ApiError;
use crate::net::http_client::ApiClient;
use crate::net::types::BudgetUsage;
use crate::util::browser;
use crate::util::format::{format_amount, progress_tone, progress_width};

/// Apply a usage fetch. A successful reload also clears an error left by an
/// earlier failed toggle or delete.
pub fn show_usage(
    result: Result<Vec<BudgetUsage>, ApiError>,
    budgets: RwSignal<Option<Vec<BudgetUsage>>>,
    error: RwSignal<Option<String>>,
) {
    match result {
        Ok(list) => {
            error.try_set(None);
            budgets.try_set(Some(list));
        }
        Err(err) => {
            error.try_set(Some(format!("Error loading budgets: {err}")));
        }
    }
}

#[component]
pub fn BudgetsPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let budgets = RwSignal::new(None::<Vec<BudgetUsage>>);
    let error = RwSignal::new(None::<String>);
    let reload = RwSignal::new(0_u32);

    let fetch_client = client.clone();
    Effect::new(move || {
        reload.track();
        let client = fetch_client.clone();
        browser::spawn(async move {
            show_usage(api::budget_usage(&client).await, budgets, error);
        });
    });

    let toggle_client = client.clone();
    let on_toggle = Callback::new(move |(id, active): (i64, bool)| {
        let client = toggle_client.clone();
        browser::spawn(async move {
            match api::set_budget_active(&client, id, !active).await {
                Ok(()) => {
                    reload.try_update(|n| *n += 1);
                }
                Err(err) => {
                    error.try_set(Some(err.to_string()));
                }
            }
        });
    });

    let on_delete = Callback::new(move |id: i64| {
        if !browser::confirm("Are you sure?") {
            return;
        }
        let client = client.clone();
        browser::spawn(async move {
            match api::delete_budget(&client, id).await {
                Ok(()) => {
                    reload.try_update(|n| *n += 1);
                }
                Err(err) => {
                    error.try_set(Some(err.to_string()));
                }
            }
        });
    });

    view! {
        <div class="section-header">
            <h1>"Budgets"</h1>
            <a class="btn btn--primary" href="/budgets/new">"+ New Budget"</a>
        </div>
        <Show when=move || error.get().is_some()>
            <p class="form-error">{move || error.get().unwrap_or_default()}</p>
        </Show>
        {move || match budgets.get() {
            None => view! { <p class="muted">"Loading budgets..."</p> }.into_any(),
            Some(list) if list.is_empty() => view! { <p class="empty">"No Budgets Found"</p> }.into_any(),
            Some(list) => view! {
                <div class="card-grid">
                    {list
                        .into_iter()
                        .map(|budget| view! { <BudgetCard budget on_toggle on_delete/> })
                        .collect_view()}
                </div>
            }
            .into_any(),
        }}
    }
}

#[component]
fn BudgetCard(
    budget: BudgetUsage,
    on_toggle: Callback<(i64, bool)>,
    on_delete: Callback<i64>,
) -> impl IntoView {
    let BudgetUsage { id, is_active, percent_used, .. } = budget;
    let card_class = if is_active { "card budget-card" } else { "card budget-card budget-card--inactive" };
    let bar_class = format!("progress__bar {}", progress_tone(percent_used).class());
    let bar_style = format!("width: {}", progress_width(percent_used));
    let period = budget.period.map(|p| p.label()).unwrap_or_default();

    view! {
        <div class=card_class>
            <div class="budget-card__header">
                <h3>{budget.category_name.unwrap_or_default()}</h3>
                <span class="budget-card__period">{period}</span>
            </div>
            <p>
                "Spent: " <strong>{format_amount(budget.spent)}</strong> " / " {format_amount(budget.amount)}
            </p>
            <div class="progress">
                <div class=bar_class style=bar_style></div>
            </div>
            <div class="budget-card__actions">
                <button class="btn" on:click=move |_| on_toggle.run((id, is_active))>
                    {if is_active { "Deactivate" } else { "Activate" }}
                </button>
                <button class="btn btn--danger" on:click=move |_| on_delete.run(id)>
                    "Delete"
                </button>
            </div>
        </div>
    }
}
