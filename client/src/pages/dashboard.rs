//! Dashboard: totals and the most recent transactions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authenticated landing route. Statistics and recent transactions are
//! requested concurrently on mount; either failure shows one inline error.

use leptos::prelude::*;

use crate::config::RECENT_TRANSACTIONS_LIMIT;
use crate::net::api;
use crate::net::http_client::ApiClient;
use crate::net::types::{Transaction, UserStatistics};
use crate::util::browser;
use crate::util::format::{format_amount, format_signed};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let stats = RwSignal::new(None::<UserStatistics>);
    let recent = RwSignal::new(Vec::<Transaction>::new());
    let error = RwSignal::new(None::<String>);

    browser::spawn(async move {
        let (loaded_stats, loaded_recent) = futures::future::join(
            api::statistics(&client),
            api::recent_transactions(&client, RECENT_TRANSACTIONS_LIMIT),
        )
        .await;
        match (loaded_stats, loaded_recent) {
            (Ok(s), Ok(r)) => {
                stats.try_set(Some(s));
                recent.try_set(r);
            }
            (Err(err), _) | (_, Err(err)) => {
                error.try_set(Some(err.to_string()));
            }
        }
    });

    let total = move |pick: fn(&UserStatistics) -> f64| stats.get().as_ref().map(pick).unwrap_or_default();

    view! {
        <h1>"Dashboard"</h1>
        <Show when=move || error.get().is_some()>
            <p class="form-error">{move || error.get().unwrap_or_default()}</p>
        </Show>
        <div class="stat-grid">
            <div class="stat-card stat-card--income">
                <h3>"Total Income"</h3>
                <p class="stat-card__value">{move || format_signed(total(|s| s.total_income), true)}</p>
            </div>
            <div class="stat-card stat-card--expense">
                <h3>"Total Expenses"</h3>
                <p class="stat-card__value">{move || format_signed(total(|s| s.total_expenses), false)}</p>
            </div>
            <div class="stat-card stat-card--balance">
                <h3>"Balance"</h3>
                <p class="stat-card__value">{move || format_amount(total(|s| s.net_balance))}</p>
            </div>
        </div>
        <section class="recent">
            <div class="section-header">
                <h2>"Recent Transactions"</h2>
                <a href="/transactions">"See all"</a>
            </div>
            <Show
                when=move || !recent.get().is_empty()
                fallback=|| view! { <p class="empty">"No recent transactions"</p> }
            >
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Date"</th>
                            <th>"Description"</th>
                            <th>"Amount"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || recent.get()
                            key=|tx| tx.id
                            children=move |tx: Transaction| {
                                let tone = if tx.amount > 0.0 { "amount amount--in" } else { "amount amount--out" };
                                view! {
                                    <tr>
                                        <td>{tx.transaction_date}</td>
                                        <td>
                                            <strong>{tx.category_name.unwrap_or_default()}</strong>
                                            <br/>
                                            <span class="muted">{tx.description.unwrap_or_default()}</span>
                                        </td>
                                        <td class=tone>{format_amount(tx.amount)}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>
        </section>
    }
}
