//! Paged transaction list, newest first, with delete.

use leptos::prelude::*;

use crate::net::api;
use crate::net::http_client::ApiClient;
use crate::net::types::{Page, Transaction};
use crate::util::browser;
use crate::util::format::{format_amount, has_next_page, page_label};

#[component]
pub fn TransactionsPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let page = RwSignal::new(0_u32);
    let listing = RwSignal::new(None::<Page<Transaction>>);
    let error = RwSignal::new(None::<String>);
    // Bumped after a delete to refetch the current page.
    let reload = RwSignal::new(0_u32);

    let fetch_client = client.clone();
    Effect::new(move || {
        let number = page.get();
        reload.track();
        let client = fetch_client.clone();
        browser::spawn(async move {
            let result = api::transactions(&client, number).await;
            // The user paged on while this was in flight.
            if page.try_get_untracked() != Some(number) {
                return;
            }
            match result {
                Ok(loaded) => {
                    error.try_set(None);
                    listing.try_set(Some(loaded));
                }
                Err(err) => {
                    error.try_set(Some(format!("Error loading transactions: {err}")));
                }
            }
        });
    });

    let on_delete = move |id: i64| {
        if !browser::confirm("Are you sure you want to delete this transaction?") {
            return;
        }
        let client = client.clone();
        browser::spawn(async move {
            match api::delete_transaction(&client, id).await {
                Ok(()) => {
                    reload.try_update(|n| *n += 1);
                }
                Err(err) => {
                    error.try_set(Some(err.to_string()));
                }
            }
        });
    };

    let total_pages = move || listing.get().map_or(0, |p| p.total_pages);

    view! {
        <div class="section-header">
            <h1>"Transactions"</h1>
            <a class="btn btn--primary" href="/transactions/new">"+ Add new transaction"</a>
        </div>
        <Show when=move || error.get().is_some()>
            <p class="form-error">{move || error.get().unwrap_or_default()}</p>
        </Show>
        <table class="table">
            <thead>
                <tr>
                    <th>"Date"</th>
                    <th>"Category"</th>
                    <th>"Description"</th>
                    <th>"Amount"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    let rows = listing.get().map(|p| p.content).unwrap_or_default();
                    if rows.is_empty() {
                        return view! {
                            <tr>
                                <td colspan="5" class="empty">"No transactions found."</td>
                            </tr>
                        }
                        .into_any();
                    }
                    let on_delete = on_delete.clone();
                    rows.into_iter()
                        .map(|tx| {
                            let on_delete = on_delete.clone();
                            let id = tx.id;
                            view! {
                                <tr>
                                    <td>{tx.transaction_date}</td>
                                    <td>{tx.category_name.unwrap_or_default()}</td>
                                    <td>{tx.description.unwrap_or_default()}</td>
                                    <td class="amount">{format_amount(tx.amount)}</td>
                                    <td>
                                        <button class="btn btn--danger" on:click=move |_| on_delete(id)>
                                            "Delete"
                                        </button>
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </tbody>
        </table>
        <div class="pager">
            <button
                class="btn"
                disabled=move || page.get() == 0
                on:click=move |_| page.update(|p| *p = p.saturating_sub(1))
            >
                "< Previous"
            </button>
            <span>{move || page_label(page.get(), total_pages())}</span>
            <button
                class="btn"
                disabled=move || !has_next_page(page.get(), total_pages())
                on:click=move |_| page.update(|p| *p += 1)
            >
                "Next >"
            </button>
        </div>
    }
}
