//! Category list with delete.

use leptos::prelude::*;

use crate::net::api;
use crate::net::http_client::ApiClient;
use crate::net::types::Category;
use crate::util::browser;

fn load(client: ApiClient, categories: RwSignal<Option<Vec<Category>>>, error: RwSignal<Option<String>>) {
    browser::spawn(async move {
        match api::categories(&client).await {
            Ok(list) => {
                categories.try_set(Some(list));
            }
            Err(err) => {
                error.try_set(Some(format!("Failed to load categories: {err}")));
            }
        }
    });
}

#[component]
pub fn CategoriesPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let categories = RwSignal::new(None::<Vec<Category>>);
    let error = RwSignal::new(None::<String>);
    load(client.clone(), categories, error);

    let on_delete = move |id: i64| {
        if !browser::confirm("Delete this category?") {
            return;
        }
        let client = client.clone();
        browser::spawn(async move {
            match api::delete_category(&client, id).await {
                Ok(()) => {
                    categories.try_update(|list| {
                        if let Some(list) = list {
                            list.retain(|c| c.id != id);
                        }
                    });
                }
                Err(err) => {
                    error.try_set(Some(err.to_string()));
                }
            }
        });
    };

    view! {
        <div class="section-header">
            <h1>"Categories"</h1>
            <a class="btn btn--primary" href="/categories/new">"+ New Category"</a>
        </div>
        <Show when=move || error.get().is_some()>
            <p class="form-error">{move || error.get().unwrap_or_default()}</p>
        </Show>
        {move || match categories.get() {
            None => view! { <p class="muted">"Loading categories..."</p> }.into_any(),
            Some(list) if list.is_empty() => view! { <p class="empty">"No categories found. Create one!"</p> }.into_any(),
            Some(list) => {
                let on_delete = on_delete.clone();
                view! {
                    <div class="card-grid">
                        {list
                            .into_iter()
                            .map(|cat| {
                                let on_delete = on_delete.clone();
                                let id = cat.id;
                                let swatch = format!("background-color: {}", cat.color.unwrap_or_default());
                                view! {
                                    <div class="card category-card">
                                        <span class="category-card__swatch" style=swatch></span>
                                        <h3>{cat.name}</h3>
                                        <p>"Type: " <strong>{cat.kind.as_str()}</strong></p>
                                        <button class="btn btn--danger" on:click=move |_| on_delete(id)>
                                            "Delete"
                                        </button>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                }
                .into_any()
            }
        }}
    }
}
