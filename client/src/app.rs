//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::protected_route::ProtectedRoute;
use crate::config::API_BASE;
use crate::net::credential_store::{CredentialStore, LocalStorageStore};
use crate::net::http_client::ApiClient;
use crate::net::transport::BrowserTransport;
use crate::pages::{
    budget_new::NewBudgetPage, budgets::BudgetsPage, categories::CategoriesPage, category_new::NewCategoryPage,
    dashboard::DashboardPage, fallback::FallbackPage, login::LoginPage, profile::ProfilePage, register::RegisterPage,
    transaction_new::NewTransactionPage, transactions::TransactionsPage,
};
use crate::state::session::Session;
use crate::util::navigation::{NavigationBridge, RouterNavigator};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session, the shared API client and the navigator they both
/// redirect through, then sets up routing with every protected page nested
/// under the route guard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store: Arc<dyn CredentialStore> = Arc::new(LocalStorageStore);
    let session = Session::new(store.clone());
    let navigator = RouterNavigator::new();
    let client =
        ApiClient::new(Arc::new(BrowserTransport::new(API_BASE)), store, session.sink(), Arc::new(navigator));
    provide_context(session.clone());
    provide_context(client);
    provide_context(navigator);

    // The credential store is only readable once hydrated.
    Effect::new(move || session.restore());

    view! {
        <Stylesheet id="leptos" href="/pkg/finance-web.css"/>
        <Title text="Personal Finance"/>

        <Router>
            <NavigationBridge/>
            <Routes fallback=FallbackPage>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <ParentRoute path=StaticSegment("") view=ProtectedRoute>
                    <Route path=StaticSegment("") view=FallbackPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("categories") view=CategoriesPage/>
                    <Route path=(StaticSegment("categories"), StaticSegment("new")) view=NewCategoryPage/>
                    <Route path=StaticSegment("transactions") view=TransactionsPage/>
                    <Route path=(StaticSegment("transactions"), StaticSegment("new")) view=NewTransactionPage/>
                    <Route path=StaticSegment("budgets") view=BudgetsPage/>
                    <Route path=(StaticSegment("budgets"), StaticSegment("new")) view=NewBudgetPage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
