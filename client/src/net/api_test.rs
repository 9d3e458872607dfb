use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use futures::executor::block_on;

use super::*;
use crate::net::credential_store::MemoryStore;
use crate::net::transport::{RawResponse, Transport, TransportError};
use crate::net::types::{CategoryType, LoginRequest, NewCategory};
use crate::state::session::{SessionEvent, SessionSink};
use crate::util::navigation::Navigator;

#[test]
fn category_endpoint_formats_id() {
    assert_eq!(category_endpoint(7), "/categories/7");
}

#[test]
fn transaction_endpoint_formats_id() {
    assert_eq!(transaction_endpoint(42), "/transactions/42");
}

#[test]
fn transactions_page_endpoint_sorts_newest_first() {
    assert_eq!(
        transactions_page_endpoint(2),
        "/transactions?page=2&size=10&sortBy=transactionDate&sortDirection=DESC"
    );
}

#[test]
fn recent_transactions_endpoint_carries_limit() {
    assert_eq!(recent_transactions_endpoint(5), "/transactions/recent?limit=5");
}

#[test]
fn budget_activation_endpoint_picks_action() {
    assert_eq!(budget_activation_endpoint(3, true), "/budgets/3/activate");
    assert_eq!(budget_activation_endpoint(3, false), "/budgets/3/deactivate");
    assert_eq!(budget_endpoint(3), "/budgets/3");
}

// =============================================================
// Helpers against a recording transport
// =============================================================

#[derive(Default)]
struct Recorder {
    replies: Mutex<VecDeque<RawResponse>>,
    seen: Mutex<Vec<ApiRequest>>,
}

#[async_trait(?Send)]
impl Transport for Recorder {
    async fn dispatch(&self, request: ApiRequest) -> Result<RawResponse, TransportError> {
        self.seen.lock().unwrap().push(request);
        Ok(self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(RawResponse { status: 204, body: String::new() }))
    }
}

struct NoSession;

impl SessionSink for NoSession {
    fn apply(&self, _event: SessionEvent) -> bool {
        false
    }
}

struct Stay;

impl Navigator for Stay {
    fn current_path(&self) -> Option<String> {
        None
    }

    fn replace(&self, _path: &str) {}
}

fn client_with(replies: Vec<RawResponse>) -> (Arc<Recorder>, ApiClient) {
    let recorder = Arc::new(Recorder { replies: Mutex::new(replies.into()), seen: Mutex::default() });
    let client =
        ApiClient::new(recorder.clone(), Arc::new(MemoryStore::with_token("abc123")), Arc::new(NoSession), Arc::new(Stay));
    (recorder, client)
}

fn ok(body: &str) -> RawResponse {
    RawResponse { status: 200, body: body.to_owned() }
}

#[test]
fn login_posts_camel_case_credentials() {
    let (recorder, client) = client_with(vec![ok(r#"{"token":"t","username":"alice"}"#)]);
    let request = LoginRequest { username_or_email: "alice".to_owned(), password: "secret".to_owned() };

    let auth = block_on(login(&client, &request)).unwrap();

    assert_eq!(auth.token, "t");
    let seen = recorder.seen.lock().unwrap();
    assert_eq!(seen[0].path, "/auth/login");
    assert_eq!(seen[0].method, Method::Post);
    assert_eq!(seen[0].body.as_ref().unwrap()["usernameOrEmail"], "alice");
}

#[test]
fn delete_helpers_accept_empty_bodies() {
    let (recorder, client) = client_with(Vec::new());
    block_on(delete_category(&client, 9)).unwrap();
    block_on(delete_account(&client)).unwrap();
    let seen = recorder.seen.lock().unwrap();
    assert_eq!(seen[0].method, Method::Delete);
    assert_eq!(seen[0].path, "/categories/9");
    assert_eq!(seen[1].path, "/users/me");
}

#[test]
fn create_category_serializes_type_field() {
    let (recorder, client) = client_with(vec![ok(r##"{"id":1,"name":"Food","type":"EXPENSE","color":"#ff0000"}"##)]);
    let new = NewCategory { name: "Food".to_owned(), kind: CategoryType::Expense, color: "#ff0000".to_owned() };

    let created = block_on(create_category(&client, &new)).unwrap();

    assert_eq!(created.id, 1);
    let seen = recorder.seen.lock().unwrap();
    assert_eq!(seen[0].body.as_ref().unwrap()["type"], "EXPENSE");
}

#[test]
fn set_budget_active_posts_without_body() {
    let (recorder, client) = client_with(Vec::new());
    block_on(set_budget_active(&client, 4, false)).unwrap();
    let seen = recorder.seen.lock().unwrap();
    assert_eq!(seen[0].path, "/budgets/4/deactivate");
    assert!(seen[0].body.is_none());
}

#[test]
fn transactions_page_decodes_paged_body() {
    let (_recorder, client) = client_with(vec![ok(
        r#"{"content":[{"id":1,"amount":12.5,"transactionDate":"2024-01-02"}],"pageNumber":0,"totalPages":3,"totalElements":21}"#,
    )]);
    let page = block_on(transactions(&client, 0)).unwrap();
    assert_eq!(page.content.len(), 1);
    assert_eq!(page.total_pages, 3);
}
