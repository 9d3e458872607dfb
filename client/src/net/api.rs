//! Typed REST helpers for the remote finance API.
//!
//! Every helper goes through the shared [`ApiClient`], so credentials are
//! attached and 401s are handled centrally. Helpers only build paths and
//! payloads.
//!
//! ERROR HANDLING
//! ==============
//! Callers get the classified [`ApiError`] and render it inline; nothing here
//! swallows a failure.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::http_client::ApiClient;
use super::transport::{ApiRequest, Method};
use super::types::{
    AuthResponse, BudgetUsage, Category, LoginRequest, NewBudget, NewCategory, NewTransaction, Page, PasswordChange,
    ProfileUpdate, RegisterRequest, Transaction, User, UserStatistics,
};
use crate::config::TRANSACTIONS_PAGE_SIZE;

fn category_endpoint(id: i64) -> String {
    format!("/categories/{id}")
}

fn transaction_endpoint(id: i64) -> String {
    format!("/transactions/{id}")
}

fn transactions_page_endpoint(page: u32) -> String {
    format!("/transactions?page={page}&size={TRANSACTIONS_PAGE_SIZE}&sortBy=transactionDate&sortDirection=DESC")
}

fn recent_transactions_endpoint(limit: u32) -> String {
    format!("/transactions/recent?limit={limit}")
}

fn budget_endpoint(id: i64) -> String {
    format!("/budgets/{id}")
}

fn budget_activation_endpoint(id: i64, active: bool) -> String {
    let action = if active { "activate" } else { "deactivate" };
    format!("/budgets/{id}/{action}")
}

// =============================================================================
// AUTH
// =============================================================================

/// `POST /auth/login`. Sent unauthenticated unless a stale token lingers.
///
/// # Errors
///
/// Classified API failure; 401 means bad credentials, 429 too many attempts.
pub async fn login(client: &ApiClient, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
    client.post_json("/auth/login", request).await
}

/// `POST /auth/register`.
///
/// # Errors
///
/// Classified API failure; validation errors carry per-field messages.
pub async fn register(client: &ApiClient, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
    client.post_json("/auth/register", request).await
}

// =============================================================================
// USER
// =============================================================================

/// # Errors
///
/// Classified API failure.
pub async fn current_user(client: &ApiClient) -> Result<User, ApiError> {
    client.get_json("/users/me").await
}

/// # Errors
///
/// Classified API failure.
pub async fn update_profile(client: &ApiClient, update: &ProfileUpdate) -> Result<User, ApiError> {
    client.patch_json("/users/me", update).await
}

/// # Errors
///
/// Classified API failure.
pub async fn change_password(client: &ApiClient, change: &PasswordChange) -> Result<(), ApiError> {
    let body = serde_json::to_value(change).map_err(|e| ApiError::Malformed(e.to_string()))?;
    client
        .send_unit(ApiRequest::new(Method::Patch, "/users/me/change-password").with_body(body))
        .await
}

/// # Errors
///
/// Classified API failure.
pub async fn delete_account(client: &ApiClient) -> Result<(), ApiError> {
    client.send_unit(ApiRequest::new(Method::Delete, "/users/me")).await
}

/// # Errors
///
/// Classified API failure.
pub async fn statistics(client: &ApiClient) -> Result<UserStatistics, ApiError> {
    client.get_json("/users/me/statistics").await
}

// =============================================================================
// CATEGORIES
// =============================================================================

/// # Errors
///
/// Classified API failure.
pub async fn categories(client: &ApiClient) -> Result<Vec<Category>, ApiError> {
    client.get_json("/categories").await
}

/// # Errors
///
/// Classified API failure.
pub async fn create_category(client: &ApiClient, category: &NewCategory) -> Result<Category, ApiError> {
    client.post_json("/categories", category).await
}

/// # Errors
///
/// Classified API failure.
pub async fn delete_category(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.send_unit(ApiRequest::new(Method::Delete, category_endpoint(id))).await
}

// =============================================================================
// TRANSACTIONS
// =============================================================================

/// Newest-first page of transactions.
///
/// # Errors
///
/// Classified API failure.
pub async fn transactions(client: &ApiClient, page: u32) -> Result<Page<Transaction>, ApiError> {
    client.get_json(&transactions_page_endpoint(page)).await
}

/// # Errors
///
/// Classified API failure.
pub async fn recent_transactions(client: &ApiClient, limit: u32) -> Result<Vec<Transaction>, ApiError> {
    client.get_json(&recent_transactions_endpoint(limit)).await
}

/// # Errors
///
/// Classified API failure.
pub async fn create_transaction(client: &ApiClient, transaction: &NewTransaction) -> Result<Transaction, ApiError> {
    client.post_json("/transactions", transaction).await
}

/// # Errors
///
/// Classified API failure.
pub async fn delete_transaction(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.send_unit(ApiRequest::new(Method::Delete, transaction_endpoint(id))).await
}

// =============================================================================
// BUDGETS
// =============================================================================

/// # Errors
///
/// Classified API failure.
pub async fn budget_usage(client: &ApiClient) -> Result<Vec<BudgetUsage>, ApiError> {
    client.get_json("/budgets/usage").await
}

/// # Errors
///
/// Classified API failure.
pub async fn create_budget(client: &ApiClient, budget: &NewBudget) -> Result<(), ApiError> {
    let body = serde_json::to_value(budget).map_err(|e| ApiError::Malformed(e.to_string()))?;
    client.send_unit(ApiRequest::new(Method::Post, "/budgets").with_body(body)).await
}

/// # Errors
///
/// Classified API failure.
pub async fn set_budget_active(client: &ApiClient, id: i64, active: bool) -> Result<(), ApiError> {
    client
        .send_unit(ApiRequest::new(Method::Post, budget_activation_endpoint(id, active)))
        .await
}

/// # Errors
///
/// Classified API failure.
pub async fn delete_budget(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.send_unit(ApiRequest::new(Method::Delete, budget_endpoint(id))).await
}
