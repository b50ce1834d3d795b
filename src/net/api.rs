//! Typed endpoint functions for the backend REST API.
//!
//! Client-side (hydrate): real HTTP calls through the `http` chokepoint.
//! The path and query builders stay feature-free so they remain testable
//! without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Every function returns `Result<_, ApiError>`; the chokepoint guarantees
//! the error is already normalized and any 401 side effects have run.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{FilterParams, SortOrder};

#[cfg(feature = "hydrate")]
use super::http::{self, ApiError};
#[cfg(feature = "hydrate")]
use super::types::{AuthResponse, Expense, ExpenseDraft, Income, IncomeDraft, PnlSummary, UserProfile};

fn expense_path(id: i64) -> String {
    format!("/expenses/{id}")
}

fn income_path(id: i64) -> String {
    format!("/incomes/{id}")
}

/// Serialize only the set criteria, in the backend's parameter order.
fn filter_query(filter: &FilterParams) -> String {
    let mut pairs: Vec<String> = Vec::new();
    if let Some(category) = &filter.category {
        pairs.push(format!("category={category}"));
    }
    if let Some(source) = &filter.source {
        pairs.push(format!("source={source}"));
    }
    if let Some(start) = &filter.start_date {
        pairs.push(format!("startDate={start}"));
    }
    if let Some(end) = &filter.end_date {
        pairs.push(format!("endDate={end}"));
    }
    if let Some(min) = filter.min_amount {
        pairs.push(format!("minAmount={min}"));
    }
    if let Some(max) = filter.max_amount {
        pairs.push(format!("maxAmount={max}"));
    }
    pairs.join("&")
}

fn filter_path(base: &str, filter: &FilterParams) -> String {
    let query = filter_query(filter);
    if query.is_empty() {
        format!("{base}/filter")
    } else {
        format!("{base}/filter?{query}")
    }
}

fn sort_path(base: &str, sort_by: &str, order: SortOrder) -> String {
    format!("{base}/sort?sortBy={sort_by}&order={}", order.as_str())
}

fn pnl_range_path(start_date: &str, end_date: &str) -> String {
    format!("/dashboard/pnl/range?startDate={start_date}&endDate={end_date}")
}

// =============================================================
// Auth
// =============================================================

/// Create an account via `POST /auth/signup`.
#[cfg(feature = "hydrate")]
pub async fn signup(username: &str, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    let payload = serde_json::json!({
        "username": username,
        "email": email,
        "password": password,
    });
    http::post_json("/auth/signup", &payload).await
}

/// Authenticate via `POST /auth/login`. The identifier may be a username
/// or an email address.
#[cfg(feature = "hydrate")]
pub async fn login(username: &str, password: &str) -> Result<AuthResponse, ApiError> {
    let payload = serde_json::json!({
        "username": username,
        "password": password,
    });
    http::post_json("/auth/login", &payload).await
}

/// Validate the current token via `GET /auth/me`.
#[cfg(feature = "hydrate")]
pub async fn current_user() -> Result<UserProfile, ApiError> {
    http::get_json("/auth/me").await
}

/// Invalidate server-side session state via `POST /auth/logout`.
#[cfg(feature = "hydrate")]
pub async fn logout() -> Result<(), ApiError> {
    http::post_unit("/auth/logout").await
}

// =============================================================
// Expenses
// =============================================================

#[cfg(feature = "hydrate")]
pub async fn list_expenses() -> Result<Vec<Expense>, ApiError> {
    http::get_json("/expenses").await
}

#[cfg(feature = "hydrate")]
pub async fn get_expense(id: i64) -> Result<Expense, ApiError> {
    http::get_json(&expense_path(id)).await
}

#[cfg(feature = "hydrate")]
pub async fn create_expense(draft: &ExpenseDraft) -> Result<Expense, ApiError> {
    http::post_json("/expenses", draft).await
}

#[cfg(feature = "hydrate")]
pub async fn update_expense(id: i64, draft: &ExpenseDraft) -> Result<Expense, ApiError> {
    http::put_json(&expense_path(id), draft).await
}

#[cfg(feature = "hydrate")]
pub async fn delete_expense(id: i64) -> Result<(), ApiError> {
    http::delete_unit(&expense_path(id)).await
}

#[cfg(feature = "hydrate")]
pub async fn filter_expenses(filter: &FilterParams) -> Result<Vec<Expense>, ApiError> {
    http::get_json(&filter_path("/expenses", filter)).await
}

#[cfg(feature = "hydrate")]
pub async fn sort_expenses(sort_by: &str, order: SortOrder) -> Result<Vec<Expense>, ApiError> {
    http::get_json(&sort_path("/expenses", sort_by, order)).await
}

// =============================================================
// Incomes
// =============================================================

#[cfg(feature = "hydrate")]
pub async fn list_incomes() -> Result<Vec<Income>, ApiError> {
    http::get_json("/incomes").await
}

#[cfg(feature = "hydrate")]
pub async fn get_income(id: i64) -> Result<Income, ApiError> {
    http::get_json(&income_path(id)).await
}

#[cfg(feature = "hydrate")]
pub async fn create_income(draft: &IncomeDraft) -> Result<Income, ApiError> {
    http::post_json("/incomes", draft).await
}

#[cfg(feature = "hydrate")]
pub async fn update_income(id: i64, draft: &IncomeDraft) -> Result<Income, ApiError> {
    http::put_json(&income_path(id), draft).await
}

#[cfg(feature = "hydrate")]
pub async fn delete_income(id: i64) -> Result<(), ApiError> {
    http::delete_unit(&income_path(id)).await
}

#[cfg(feature = "hydrate")]
pub async fn filter_incomes(filter: &FilterParams) -> Result<Vec<Income>, ApiError> {
    http::get_json(&filter_path("/incomes", filter)).await
}

#[cfg(feature = "hydrate")]
pub async fn sort_incomes(sort_by: &str, order: SortOrder) -> Result<Vec<Income>, ApiError> {
    http::get_json(&sort_path("/incomes", sort_by, order)).await
}

// =============================================================
// Dashboard
// =============================================================

/// All-time profit/loss totals via `GET /dashboard/pnl`.
#[cfg(feature = "hydrate")]
pub async fn pnl() -> Result<PnlSummary, ApiError> {
    http::get_json("/dashboard/pnl").await
}

/// Profit/loss totals for an inclusive date range.
#[cfg(feature = "hydrate")]
pub async fn pnl_range(start_date: &str, end_date: &str) -> Result<PnlSummary, ApiError> {
    http::get_json(&pnl_range_path(start_date, end_date)).await
}
