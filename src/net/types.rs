//! Shared wire DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! Field names serialize in camelCase to mirror the Spring backend's JSON
//! exactly; enum variants serialize in SCREAMING_SNAKE_CASE to match its
//! Java enums. Display labels live next to the enums so views never
//! hand-roll user-facing names.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Authentication backend that created an account.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthProvider {
    #[default]
    Local,
    Google,
    Github,
}

impl AuthProvider {
    /// Lowercase path segment used by the backend's OAuth2 authorization
    /// endpoints (`/oauth2/authorization/{provider}`).
    pub fn as_path_segment(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Google => "google",
            Self::Github => "github",
        }
    }

    /// Parse a provider name from an OAuth2 redirect parameter.
    /// Unknown or absent values fall back to `Local`.
    pub fn from_param(value: &str) -> Self {
        match value.to_ascii_uppercase().as_str() {
            "GOOGLE" => Self::Google,
            "GITHUB" => Self::Github,
            _ => Self::Local,
        }
    }
}

/// Token + profile payload returned by `/auth/login` and `/auth/signup`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    /// Opaque bearer credential.
    pub token: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub provider: AuthProvider,
    #[serde(default)]
    pub roles: Vec<String>,
}

/// The profile snapshot persisted alongside the token.
///
/// This is the durable half of the client session; it round-trips through
/// local storage as JSON and must stay shape-compatible with what the auth
/// endpoints return.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub provider: AuthProvider,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl From<&AuthResponse> for SessionUser {
    fn from(auth: &AuthResponse) -> Self {
        Self {
            username: auth.username.clone(),
            email: auth.email.clone(),
            provider: auth.provider,
            roles: auth.roles.clone(),
        }
    }
}

/// Full profile as returned by `GET /auth/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub provider: AuthProvider,
    #[serde(default)]
    pub roles: Vec<String>,
}

/// Expense category as defined by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpenseCategory {
    Personal,
    SurvivalLivelihood,
    Investment,
}

impl ExpenseCategory {
    pub const ALL: [Self; 3] = [Self::Personal, Self::SurvivalLivelihood, Self::Investment];

    /// Wire value, as sent in filter query parameters.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Personal => "PERSONAL",
            Self::SurvivalLivelihood => "SURVIVAL_LIVELIHOOD",
            Self::Investment => "INVESTMENT",
        }
    }

    /// Human-readable label for selects and tables.
    pub fn label(self) -> &'static str {
        match self {
            Self::Personal => "Personal",
            Self::SurvivalLivelihood => "Survival & Livelihood",
            Self::Investment => "Investment",
        }
    }
}

/// Income source as defined by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IncomeSource {
    FromInvestment,
    Salary,
    FromTrading,
}

impl IncomeSource {
    pub const ALL: [Self; 3] = [Self::FromInvestment, Self::Salary, Self::FromTrading];

    /// Wire value, as sent in filter query parameters.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FromInvestment => "FROM_INVESTMENT",
            Self::Salary => "SALARY",
            Self::FromTrading => "FROM_TRADING",
        }
    }

    /// Human-readable label for selects and tables.
    pub fn label(self) -> &'static str {
        match self {
            Self::FromInvestment => "From Investment",
            Self::Salary => "Salary",
            Self::FromTrading => "From Trading",
        }
    }
}

/// An expense record as returned by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: i64,
    pub description: String,
    pub category: ExpenseCategory,
    pub amount: f64,
    /// ISO 8601 date (`YYYY-MM-DD`).
    pub date_of_expense: String,
}

/// Request body for creating or updating an expense.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseDraft {
    pub description: String,
    pub category: ExpenseCategory,
    pub amount: f64,
    pub date_of_expense: String,
}

/// An income record as returned by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Income {
    pub id: i64,
    pub description: String,
    pub source: IncomeSource,
    pub amount: f64,
    /// ISO 8601 date (`YYYY-MM-DD`).
    pub date_of_income: String,
}

/// Request body for creating or updating an income.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeDraft {
    pub description: String,
    pub source: IncomeSource,
    pub amount: f64,
    pub date_of_income: String,
}

/// Aggregate totals from `/dashboard/pnl` and `/dashboard/pnl/range`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PnlSummary {
    pub total_income: f64,
    pub total_expense: f64,
    pub profit_loss: f64,
    /// Present only on range queries.
    pub start_date: Option<String>,
    /// Present only on range queries.
    pub end_date: Option<String>,
}

/// Sort direction for the `/sort` endpoints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Optional criteria for the `/expenses/filter` and `/incomes/filter`
/// endpoints. Unset fields are omitted from the query string.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterParams {
    /// Expense category wire value; only meaningful for expenses.
    pub category: Option<String>,
    /// Income source wire value; only meaningful for incomes.
    pub source: Option<String>,
    /// ISO 8601 date (`YYYY-MM-DD`), inclusive.
    pub start_date: Option<String>,
    /// ISO 8601 date (`YYYY-MM-DD`), inclusive.
    pub end_date: Option<String>,
    pub min_amount: Option<f64>,
    pub max_amount: Option<f64>,
}

impl FilterParams {
    /// Whether any criterion is set.
    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.source.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
            && self.min_amount.is_none()
            && self.max_amount.is_none()
    }
}
