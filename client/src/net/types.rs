//! Wire DTOs for the remote finance API.
//!
//! DESIGN
//! ======
//! The API speaks camelCase JSON. Money is carried as JSON numbers and dates
//! as ISO `YYYY-MM-DD` strings; the client only displays them, so no decimal
//! or calendar types are pulled in.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Signed-in user identity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub id: Option<i64>,
    pub username: String,
    #[serde(default)]
    pub email: String,
}

/// Body of a successful `POST /auth/login` or `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
}

impl AuthResponse {
    /// Identity carried alongside the token, when the server sent one.
    pub fn user(&self) -> Option<User> {
        self.username.as_ref().map(|username| User {
            id: None,
            username: username.clone(),
            email: self.email.clone().unwrap_or_default(),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username_or_email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChange {
    pub password: String,
    pub new_password: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CategoryType {
    Income,
    #[default]
    Expense,
}

impl CategoryType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => "INCOME",
            Self::Expense => "EXPENSE",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "INCOME" => Some(Self::Income),
            "EXPENSE" => Some(Self::Expense),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: CategoryType,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewCategory {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: CategoryType,
    pub color: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i64,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub category_name: Option<String>,
    pub amount: f64,
    #[serde(default)]
    pub description: Option<String>,
    pub transaction_date: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub category_id: i64,
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub transaction_date: String,
}

/// One page of a paginated listing.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    #[serde(default)]
    pub page_number: u32,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_elements: u64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BudgetPeriod {
    Weekly,
    #[default]
    Monthly,
    Quarterly,
    Yearly,
    Custom,
}

impl BudgetPeriod {
    pub const ALL: [Self; 5] = [Self::Weekly, Self::Monthly, Self::Quarterly, Self::Yearly, Self::Custom];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Weekly => "WEEKLY",
            Self::Monthly => "MONTHLY",
            Self::Quarterly => "QUARTERLY",
            Self::Yearly => "YEARLY",
            Self::Custom => "CUSTOM",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
            Self::Quarterly => "Three months",
            Self::Yearly => "Yearly",
            Self::Custom => "Custom",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == raw)
    }
}

/// Budget with spend computed by the server.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetUsage {
    pub id: i64,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub category_name: Option<String>,
    pub amount: f64,
    #[serde(default)]
    pub spent: f64,
    #[serde(default)]
    pub remaining: f64,
    #[serde(default)]
    pub percent_used: f64,
    #[serde(default)]
    pub period: Option<BudgetPeriod>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBudget {
    pub category_id: i64,
    pub amount: f64,
    pub period: BudgetPeriod,
    pub start_date: String,
    pub end_date: Option<String>,
}

/// Aggregates shown on the dashboard.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserStatistics {
    pub total_income: f64,
    pub total_expenses: f64,
    pub net_balance: f64,
    pub total_transactions: u64,
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    pub monthly_net_balance: f64,
}
