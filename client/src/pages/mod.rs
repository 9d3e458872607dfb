//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! `login` and `register` are public. Every other page renders inside
//! `ProtectedRoute` and may assume a session exists when it mounts.

pub mod budget_new;
pub mod budgets;
pub mod categories;
pub mod category_new;
pub mod dashboard;
pub mod fallback;
pub mod login;
pub mod profile;
pub mod register;
pub mod transaction_new;
pub mod transactions;
