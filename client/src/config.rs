//! Build-time client configuration.

/// Base path the browser prefixes to every API call. The host proxies it to
/// the remote API; set `FINANCE_API_BASE` at build time to call a remote API
/// directly.
pub const API_BASE: &str = match option_env!("FINANCE_API_BASE") {
    Some(base) => base,
    None => "/api",
};

/// Rows per page on the transaction list.
pub const TRANSACTIONS_PAGE_SIZE: u32 = 10;

/// Rows in the dashboard's recent-activity table.
pub const RECENT_TRANSACTIONS_LIMIT: u32 = 5;
