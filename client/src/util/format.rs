//! Display helpers for money, budget progress and pagination.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

pub const CURRENCY: &str = "EUR";

/// Budget usage at or above this percentage is flagged.
pub const WARN_PERCENT: f64 = 80.0;
pub const OVER_PERCENT: f64 = 100.0;

pub fn format_amount(amount: f64) -> String {
    format!("{amount:.2} {CURRENCY}")
}

/// Amount with an explicit sign, for income/expense totals.
pub fn format_signed(amount: f64, positive: bool) -> String {
    let sign = if positive { '+' } else { '-' };
    format!("{sign}{}", format_amount(amount.abs()))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProgressTone {
    Ok,
    Warn,
    Over,
}

impl ProgressTone {
    pub fn class(self) -> &'static str {
        match self {
            Self::Ok => "progress__bar--ok",
            Self::Warn => "progress__bar--warn",
            Self::Over => "progress__bar--over",
        }
    }
}

pub fn progress_tone(percent_used: f64) -> ProgressTone {
    if percent_used >= OVER_PERCENT {
        ProgressTone::Over
    } else if percent_used >= WARN_PERCENT {
        ProgressTone::Warn
    } else {
        ProgressTone::Ok
    }
}

/// CSS width of a progress bar, clamped to `0%..=100%`.
pub fn progress_width(percent_used: f64) -> String {
    let clamped = if percent_used.is_finite() { percent_used.clamp(0.0, OVER_PERCENT) } else { 0.0 };
    format!("{clamped:.0}%")
}

/// One-based page label, e.g. `Page 2 of 5`.
pub fn page_label(page: u32, total_pages: u32) -> String {
    format!("Page {} of {}", page + 1, total_pages.max(1))
}

pub fn has_next_page(page: u32, total_pages: u32) -> bool {
    page + 1 < total_pages
}

/// Today's date as `YYYY-MM-DD` in the browser's local time zone.
pub fn today_iso() -> String {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        format!("{:04}-{:02}-{:02}", now.get_full_year(), now.get_month() + 1, now.get_date())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}
