//! Display formatting shared by listing and detail views.

use chrono::{Datelike, NaiveDate};

/// Placeholder for unknown values.
pub const NOT_AVAILABLE: &str = "N/A";

/// Runtime in minutes as `"{h}h {m}m"`.
#[must_use]
pub fn format_runtime(minutes: Option<u32>) -> String {
    match minutes {
        Some(total) if total > 0 => format!("{}h {}m", total / 60, total % 60),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Whole-dollar amount with thousands separators, e.g. `$63,000,000`.
#[must_use]
pub fn format_usd(amount: Option<u64>) -> String {
    let Some(amount) = amount.filter(|value| *value > 0) else {
        return NOT_AVAILABLE.to_string();
    };
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("${grouped}")
}

/// Parse an upstream `YYYY-MM-DD` date; blank or invalid input yields `None`.
#[must_use]
pub fn parse_date(raw: Option<&str>) -> Option<NaiveDate> {
    let raw = raw?.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Year component of an upstream release date.
#[must_use]
pub fn release_year(raw: Option<&str>) -> Option<i32> {
    parse_date(raw).map(|date| date.year())
}

/// Average score to one decimal place.
#[must_use]
pub fn format_vote(average: f64) -> String {
    format!("{average:.1}")
}

/// Content rating badge.
#[must_use]
pub const fn rating_badge(adult: bool) -> &'static str {
    if adult { "R" } else { "PG-13" }
}
