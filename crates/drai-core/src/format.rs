//! Display helpers for the diagnosis and profile screens.
//!
//! These are pure functions with no I/O. Colours are hex strings; labels are
//! Persian, matching the rest of the user-facing text.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::Serialize;

use drai_contracts::diagnosis::{Severity, Symptom, Treatment};

pub const COLOR_RED: &str = "#F44336";
pub const COLOR_YELLOW: &str = "#FFC107";
pub const COLOR_GREEN: &str = "#4CAF50";
pub const COLOR_BLUE: &str = "#2196F3";
pub const COLOR_GREY: &str = "#757575";

// ── Diagnosis ────────────────────────────────────────────────────────────────

/// Colour for a probability bar: red from 70, yellow from 40, green below.
pub fn probability_color(probability: u8) -> &'static str {
    if probability >= 70 {
        COLOR_RED
    } else if probability >= 40 {
        COLOR_YELLOW
    } else {
        COLOR_GREEN
    }
}

/// Persian label for a severity level.
pub fn severity_label(severity: Severity) -> &'static str {
    match severity {
        Severity::Low => "خفیف",
        Severity::Medium => "متوسط",
        Severity::High => "شدید",
    }
}

/// Badge colour for a severity level.
pub fn severity_color(severity: Severity) -> &'static str {
    match severity {
        Severity::Low => COLOR_GREEN,
        Severity::Medium => COLOR_YELLOW,
        Severity::High => COLOR_RED,
    }
}

/// Replace every ASCII digit in the rendered value with its Persian form.
pub fn to_persian_digits(value: impl std::fmt::Display) -> String {
    value
        .to_string()
        .chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => char::from_u32(0x06F0 + d).unwrap_or(c),
            None => c,
        })
        .collect()
}

/// Symptoms that list `condition_id` among their related conditions.
pub fn symptoms_for_condition(condition_id: &str, symptoms: &[Symptom]) -> Vec<Symptom> {
    symptoms
        .iter()
        .filter(|s| s.related_conditions.iter().any(|id| id == condition_id))
        .cloned()
        .collect()
}

/// Treatments that apply to `condition_id`.
pub fn treatments_for_condition(condition_id: &str, treatments: &[Treatment]) -> Vec<Treatment> {
    treatments
        .iter()
        .filter(|t| t.for_conditions.iter().any(|id| id == condition_id))
        .cloned()
        .collect()
}

// ── Profile ──────────────────────────────────────────────────────────────────

/// Text and colour for a health-status badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusBadge {
    pub text: String,
    pub color: &'static str,
}

/// Map a stored health status to its badge. Unrecognised statuses are shown
/// as-is in grey.
pub fn health_status(status: &str) -> StatusBadge {
    let (text, color) = match status {
        "Normal" => ("وضعیت نرمال", COLOR_GREEN),
        "Attention" => ("نیاز به توجه", COLOR_YELLOW),
        "Critical" => ("وضعیت بحرانی", COLOR_RED),
        "Review" => ("نیاز به بررسی", COLOR_BLUE),
        other => (other, COLOR_GREY),
    };
    StatusBadge {
        text: text.to_string(),
        color,
    }
}

/// Up to two uppercase initials: the first letter of the first and last
/// space-separated parts of `name`.
pub fn initials(name: &str) -> String {
    if name.is_empty() {
        return String::new();
    }

    let parts: Vec<&str> = name.split(' ').collect();
    let first_char = |part: &str| part.chars().next().map(String::from).unwrap_or_default();

    let raw = match parts.as_slice() {
        [only] => first_char(*only),
        [first, .., last] => first_char(*first) + &first_char(*last),
        [] => String::new(),
    };
    raw.to_uppercase()
}

/// Parse an ISO date (`2023-10-25`) or an RFC 3339 timestamp.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.date_naive())
        })
}

/// Render a stored date for display.
///
/// `short` yields `M/D/YYYY`; otherwise `YYYY/M/D`. Empty input renders as an
/// empty string and unparsable input is returned unchanged.
pub fn format_date(value: &str, short: bool) -> String {
    if value.is_empty() {
        return String::new();
    }

    match parse_date(value) {
        Some(date) if short => format!("{}/{}/{}", date.month(), date.day(), date.year()),
        Some(date) => format!("{}/{}/{}", date.year(), date.month(), date.day()),
        None => value.to_string(),
    }
}

/// Age in whole years on `today` for someone born on `birth_date`.
///
/// Returns `None` for empty or unparsable input, or a birth date after `today`.
pub fn age_on(birth_date: &str, today: NaiveDate) -> Option<u32> {
    let birth = parse_date(birth_date)?;
    let mut age = today.year() - birth.year();

    let birthday_pending = (today.month(), today.day()) < (birth.month(), birth.day());
    if birthday_pending {
        age -= 1;
    }

    u32::try_from(age).ok()
}

/// Age in whole years as of today (UTC).
pub fn age(birth_date: &str) -> Option<u32> {
    age_on(birth_date, Utc::now().date_naive())
}
