//! Render-time formatting of user fields. None of these touch the record itself.

use chrono::{DateTime, Utc};

use crate::models::Status;

/// `5551234567` -> `(555) 123-4567`. Inputs that are not ten ASCII digits are
/// returned unchanged.
pub fn format_phone(digits: &str) -> String {
    if digits.len() != 10 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return digits.to_string();
    }
    format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..])
}

/// `verified` -> `Verified`. Unrecognised values are capitalised as received.
pub fn format_status(status: &Status) -> String {
    capitalize(status.as_str())
}

/// Registration timestamp as `1/4/2022, 12:30pm`.
pub fn format_registered_at(at: &DateTime<Utc>) -> String {
    at.format("%-m/%-d/%Y, %-I:%M%P").to_string()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
