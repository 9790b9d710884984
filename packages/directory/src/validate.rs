//! Client-side format checks for the editable profile fields.

use std::sync::LazyLock;

use regex::Regex;

use crate::format::format_phone;
use crate::models::{PHONE_DIGITS, SSN_DIGITS};

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?-u:\w)+([.-]?(?-u:\w)+)*@(?-u:\w)+([.-]?(?-u:\w)+)*(\.(?-u:\w){2,3})+$")
        .expect("email pattern is valid")
});

/// The profile fields a user may edit locally.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldKind {
    FullName,
    Email,
    Phone,
    Ssn,
}

impl FieldKind {
    pub fn label(self) -> &'static str {
        match self {
            FieldKind::FullName => "Name",
            FieldKind::Email => "Email",
            FieldKind::Phone => "Phone Number",
            FieldKind::Ssn => "SSN",
        }
    }

    /// Help text shown under the input while editing.
    pub fn guidance(self) -> &'static str {
        match self {
            FieldKind::FullName => "Input full name, must contain both first name and last name",
            FieldKind::Email => "Input a valid email address, example 'user@email.com'",
            FieldKind::Phone => {
                "Input a ten-digit phone number without the country code (digit only, no spaces or special character)"
            }
            FieldKind::Ssn => "Input a nine-digit SSN (digit only, no spaces or special character)",
        }
    }

    pub fn validate(self, candidate: &str) -> bool {
        match self {
            FieldKind::FullName => is_full_name(candidate),
            FieldKind::Email => is_email(candidate),
            FieldKind::Phone => is_digits(candidate, PHONE_DIGITS),
            FieldKind::Ssn => is_digits(candidate, SSN_DIGITS),
        }
    }

    /// How a committed value is shown outside edit mode.
    pub fn display(self, value: &str) -> String {
        match self {
            FieldKind::Phone => format_phone(value),
            _ => value.to_string(),
        }
    }
}

/// At least a first and a last name.
pub fn is_full_name(candidate: &str) -> bool {
    candidate.split_whitespace().count() >= 2
}

pub fn is_email(candidate: &str) -> bool {
    EMAIL.is_match(candidate)
}

/// Exactly `len` ASCII digits and nothing else.
pub fn is_digits(candidate: &str, len: usize) -> bool {
    candidate.len() == len && candidate.bytes().all(|b| b.is_ascii_digit())
}
