//! # User records as served by the remote directory
//!
//! [`UserRecord`] mirrors the JSON objects returned by `GET /users`. Field names on
//! the wire follow the directory (`name`, `footprintToken`, `createdAt`, ...) and are
//! mapped to descriptive Rust names with `#[serde(rename)]`.
//!
//! Phone numbers and SSNs are kept exactly as received (`+1-555-123-4567`,
//! `123-45-6789`). The canonical digit strings are derived on demand with
//! [`UserRecord::phone_digits`] and [`UserRecord::ssn_digits`]; display formatting
//! lives in [`crate::format`] and never touches the record itself.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Number of digits in a canonical (country-code-less) phone number.
pub const PHONE_DIGITS: usize = 10;
/// Number of digits in a canonical SSN.
pub const SSN_DIGITS: usize = 9;

/// Verification outcome attached to a user. Values the directory sends that are
/// not one of the known states are kept verbatim in [`Status::Other`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Status {
    Verified,
    Failed,
    Pending,
    Other(String),
}

impl Status {
    pub fn is_verified(&self) -> bool {
        matches!(self, Status::Verified)
    }

    /// Wire spelling, e.g. `"verified"`.
    pub fn as_str(&self) -> &str {
        match self {
            Status::Verified => "verified",
            Status::Failed => "failed",
            Status::Pending => "pending",
            Status::Other(raw) => raw,
        }
    }
}

impl From<String> for Status {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "verified" => Status::Verified,
            "failed" => Status::Failed,
            "pending" => Status::Pending,
            _ => Status::Other(raw),
        }
    }
}

impl From<Status> for String {
    fn from(status: Status) -> Self {
        match status {
            Status::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

/// A single user in the directory.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(rename = "name")]
    pub full_name: String,
    pub email: String,
    /// Phone number as sent by the directory: "+1-555-123-4567"
    pub phone: String,
    /// SSN as sent by the directory: "123-45-6789"
    pub ssn: String,
    #[serde(rename = "footprintToken")]
    pub verification_token: String,
    pub status: Status,
    #[serde(rename = "createdAt")]
    pub registered_at: DateTime<Utc>,
}

impl UserRecord {
    /// The ten national digits of the phone number, country code dropped.
    pub fn phone_digits(&self) -> String {
        let digits = ascii_digits(&self.phone);
        let skip = digits.len().saturating_sub(PHONE_DIGITS);
        digits[skip..].to_string()
    }

    /// The SSN without separators.
    pub fn ssn_digits(&self) -> String {
        ascii_digits(&self.ssn)
    }

    /// Registration timestamp in the directory's own spelling
    /// (`2022-01-04T12:30:00.000Z`), used as the profile route key.
    pub fn registered_at_key(&self) -> String {
        self.registered_at
            .to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

fn ascii_digits(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_wire_record() {
        let raw = r#"{
            "name": "Jane Doe",
            "email": "jane@doe.com",
            "phone": "+1-555-123-4567",
            "ssn": "123-45-6789",
            "footprintToken": "fp_id_abc",
            "status": "failed",
            "createdAt": "2022-01-04T12:30:00.000Z"
        }"#;
        let user: UserRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(user.full_name, "Jane Doe");
        assert_eq!(user.verification_token, "fp_id_abc");
        assert_eq!(user.status, Status::Failed);
        assert_eq!(user.phone_digits(), "5551234567");
        assert_eq!(user.ssn_digits(), "123456789");
        assert_eq!(user.registered_at_key(), "2022-01-04T12:30:00.000Z");
    }

    #[test]
    fn test_unknown_status_keeps_wire_value() {
        let mut value = serde_json::to_value(fixtures::user("A B", "2022-01-01T00:00:00.000Z")).unwrap();
        value["status"] = serde_json::json!("manual_review");
        let user: UserRecord = serde_json::from_value(value).unwrap();
        assert_eq!(user.status, Status::Other("manual_review".into()));
        assert!(!user.status.is_verified());
        assert_eq!(serde_json::to_value(&user).unwrap()["status"], "manual_review");
    }

    #[test]
    fn test_phone_without_country_code() {
        let mut user = fixtures::user("A B", "2022-01-01T00:00:00.000Z");
        user.phone = "555-987-6543".to_string();
        assert_eq!(user.phone_digits(), "5559876543");
    }
}
