//! The booking form aggregate and its validation rules.
//!
//! A form is assembled incrementally on the client, so every field is
//! optional at the wire level. Completeness is a required-presence check;
//! the only semantic validation is the email and phone format.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::Deserialize;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9]\d{0,15}$").expect("valid phone pattern"));

/// A user-assembled booking request. Treated as an immutable snapshot
/// once handed to the quote and conflict engines.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookingForm {
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub bedrooms: Option<String>,
    #[serde(default)]
    pub bathrooms: Option<String>,
    #[serde(default)]
    pub frequency: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub preferred_date: Option<NaiveDate>,
    #[serde(default)]
    pub preferred_time: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub special_requests: Option<String>,
}

impl BookingForm {
    /// Display names of required fields that are still empty
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let blank = |field: &Option<String>| {
            field.as_deref().map(str::trim).unwrap_or("").is_empty()
        };

        let mut missing = Vec::new();
        if blank(&self.service) {
            missing.push("Service");
        }
        if blank(&self.bedrooms) {
            missing.push("Bedrooms");
        }
        if blank(&self.bathrooms) {
            missing.push("Bathrooms");
        }
        if self.preferred_date.is_none() {
            missing.push("Date");
        }
        if blank(&self.preferred_time) {
            missing.push("Time");
        }
        if blank(&self.frequency) {
            missing.push("Frequency");
        }
        if blank(&self.address) {
            missing.push("Address");
        }
        if blank(&self.name) {
            missing.push("Name");
        }
        if blank(&self.email) {
            missing.push("Email");
        }
        if blank(&self.phone) {
            missing.push("Phone");
        }
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Phone numbers arrive formatted like "(555) 123-4567"; separators are
/// stripped before matching.
pub fn validate_phone(phone: &str) -> bool {
    let digits: String = phone
        .chars()
        .filter(|c| !matches!(c, ' ' | '(' | ')' | '-' | '.'))
        .collect();
    PHONE_RE.is_match(&digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_form() -> BookingForm {
        BookingForm {
            service: Some("deep".to_string()),
            bedrooms: Some("2br".to_string()),
            bathrooms: Some("2".to_string()),
            frequency: Some("weekly".to_string()),
            address: Some("123 Main St, Manhattan".to_string()),
            preferred_date: NaiveDate::from_ymd_opt(2025, 8, 2),
            preferred_time: Some("morning".to_string()),
            name: Some("Jane Doe".to_string()),
            email: Some("jane@example.com".to_string()),
            phone: Some("(555) 123-4567".to_string()),
            special_requests: None,
        }
    }

    #[test]
    fn test_complete_form() {
        assert!(complete_form().is_complete());
    }

    #[test]
    fn test_missing_fields_reported_by_name() {
        let mut form = complete_form();
        form.address = Some("   ".to_string());
        form.phone = None;
        assert_eq!(form.missing_fields(), vec!["Address", "Phone"]);
    }

    #[test]
    fn test_special_requests_not_required() {
        let mut form = complete_form();
        form.special_requests = None;
        assert!(form.is_complete());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("jane@example.com"));
        assert!(validate_email("a.b+c@mail.co"));
        assert!(!validate_email("jane@example"));
        assert!(!validate_email("jane example@mail.com"));
        assert!(!validate_email(""));
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("5551234567"));
        assert!(validate_phone("(555) 123-4567"));
        assert!(validate_phone("+15551234567"));
        assert!(!validate_phone("0551234567")); // cannot start with 0
        assert!(!validate_phone("555-CLEAN"));
        assert!(!validate_phone(""));
    }
}
