//! One pure function per form field. Each maps the raw value of its input to a human-readable
//! message, or to an empty string when the value is acceptable.
use crate::domain::{BirthDate, EmailAddress, FullName, PhoneNumber, TermsAcceptance};
use chrono::NaiveDate;

fn message<T>(parsed: Result<T, String>) -> String {
    parsed.err().unwrap_or_default()
}

pub fn validate_full_name(value: &str) -> String {
    message(FullName::parse(value))
}

pub fn validate_email(value: &str) -> String {
    message(EmailAddress::parse(value))
}

pub fn validate_phone(value: &str) -> String {
    message(PhoneNumber::parse(value))
}

/// `today` is the current local calendar date; time of day plays no part in the comparison.
pub fn validate_birth_date(value: &str, today: NaiveDate, minimum_age: u32) -> String {
    message(BirthDate::parse(value, today, minimum_age))
}

pub fn validate_terms(checked: bool) -> String {
    message(TermsAcceptance::parse(checked))
}
