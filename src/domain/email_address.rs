use once_cell::sync::Lazy;
use regex::Regex;

/// `local-part@domain.tld`: no whitespace or `@` anywhere, at least one `.` in the domain with a
/// non-empty suffix after it.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email pattern"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Syntactic check only, nothing here asks DNS whether the domain exists.
    pub fn parse(s: &str) -> Result<EmailAddress, String> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("Email is required.".into());
        }
        if !EMAIL_PATTERN.is_match(trimmed) {
            return Err("Please enter a valid email address.".into());
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
