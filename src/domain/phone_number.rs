use once_cell::sync::Lazy;
use regex::Regex;

/// Finnish numbering: `+358` and 8 to 10 digits without a trunk `0`, or a trunk `0` and 8 to 10
/// digits.
static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:\+358[1-9][0-9]{7,9}|0[0-9]{8,10})$").expect("Invalid phone pattern")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Whitespace anywhere in the input is dropped before matching, so "041 234 5678" is stored as
    /// "0412345678".
    pub fn parse(s: &str) -> Result<PhoneNumber, String> {
        let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        if compact.is_empty() {
            return Err("Phone number is required.".into());
        }
        if !PHONE_PATTERN.is_match(&compact) {
            return Err(
                "Use +358 followed by 8–10 digits (no leading 0), or 0 followed by 8–10 digits."
                    .into(),
            );
        }
        Ok(Self(compact))
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
