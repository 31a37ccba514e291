use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullName(String);

impl FullName {
    /// Returns an instance of `FullName` if the input is made of at least two names, each of them
    /// at least two characters long. The stored value is the trimmed input.
    pub fn parse(s: &str) -> Result<FullName, String> {
        // `.trim()` returns a view over the input `s` without leading and trailing whitespace-like
        // characters.
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("Please enter your full name (first and last).".into());
        }

        // `split_whitespace` treats any run of whitespace as a single separator, so "Jane   Doe"
        // yields two parts and never an empty one.
        let parts: Vec<&str> = trimmed.split_whitespace().collect();
        if parts.len() < 2 {
            return Err("Use at least first and last name (two words).".into());
        }

        // A grapheme is defined by the Unicode standard as a "user-perceived" character: `a°` is a single
        // grapheme, but it is composed of two characters (`a` and `°`).
        let is_too_short = parts.iter().any(|p| p.graphemes(true).count() < 2);
        if is_too_short {
            return Err("Each name must be at least 2 characters.".into());
        }

        Ok(Self(trimmed.to_string()))
    }
}

/// The caller gets a shared reference to the inner string. This gives the caller **read-only**
/// access, they have no way to compromise our invariants!
impl AsRef<str> for FullName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FullName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
