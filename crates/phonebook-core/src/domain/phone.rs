use crate::error::CoreError;
use std::fmt;

/// Sanitized phone number. Equality is defined on the sanitized value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn new(raw: &str) -> Result<Self, CoreError> {
        let normalized = normalize_phone(raw)?;
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Strips parentheses, hyphens and whitespace, then any leading `+`.
/// Digit count and format are not checked.
pub fn normalize_phone(raw: &str) -> Result<String, CoreError> {
    let stripped: String = raw
        .trim()
        .chars()
        .filter(|ch| !matches!(ch, '(' | ')' | '-') && !ch.is_whitespace())
        .collect();
    let out = stripped.trim_start_matches('+');

    if out.is_empty() {
        return Err(CoreError::EmptyPhone(raw.to_string()));
    }

    Ok(out.to_string())
}
