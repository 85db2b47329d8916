use std::fmt;

use serde::Serialize;

/// Country identifier as supplied by callers, normalized to uppercase.
///
/// Shape checks are advisory only: the upstream providers decide whether a
/// code actually exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CountryCode(String);

impl CountryCode {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lowercase form used when addressing the country registry.
    pub fn to_lowercase(&self) -> String {
        self.0.to_lowercase()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn looks_like_alpha2(&self) -> bool {
        self.0.len() == 2 && self.0.chars().all(|c| c.is_ascii_alphabetic())
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
