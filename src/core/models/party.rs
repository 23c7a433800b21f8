//! Party codes

use serde::{Deserialize, Serialize};

/// Short code identifying a party (e.g. `CDA`, `D66`, `50PLUS`)
///
/// A valid code is non-empty and consists of alphanumeric characters only,
/// so it can never contain the `+` joiner, the `#` tag marker or whitespace.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PartyCode(String);

impl PartyCode {
    /// Validate and wrap a party code
    pub fn new(code: impl Into<String>) -> Result<Self, String> {
        let code = code.into();
        if code.is_empty() {
            return Err("empty party code".to_string());
        }
        if let Some(bad) = code.chars().find(|c| !c.is_alphanumeric()) {
            return Err(format!("invalid character {bad:?} in party code '{code}'"));
        }
        Ok(Self(code))
    }

    /// The code as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PartyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for PartyCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for PartyCode {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PartyCode> for String {
    fn from(code: PartyCode) -> Self {
        code.0
    }
}

impl AsRef<str> for PartyCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
