use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use crate::{CoreError, CoreResult};

/// Three-letter IATA airport or city code, always stored uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AirportCode(String);

impl AirportCode {
    pub fn parse(raw: &str) -> CoreResult<Self> {
        let trimmed = raw.trim();
        if trimmed.len() == 3 && trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            Ok(Self(trimmed.to_ascii_uppercase()))
        } else {
            Err(CoreError::ValidationError(format!(
                "'{}' is not a three-letter airport code",
                raw
            )))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AirportCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for AirportCode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for AirportCode {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<AirportCode> for String {
    fn from(code: AirportCode) -> Self {
        code.0
    }
}

/// Result of reading a code out of free text typed into a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeLookup {
    Code(AirportCode),
    Unrecognized,
}

impl CodeLookup {
    pub fn code(&self) -> Option<&AirportCode> {
        match self {
            CodeLookup::Code(code) => Some(code),
            CodeLookup::Unrecognized => None,
        }
    }
}

/// Extract an airport code from the visible text of a field.
///
/// The last parenthesized group holding three letters wins, so labels such as
/// `"Washington (Dulles), United States (IAD)"` resolve to `IAD`. Without a
/// usable group, text that is itself three letters is accepted verbatim.
/// Both paths uppercase the result.
pub fn normalize_code(text: &str) -> CodeLookup {
    let text = text.trim();
    if text.is_empty() {
        return CodeLookup::Unrecognized;
    }

    let mut rest = text;
    while let Some(close) = rest.rfind(')') {
        let head = &rest[..close];
        let Some(open) = head.rfind('(') else {
            break;
        };
        if let Ok(code) = AirportCode::parse(&head[open + 1..]) {
            return CodeLookup::Code(code);
        }
        rest = &head[..open];
    }

    match AirportCode::parse(text) {
        Ok(code) => CodeLookup::Code(code),
        Err(_) => CodeLookup::Unrecognized,
    }
}
