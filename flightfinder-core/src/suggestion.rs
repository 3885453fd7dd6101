use serde::{Deserialize, Serialize};

/// One airport or city match returned by the suggestion endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub name: String,
    pub country_name: String,
    pub code: String,
}

impl Suggestion {
    pub fn new(name: impl Into<String>, country_name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            country_name: country_name.into(),
            code: code.into(),
        }
    }

    /// Display label written into the visible field, e.g. `Paris, France (CDG)`
    pub fn label(&self) -> String {
        format!("{}, {} ({})", self.name, self.country_name, self.code)
    }
}
