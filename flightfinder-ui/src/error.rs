#[derive(Debug, thiserror::Error)]
pub enum UiError {
    #[error("Element not found: #{0}")]
    MissingElement(String),
    #[error("Unknown trip type: {0}")]
    UnknownTripType(String),
}

pub type UiResult<T> = Result<T, UiError>;

/// Reasons a search is stopped before the form is posted
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Multi-city search requires a second destination")]
    MissingSecondDestination,
}
