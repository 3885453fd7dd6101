pub mod code;
pub mod suggestion;
pub mod trip;
pub mod passengers;
pub mod fetch;
pub mod gateway;

pub use code::{normalize_code, AirportCode, CodeLookup};
pub use suggestion::Suggestion;
pub use trip::{FieldRule, FieldRules, TripType};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
