//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid availability interval: start {start} is not before end {end}")]
    InvalidInterval {
        start: chrono::NaiveDateTime,
        end: chrono::NaiveDateTime,
    },

    #[error("Invalid event criteria: {0}")]
    InvalidCriteria(String),

    #[error("Malformed ranking response: {0}")]
    MalformedSuggestions(String),
}

impl DomainError {
    /// Check if this error came from an unusable ranking response
    pub fn is_malformed_suggestions(&self) -> bool {
        matches!(self, DomainError::MalformedSuggestions(_))
    }
}
