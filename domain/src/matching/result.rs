//! Match result value object

use serde::{Deserialize, Serialize};

/// Outcome of a match request: ranked artist names plus reasoning text.
///
/// Produced once per request, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Artist names chosen as suggestions, best first
    pub suggestions: Vec<String>,
    /// Free-text justification for the selection
    pub reasoning: String,
}

impl MatchResult {
    pub fn new(suggestions: Vec<String>, reasoning: impl Into<String>) -> Self {
        Self {
            suggestions,
            reasoning: reasoning.into(),
        }
    }

    /// Fixed result returned when the deterministic filters leave no
    /// candidates. The ranking service is never consulted in that case.
    pub fn no_matches() -> Self {
        Self {
            suggestions: Vec::new(),
            reasoning: "No artists matched your criteria. Try broadening your search: \
                        another date, a wider budget range, or a different genre."
                .to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty()
    }
}
