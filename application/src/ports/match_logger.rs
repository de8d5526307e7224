//! Port for structured match logging.
//!
//! Defines the [`MatchLogger`] trait for recording what each match request
//! produced. The pipeline emits exactly one record per request, so the
//! port carries a typed [`MatchRecord`] rather than free-form payloads.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures match
//! outcomes in a machine-readable format (JSONL).

use serde::Serialize;

/// Outcome of one match request, as written to the match log.
#[derive(Debug, Clone, Serialize)]
pub struct MatchRecord {
    /// Event type label from the criteria, e.g. "wedding"
    pub event_type: String,
    /// Candidates surviving the deterministic filters
    pub candidates: usize,
    /// Suggested artist names, best first; empty when nothing matched
    pub suggestions: Vec<String>,
    /// Whether the ranking service was consulted
    pub ranked: bool,
}

impl MatchRecord {
    /// Record for a request that short-circuited with no candidates.
    pub fn unranked(event_type: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            candidates: 0,
            suggestions: Vec::new(),
            ranked: false,
        }
    }

    /// Record for a request that went through ranking.
    pub fn ranked(
        event_type: impl Into<String>,
        candidates: usize,
        suggestions: Vec<String>,
    ) -> Self {
        Self {
            event_type: event_type.into(),
            candidates,
            suggestions,
            ranked: true,
        }
    }
}

/// Port for logging match records to a structured log.
///
/// The `log` method is intentionally synchronous and non-fallible to avoid
/// disrupting the pipeline — logging failures are silently ignored.
pub trait MatchLogger: Send + Sync {
    fn log(&self, record: &MatchRecord);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoMatchLogger;

impl MatchLogger for NoMatchLogger {
    fn log(&self, _record: &MatchRecord) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unranked_record_has_no_suggestions() {
        let record = MatchRecord::unranked("wedding");
        assert!(!record.ranked);
        assert_eq!(record.candidates, 0);
        assert!(record.suggestions.is_empty());
    }

    #[test]
    fn record_serializes_flat() {
        let record = MatchRecord::ranked("wedding", 2, vec!["Blue Notes".to_string()]);
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["event_type"], "wedding");
        assert_eq!(value["candidates"], 2);
        assert_eq!(value["ranked"], true);
    }
}
