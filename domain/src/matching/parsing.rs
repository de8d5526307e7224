//! Ranking response parsing.
//!
//! The completion service is asked to reply with a JSON object
//! `{"suggestions": [...], "reasoning": "..."}` but models wrap such
//! payloads in prose or code fences often enough that the parser scans for
//! the outermost JSON object instead of trusting the whole response.
//!
//! Suggested names are validated against the filtered candidate set: names
//! the model invented are dropped, and a response that leaves no valid
//! suggestion is a schema violation, not something to patch over.

use crate::core::error::DomainError;
use crate::matching::result::MatchResult;
use serde::Deserialize;

/// Maximum number of suggestions a ranking may return.
const MAX_SUGGESTIONS: usize = 3;

#[derive(Debug, Deserialize)]
struct RankedOutput {
    suggestions: Vec<String>,
    reasoning: String,
}

/// Parse a ranking response into a [`MatchResult`].
///
/// `allowed_names` is the name set of the deterministically filtered
/// candidates; anything outside it is discarded. Duplicates are collapsed,
/// order is preserved, and at most three suggestions survive.
///
/// # Errors
///
/// [`DomainError::MalformedSuggestions`] when no JSON object can be found,
/// the object does not match the expected shape, the reasoning is empty,
/// or no suggested name belongs to the candidate set.
pub fn parse_suggestions(
    response: &str,
    allowed_names: &[&str],
) -> Result<MatchResult, DomainError> {
    let json_str = extract_json_object(response).ok_or_else(|| {
        DomainError::MalformedSuggestions("no JSON object found in response".to_string())
    })?;

    let parsed: RankedOutput = serde_json::from_str(json_str)
        .map_err(|e| DomainError::MalformedSuggestions(format!("invalid shape: {}", e)))?;

    if parsed.reasoning.trim().is_empty() {
        return Err(DomainError::MalformedSuggestions(
            "empty reasoning".to_string(),
        ));
    }

    let mut suggestions: Vec<String> = Vec::new();
    for name in parsed.suggestions {
        if allowed_names.contains(&name.as_str()) && !suggestions.contains(&name) {
            suggestions.push(name);
        }
        if suggestions.len() == MAX_SUGGESTIONS {
            break;
        }
    }

    if suggestions.is_empty() {
        return Err(DomainError::MalformedSuggestions(
            "no suggested name belongs to the candidate set".to_string(),
        ));
    }

    Ok(MatchResult::new(suggestions, parsed.reasoning))
}

/// Find the outermost `{...}` span in free-form model text.
fn extract_json_object(response: &str) -> Option<&str> {
    let start = response.find('{')?;
    let end = response[start..].rfind('}')?;
    Some(&response[start..start + end + 1])
}
