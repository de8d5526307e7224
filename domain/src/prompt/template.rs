//! Prompt templates for the ranking stage

use crate::artist::entities::ArtistRecord;
use crate::event::entities::EventCriteria;

/// Templates for the ranking prompt sent to the completion service
pub struct MatchPromptTemplate;

impl MatchPromptTemplate {
    /// System prompt for the ranking call
    pub fn rank_system() -> &'static str {
        r#"You are a booking assistant for a live-music marketplace.
You will receive an event description and a shortlist of artists that already
passed genre, availability and budget checks. Recommend the 1 to 3 artists
from the shortlist that fit the event best.
Only use names that appear in the shortlist, exactly as written.
Respond with a single JSON object of the form
{"suggestions": ["name", ...], "reasoning": "one short paragraph"}
and nothing else."#
    }

    /// User prompt enumerating the event criteria and the shortlist.
    ///
    /// Only criteria fields the organizer actually supplied are rendered;
    /// absent optionals are omitted entirely rather than shown blank.
    pub fn rank_prompt(criteria: &EventCriteria, candidates: &[ArtistRecord]) -> String {
        let mut prompt = format!("Event type: {}\n", criteria.event_type);

        if let Some(genre) = criteria.genre_constraint() {
            prompt.push_str(&format!("Requested genre: {}\n", genre));
        }
        if let Some(date) = criteria.date {
            prompt.push_str(&format!("Date: {}\n", date.format("%Y-%m-%d")));
        }
        if let (Some(start), Some(end)) = (criteria.start_time, criteria.end_time) {
            prompt.push_str(&format!(
                "Time: {} to {}\n",
                start.format("%H:%M"),
                end.format("%H:%M")
            ));
        }
        if let Some(budget) = &criteria.budget {
            prompt.push_str(&format!("Budget: {}\n", budget));
        }
        if let Some(guests) = criteria.guest_count {
            prompt.push_str(&format!("Expected guests: {}\n", guests));
        }
        if let Some(details) = &criteria.details {
            prompt.push_str(&format!("Details: {}\n", details));
        }

        prompt.push_str("\nShortlisted artists:\n");
        for candidate in candidates {
            let price = candidate.price.as_deref().unwrap_or("negotiable");
            prompt.push_str(&format!(
                "- {} (genres: {}; price: {})\n",
                candidate.name,
                candidate.genres.join(", "),
                price
            ));
        }

        prompt.push_str(
            "\nPick the 1-3 best fits and explain your choice in one paragraph.",
        );

        prompt
    }
}
