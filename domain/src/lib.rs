//! Domain layer for gigmatch
//!
//! This crate contains the core matching logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Matching pipeline
//!
//! A match request runs through three sequential stages:
//!
//! - **Retrieval**: performer records for the requested genre (store port,
//!   application layer)
//! - **Deterministic filters**: availability-window overlap and budget-range
//!   overlap ([`matching`])
//! - **Ranking**: the surviving candidates are handed to a text-completion
//!   service for 1-3 ranked suggestions with reasoning ([`prompt`],
//!   [`matching::parsing`])

pub mod artist;
pub mod core;
pub mod event;
pub mod matching;
pub mod prompt;

// Re-export commonly used types
pub use artist::{
    entities::{ArtistId, ArtistRecord, AvailabilityInterval, Role},
    price::{PriceRange, budget_compatible, is_negotiable, parse_price_range},
};
pub use crate::core::error::DomainError;
pub use event::entities::{EventCriteria, EventSlot, SlotKind};
pub use matching::{
    filters::{filter_by_availability, filter_by_budget, genre_matches, overlaps},
    parsing::parse_suggestions,
    result::MatchResult,
};
pub use prompt::MatchPromptTemplate;
