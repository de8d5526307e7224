//! Deterministic matching stages and the match result
//!
//! The filters here are the deterministic half of the pipeline; ranking is
//! delegated to an external completion service and only its response
//! parsing ([`parsing`]) lives in the domain.

pub mod filters;
pub mod parsing;
pub mod result;

pub use filters::{filter_by_availability, filter_by_budget, genre_matches, overlaps};
pub use parsing::parse_suggestions;
pub use result::MatchResult;
