//! Application use cases

pub mod match_artists;

pub use match_artists::{MatchArtistsError, MatchArtistsInput, MatchArtistsUseCase};
