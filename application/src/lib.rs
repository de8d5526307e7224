//! Application layer for gigmatch
//!
//! This crate contains the match use case and its port definitions.
//! It depends only on the domain layer; adapters for the document store
//! and the completion service live in the infrastructure layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    artist_store::{ArtistStorePort, StoreError},
    completion_gateway::{CompletionGateway, CompletionRequest, GatewayError},
    match_logger::{MatchLogger, MatchRecord, NoMatchLogger},
};
pub use use_cases::match_artists::{MatchArtistsError, MatchArtistsInput, MatchArtistsUseCase};
