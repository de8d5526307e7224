//! Artist store port
//!
//! Defines the read-only interface to the document store holding artist
//! profiles. Implementations (adapters) live in the infrastructure layer.

use async_trait::async_trait;
use gigmatch_domain::{ArtistId, ArtistRecord};
use thiserror::Error;

/// Errors that can occur while querying the store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Could not decode store document: {0}")]
    Decode(String),
}

/// Read-only access to artist records.
///
/// The matcher never writes; records are immutable snapshots from the
/// pipeline's point of view.
#[async_trait]
pub trait ArtistStorePort: Send + Sync {
    /// Fetch all performer records, optionally narrowed to a genre tag.
    ///
    /// Genre matching is exact and case-sensitive as stored. `None` (or an
    /// empty string) returns the full performer population. Records whose
    /// role is not `Artist` are never returned.
    async fn fetch_performers(&self, genre: Option<&str>)
    -> Result<Vec<ArtistRecord>, StoreError>;

    /// Fetch a single record by id, for profile lookups.
    async fn fetch_by_id(&self, id: &ArtistId) -> Result<Option<ArtistRecord>, StoreError>;
}
