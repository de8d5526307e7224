//! Artist record entity and its value objects
//!
//! Records are owned by the external document store; this layer only reads
//! them. The shapes here mirror the store documents, so everything derives
//! serde traits.

use crate::core::error::DomainError;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Opaque identifier assigned by the store (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtistId(String);

impl ArtistId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ArtistId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Account role stored on every marketplace document.
///
/// Only `Artist` records are performers; `Organizer` accounts share the
/// same collection but never appear in candidate sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Artist,
    Organizer,
}

impl Role {
    pub fn is_performer(&self) -> bool {
        matches!(self, Role::Artist)
    }
}

/// A window during which an artist can be booked (Value Object)
///
/// Instants are naive local datetimes, as entered by the artist; the
/// marketplace carries no timezone information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityInterval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl AvailabilityInterval {
    /// Create an interval, enforcing `start < end`.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self, DomainError> {
        if start >= end {
            return Err(DomainError::InvalidInterval { start, end });
        }
        Ok(Self { start, end })
    }
}

/// An artist profile as stored in the marketplace (Entity)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistRecord {
    pub id: ArtistId,
    pub name: String,
    /// Genre tags, exact strings as stored
    #[serde(default)]
    pub genres: Vec<String>,
    /// Bookable windows, ordered by start
    #[serde(default)]
    pub availability: Vec<AvailabilityInterval>,
    /// Human-entered price descriptor, e.g. "$500 - $1000" or "negotiable".
    /// Absent on profiles that never filled it in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    pub role: Role,
}

impl ArtistRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>, role: Role) -> Self {
        Self {
            id: ArtistId::new(id),
            name: name.into(),
            genres: Vec::new(),
            availability: Vec::new(),
            price: None,
            role,
        }
    }

    pub fn with_genres(mut self, genres: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.genres = genres.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_availability(mut self, intervals: Vec<AvailabilityInterval>) -> Self {
        self.availability = intervals;
        self
    }

    pub fn with_price(mut self, price: impl Into<String>) -> Self {
        self.price = Some(price.into());
        self
    }
}
