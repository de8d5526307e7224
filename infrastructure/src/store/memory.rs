//! In-memory artist store.
//!
//! Vec-backed implementation of [`ArtistStorePort`] used by tests and the
//! CLI's `--seed` mode. Records can be loaded from a JSON file holding an
//! array of store documents.

use async_trait::async_trait;
use gigmatch_application::ports::artist_store::{ArtistStorePort, StoreError};
use gigmatch_domain::{ArtistId, ArtistRecord, genre_matches};
use std::path::Path;

/// In-memory implementation of the artist store port
#[derive(Debug)]
pub struct InMemoryArtistStore {
    records: Vec<ArtistRecord>,
}

impl InMemoryArtistStore {
    pub fn new(records: Vec<ArtistRecord>) -> Self {
        Self { records }
    }

    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Load records from a JSON file containing an array of artist documents.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| StoreError::Connection(format!("{}: {}", path.display(), e)))?;
        let records: Vec<ArtistRecord> =
            serde_json::from_str(&raw).map_err(|e| StoreError::Decode(e.to_string()))?;
        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl ArtistStorePort for InMemoryArtistStore {
    async fn fetch_performers(
        &self,
        genre: Option<&str>,
    ) -> Result<Vec<ArtistRecord>, StoreError> {
        Ok(self
            .records
            .iter()
            .filter(|r| genre_matches(r, genre))
            .cloned()
            .collect())
    }

    async fn fetch_by_id(&self, id: &ArtistId) -> Result<Option<ArtistRecord>, StoreError> {
        Ok(self.records.iter().find(|r| &r.id == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gigmatch_domain::Role;
    use std::io::Write;

    fn records() -> Vec<ArtistRecord> {
        vec![
            ArtistRecord::new("a-1", "Blue Notes", Role::Artist).with_genres(["Jazz"]),
            ArtistRecord::new("a-2", "Loud Ones", Role::Artist).with_genres(["Rock"]),
            ArtistRecord::new("o-1", "Venue Co", Role::Organizer).with_genres(["Jazz"]),
        ]
    }

    #[tokio::test]
    async fn fetch_performers_filters_genre_and_role() {
        let store = InMemoryArtistStore::new(records());

        let jazz = store.fetch_performers(Some("Jazz")).await.unwrap();
        assert_eq!(jazz.len(), 1);
        assert_eq!(jazz[0].name, "Blue Notes");

        // No genre: full performer population, organizers excluded
        let all = store.fetch_performers(None).await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn fetch_by_id_finds_any_role() {
        let store = InMemoryArtistStore::new(records());
        let found = store.fetch_by_id(&ArtistId::new("o-1")).await.unwrap();
        assert_eq!(found.unwrap().name, "Venue Co");

        let missing = store.fetch_by_id(&ArtistId::new("nope")).await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn loads_seed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": "a-1", "name": "Blue Notes", "genres": ["Jazz"], "role": "artist"}}]"#
        )
        .unwrap();

        let store = InMemoryArtistStore::from_json_file(file.path()).unwrap();
        assert_eq!(store.len(), 1);
        let jazz = store.fetch_performers(Some("Jazz")).await.unwrap();
        assert_eq!(jazz[0].name, "Blue Notes");
    }

    #[test]
    fn malformed_seed_file_is_a_decode_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = InMemoryArtistStore::from_json_file(file.path()).unwrap_err();
        assert!(matches!(err, StoreError::Decode(_)));
    }
}
