//! HTTP adapter for the marketplace document store.
//!
//! Talks to a REST endpoint exposing the artist collection:
//!
//! - `GET {base}/artists?role=artist[&genre=g]` — performer query
//! - `GET {base}/artists/{id}` — single document lookup
//!
//! Documents are JSON in the [`ArtistRecord`] shape. The genre filter is
//! applied server-side, but the adapter re-checks role and genre locally
//! so a permissive store cannot leak organizer records into a candidate
//! set.

use async_trait::async_trait;
use gigmatch_application::ports::artist_store::{ArtistStorePort, StoreError};
use gigmatch_domain::{ArtistId, ArtistRecord, genre_matches};
use tracing::debug;

/// Maximum response body size (5 MB)
const MAX_BODY_SIZE: u64 = 5 * 1024 * 1024;

/// Artist store adapter backed by a REST document store
pub struct HttpArtistStore {
    client: reqwest::Client,
    base_url: String,
}

impl HttpArtistStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Create with an existing client (shared connection pool)
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, StoreError> {
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::RequestFailed(format!(
                "HTTP {} from {}",
                status.as_u16(),
                url
            )));
        }

        if response.content_length().unwrap_or(0) > MAX_BODY_SIZE {
            return Err(StoreError::RequestFailed(format!(
                "response larger than {} bytes",
                MAX_BODY_SIZE
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))
    }
}

#[async_trait]
impl ArtistStorePort for HttpArtistStore {
    async fn fetch_performers(
        &self,
        genre: Option<&str>,
    ) -> Result<Vec<ArtistRecord>, StoreError> {
        let url = format!("{}/artists", self.base_url);
        let mut query = vec![("role", "artist")];
        if let Some(g) = genre.filter(|g| !g.is_empty()) {
            query.push(("genre", g));
        }

        let records: Vec<ArtistRecord> = self.get_json(&url, &query).await?;
        debug!("Store returned {} documents for {:?}", records.len(), query);

        // Local re-check: the port contract is exact-match performers only
        Ok(records
            .into_iter()
            .filter(|r| genre_matches(r, genre))
            .collect())
    }

    async fn fetch_by_id(&self, id: &ArtistId) -> Result<Option<ArtistRecord>, StoreError> {
        let url = format!("{}/artists/{}", self.base_url, id);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::RequestFailed(format!(
                "HTTP {} from {}",
                status.as_u16(),
                url
            )));
        }

        response
            .json::<ArtistRecord>()
            .await
            .map(Some)
            .map_err(|e| StoreError::Decode(e.to_string()))
    }
}
