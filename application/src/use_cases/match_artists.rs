//! Match Artists use case.
//!
//! Runs the three-stage pipeline: retrieve performer candidates from the
//! store, apply the deterministic filters (genre at the store, then
//! availability and budget), and hand the survivors to the completion
//! service for ranked suggestions with reasoning.
//!
//! Error posture follows the marketplace contract: a failing store query
//! degrades to an empty candidate set (the organizer just sees "no
//! suggestions"), while a failing or malformed ranking call is surfaced as
//! a distinguishable error so the caller can tell the user ranking did not
//! complete. No retries happen here.

use crate::ports::artist_store::ArtistStorePort;
use crate::ports::completion_gateway::{CompletionGateway, CompletionRequest, GatewayError};
use crate::ports::match_logger::{MatchLogger, MatchRecord, NoMatchLogger};
use gigmatch_domain::{
    DomainError, EventCriteria, MatchPromptTemplate, MatchResult, filter_by_availability,
    filter_by_budget, parse_suggestions,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during match execution.
///
/// Store failures never appear here; they degrade to an empty result.
#[derive(Error, Debug)]
pub enum MatchArtistsError {
    #[error("Ranking call failed: {0}")]
    Ranking(#[from] GatewayError),

    #[error("Ranking response unusable: {0}")]
    MalformedSuggestions(#[from] DomainError),
}

/// Input for the [`MatchArtistsUseCase`].
#[derive(Debug, Clone)]
pub struct MatchArtistsInput {
    pub criteria: EventCriteria,
}

impl MatchArtistsInput {
    pub fn new(criteria: EventCriteria) -> Self {
        Self { criteria }
    }
}

/// Use case for matching artists to an event.
///
/// Request-scoped and stateless: every execution builds fresh value
/// snapshots, so independent requests may run concurrently without
/// coordination.
#[derive(Clone)]
pub struct MatchArtistsUseCase {
    store: Arc<dyn ArtistStorePort>,
    gateway: Arc<dyn CompletionGateway>,
    match_logger: Arc<dyn MatchLogger>,
}

impl MatchArtistsUseCase {
    pub fn new(store: Arc<dyn ArtistStorePort>, gateway: Arc<dyn CompletionGateway>) -> Self {
        Self {
            store,
            gateway,
            match_logger: Arc::new(NoMatchLogger),
        }
    }

    /// Create with a match logger.
    pub fn with_match_logger(mut self, logger: Arc<dyn MatchLogger>) -> Self {
        self.match_logger = logger;
        self
    }

    /// Execute the match pipeline.
    pub async fn execute(
        &self,
        input: MatchArtistsInput,
    ) -> Result<MatchResult, MatchArtistsError> {
        let criteria = input.criteria;
        info!(
            "Matching artists for {} event{}",
            criteria.event_type,
            criteria
                .genre_constraint()
                .map(|g| format!(" (genre: {})", g))
                .unwrap_or_default()
        );

        // Stage 1: retrieval. A store failure is non-fatal: log and
        // continue with an empty candidate set.
        let candidates = match self
            .store
            .fetch_performers(criteria.genre_constraint())
            .await
        {
            Ok(records) => records,
            Err(e) => {
                warn!("Artist store query failed, degrading to empty set: {}", e);
                Vec::new()
            }
        };
        debug!("Retrieved {} performer candidates", candidates.len());

        // Stage 2: deterministic filters
        let slot = criteria.requested_slot();
        let candidates = filter_by_availability(candidates, slot.as_ref());
        let candidates = match &criteria.budget {
            Some(budget) => filter_by_budget(candidates, budget),
            None => candidates,
        };
        debug!("{} candidates survive deterministic filters", candidates.len());

        if candidates.is_empty() {
            info!("No candidates after filtering; skipping ranking call");
            self.match_logger
                .log(&MatchRecord::unranked(criteria.event_type.clone()));
            return Ok(MatchResult::no_matches());
        }

        // Stage 3: ranking. Gateway failures propagate; the caller must be
        // able to tell "nothing matched" from "ranking broke".
        let prompt = MatchPromptTemplate::rank_prompt(&criteria, &candidates);
        let request = CompletionRequest::new(prompt)
            .with_system_prompt(MatchPromptTemplate::rank_system());

        let response = self.gateway.complete(&request).await?;

        let allowed: Vec<&str> = candidates.iter().map(|c| c.name.as_str()).collect();
        let result = parse_suggestions(&response, &allowed)?;

        info!(
            "Match completed with {} suggestion(s)",
            result.suggestions.len()
        );
        self.match_logger.log(&MatchRecord::ranked(
            criteria.event_type.clone(),
            allowed.len(),
            result.suggestions.clone(),
        ));

        Ok(result)
    }
}
