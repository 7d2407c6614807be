//! Recommendation service client.
//!
//! Seeds from the source playlist are sent to the recommendation API in
//! chunks of exactly [`SEED_CHUNK_SIZE`] ids, each chunk requesting up to
//! [`SUGGESTIONS_PER_CHUNK`] results. Both values are design constants of
//! the upstream service, not inputs.

use std::{collections::HashSet, sync::Arc};

use reqwest::{Client, header::ACCEPT};

use crate::{
    config::Config,
    error::PipelineError,
    types::{BatchSummary, RecommendationResponse, Suggestions, TrackId},
    utils, warning,
};

/// Seeds per recommendation request.
pub const SEED_CHUNK_SIZE: usize = 5;

/// Maximum results requested per chunk.
pub const SUGGESTIONS_PER_CHUNK: usize = 7;

/// Maps seed track ids to a deduplicated set of suggested track ids.
pub struct SuggestionEngine {
    config: Arc<Config>,
    client: Client,
}

impl SuggestionEngine {
    pub fn new(config: Arc<Config>) -> Self {
        SuggestionEngine {
            config,
            client: Client::new(),
        }
    }

    /// Collects suggestions for `seeds`, preserving insertion order.
    ///
    /// An id is dropped when it already occurs among the seeds or among the
    /// suggestions accumulated so far; the first occurrence wins. A failed
    /// chunk request is logged and recorded in the summary but does not
    /// abort the pass, so the result may hold fewer than
    /// `SUGGESTIONS_PER_CHUNK x chunks` ids and may be empty.
    ///
    /// When at least one chunk was attempted and every chunk failed, the
    /// pass aborts with [`PipelineError::NoSuggestions`] so the caller can
    /// surface the degradation instead of publishing an empty playlist.
    pub async fn suggest(&self, seeds: &[TrackId]) -> Result<Suggestions, PipelineError> {
        let seed_set: HashSet<&str> = seeds.iter().map(String::as_str).collect();
        let mut seen: HashSet<String> = HashSet::new();
        let mut ids: Vec<TrackId> = Vec::new();
        let mut chunks = BatchSummary::default();

        for (index, chunk) in seeds.chunks(SEED_CHUNK_SIZE).enumerate() {
            let mut query: Vec<(&str, String)> =
                chunk.iter().map(|id| ("seeds", id.clone())).collect();
            query.push(("size", SUGGESTIONS_PER_CHUNK.to_string()));

            let result = self
                .client
                .get(&self.config.recommendation_url)
                .header(ACCEPT, "application/json")
                .query(&query)
                .send()
                .await;

            let response = match result {
                Ok(resp) if resp.status().is_success() => resp,
                Ok(resp) => {
                    warning!(
                        "Recommendation request {} failed: status {}",
                        index,
                        resp.status()
                    );
                    chunks.record_failure(index);
                    continue;
                }
                Err(e) => {
                    warning!("Recommendation request {} failed: {}", index, e);
                    chunks.record_failure(index);
                    continue;
                }
            };

            let body: RecommendationResponse = match response.json().await {
                Ok(body) => body,
                Err(e) => {
                    warning!("Recommendation request {} returned bad payload: {}", index, e);
                    chunks.record_failure(index);
                    continue;
                }
            };

            for track in body.content {
                let Some(id) = track
                    .href
                    .as_deref()
                    .and_then(utils::trailing_path_segment)
                else {
                    continue;
                };
                if seed_set.contains(id.as_str()) || !seen.insert(id.clone()) {
                    continue;
                }
                ids.push(id);
            }
            chunks.record_success();
        }

        if !seeds.is_empty() && chunks.succeeded == 0 {
            return Err(PipelineError::NoSuggestions);
        }

        Ok(Suggestions { ids, chunks })
    }
}
