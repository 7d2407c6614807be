//! The expansion pipeline: fetch, suggest, publish, and the single
//! token-refresh retry.
//!
//! A run moves through `Running` with the session's access token and ends in
//! either a report or an error. When a stage fails with an expired access
//! token (a structured 401 upstream error, never a message match), the
//! pipeline refreshes once and re-runs the full three-stage sequence with
//! the new token. A failed refresh is terminal
//! ([`PipelineError::SessionExpired`]); a second expiry inside the retry is
//! terminal and surfaces verbatim.

use std::sync::Arc;

use crate::{
    config::Config,
    error::PipelineError,
    recommend::SuggestionEngine,
    spotify::{auth::AuthClient, playlist::PlaylistPublisher, tracks::TrackFetcher},
    types::{ExpansionReport, PlaylistSpec, TokenPair},
};

/// Orchestrates [`TrackFetcher`] -> [`SuggestionEngine`] ->
/// [`PlaylistPublisher`], with [`AuthClient`] on token expiry.
pub struct ExpansionPipeline {
    auth: AuthClient,
    fetcher: TrackFetcher,
    engine: SuggestionEngine,
    publisher: PlaylistPublisher,
}

impl ExpansionPipeline {
    pub fn new(config: Arc<Config>) -> Self {
        ExpansionPipeline {
            auth: AuthClient::new(Arc::clone(&config)),
            fetcher: TrackFetcher::new(Arc::clone(&config)),
            engine: SuggestionEngine::new(Arc::clone(&config)),
            publisher: PlaylistPublisher::new(config),
        }
    }

    /// Runs the pipeline for `spec` using the caller's session tokens.
    ///
    /// The session is an explicit context passed by reference: after a
    /// successful refresh the new access token is written back into it so
    /// the caller can persist it. The pipeline itself persists nothing.
    pub async fn run(
        &self,
        session: &mut TokenPair,
        spec: &PlaylistSpec,
    ) -> Result<ExpansionReport, PipelineError> {
        match self.run_stages(&session.access_token, spec).await {
            Err(err) if err.is_token_expired() => {
                let Some(access_token) = self.auth.refresh(&session.refresh_token).await else {
                    return Err(PipelineError::SessionExpired);
                };
                session.access_token = access_token;
                // Exactly one retry; a second expiry surfaces verbatim.
                self.run_stages(&session.access_token, spec).await
            }
            result => result,
        }
    }

    async fn run_stages(
        &self,
        access_token: &str,
        spec: &PlaylistSpec,
    ) -> Result<ExpansionReport, PipelineError> {
        let seeds = self
            .fetcher
            .fetch_all_track_ids(access_token, &spec.source_id)
            .await?;
        let suggestions = self.engine.suggest(&seeds).await?;
        let outcome = self
            .publisher
            .publish(access_token, &spec.name, &suggestions.ids)
            .await?;

        Ok(ExpansionReport {
            playlist_id: outcome.playlist_id,
            playlist_url: outcome.url,
            seed_count: seeds.len(),
            suggestion_count: suggestions.ids.len(),
            suggestion_chunks: suggestions.chunks,
            add_batches: outcome.batches,
        })
    }
}
