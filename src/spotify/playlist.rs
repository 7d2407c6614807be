use std::sync::Arc;

use reqwest::{Client, StatusCode};

use crate::{
    config::Config,
    error::PipelineError,
    types::{
        AddTracksRequest, BatchSummary, CreatePlaylistRequest, CreatePlaylistResponse,
        PublishOutcome, TrackId, UserProfile,
    },
    warning,
};

/// Provider hard limit on URIs per add-tracks call.
pub const ADD_TRACKS_BATCH_LIMIT: usize = 100;

const PLAYLIST_DESCRIPTION: &str = "Created with the awesome playlist generator";

/// Creates the destination playlist and fills it in bounded batches.
pub struct PlaylistPublisher {
    config: Arc<Config>,
    client: Client,
}

impl PlaylistPublisher {
    pub fn new(config: Arc<Config>) -> Self {
        PlaylistPublisher {
            config,
            client: Client::new(),
        }
    }

    /// Publishes `track_ids` as a new public playlist named `name`.
    ///
    /// Resolves the current user, creates the playlist (the creation call is
    /// not retried here) and adds the tracks in batches of at most
    /// [`ADD_TRACKS_BATCH_LIMIT`] URIs. A failed batch is logged and recorded
    /// in the returned [`BatchSummary`] but does not abort later batches:
    /// the playlist may end up with fewer tracks than requested.
    ///
    /// The returned URL is the provider's public link from the creation
    /// response; `None` when the provider omits it.
    pub async fn publish(
        &self,
        access_token: &str,
        name: &str,
        track_ids: &[TrackId],
    ) -> Result<PublishOutcome, PipelineError> {
        let user_id = self.current_user_id(access_token).await?;

        let request = CreatePlaylistRequest {
            name: name.to_string(),
            description: PLAYLIST_DESCRIPTION.to_string(),
            public: true,
        };

        let response = self
            .client
            .post(format!(
                "{}/users/{}/playlists",
                self.config.api_base_url, user_id
            ))
            .bearer_auth(access_token)
            .json(&request)
            .send()
            .await?;

        if response.status() != StatusCode::CREATED {
            return Err(PipelineError::from_response(response).await);
        }

        let created: CreatePlaylistResponse = response.json().await?;
        let url = created.external_urls.and_then(|urls| urls.spotify);

        let mut batches = BatchSummary::default();
        for (index, chunk) in track_ids.chunks(ADD_TRACKS_BATCH_LIMIT).enumerate() {
            let request = AddTracksRequest {
                uris: chunk
                    .iter()
                    .map(|id| format!("spotify:track:{}", id))
                    .collect(),
            };

            let result = self
                .client
                .post(format!(
                    "{}/playlists/{}/tracks",
                    self.config.api_base_url, created.id
                ))
                .bearer_auth(access_token)
                .json(&request)
                .send()
                .await;

            match result {
                Ok(resp) if resp.status() == StatusCode::CREATED => batches.record_success(),
                Ok(resp) => {
                    warning!(
                        "Failed to add track batch {}: status {}",
                        index,
                        resp.status()
                    );
                    batches.record_failure(index);
                }
                Err(e) => {
                    warning!("Failed to add track batch {}: {}", index, e);
                    batches.record_failure(index);
                }
            }
        }

        Ok(PublishOutcome {
            playlist_id: created.id,
            url,
            batches,
        })
    }

    /// Resolves the authenticated user's id via a profile lookup.
    async fn current_user_id(&self, access_token: &str) -> Result<String, PipelineError> {
        let response = self
            .client
            .get(format!("{}/me", self.config.api_base_url))
            .bearer_auth(access_token)
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(PipelineError::from_response(response).await);
        }

        let profile: UserProfile = response.json().await?;
        Ok(profile.id)
    }
}
