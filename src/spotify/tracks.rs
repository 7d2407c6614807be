use std::sync::Arc;

use reqwest::{Client, StatusCode};

use crate::{
    config::Config,
    error::PipelineError,
    types::{PlaylistTracksPage, TrackId},
};

/// Paginated retrieval of every track id of a source playlist.
pub struct TrackFetcher {
    config: Arc<Config>,
    client: Client,
}

impl TrackFetcher {
    pub fn new(config: Arc<Config>) -> Self {
        TrackFetcher {
            config,
            client: Client::new(),
        }
    }

    /// Fetches all track ids of `playlist_id`, in playlist order.
    ///
    /// Follows the provider's `next` page pointer until it is absent. Items
    /// without a track object or without an id are skipped silently. The
    /// first non-200 response aborts the whole call with
    /// [`PipelineError::Upstream`]; pages accumulated up to that point are
    /// discarded, the caller never observes a partial track list.
    pub async fn fetch_all_track_ids(
        &self,
        access_token: &str,
        playlist_id: &str,
    ) -> Result<Vec<TrackId>, PipelineError> {
        let mut ids: Vec<TrackId> = Vec::new();
        let mut next_url = Some(format!(
            "{}/playlists/{}/tracks",
            self.config.api_base_url, playlist_id
        ));

        while let Some(url) = next_url {
            let response = self
                .client
                .get(&url)
                .bearer_auth(access_token)
                .send()
                .await?;

            if response.status() != StatusCode::OK {
                return Err(PipelineError::from_response(response).await);
            }

            let page: PlaylistTracksPage = response.json().await?;
            ids.extend(
                page.items
                    .into_iter()
                    .filter_map(|item| item.track.and_then(|track| track.id)),
            );
            next_url = page.next;
        }

        Ok(ids)
    }
}
