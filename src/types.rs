use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::{error::PipelineError, utils};

/// Opaque track identifier issued by the source provider.
pub type TrackId = String;

/// Access/refresh token pair owned by the caller's session. The pipeline
/// reads the access token and may replace it after a refresh; it never
/// persists tokens itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Validated input of a pipeline run: the trimmed name of the playlist to
/// create and the bare id of the source playlist.
#[derive(Debug, Clone)]
pub struct PlaylistSpec {
    pub name: String,
    pub source_id: String,
}

impl PlaylistSpec {
    /// Validates and normalizes the user input. The source may be a bare
    /// playlist id or a full `open.spotify.com` URL; any path and query
    /// wrapping is stripped down to the identifier.
    pub fn new(name: &str, source: &str) -> Result<Self, PipelineError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PipelineError::Validation(
                "playlist name must not be empty".to_string(),
            ));
        }

        let source_id = utils::normalize_playlist_id(source);
        if source_id.is_empty() {
            return Err(PipelineError::Validation(
                "source playlist id must not be empty".to_string(),
            ));
        }

        Ok(PlaylistSpec {
            name: name.to_string(),
            source_id,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTracksPage {
    pub items: Vec<PlaylistItem>,
    pub next: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItem {
    pub track: Option<TrackRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackRef {
    pub id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub description: String,
    pub public: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistResponse {
    pub id: String,
    pub external_urls: Option<ExternalUrls>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalUrls {
    pub spotify: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTracksRequest {
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub content: Vec<RecommendedTrack>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendedTrack {
    pub href: Option<String>,
}

/// Outcome of a best-effort batch loop: how many batches went through and
/// the zero-based indices of the ones that did not.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub failed: Vec<usize>,
}

impl BatchSummary {
    pub fn record_success(&mut self) {
        self.succeeded += 1;
    }

    pub fn record_failure(&mut self, index: usize) {
        self.failed.push(index);
    }

    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn total(&self) -> usize {
        self.succeeded + self.failed.len()
    }
}

/// Result of a suggestion pass: the deduplicated ids in insertion order plus
/// the per-chunk summary.
#[derive(Debug, Clone)]
pub struct Suggestions {
    pub ids: Vec<TrackId>,
    pub chunks: BatchSummary,
}

/// Result of publishing a playlist. `url` is absent when the provider omits
/// a public link from the creation response; the playlist still exists.
#[derive(Debug, Clone)]
pub struct PublishOutcome {
    pub playlist_id: String,
    pub url: Option<String>,
    pub batches: BatchSummary,
}

/// Everything a successful pipeline run reports back to the caller.
#[derive(Debug, Clone)]
pub struct ExpansionReport {
    pub playlist_id: String,
    pub playlist_url: Option<String>,
    pub seed_count: usize,
    pub suggestion_count: usize,
    pub suggestion_chunks: BatchSummary,
    pub add_batches: BatchSummary,
}

/// Durable log entry of a generated playlist.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PlaylistRecord {
    pub id: i64,
    pub name: String,
    pub link: String,
    pub created_date: NaiveDate,
    pub rating: Option<i64>,
}

#[derive(Tabled)]
pub struct RecordTableRow {
    pub id: String,
    pub name: String,
    pub link: String,
    pub created: String,
    pub rating: String,
}
