//! Error taxonomy of the expansion pipeline.
//!
//! Every failure a pipeline run can surface is one of the variants below.
//! Token expiry is detected structurally through the upstream status code
//! instead of matching on provider error messages.

use thiserror::Error;

/// Errors surfaced by the expansion pipeline and its components.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Token exchange or refresh failed.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// A required upstream call returned a non-success response.
    #[error("upstream request failed with status {status}: {body}")]
    Upstream { status: u16, body: String },

    /// The access token expired and the refresh attempt yielded no new
    /// token. The caller must force re-authentication.
    #[error("session expired, re-authentication required")]
    SessionExpired,

    /// Input rejected before any network call.
    #[error("{0}")]
    Validation(String),

    /// Every recommendation chunk failed; the run is aborted instead of
    /// publishing an empty playlist.
    #[error("no suggestions available for the source playlist")]
    NoSuggestions,

    /// Transport-level failure (connection, decoding, ...).
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl PipelineError {
    /// Builds a [`PipelineError::Upstream`] from a non-success response,
    /// consuming its body for diagnostics.
    pub async fn from_response(response: reqwest::Response) -> Self {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        PipelineError::Upstream { status, body }
    }

    /// Whether this error signals an expired access token. This is the only
    /// condition the pipeline retries, exactly once, after a refresh.
    pub fn is_token_expired(&self) -> bool {
        matches!(self, PipelineError::Upstream { status: 401, .. })
    }
}
