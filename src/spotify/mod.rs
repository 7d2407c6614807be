//! # Spotify Integration Module
//!
//! HTTP client layer for the Spotify Web API operations the expansion
//! pipeline needs. Each submodule covers one domain:
//!
//! - [`auth`] - OAuth 2.0 authorization-code flow: building the authorization
//!   URL, exchanging a callback code for a token pair and refreshing an
//!   expired access token.
//! - [`tracks`] - Cursor-paginated retrieval of all track ids of a playlist,
//!   following the provider's `next` pointer until it is absent.
//! - [`playlist`] - Publishing: resolving the current user, creating the
//!   destination playlist and adding tracks in batches of at most 100 URIs.
//!
//! All components receive the immutable [`crate::config::Config`] at
//! construction; base URLs are never read from global state, which also lets
//! tests point the clients at a local fake provider.
//!
//! Required calls fail with [`crate::error::PipelineError::Upstream`] carrying
//! the status and body of the offending response. Best-effort calls (the
//! add-tracks batches) are absorbed into a
//! [`crate::types::BatchSummary`] instead.

pub mod auth;
pub mod playlist;
pub mod tracks;
