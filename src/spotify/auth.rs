use std::sync::Arc;

use reqwest::Client;
use serde_json::Value;
use url::form_urlencoded;

use crate::{
    config::{Config, SPOTIFY_SCOPE},
    error::PipelineError,
    types::TokenPair,
};

/// Client for the provider's OAuth endpoints.
///
/// Implements the plain authorization-code flow: the application's client
/// secret is sent with every token request. The three operations map onto
/// the three stages of the session lifecycle: building the authorization
/// URL, exchanging the callback code, and refreshing an expired access
/// token.
pub struct AuthClient {
    config: Arc<Config>,
    client: Client,
}

impl AuthClient {
    pub fn new(config: Arc<Config>) -> Self {
        AuthClient {
            config,
            client: Client::new(),
        }
    }

    /// Builds the authorization URL the user must visit to grant access.
    ///
    /// Deterministic and free of side effects: no network call is made. The
    /// scope is fixed to playlist modification, see
    /// [`SPOTIFY_SCOPE`](crate::config::SPOTIFY_SCOPE).
    pub fn authorization_url(&self) -> String {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("client_id", &self.config.client_id)
            .append_pair("response_type", "code")
            .append_pair("redirect_uri", &self.config.redirect_uri)
            .append_pair("scope", SPOTIFY_SCOPE)
            .finish();

        format!("{}?{}", self.config.auth_url, query)
    }

    /// Exchanges an authorization code for an access/refresh token pair.
    ///
    /// Issues a single POST to the token endpoint. Any non-2xx response or a
    /// response without an `access_token` field fails with
    /// [`PipelineError::Auth`].
    pub async fn exchange_code(&self, code: &str) -> Result<TokenPair, PipelineError> {
        let response = self
            .client
            .post(&self.config.token_url)
            .form(&[
                ("grant_type", "authorization_code"),
                ("code", code),
                ("redirect_uri", self.config.redirect_uri.as_str()),
                ("client_id", self.config.client_id.as_str()),
                ("client_secret", self.config.client_secret.as_str()),
            ])
            .send()
            .await
            .map_err(|e| PipelineError::Auth(e.to_string()))?;

        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PipelineError::Auth(format!(
                "token exchange failed: {}",
                body
            )));
        }

        let json: Value = response
            .json()
            .await
            .map_err(|e| PipelineError::Auth(e.to_string()))?;

        let Some(access_token) = json["access_token"].as_str() else {
            return Err(PipelineError::Auth(
                "token response is missing access_token".to_string(),
            ));
        };

        Ok(TokenPair {
            access_token: access_token.to_string(),
            refresh_token: json["refresh_token"]
                .as_str()
                .unwrap_or_default()
                .to_string(),
        })
    }

    /// Refreshes an expired access token.
    ///
    /// Returns `None` instead of an error on any failure: the caller treats
    /// a failed refresh as an unrecoverable session and forces
    /// re-authentication.
    pub async fn refresh(&self, refresh_token: &str) -> Option<String> {
        let response = self
            .client
            .post(&self.config.token_url)
            .form(&[
                ("grant_type", "refresh_token"),
                ("refresh_token", refresh_token),
                ("client_id", self.config.client_id.as_str()),
                ("client_secret", self.config.client_secret.as_str()),
            ])
            .send()
            .await
            .ok()?;

        if !response.status().is_success() {
            return None;
        }

        let json: Value = response.json().await.ok()?;
        json["access_token"].as_str().map(str::to_string)
    }
}
