//! Configuration management for Playforge.
//!
//! Configuration is read once at startup into an immutable [`Config`] value
//! that is passed into every component at construction. There is no hidden
//! process-wide state: components never reach for environment variables
//! themselves.
//!
//! Values are resolved in order:
//! 1. Environment variables (highest priority)
//! 2. A `.env` file in the local data directory (`playforge/.env`)
//! 3. Application defaults for the public provider endpoints

use std::{
    env,
    path::{Path, PathBuf},
};

/// OAuth scope requested during authorization. Fixed by design: the pipeline
/// only ever creates and fills playlists.
pub const SPOTIFY_SCOPE: &str = "playlist-modify-public playlist-modify-private";

/// Immutable application configuration.
///
/// Construct it once with [`Config::load`] and share it behind an `Arc`.
/// The base URLs are plain fields so that tests can point components at a
/// local fake provider.
#[derive(Debug, Clone)]
pub struct Config {
    /// Spotify application client id (`SPOTIFY_CLIENT_ID`).
    pub client_id: String,
    /// Spotify application client secret (`SPOTIFY_CLIENT_SECRET`).
    pub client_secret: String,
    /// Redirect URI registered with the Spotify application
    /// (`SPOTIFY_REDIRECT_URI`).
    pub redirect_uri: String,
    /// OAuth authorization endpoint (`SPOTIFY_AUTH_URL`).
    pub auth_url: String,
    /// OAuth token endpoint (`SPOTIFY_TOKEN_URL`).
    pub token_url: String,
    /// Spotify Web API base URL (`SPOTIFY_API_URL`).
    pub api_base_url: String,
    /// Recommendation service endpoint (`RECOMMENDATION_API_URL`).
    pub recommendation_url: String,
    /// Bind address for the local OAuth callback server (`SERVER_ADDRESS`).
    pub server_addr: String,
    /// Connection string of the playlist record store (`DATABASE_URL`).
    pub database_url: String,
}

impl Config {
    /// Loads the configuration from the environment.
    ///
    /// Creates the local data directory if necessary, loads an optional
    /// `.env` file from it (and from the working directory, which takes
    /// lower priority than real environment variables), then reads all
    /// settings.
    ///
    /// # Errors
    ///
    /// Returns an error string if the data directory cannot be created or a
    /// required variable (`SPOTIFY_CLIENT_ID`, `SPOTIFY_CLIENT_SECRET`,
    /// `SPOTIFY_REDIRECT_URI`) is missing.
    pub async fn load() -> Result<Self, String> {
        let data_dir = Self::data_dir();
        async_fs::create_dir_all(&data_dir)
            .await
            .map_err(|e| e.to_string())?;

        let env_file = data_dir.join(".env");
        if env_file.is_file() {
            dotenv::from_path(&env_file).map_err(|e| e.to_string())?;
        }
        dotenv::dotenv().ok();

        Self::from_env(&data_dir)
    }

    fn from_env(data_dir: &Path) -> Result<Self, String> {
        Ok(Config {
            client_id: require("SPOTIFY_CLIENT_ID")?,
            client_secret: require("SPOTIFY_CLIENT_SECRET")?,
            redirect_uri: require("SPOTIFY_REDIRECT_URI")?,
            auth_url: or_default(
                "SPOTIFY_AUTH_URL",
                "https://accounts.spotify.com/authorize",
            ),
            token_url: or_default(
                "SPOTIFY_TOKEN_URL",
                "https://accounts.spotify.com/api/token",
            ),
            api_base_url: or_default("SPOTIFY_API_URL", "https://api.spotify.com/v1"),
            recommendation_url: or_default(
                "RECOMMENDATION_API_URL",
                "https://api.reccobeats.com/v1/track/recommendation",
            ),
            server_addr: or_default("SERVER_ADDRESS", "127.0.0.1:8888"),
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| {
                format!("sqlite://{}", data_dir.join("records.db").display())
            }),
        })
    }

    /// Platform-specific data directory holding the `.env` file, the session
    /// file and the default record database.
    pub fn data_dir() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("playforge");
        path
    }
}

fn require(name: &str) -> Result<String, String> {
    env::var(name).map_err(|_| format!("{} must be set", name))
}

fn or_default(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}
