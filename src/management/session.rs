use std::path::PathBuf;

use crate::{config::Config, types::TokenPair};

/// File-backed store of the current session's token pair.
///
/// The pipeline only ever sees the [`TokenPair`] itself; loading and
/// persisting is the CLI layer's job.
pub struct SessionStore {
    tokens: TokenPair,
}

impl SessionStore {
    pub fn new(tokens: TokenPair) -> Self {
        SessionStore { tokens }
    }

    pub async fn load() -> Result<Self, String> {
        let path = Self::session_path();
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(|e| e.to_string())?;
        let tokens: TokenPair = serde_json::from_str(&content).map_err(|e| e.to_string())?;
        Ok(SessionStore { tokens })
    }

    pub async fn persist(&self) -> Result<(), String> {
        let path = Self::session_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(&self.tokens).map_err(|e| e.to_string())?;
        async_fs::write(path, json).await.map_err(|e| e.to_string())
    }

    pub fn tokens_mut(&mut self) -> &mut TokenPair {
        &mut self.tokens
    }

    fn session_path() -> PathBuf {
        Config::data_dir().join("session.json")
    }
}
