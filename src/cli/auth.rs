use std::{sync::Arc, time::Duration};

use crate::{
    config::Config, error, management::SessionStore, server, server::AuthState, success,
    types::TokenPair, warning,
};

/// Runs the OAuth authorization-code flow.
///
/// Starts the local callback server, opens the authorization URL in the
/// user's browser and waits for the callback handler to deposit a token
/// pair, which is then persisted as the current session.
pub async fn auth(config: Arc<Config>) {
    let state = Arc::new(AuthState::new(Arc::clone(&config)));

    // start callback server
    let server_state = Arc::clone(&state);
    let server_config = Arc::clone(&config);
    tokio::spawn(async move {
        server::start_callback_server(server_config, server_state).await;
    });

    let auth_url = state.auth.authorization_url();

    // Open the authorization URL in the default browser
    if webbrowser::open(&auth_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    // wait for callback to be hit
    let tokens = wait_for_tokens(state).await;

    match tokens {
        Some(tokens) => {
            let store = SessionStore::new(tokens);
            if let Err(e) = store.persist().await {
                error!("Failed to save session: {}", e);
            }

            success!("Authentication successful!");
        }
        None => {
            error!("Authentication failed or timed out.");
        }
    }
}

/// Polls the shared state for a completed token exchange, for up to 60
/// seconds.
async fn wait_for_tokens(state: Arc<AuthState>) -> Option<TokenPair> {
    use std::time::Instant;

    let max_wait = Duration::from_secs(60);
    let start = Instant::now();

    while start.elapsed() < max_wait {
        let slot = state.tokens.lock().await;
        if let Some(tokens) = slot.as_ref() {
            return Some(tokens.clone());
        }
        drop(slot);
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    None
}
