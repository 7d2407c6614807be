use axum::{Extension, Router, routing::get};
use std::{net::SocketAddr, str::FromStr, sync::Arc};
use tokio::sync::Mutex;

use crate::{api, config::Config, error, spotify::auth::AuthClient, types::TokenPair};

/// State shared between the auth command and the callback handler: the auth
/// client used for the code exchange and the slot the obtained token pair is
/// dropped into.
pub struct AuthState {
    pub auth: AuthClient,
    pub tokens: Mutex<Option<TokenPair>>,
}

impl AuthState {
    pub fn new(config: Arc<Config>) -> Self {
        AuthState {
            auth: AuthClient::new(config),
            tokens: Mutex::new(None),
        }
    }
}

pub async fn start_callback_server(config: Arc<Config>, state: Arc<AuthState>) {
    let app = Router::new()
        .route("/health", get(api::health))
        .route("/callback", get(api::callback).layer(Extension(state)));

    let addr = match SocketAddr::from_str(&config.server_addr) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
