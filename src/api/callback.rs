use std::{collections::HashMap, sync::Arc};

use axum::{Extension, extract::Query, response::Html};

use crate::{server::AuthState, warning};

pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(state): Extension<Arc<AuthState>>,
) -> Html<&'static str> {
    let Some(code) = params.get("code") else {
        return Html("<h4>Authorization failed or was denied.</h4>");
    };

    match state.auth.exchange_code(code).await {
        Ok(tokens) => {
            let mut slot = state.tokens.lock().await;
            *slot = Some(tokens);
            Html("<h2>Authentication successful.</h2><p>You can close this window.</p>")
        }
        Err(e) => {
            warning!("Token exchange failed: {}", e);
            Html("<h4>Login failed.</h4>")
        }
    }
}
