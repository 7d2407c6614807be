use axum::response::Json;
use serde_json::{Value, json};

/// Liveness probe of the local callback server. The auth command hands the
/// user off to the browser right after spawning the server; this endpoint is
/// the only way to tell from outside that the server came up.
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}
