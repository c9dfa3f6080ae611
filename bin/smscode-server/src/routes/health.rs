//! Health / heartbeat endpoint.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_health))]
pub struct HealthApi;

/// Register health-check routes.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(get_health))
}

/// Heartbeat endpoint.
///
/// Reports whether the Messages store file is present without opening it;
/// the server is healthy either way.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Server is up; `messages_store` tells whether chat.db exists", body = Value)
    )
)]
pub async fn get_health(State(state): State<Arc<AppState>>) -> Json<Value> {
    let store_present = state
        .extractor
        .store_path()
        .is_some_and(|path| path.exists());

    Json(json!({
        "status":  "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "messages_store": if store_present { "present" } else { "missing" },
    }))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::Config;

    fn state_for(messages_db: &std::path::Path) -> Arc<AppState> {
        Arc::new(AppState::new(Config {
            messages_db: Some(messages_db.to_path_buf()),
            ..Config::default()
        }))
    }

    #[tokio::test]
    async fn health_reports_missing_store() {
        let state = state_for(std::path::Path::new("/nonexistent/chat.db"));
        let Json(body) = get_health(State(state)).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["messages_store"], "missing");
        assert!(!body["version"].as_str().unwrap_or("").is_empty());
    }

    #[tokio::test]
    async fn health_reports_present_store() {
        // Any existing file counts; health never opens it.
        let manifest = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml");
        let state = state_for(&manifest);
        let Json(body) = get_health(State(state)).await;
        assert_eq!(body["messages_store"], "present");
    }
}
