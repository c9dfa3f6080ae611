use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::routes::{code, health};
use crate::state::AppState;

// `version` is left out so utoipa fills it from CARGO_PKG_VERSION.
#[derive(OpenApi)]
#[openapi(info(
    title = "smscode-server",
    description = "Local verification-code relay for macOS Messages"
))]
pub struct ApiDoc;

pub fn get_docs() -> utoipa::openapi::OpenApi {
    let mut root = ApiDoc::openapi();
    root.merge(code::CodeApi::openapi());
    root.merge(health::HealthApi::openapi());
    root
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api-docs/openapi.json", get(openapi_json))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(get_docs())
}
