//! Verification-code lookup endpoint.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use smscode_core::CodeResponse;
use std::sync::Arc;
use tracing::info;
use utoipa::OpenApi;

use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_code), components(schemas(CodeResponse)))]
pub struct CodeApi;

/// Register the code-lookup route.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/get_code", get(get_code))
}

/// Latest verification code from the last 60 seconds of messages.
///
/// Always HTTP 200; a miss is `{"sms_code": -1, "message": "..."}`.
#[utoipa::path(
    get,
    path = "/get_code",
    tag = "code",
    responses(
        (status = 200, description = "Lookup outcome; sms_code is -1 when no code was found", body = CodeResponse)
    )
)]
pub async fn get_code(State(state): State<Arc<AppState>>) -> Json<CodeResponse> {
    let body = state.extractor.extract_latest_code().await;
    info!(
        found = body.sms_code.as_code().is_some(),
        outcome = %body.message,
        "code lookup finished"
    );
    Json(body)
}
