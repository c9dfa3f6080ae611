use crate::state::AppState;
use axum::http::{HeaderValue, Method};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::warn;

/// CORS layer for the origins listed in `SMSCODE_CORS_ORIGINS`.
///
/// Returns `None` when no usable origin is configured: without CORS headers
/// browsers refuse cross-origin reads, so arbitrary web pages cannot pull
/// codes from the loopback endpoint.
pub fn cors_layer(state: &Arc<AppState>) -> Option<CorsLayer> {
    let origins_str = state.config.cors_allowed_origins.as_deref()?;

    let origins: Vec<HeaderValue> = origins_str
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| match s.parse() {
            Ok(origin) => Some(origin),
            Err(e) => {
                warn!(origin = %s, error = %e, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        warn!(value = %origins_str, "SMSCODE_CORS_ORIGINS has no valid origin; CORS disabled");
        return None;
    }

    Some(
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET]),
    )
}
