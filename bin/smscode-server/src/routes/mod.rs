//! Axum router construction.
//!
//! [`build`] assembles the application router:
//! - `GET /get_code` verification-code lookup
//! - `GET /health` heartbeat
//! - `GET /api-docs/openapi.json` OpenAPI document
//! - per-request trace-ID middleware, plus CORS when an allow-list is set

mod code;
pub mod doc;
mod health;

use axum::{middleware, Router};
use std::sync::Arc;

use crate::middleware::{cors, trace};
use crate::state::AppState;

/// Build the complete Axum [`Router`] for the application.
pub fn build(state: Arc<AppState>) -> Router {
    let mut app = Router::new()
        .merge(code::router())
        .merge(health::router())
        .merge(doc::router());

    if let Some(cors) = cors::cors_layer(&state) {
        app = app.layer(cors);
    }

    // Outermost layers execute first on the way in.
    app.layer(middleware::from_fn(trace::trace_middleware))
        .with_state(state)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::Config;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt; // for `oneshot`

    fn test_app(messages_db: &str) -> Router {
        test_app_with_cors(messages_db, None)
    }

    fn test_app_with_cors(messages_db: &str, cors_origins: Option<&str>) -> Router {
        let config = Config {
            messages_db: Some(messages_db.into()),
            cors_allowed_origins: cors_origins.map(str::to_owned),
            ..Config::default()
        };
        build(Arc::new(AppState::new(config)))
    }

    fn get_with_origin(uri: &str, origin: &str) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .header(header::ORIGIN, origin)
            .body(Body::empty())
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn get_code_missing_store_is_still_ok() {
        let app = test_app("/nonexistent/Library/Messages/chat.db");
        let request = Request::builder()
            .uri("/get_code")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({ "sms_code": -1, "message": "Database file not found" })
        );
    }

    #[tokio::test]
    async fn get_code_rejects_post() {
        let app = test_app("/nonexistent/chat.db");
        let request = Request::builder()
            .method("POST")
            .uri("/get_code")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn trace_id_is_echoed() {
        let app = test_app("/nonexistent/chat.db");
        let trace_id = "0b7d3c8e-5f4a-4c2e-9a61-3f0e2d1c4b5a";
        let request = Request::builder()
            .uri("/health")
            .header(trace::X_TRACE_ID, trace_id)
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(
            response.headers().get(trace::X_TRACE_ID).unwrap(),
            trace_id
        );
    }

    #[tokio::test]
    async fn trace_id_is_generated_when_absent() {
        let app = test_app("/nonexistent/chat.db");
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        let value = response.headers().get(trace::X_TRACE_ID).unwrap();
        assert!(uuid::Uuid::parse_str(value.to_str().unwrap()).is_ok());
    }

    #[tokio::test]
    async fn foreign_origin_gets_no_cors_header_by_default() {
        let app = test_app("/nonexistent/chat.db");

        let response = app
            .oneshot(get_with_origin("/get_code", "https://evil.example"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }

    #[tokio::test]
    async fn allow_listed_origin_is_echoed() {
        let origin = "chrome-extension://abcdefghijklmnop";
        let app = test_app_with_cors("/nonexistent/chat.db", Some(origin));

        let response = app.oneshot(get_with_origin("/get_code", origin)).await.unwrap();

        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            origin
        );
    }

    #[tokio::test]
    async fn origin_outside_allow_list_is_refused() {
        let app = test_app_with_cors(
            "/nonexistent/chat.db",
            Some("chrome-extension://abcdefghijklmnop"),
        );

        let response = app
            .oneshot(get_with_origin("/get_code", "https://evil.example"))
            .await
            .unwrap();

        assert!(response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }

    #[tokio::test]
    async fn blank_allow_list_disables_cors() {
        let app = test_app_with_cors("/nonexistent/chat.db", Some(" , "));

        let response = app
            .oneshot(get_with_origin("/get_code", "https://evil.example"))
            .await
            .unwrap();

        assert!(response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }

    #[tokio::test]
    async fn openapi_document_lists_routes() {
        let app = test_app("/nonexistent/chat.db");
        let request = Request::builder()
            .uri("/api-docs/openapi.json")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let doc = body_json(response).await;
        assert!(doc["paths"]["/get_code"]["get"].is_object());
        assert!(doc["paths"]["/health"]["get"].is_object());
        assert_eq!(doc["info"]["version"], env!("CARGO_PKG_VERSION"));
    }
}
