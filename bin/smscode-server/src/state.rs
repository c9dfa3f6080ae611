//! Shared application state injected into every Axum handler.

use std::sync::Arc;

use smscode_core::CodeExtractor;

use crate::config::Config;

/// State shared across all HTTP handlers. Immutable after startup.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Server configuration (env-derived).
    pub config: Arc<Config>,
    /// Stateless extractor bound to the configured Messages store.
    pub extractor: Arc<CodeExtractor>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let extractor = match &config.messages_db {
            Some(path) => CodeExtractor::new(path),
            None => CodeExtractor::from_home(),
        };
        Self {
            config: Arc::new(config),
            extractor: Arc::new(extractor),
        }
    }
}
